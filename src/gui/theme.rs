use crate::config::Config;
use palette::{Srgb, Srgba, WithAlpha, named};

pub const OFF_COLOR: Srgb<u8> = Srgb::new(0x88, 0x88, 0x88);
pub const ON_COLOR: Srgb<u8> = named::CYAN;
pub const MARKER_COLOR: Srgb<u8> = named::BLACK;

pub fn opaque(color: Srgb<u8>) -> Srgba<f64> {
    color.into_format::<f64>().with_alpha(1.0)
}

/// Disc fill colors. Replaced as a whole, never edited in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialColors {
    pub on: Srgba<f64>,
    pub off: Srgba<f64>,
}

impl Default for DialColors {
    fn default() -> Self {
        Self {
            on: opaque(ON_COLOR),
            off: opaque(OFF_COLOR),
        }
    }
}

impl From<&Config> for DialColors {
    fn from(config: &Config) -> Self {
        let defaults = Self::default();
        Self {
            on: config.on_color.map_or(defaults.on, Into::into),
            off: config.off_color.map_or(defaults.off, Into::into),
        }
    }
}
