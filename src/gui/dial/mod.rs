use std::f64::consts::PI;

pub mod geometry;
pub mod hit;
pub mod model;
pub mod view;

pub use geometry::{Circle, Point, ViewportSize};
pub use hit::PointerPhase;
pub use model::{Selection, State, VisualState};
pub use view::{Paint, Surface, draw};

pub const SELECTION_COUNT: usize = 4;
pub const RADIUS_FACTOR: f64 = 0.8; // share of the half-side the disc may use
pub const INITIAL_ANGLE: f64 = 9.0 / 8.0 * PI;
pub const ANGLE_STEP: f64 = PI / 4.0;
pub const MARKER_INSET: f64 = 35.0; // marker ring sits this far inside the edge
pub const MARKER_RADIUS: f64 = 20.0;
pub const LABEL_OFFSET: f64 = 20.0; // label ring sits this far outside the edge
pub const LABEL_FONT_SIZE: f64 = 40.0;
