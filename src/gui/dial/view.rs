use super::geometry::Point;
use super::model::State;
use super::{LABEL_FONT_SIZE, MARKER_RADIUS};
use crate::gui::theme::{self, MARKER_COLOR};
use cairo::Context;
use palette::Srgba;
use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    Fill,
    FillAndStroke,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Immutable drawing style handed to every surface call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Srgba<f64>,
    pub style: PaintStyle,
    pub align: TextAlign,
    pub text_size: f64,
    pub stroke_width: f64,
}

impl Paint {
    pub fn fill(color: Srgba<f64>) -> Self {
        Self {
            color,
            style: PaintStyle::Fill,
            align: TextAlign::Left,
            text_size: 12.0,
            stroke_width: 1.0,
        }
    }

    /// Shared by the marker and the labels.
    pub fn marker() -> Self {
        Self {
            style: PaintStyle::FillAndStroke,
            align: TextAlign::Center,
            text_size: LABEL_FONT_SIZE,
            ..Self::fill(theme::opaque(MARKER_COLOR))
        }
    }
}

/// Whatever the dial is drawn onto.
pub trait Surface {
    type Error;

    fn fill_circle(&self, center: Point, radius: f64, paint: &Paint) -> Result<(), Self::Error>;

    /// `anchor` is on the text baseline; `paint.align` picks the horizontal anchoring.
    fn draw_text(&self, text: &str, anchor: Point, paint: &Paint) -> Result<(), Self::Error>;
}

impl Surface for Context {
    type Error = cairo::Error;

    fn fill_circle(&self, center: Point, radius: f64, paint: &Paint) -> Result<(), cairo::Error> {
        self.new_path();
        self.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
        paint_path(self, paint)
    }

    fn draw_text(&self, text: &str, anchor: Point, paint: &Paint) -> Result<(), cairo::Error> {
        self.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Normal);
        self.set_font_size(paint.text_size);

        let x = match paint.align {
            TextAlign::Left => anchor.x,
            TextAlign::Center => {
                let ext = self.text_extents(text)?;
                anchor.x - ext.x_advance() / 2.0
            }
        };

        self.new_path();
        self.move_to(x, anchor.y);
        self.text_path(text);
        paint_path(self, paint)
    }
}

fn paint_path(cr: &Context, paint: &Paint) -> Result<(), cairo::Error> {
    let (r, g, b, a) = paint.color.into_components();
    cr.set_source_rgba(r, g, b, a);
    match paint.style {
        PaintStyle::Fill => cr.fill(),
        PaintStyle::FillAndStroke => {
            cr.fill_preserve()?;
            cr.set_line_width(paint.stroke_width);
            cr.stroke()
        }
    }
}

/// Disc first, then the marker on top, then the labels around the edge.
pub fn draw<S: Surface + ?Sized>(surface: &S, state: &State) -> Result<(), S::Error> {
    draw_dial(surface, state)?;
    draw_marker(surface, state)?;
    draw_labels(surface, state)
}

fn draw_dial<S: Surface + ?Sized>(surface: &S, state: &State) -> Result<(), S::Error> {
    let fill = Paint::fill(state.visual_state().fill);
    surface.fill_circle(state.circle.center, state.circle.radius, &fill)
}

fn draw_marker<S: Surface + ?Sized>(surface: &S, state: &State) -> Result<(), S::Error> {
    surface.fill_circle(state.marker_position(), MARKER_RADIUS, &Paint::marker())
}

fn draw_labels<S: Surface + ?Sized>(surface: &S, state: &State) -> Result<(), S::Error> {
    let paint = Paint::marker();
    state
        .label_positions()
        .try_for_each(|(index, anchor)| surface.draw_text(&index.to_string(), anchor, &paint))
}
