use super::geometry::{Circle, Point, ViewportSize};
use super::hit::{self, PointerPhase};
use super::{LABEL_OFFSET, MARKER_INSET, SELECTION_COUNT};
use crate::gui::theme::DialColors;
use palette::Srgba;

/// Cyclic selection over the dial positions. Starts at 0 and only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    index: usize,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn advance(&mut self) {
        self.index = (self.index + 1) % SELECTION_COUNT;
    }

    /// Position 0 is the only "off" position.
    pub fn is_on(&self) -> bool {
        self.index >= 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub is_on: bool,
    pub fill: Srgba<f64>,
}

impl VisualState {
    pub fn resolve(selection: Selection, colors: &DialColors) -> Self {
        let is_on = selection.is_on();
        Self {
            is_on,
            fill: if is_on { colors.on } else { colors.off },
        }
    }
}

pub struct State {
    pub viewport: ViewportSize,
    pub circle: Circle,
    pub selection: Selection,
    pub colors: DialColors,
}

impl State {
    pub fn new(colors: DialColors) -> Self {
        Self {
            viewport: ViewportSize::default(),
            circle: Circle::default(),
            selection: Selection::new(),
            colors,
        }
    }

    /// Refits the circle. Returns whether the viewport actually changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let viewport = ViewportSize::new(width, height);
        if viewport == self.viewport {
            return false;
        }

        self.viewport = viewport;
        self.circle = Circle::fit(viewport);
        log::debug!(
            "Viewport {} -> radius {:.1}",
            self.viewport,
            self.circle.radius
        );
        true
    }

    /// Advances the selection on a hit. Returns whether anything changed.
    pub fn pointer_event(&mut self, pointer: Point, phase: PointerPhase) -> bool {
        log::trace!("Pointer {} at {}", phase, pointer);

        if !hit::is_hit(pointer, phase, &self.circle) {
            return false;
        }

        self.selection.advance();
        log::debug!(
            "Selection advanced to {} ({})",
            self.selection.index(),
            if self.selection.is_on() { "on" } else { "off" }
        );
        true
    }

    pub fn visual_state(&self) -> VisualState {
        VisualState::resolve(self.selection, &self.colors)
    }

    pub fn marker_position(&self) -> Point {
        self.circle
            .position_at(self.selection.index() as i64, -MARKER_INSET)
    }

    pub fn label_positions(&self) -> impl Iterator<Item = (usize, Point)> + '_ {
        (0..SELECTION_COUNT).map(|i| (i, self.circle.position_at(i as i64, LABEL_OFFSET)))
    }
}
