use super::{ANGLE_STEP, INITIAL_ANGLE, RADIUS_FACTOR};
use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Default, Display)]
#[display("({x}, {y})")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[display("{width}x{height}")]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

/// The disc fitted into a viewport. Only rebuilt when the viewport changes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn fit(viewport: ViewportSize) -> Self {
        Self {
            center: viewport.center(),
            radius: compute_radius(viewport.width, viewport.height),
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.distance(self.center) <= self.radius
    }

    /// Point on a ring concentric with this circle, `offset` away from its edge.
    pub fn position_at(&self, index: i64, offset: f64) -> Point {
        position_for_index(index, self.radius + offset, self.center)
    }
}

/// Radius of the largest disc that fits the smaller side, shrunk to leave a margin.
pub fn compute_radius(width: u32, height: u32) -> f64 {
    let smaller_side = f64::from(width.min(height));
    RADIUS_FACTOR * (smaller_side / 2.0)
}

pub fn angle_for_index(index: i64) -> f64 {
    INITIAL_ANGLE + index as f64 * ANGLE_STEP
}

/// Parametric circle placement in a y-down coordinate system.
pub fn position_for_index(index: i64, radius: f64, center: Point) -> Point {
    let angle = angle_for_index(index);
    Point::new(
        radius * angle.cos() + center.x,
        radius * angle.sin() + center.y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-6;

    fn assert_close(actual: Point, expected: Point) {
        assert!(
            actual.distance(expected) < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_radius_fits_smaller_side() {
        assert_eq!(compute_radius(1000, 800), 320.0);
        assert_eq!(compute_radius(800, 1000), 320.0);
        assert_eq!(compute_radius(0, 0), 0.0);
        assert_eq!(compute_radius(0, 500), 0.0);
        assert!((compute_radius(5, 9) - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_circle_centered_in_viewport() {
        let circle = Circle::fit(ViewportSize::new(1000, 800));
        assert_eq!(circle.center, Point::new(500.0, 400.0));
        assert_eq!(circle.radius, 320.0);

        let odd = Circle::fit(ViewportSize::new(7, 3));
        assert_eq!(odd.center, Point::new(3.5, 1.5));
    }

    #[test]
    fn test_first_position_at_origin() {
        let p = position_for_index(0, 100.0, Point::default());
        let expected = Point::new(100.0 * (9.0 * PI / 8.0).cos(), 100.0 * (9.0 * PI / 8.0).sin());
        assert_close(p, expected);
    }

    #[test]
    fn test_positions_step_by_quarter_pi() {
        let center = Point::new(50.0, 50.0);
        for index in 0..4 {
            let angle = 9.0 * PI / 8.0 + index as f64 * PI / 4.0;
            let expected = Point::new(10.0 * angle.cos() + 50.0, 10.0 * angle.sin() + 50.0);
            assert_close(position_for_index(index, 10.0, center), expected);
        }
    }

    #[test]
    fn test_positions_sit_in_upper_half() {
        // y grows downward, so the four slots span the top of the dial
        let center = Point::new(0.0, 0.0);
        for index in 0..4 {
            assert!(position_for_index(index, 100.0, center).y < 0.0);
        }
    }

    #[test]
    fn test_position_accepts_any_index() {
        let center = Point::new(3.0, 4.0);
        let wrapped = position_for_index(8, 20.0, center);
        assert_close(wrapped, position_for_index(0, 20.0, center));
        let negative = position_for_index(-1, 20.0, center);
        assert_close(negative, position_for_index(7, 20.0, center));
    }

    #[test]
    fn test_position_at_offsets_from_edge() {
        let circle = Circle::fit(ViewportSize::new(1000, 800));
        let inner = circle.position_at(2, -35.0);
        assert!((inner.distance(circle.center) - 285.0).abs() < EPSILON);
        let outer = circle.position_at(2, 20.0);
        assert!((outer.distance(circle.center) - 340.0).abs() < EPSILON);
    }

    proptest! {
        #[test]
        fn prop_radius_formula(width in 0u32..10_000, height in 0u32..10_000) {
            let radius = compute_radius(width, height);
            let expected = 0.8 * f64::from(width.min(height)) / 2.0;
            prop_assert!((radius - expected).abs() < EPSILON);
            prop_assert!(radius >= 0.0);
            prop_assert!(radius <= 0.4 * f64::from(width.max(height)) + EPSILON);
            prop_assert!(radius <= 0.4 * f64::from(width.min(height)) + EPSILON);
        }

        #[test]
        fn prop_position_lies_on_ring(index in -16i64..16, radius in 0.0f64..2000.0) {
            let center = Point::new(120.0, 80.0);
            let p = position_for_index(index, radius, center);
            prop_assert!((p.distance(center) - radius).abs() < 1e-6);
        }
    }
}
