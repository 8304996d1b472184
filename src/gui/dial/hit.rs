use super::geometry::{Circle, Point};
use strum::{Display as StrumDisplay, EnumIter, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum PointerPhase {
    Press,
    Move,
    Release,
    Cancel,
}

/// Only the position where the pointer is lifted matters; where the gesture began does not.
pub fn is_hit(pointer: Point, phase: PointerPhase, circle: &Circle) -> bool {
    phase == PointerPhase::Release && circle.contains(pointer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gui::dial::geometry::ViewportSize;
    use proptest::prelude::*;
    use strum::IntoEnumIterator;

    fn circle() -> Circle {
        Circle::fit(ViewportSize::new(1000, 800))
    }

    #[test]
    fn test_release_at_center_hits() {
        assert!(is_hit(Point::new(500.0, 400.0), PointerPhase::Release, &circle()));
    }

    #[test]
    fn test_release_outside_misses() {
        assert!(!is_hit(Point::new(500.0, 730.0), PointerPhase::Release, &circle()));
        assert!(!is_hit(Point::new(0.0, 0.0), PointerPhase::Release, &circle()));
    }

    #[test]
    fn test_boundary_counts_as_inside() {
        assert!(is_hit(Point::new(500.0, 720.0), PointerPhase::Release, &circle()));
        assert!(is_hit(Point::new(180.0, 400.0), PointerPhase::Release, &circle()));
    }

    #[test]
    fn test_other_phases_never_hit() {
        let center = Point::new(500.0, 400.0);
        PointerPhase::iter()
            .filter(|&phase| phase != PointerPhase::Release)
            .for_each(|phase| assert!(!is_hit(center, phase, &circle()), "{phase} hit"));
    }

    #[test]
    fn test_empty_viewport_only_hits_center() {
        let empty = Circle::fit(ViewportSize::default());
        assert!(is_hit(Point::default(), PointerPhase::Release, &empty));
        assert!(!is_hit(Point::new(0.5, 0.0), PointerPhase::Release, &empty));
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(PointerPhase::Release.to_string(), "release");
        let name: &'static str = PointerPhase::Cancel.into();
        assert_eq!(name, "cancel");
    }

    proptest! {
        #[test]
        fn prop_hit_iff_release_and_inside(x in -200.0f64..1200.0, y in -200.0f64..1000.0) {
            let circle = circle();
            let pointer = Point::new(x, y);
            let inside = pointer.distance(circle.center) <= circle.radius;
            for phase in PointerPhase::iter() {
                prop_assert_eq!(is_hit(pointer, phase, &circle), inside && phase == PointerPhase::Release);
            }
        }
    }
}
