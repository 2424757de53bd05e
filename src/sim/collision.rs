//! Collision detection between projectiles and targets
//!
//! Projectiles are axis-aligned rectangles, targets are circles. The test
//! clamps the circle center onto the rectangle and compares the squared
//! distance against the squared radius.

use super::state::{Circle, Rect};

/// Check whether a rectangle and a circle overlap.
///
/// Touching counts as a hit. A circle whose center lies inside the rectangle
/// always overlaps (closest point is the center itself).
pub fn rect_circle_overlap(rect: &Rect, circle: &Circle) -> bool {
    let closest = circle.center.clamp(rect.min(), rect.max());
    closest.distance_squared(circle.center) <= circle.radius * circle.radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    fn circle(x: f32, y: f32, r: f32) -> Circle {
        Circle::new(Vec2::new(x, y), r)
    }

    #[test]
    fn test_corner_within_radius() {
        // Corner (20, 20) is exactly the circle center
        assert!(rect_circle_overlap(
            &rect(10.0, 10.0, 10.0, 10.0),
            &circle(20.0, 20.0, 5.0)
        ));
    }

    #[test]
    fn test_clear_miss() {
        // Closest point (10, 10) is ~14.1 away from the origin
        assert!(!rect_circle_overlap(
            &rect(10.0, 10.0, 10.0, 10.0),
            &circle(0.0, 0.0, 3.0)
        ));
    }

    #[test]
    fn test_center_inside_rect() {
        assert!(rect_circle_overlap(
            &rect(0.0, 0.0, 100.0, 100.0),
            &circle(50.0, 50.0, 1.0)
        ));
    }

    #[test]
    fn test_grazing_corner() {
        let r = rect(10.0, 10.0, 10.0, 10.0);
        // 3-4-5 triangle from the (20, 20) corner: exactly touching
        assert!(rect_circle_overlap(&r, &circle(23.0, 24.0, 5.0)));
        // Slightly smaller radius misses the corner
        assert!(!rect_circle_overlap(&r, &circle(23.0, 24.0, 4.9)));
    }

    #[test]
    fn test_touching_edge() {
        let r = rect(10.0, 10.0, 10.0, 10.0);
        // Circle to the right, touching the right edge at x = 20
        assert!(rect_circle_overlap(&r, &circle(25.0, 15.0, 5.0)));
        assert!(!rect_circle_overlap(&r, &circle(25.5, 15.0, 5.0)));
    }

    #[test]
    fn test_projectile_vs_target_geometry() {
        // Projectile 10x20 sitting just under a radius-20 target
        let projectile = rect(395.0, 300.0, 10.0, 20.0);
        let target = circle(400.0, 285.0, 20.0);
        assert!(rect_circle_overlap(&projectile, &target));

        let far_target = circle(400.0, 200.0, 20.0);
        assert!(!rect_circle_overlap(&projectile, &far_target));
    }

    proptest! {
        #[test]
        fn prop_center_inside_always_hits(
            x in -500.0f32..500.0,
            y in -500.0f32..500.0,
            w in 1.0f32..200.0,
            h in 1.0f32..200.0,
            fx in 0.0f32..1.0,
            fy in 0.0f32..1.0,
            r in 0.1f32..100.0,
        ) {
            let rect = rect(x, y, w, h);
            let circle = circle(x + fx * w, y + fy * h, r);
            prop_assert!(rect_circle_overlap(&rect, &circle));
        }

        #[test]
        fn prop_translation_invariant(
            x in -200.0f32..200.0,
            y in -200.0f32..200.0,
            w in 1.0f32..100.0,
            h in 1.0f32..100.0,
            cx in -300.0f32..300.0,
            cy in -300.0f32..300.0,
            r in 1.0f32..80.0,
            shift in -64i32..64,
        ) {
            let offset = Vec2::splat(shift as f32);
            let a = rect_circle_overlap(&rect(x, y, w, h), &circle(cx, cy, r));
            let b = rect_circle_overlap(
                &Rect::new(Vec2::new(x, y) + offset, Vec2::new(w, h)),
                &Circle::new(Vec2::new(cx, cy) + offset, r),
            );
            // Only boundary cases may flip due to rounding
            let closest = Vec2::new(cx, cy).clamp(Vec2::new(x, y), Vec2::new(x + w, y + h));
            let margin = (closest.distance(Vec2::new(cx, cy)) - r).abs();
            prop_assume!(margin > 1e-3);
            prop_assert_eq!(a, b);
        }

        #[test]
        fn prop_far_circle_never_hits(
            x in -200.0f32..200.0,
            y in -200.0f32..200.0,
            w in 1.0f32..100.0,
            h in 1.0f32..100.0,
            r in 1.0f32..50.0,
            gap in 0.5f32..100.0,
        ) {
            // Circle entirely to the left of the rectangle
            let c = circle(x - r - gap, y + h / 2.0, r);
            prop_assert!(!rect_circle_overlap(&rect(x, y, w, h), &c));
        }
    }
}
