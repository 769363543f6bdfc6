//! Collision predicates
//!
//! Every entity collides as a circle with a fixed radius. Both predicates
//! use closed boundaries: touching counts as overlapping.

use glam::Vec2;

/// True if two circles overlap or touch
#[inline]
pub fn circle_circle(c1: Vec2, r1: f32, c2: Vec2, r2: f32) -> bool {
    let combined = r1 + r2;
    c1.distance_squared(c2) <= combined * combined
}

/// True if a point lies inside or on a circle
#[inline]
pub fn point_in_circle(p: Vec2, center: Vec2, radius: f32) -> bool {
    p.distance_squared(center) <= radius * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_circles_overlapping() {
        assert!(circle_circle(Vec2::new(0.0, 0.0), 10.0, Vec2::new(15.0, 0.0), 10.0));
    }

    #[test]
    fn test_circles_touching_count_as_hit() {
        assert!(circle_circle(Vec2::new(0.0, 0.0), 10.0, Vec2::new(20.0, 0.0), 10.0));
        assert!(circle_circle(Vec2::new(0.0, 0.0), 3.0, Vec2::new(3.0, 4.0), 2.0));
    }

    #[test]
    fn test_circles_apart() {
        assert!(!circle_circle(Vec2::new(0.0, 0.0), 10.0, Vec2::new(20.1, 0.0), 10.0));
    }

    #[test]
    fn test_point_inside_and_on_edge() {
        let center = Vec2::new(100.0, 100.0);
        assert!(point_in_circle(Vec2::new(105.0, 100.0), center, 10.0));
        assert!(point_in_circle(Vec2::new(106.0, 108.0), center, 10.0));
        assert!(!point_in_circle(Vec2::new(111.0, 100.0), center, 10.0));
    }

    proptest! {
        #[test]
        fn prop_circle_circle_symmetric(
            x1 in -500.0f32..500.0, y1 in -500.0f32..500.0, r1 in 0.0f32..50.0,
            x2 in -500.0f32..500.0, y2 in -500.0f32..500.0, r2 in 0.0f32..50.0,
        ) {
            let a = Vec2::new(x1, y1);
            let b = Vec2::new(x2, y2);
            prop_assert_eq!(circle_circle(a, r1, b, r2), circle_circle(b, r2, a, r1));
        }

        #[test]
        fn prop_point_is_zero_radius_circle(
            px in -500.0f32..500.0, py in -500.0f32..500.0,
            cx in -500.0f32..500.0, cy in -500.0f32..500.0, r in 0.0f32..100.0,
        ) {
            let p = Vec2::new(px, py);
            let c = Vec2::new(cx, cy);
            prop_assert_eq!(point_in_circle(p, c, r), circle_circle(p, 0.0, c, r));
        }
    }
}
