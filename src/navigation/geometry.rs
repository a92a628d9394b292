//! 2D segment and axis-aligned rectangle predicates.
//!
//! Rectangles are `bevy::math::Rect` and treated as closed: points on an
//! edge count as inside.

use bevy::math::{Rect, Vec2};

/// Whether segment `a1-a2` crosses segment `b1-b2`.
///
/// Parametric cross-product form. Parallel or degenerate pairs (zero
/// denominator) never intersect, even when collinear and overlapping.
pub fn segments_intersect(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    let a = a2 - a1;
    let b = b2 - b1;
    let denom = b.y * a.x - b.x * a.y;
    if denom == 0.0 {
        return false;
    }

    let offset = a1 - b1;
    let ua = (b.x * offset.y - b.y * offset.x) / denom;
    let ub = (a.x * offset.y - a.y * offset.x) / denom;

    (0.0..=1.0).contains(&ua) && (0.0..=1.0).contains(&ub)
}

/// Whether segment `from-to` touches `rect`.
///
/// True when either endpoint is inside, or the segment crosses any edge.
pub fn segment_intersects_rect(from: Vec2, to: Vec2, rect: &Rect) -> bool {
    if rect.contains(from) || rect.contains(to) {
        return true;
    }
    rect_edges(rect)
        .iter()
        .any(|&(e1, e2)| segments_intersect(from, to, e1, e2))
}

/// Top, right, bottom and left edges (y down).
fn rect_edges(rect: &Rect) -> [(Vec2, Vec2); 4] {
    let top_left = rect.min;
    let top_right = Vec2::new(rect.max.x, rect.min.y);
    let bottom_left = Vec2::new(rect.min.x, rect.max.y);
    let bottom_right = rect.max;
    [
        (top_left, top_right),
        (top_right, bottom_right),
        (bottom_left, bottom_right),
        (top_left, bottom_left),
    ]
}

/// Walkable area of a square world: the full grid inset by half a tile.
pub fn inset_bounds(world_size: u32, tile_size: f32) -> Rect {
    let extent = world_size as f32 * tile_size;
    let margin = tile_size / 2.0;
    Rect::new(margin, margin, extent - margin, extent - margin)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Rect {
        Rect::new(10.0, 10.0, 20.0, 20.0)
    }

    #[test]
    fn test_crossing_segments_intersect() {
        assert!(segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
        ));
    }

    #[test]
    fn test_parallel_segments_never_intersect() {
        // Collinear and overlapping still reports false.
        assert!(!segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(15.0, 0.0),
        ));
        assert!(!segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(10.0, 1.0),
        ));
    }

    #[test]
    fn test_segments_short_of_each_other() {
        assert!(!segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(0.0, 10.0),
            Vec2::new(10.0, 0.0),
        ));
    }

    #[test]
    fn test_touching_endpoint_counts() {
        assert!(segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 5.0),
            Vec2::new(5.0, 5.0),
            Vec2::new(10.0, 0.0),
        ));
    }

    #[test]
    fn test_segment_through_rect() {
        assert!(segment_intersects_rect(
            Vec2::new(0.0, 15.0),
            Vec2::new(30.0, 15.0),
            &square()
        ));
    }

    #[test]
    fn test_segment_passing_rect() {
        assert!(!segment_intersects_rect(
            Vec2::new(0.0, 25.0),
            Vec2::new(30.0, 25.0),
            &square()
        ));
        assert!(!segment_intersects_rect(
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 30.0),
            &square()
        ));
    }

    #[test]
    fn test_endpoint_inside_rect() {
        assert!(segment_intersects_rect(
            Vec2::new(0.0, 0.0),
            Vec2::new(15.0, 15.0),
            &square()
        ));
        // Fully inside never crosses an edge but still intersects.
        assert!(segment_intersects_rect(
            Vec2::new(12.0, 12.0),
            Vec2::new(18.0, 18.0),
            &square()
        ));
    }

    #[test]
    fn test_inset_bounds() {
        let bounds = inset_bounds(50, 32.0);
        assert_eq!(bounds.min, Vec2::splat(16.0));
        assert_eq!(bounds.max, Vec2::splat(1584.0));
    }
}
