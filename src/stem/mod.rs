//! Stem geometry and per-frame bending
//!
//! A stem is a fixed-resolution polyline. `StemGeometry` holds the rest
//! shape; `PlantFrame` re-integrates it every frame under wind and pointer
//! deflection without ever changing a segment's length.

pub mod geometry;
pub mod frame;

pub use geometry::{StemGeometry, SwayParams};
pub use frame::{PlantFrame, StemForces, deflection_at};

use crate::math::Vec2;

/// Index of the segment that contains parameter `t` on a polyline with `segments` segments
pub(crate) fn segment_index(segments: usize, t: f32) -> usize {
    let scaled = t.clamp(0.0, 1.0) * segments as f32;
    (scaled as usize).min(segments.saturating_sub(1))
}

/// Position at parameter `t` along a polyline, interpolating between joints
pub fn sample_polyline(points: &[Vec2], t: f32) -> Vec2 {
    match points.len() {
        0 => Vec2::ZERO,
        1 => points[0],
        n => {
            let segments = n - 1;
            let scaled = t.clamp(0.0, 1.0) * segments as f32;
            let i = (scaled as usize).min(segments - 1);
            points[i].lerp(&points[i + 1], scaled - i as f32)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_polyline_ends() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0)];
        assert_eq!(sample_polyline(&pts, 0.0), pts[0]);
        assert_eq!(sample_polyline(&pts, 1.0), pts[2]);
        let q = sample_polyline(&pts, 0.25);
        assert!((q.x - 5.0).abs() < 1e-5);
    }

    #[test]
    fn test_segment_index_clamps() {
        assert_eq!(segment_index(4, 0.0), 0);
        assert_eq!(segment_index(4, 0.3), 1);
        assert_eq!(segment_index(4, 1.0), 3);
        assert_eq!(segment_index(4, 7.0), 3);
    }

    #[test]
    fn test_degenerate_polylines() {
        assert_eq!(sample_polyline(&[], 0.5), Vec2::ZERO);
        assert_eq!(segment_index(0, 0.5), 0);
    }
}
