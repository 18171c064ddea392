use std::f32::consts::PI;
use rand::Rng;
use crate::math::Vec2;
use super::sample_polyline;

/// Random sway parameters shaping one stem's rest curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwayParams {
    /// Amplitude of the primary sine wave (pixels, signed)
    pub amplitude1: f32,
    /// Half-periods of the primary wave over the stem height
    pub frequency1: f32,
    pub amplitude2: f32,
    pub frequency2: f32,
    /// Horizontal drift of the tip relative to the base (pixels)
    pub lean: f32,
}

impl SwayParams {
    /// A perfectly straight, upright stem
    pub const STRAIGHT: SwayParams = SwayParams {
        amplitude1: 0.0,
        frequency1: 0.0,
        amplitude2: 0.0,
        frequency2: 0.0,
        lean: 0.0,
    };

    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let sign1 = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let amplitude1 = rng.gen_range(15.0..40.0) * sign1;
        let frequency1 = rng.gen_range(0.8..1.4);
        let sign2 = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        let amplitude2 = rng.gen_range(5.0..15.0) * sign2;
        let frequency2 = rng.gen_range(1.5..2.5);
        let lean = rng.gen_range(-15.0..15.0);

        Self {
            amplitude1,
            frequency1,
            amplitude2,
            frequency2,
            lean,
        }
    }

    /// Horizontal displacement at stem parameter `t`; zero at the base
    pub fn offset(&self, t: f32) -> f32 {
        (t * PI * self.frequency1).sin() * self.amplitude1 * t
            + (t * PI * self.frequency2).sin() * self.amplitude2 * t
            + self.lean * t
    }
}

/// Undeformed stem polyline with derived segment lengths and rest angles.
///
/// Immutable once generated; every frame bends a copy of it.
#[derive(Debug, Clone)]
pub struct StemGeometry {
    points: Vec<Vec2>,
    lengths: Vec<f32>,
    rest_angles: Vec<f32>,
}

impl StemGeometry {
    /// Generate a randomly swaying stem rising `height` pixels above `base`
    pub fn generate<R: Rng + ?Sized>(base: Vec2, height: f32, resolution: usize, rng: &mut R) -> Self {
        Self::from_sway(base, height, resolution, &SwayParams::roll(rng))
    }

    pub fn from_sway(base: Vec2, height: f32, resolution: usize, sway: &SwayParams) -> Self {
        let resolution = resolution.max(1);
        let points = (0..=resolution)
            .map(|i| {
                let t = i as f32 / resolution as f32;
                Vec2::new(base.x + sway.offset(t), base.y - t * height)
            })
            .collect();
        Self::from_points(points)
    }

    /// Build from explicit joints; at least two points are required for a usable stem
    pub fn from_points(points: Vec<Vec2>) -> Self {
        let (lengths, rest_angles) = points
            .windows(2)
            .map(|pair| {
                let d = pair[1] - pair[0];
                (d.length(), d.angle())
            })
            .unzip();

        Self {
            points,
            lengths,
            rest_angles,
        }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Number of segments (joints minus one)
    pub fn resolution(&self) -> usize {
        self.lengths.len()
    }

    pub fn segment_lengths(&self) -> &[f32] {
        &self.lengths
    }

    pub fn rest_angles(&self) -> &[f32] {
        &self.rest_angles
    }

    pub fn base(&self) -> Vec2 {
        self.points.first().copied().unwrap_or(Vec2::ZERO)
    }

    pub fn tip(&self) -> Vec2 {
        self.points.last().copied().unwrap_or(Vec2::ZERO)
    }

    pub fn point_at(&self, t: f32) -> Vec2 {
        sample_polyline(&self.points, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_point_count_and_endpoints() {
        let mut rng = SmallRng::seed_from_u64(7);
        let base = Vec2::new(100.0, 500.0);
        let sway = SwayParams::roll(&mut rng);
        let stem = StemGeometry::from_sway(base, 200.0, 40, &sway);

        assert_eq!(stem.points().len(), 41);
        assert_eq!(stem.resolution(), 40);
        assert_eq!(stem.base(), base);

        let tip = stem.tip();
        assert!((tip.y - 300.0).abs() < 1e-3);
        assert!((tip.x - (base.x + sway.offset(1.0))).abs() < 1e-3);
    }

    #[test]
    fn test_lean_is_linear() {
        let sway = SwayParams {
            lean: 12.0,
            ..SwayParams::STRAIGHT
        };
        let stem = StemGeometry::from_sway(Vec2::new(0.0, 0.0), 200.0, 10, &sway);

        for (i, p) in stem.points().iter().enumerate() {
            let t = i as f32 / 10.0;
            assert!((p.x - 12.0 * t).abs() < 1e-4);
            assert!((p.y + 200.0 * t).abs() < 1e-3);
        }
    }

    #[test]
    fn test_sway_vanishes_at_base() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..10 {
            let sway = SwayParams::roll(&mut rng);
            assert_eq!(sway.offset(0.0), 0.0);
        }
    }

    #[test]
    fn test_curve_is_smooth() {
        let mut rng = SmallRng::seed_from_u64(5);
        let stem = StemGeometry::generate(Vec2::new(50.0, 400.0), 300.0, 40, &mut rng);

        // No segment may jump far beyond the vertical step
        for len in stem.segment_lengths() {
            assert!(*len >= 300.0 / 40.0 - 1e-3);
            assert!(*len < 300.0 / 40.0 * 2.0);
        }
    }

    #[test]
    fn test_straight_stem_points_up() {
        let stem = StemGeometry::from_sway(Vec2::new(0.0, 100.0), 100.0, 4, &SwayParams::STRAIGHT);
        for angle in stem.rest_angles() {
            assert!((angle + FRAC_PI_2).abs() < 1e-5);
        }
        for len in stem.segment_lengths() {
            assert!((len - 25.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_point_at_interpolates() {
        let stem = StemGeometry::from_sway(Vec2::new(0.0, 100.0), 100.0, 4, &SwayParams::STRAIGHT);
        let mid = stem.point_at(0.5);
        assert!((mid.y - 50.0).abs() < 1e-4);
        let quarter_and_bit = stem.point_at(0.3);
        assert!((quarter_and_bit.y - 70.0).abs() < 1e-3);
        assert_eq!(stem.point_at(1.5), stem.tip());
    }
}
