use crate::config::FieldConfig;
use crate::interaction::PushState;
use crate::math::Vec2;
use super::{StemGeometry, sample_polyline, segment_index};

/// Spatial wavenumber of the wind along the stem (radians per unit t)
const WIND_WAVE: f32 = 1.5;

/// Forces acting on a stem for one frame
#[derive(Debug, Clone, Copy)]
pub struct StemForces {
    /// Frame clock
    pub time: f32,
    /// Per-plant wind phase so neighbours don't sway in lockstep
    pub wind_phase: f32,
    pub wind_strength: f32,
    /// Signed pointer push (radians at full weight)
    pub push: f32,
    /// Stem parameter the pointer push is centered on
    pub contact: f32,
    pub contact_width: f32,
}

impl StemForces {
    pub fn new(time: f32, wind_phase: f32, push: &PushState, config: &FieldConfig) -> Self {
        Self {
            time,
            wind_phase,
            wind_strength: config.wind_strength,
            push: push.push,
            contact: push.contact,
            contact_width: config.contact_width,
        }
    }
}

/// Angular deflection of the segment ending at stem parameter `t`.
///
/// The wind term grows with t² and the pointer term with t, so both vanish
/// at the base.
pub fn deflection_at(t: f32, forces: &StemForces) -> f32 {
    let wind = ((forces.time * 0.008 + forces.wind_phase + t * WIND_WAVE).sin()
        + (forces.time * 0.017 + forces.wind_phase * 1.7 + t * WIND_WAVE * 2.0).sin() * 0.3)
        * forces.wind_strength
        * t
        * t;

    let offset = (t - forces.contact) / forces.contact_width;
    let pointer = forces.push * t / (1.0 + offset * offset);

    wind + pointer
}

/// Current bent pose of a stem.
///
/// Joint 0 is pinned to the rest base. Every other joint is its predecessor
/// plus the rest segment length along the deflected direction.
#[derive(Debug, Clone)]
pub struct PlantFrame {
    positions: Vec<Vec2>,
    deflections: Vec<f32>,
}

impl PlantFrame {
    /// Undeformed frame matching `geometry`
    pub fn at_rest(geometry: &StemGeometry) -> Self {
        Self {
            positions: geometry.points().to_vec(),
            deflections: vec![0.0; geometry.points().len()],
        }
    }

    pub fn positions(&self) -> &[Vec2] {
        &self.positions
    }

    /// Deflection angle per joint relative to its rest segment direction
    pub fn deflections(&self) -> &[f32] {
        &self.deflections
    }

    pub fn base(&self) -> Vec2 {
        self.positions.first().copied().unwrap_or(Vec2::ZERO)
    }

    pub fn tip(&self) -> Vec2 {
        self.positions.last().copied().unwrap_or(Vec2::ZERO)
    }

    pub fn point_at(&self, t: f32) -> Vec2 {
        sample_polyline(&self.positions, t)
    }

    /// Deflection of the segment containing parameter `t`, i.e. how far the
    /// live stem direction there has turned from rest
    pub fn bend_at(&self, t: f32) -> f32 {
        match self.deflections.len() {
            0 | 1 => 0.0,
            n => self.deflections[segment_index(n - 1, t) + 1],
        }
    }

    /// Recompute every joint from the rest geometry and this frame's forces
    pub fn update(&mut self, geometry: &StemGeometry, forces: &StemForces) {
        let segments = geometry.resolution();
        self.positions.resize(segments + 1, Vec2::ZERO);
        self.deflections.resize(segments + 1, 0.0);

        self.positions[0] = geometry.base();
        self.deflections[0] = 0.0;

        let lengths = geometry.segment_lengths();
        let rest = geometry.rest_angles();

        for i in 1..=segments {
            let t = i as f32 / segments as f32;
            let deflection = deflection_at(t, forces);
            let direction = Vec2::from_angle(rest[i - 1] + deflection);

            self.positions[i] = self.positions[i - 1] + direction.scale(lengths[i - 1]);
            self.deflections[i] = deflection;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stem::SwayParams;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn forces(time: f32, push: f32, contact: f32) -> StemForces {
        StemForces {
            time,
            wind_phase: 0.7,
            wind_strength: 0.12,
            push,
            contact,
            contact_width: 0.15,
        }
    }

    #[test]
    fn test_segment_lengths_preserved() {
        let mut rng = SmallRng::seed_from_u64(21);
        let geometry = StemGeometry::generate(Vec2::new(80.0, 600.0), 320.0, 40, &mut rng);
        let mut frame = PlantFrame::at_rest(&geometry);

        for step in 0..200 {
            let push = if step % 50 < 25 { 0.6 } else { -0.4 };
            frame.update(&geometry, &forces(step as f32 * 13.0, push, 0.6));

            for (i, pair) in frame.positions().windows(2).enumerate() {
                let len = pair[0].distance(&pair[1]);
                assert!((len - geometry.segment_lengths()[i]).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn test_base_stays_pinned() {
        let mut rng = SmallRng::seed_from_u64(8);
        let base = Vec2::new(42.0, 777.0);
        let geometry = StemGeometry::generate(base, 250.0, 40, &mut rng);
        let mut frame = PlantFrame::at_rest(&geometry);

        for step in 0..100 {
            frame.update(&geometry, &forces(step as f32 * 37.0, 0.6, 0.3));
            assert_eq!(frame.base(), base);
            assert_eq!(frame.deflections()[0], 0.0);
        }
    }

    #[test]
    fn test_deflection_vanishes_at_base() {
        for time in [0.0, 100.0, 2500.0] {
            assert_eq!(deflection_at(0.0, &forces(time, 0.6, 0.5)), 0.0);
        }
    }

    #[test]
    fn test_pointer_push_bends_toward_sign() {
        let geometry = StemGeometry::from_sway(Vec2::new(0.0, 300.0), 300.0, 40, &SwayParams::STRAIGHT);
        let mut frame = PlantFrame::at_rest(&geometry);

        let calm = StemForces {
            wind_strength: 0.0,
            ..forces(0.0, 0.6, 0.5)
        };
        frame.update(&geometry, &calm);
        assert!(frame.tip().x > 1.0, "positive push should bend the tip right");

        let left = StemForces { push: -0.6, ..calm };
        frame.update(&geometry, &left);
        assert!(frame.tip().x < -1.0);
    }

    #[test]
    fn test_no_forces_matches_rest() {
        let mut rng = SmallRng::seed_from_u64(2);
        let geometry = StemGeometry::generate(Vec2::new(10.0, 400.0), 200.0, 40, &mut rng);
        let mut frame = PlantFrame::at_rest(&geometry);
        let still = StemForces {
            wind_strength: 0.0,
            ..forces(123.0, 0.0, 0.5)
        };
        frame.update(&geometry, &still);

        for (a, b) in frame.positions().iter().zip(geometry.points()) {
            assert!(a.distance(b) < 1e-3);
        }
    }

    #[test]
    fn test_bend_matches_live_direction() {
        let mut rng = SmallRng::seed_from_u64(14);
        let geometry = StemGeometry::generate(Vec2::new(60.0, 500.0), 280.0, 40, &mut rng);
        let mut frame = PlantFrame::at_rest(&geometry);
        assert_eq!(frame.bend_at(0.5), 0.0);

        frame.update(&geometry, &forces(400.0, 0.5, 0.4));
        let positions = frame.positions();
        for t in [0.1, 0.37, 0.62, 0.95] {
            let i = segment_index(geometry.resolution(), t);
            let live = (positions[i + 1] - positions[i]).angle();
            let turned = live - geometry.rest_angles()[i];
            assert!((frame.bend_at(t) - turned).abs() < 1e-4, "t = {}", t);
        }
        assert!(frame.bend_at(0.9).abs() > 0.0);
    }

    #[test]
    fn test_contact_weight_is_localized() {
        let f = StemForces {
            wind_strength: 0.0,
            ..forces(0.0, 1.0, 0.5)
        };
        let at_contact = deflection_at(0.5, &f) / 0.5;
        let far = deflection_at(1.0, &f) / 1.0;
        assert!((at_contact - 1.0).abs() < 1e-5);
        assert!(far < 0.2);
    }
}
