use std::f32::consts::TAU;
use rand::Rng;

/// A leaf attached along the stem
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leaf {
    /// Attachment parameter along the stem (0 = base, 1 = tip)
    pub t: f32,
    /// Drawing angle while the stem is at rest
    pub angle: f32,
    pub size: f32,
}

impl Leaf {
    pub fn roll<R: Rng + ?Sized>(base_size: f32, rng: &mut R) -> Self {
        let t = rng.gen_range(0.15..0.8);
        let side = if rng.gen_bool(0.5) { -1.0 } else { 1.0 };
        let angle = side * rng.gen_range(0.3..1.3);
        let size = base_size * rng.gen_range(0.7..1.3);

        Self { t, angle, size }
    }

    /// Leaf rotation once the stem has bent by `bend` at the attachment point
    pub fn rotation(&self, bend: f32) -> f32 {
        self.angle + bend
    }
}

/// A grass blade in the tuft around a plant's base
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrassBlade {
    /// Horizontal offset from the plant base
    pub offset: f32,
    pub height: f32,
    pub lean: f32,
    pub phase: f32,
}

impl GrassBlade {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            offset: rng.gen_range(-10.0..10.0),
            height: rng.gen_range(6.0..20.0),
            lean: rng.gen_range(-6.0..6.0),
            phase: rng.gen_range(0.0..TAU),
        }
    }

    pub fn tuft<R: Rng + ?Sized>(rng: &mut R) -> Vec<Self> {
        let count = rng.gen_range(3..8);
        (0..count).map(|_| Self::roll(rng)).collect()
    }

    /// Horizontal tip displacement from the slow grass breeze
    pub fn sway(&self, time: f32, wind_phase: f32) -> f32 {
        (time * 0.002 + wind_phase + self.phase).sin() * 3.0 * self.height / 20.0
    }
}

/// One spoke of a dandelion puff
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spoke {
    pub angle: f32,
    /// Length as a fraction of the flower size
    pub length: f32,
}

pub const DANDELION_SPOKES: usize = 12;

/// Flower head shape, with any geometry precomputed at spawn
#[derive(Debug, Clone, PartialEq)]
pub enum FlowerHead {
    /// Ring of elliptical petals around a round center
    Petals { count: usize },
    /// Closed cup drawn from two cubic curves
    Tulip,
    /// Seed puff of jittered spokes
    Dandelion { spokes: Vec<Spoke> },
    /// Filled disc with a spiral
    Rose,
}

impl FlowerHead {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..4) {
            0 => FlowerHead::Petals {
                count: rng.gen_range(5..8),
            },
            1 => FlowerHead::Tulip,
            2 => {
                let spokes = (0..DANDELION_SPOKES)
                    .map(|i| Spoke {
                        angle: i as f32 / DANDELION_SPOKES as f32 * TAU + rng.gen_range(0.0..0.2),
                        length: rng.gen_range(0.6..1.0),
                    })
                    .collect();
                FlowerHead::Dandelion { spokes }
            }
            _ => FlowerHead::Rose,
        }
    }
}
