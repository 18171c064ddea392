//! Plant instances and their lifecycle
//!
//! A plant is spawned invisible, grows and fades in, holds steady, then
//! fades out once its lifetime is spent and is removed at zero opacity.

pub mod parts;
pub mod style;

pub use parts::{FlowerHead, GrassBlade, Leaf, Spoke};
pub use style::{Proportions, SizeClass, Tempo};

use std::f32::consts::TAU;
use rand::Rng;
use crate::animation::reveal;
use crate::config::{FieldConfig, PlantColors};
use crate::garden::SlotId;
use crate::interaction::PushState;
use crate::math::Vec2;
use crate::stem::{PlantFrame, StemForces, StemGeometry};

/// Growth after which the flower head starts to open
pub const FLOWER_START: f32 = 0.85;
/// Growth span over which a leaf unfurls once the stem passes it
const LEAF_SPAN: f32 = 1.0 / 3.0;

/// Lifecycle stage of a plant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Growing,
    Steady,
    Fading,
    Removed,
}

/// A live plant: rest geometry, current pose, style and lifecycle counters
#[derive(Debug, Clone)]
pub struct Plant {
    pub slot: SlotId,
    pub proportions: Proportions,
    pub colors: PlantColors,
    pub flower: FlowerHead,
    pub leaves: Vec<Leaf>,
    pub grass: Vec<GrassBlade>,
    pub tempo: Tempo,
    pub wind_phase: f32,
    pub push: PushState,
    /// Stem growth progress in [0, 1]
    pub growth: f32,
    /// Current opacity in [0, max_opacity]
    pub opacity: f32,
    /// Frames lived
    pub age: u32,
    geometry: StemGeometry,
    frame: PlantFrame,
}

impl Plant {
    /// Roll a new plant rooted at `base`
    pub fn spawn<R: Rng + ?Sized>(
        slot: SlotId,
        base: Vec2,
        proportions: Proportions,
        config: &FieldConfig,
        rng: &mut R,
    ) -> Self {
        let geometry = StemGeometry::generate(base, proportions.height, config.resolution, rng);
        let leaves = (0..proportions.leaf_count)
            .map(|_| Leaf::roll(proportions.leaf_size, rng))
            .collect();
        let grass = GrassBlade::tuft(rng);
        let flower = FlowerHead::roll(rng);
        let colors = config.palette.roll(rng);
        let tempo = Tempo::roll(rng);
        let wind_phase = rng.gen_range(0.0..TAU);
        let frame = PlantFrame::at_rest(&geometry);

        Self {
            slot,
            proportions,
            colors,
            flower,
            leaves,
            grass,
            tempo,
            wind_phase,
            push: PushState::default(),
            growth: 0.0,
            opacity: 0.0,
            age: 0,
            geometry,
            frame,
        }
    }

    pub fn geometry(&self) -> &StemGeometry {
        &self.geometry
    }

    pub fn frame(&self) -> &PlantFrame {
        &self.frame
    }

    pub fn base(&self) -> Vec2 {
        self.geometry.base()
    }

    pub fn stage(&self) -> Stage {
        if self.age > self.tempo.lifetime {
            if self.opacity <= 0.0 {
                Stage::Removed
            } else {
                Stage::Fading
            }
        } else if self.growth < 1.0 {
            Stage::Growing
        } else {
            Stage::Steady
        }
    }

    /// Age one frame and apply growth or fading.
    ///
    /// Once past its lifetime a plant only loses opacity, even if its stem
    /// has not finished growing.
    pub fn advance(&mut self, config: &FieldConfig) -> Stage {
        self.age = self.age.saturating_add(1);

        let growing = self.growth < 1.0;
        if growing {
            self.growth = (self.growth + self.tempo.speed).min(1.0);
        }

        if self.age > self.tempo.lifetime {
            self.opacity -= config.fade_step;
        } else if growing {
            self.opacity = (self.opacity + config.opacity_step).min(self.tempo.max_opacity);
        }

        self.stage()
    }

    /// Full per-frame update: lifecycle, pointer push, then stem pose
    pub fn tick(&mut self, time: f32, pointer: Option<Vec2>, config: &FieldConfig) -> Stage {
        let stage = self.advance(config);
        if stage == Stage::Removed {
            return stage;
        }

        self.push.track(self.frame.positions(), pointer, config);
        let forces = StemForces::new(time, self.wind_phase, &self.push, config);
        self.frame.update(&self.geometry, &forces);

        stage
    }

    /// Eased visibility of `leaf`: zero until the stem grows past it
    pub fn leaf_reveal(&self, leaf: &Leaf) -> f32 {
        reveal(self.growth, leaf.t, LEAF_SPAN)
    }

    /// Eased visibility of the flower head over the last stretch of growth
    pub fn flower_reveal(&self) -> f32 {
        reveal(self.growth, FLOWER_START, 1.0 - FLOWER_START)
    }
}
