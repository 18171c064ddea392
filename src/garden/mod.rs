//! Simulation state for the whole flower field
//!
//! `Garden` owns every live plant, the slot grid and the shared inputs
//! (viewport, pointer). The host calls `step` once per displayed frame.

pub mod slots;

pub use slots::{Side, Slot, SlotGrid, SlotId};

use std::f32::consts::PI;
use log::debug;
use rand::Rng;
use crate::config::FieldConfig;
use crate::math::Vec2;
use crate::plant::{Plant, Proportions, Stage};

/// Gap between a row's top edge and the highest a plant may reach
const ROW_PADDING: f32 = 80.0;
/// Inset of the left margin's usable band from the page edge
const LEFT_INSET: f32 = 40.0;
/// Gap between the content column and the right margin's usable band
const RIGHT_INSET: f32 = 20.0;
/// Width trimmed from a margin so plants stay clear of both its edges
const MARGIN_TRIM: f32 = 60.0;

/// Period of the frame clock. Every wind and grass frequency is a whole
/// multiple of 0.001 rad per frame, so all of them repeat after 2π / 0.001
/// frames and wrapping here is seamless while keeping f32 precision.
const CLOCK_PERIOD: f32 = 2000.0 * PI;

/// Drawing surface size: viewport width by full content height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

pub struct Garden {
    config: FieldConfig,
    viewport: Viewport,
    plants: Vec<Plant>,
    slots: SlotGrid,
    pointer: Option<Vec2>,
    clock: f32,
}

impl Garden {
    pub fn new(config: FieldConfig, viewport: Viewport) -> Self {
        let slots = SlotGrid::build(viewport.height, config.slot_height);
        Self {
            plants: Vec::with_capacity(config.max_plants),
            config,
            viewport,
            slots,
            pointer: None,
            clock: 0.0,
        }
    }

    /// Spawn the configured number of starting plants
    pub fn populate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        (0..self.config.initial_plants)
            .filter(|_| self.spawn(rng))
            .count()
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn plants(&self) -> &[Plant] {
        &self.plants
    }

    pub fn slots(&self) -> &SlotGrid {
        &self.slots
    }

    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Frames stepped so far, wrapped at the common period of the sway
    /// sines; drives wind and grass sway
    pub fn time(&self) -> f32 {
        self.clock
    }

    /// Latest pointer position in canvas coordinates, or `None` once it leaves
    pub fn set_pointer(&mut self, pointer: Option<Vec2>) {
        self.pointer = pointer;
    }

    /// Adopt new canvas dimensions; a height change rebuilds the slot grid
    pub fn resize(&mut self, viewport: Viewport) {
        let height_changed = viewport.height != self.viewport.height;
        self.viewport = viewport;

        if height_changed {
            let held = self.plants.iter().map(|p| p.slot);
            self.slots.rebuild(viewport.height, self.config.slot_height, held);
            debug!(
                "rebuilt slot grid: {} rows for height {}",
                self.slots.rows(),
                viewport.height
            );
        }
    }

    /// Try to place one new plant. Returns false when no slot is free or
    /// the chosen margin is too narrow.
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let Some(slot) = self.slots.acquire(rng) else {
            debug!("spawn skipped: no free slot");
            return false;
        };

        let Some(x) = self.margin_x(slot.side, rng) else {
            self.slots.release(slot);
            debug!("spawn skipped: {:?} margin too narrow", slot.side);
            return false;
        };

        let slot_height = self.config.slot_height;
        let top = slot.row as f32 * slot_height + ROW_PADDING;
        let jitter = rng.gen_range(0.0..(slot_height - ROW_PADDING).max(f32::EPSILON));

        // The stem grows upward from its base, so the base sits one plant height below the row top
        let proportions = Proportions::roll(rng);
        let base = Vec2::new(x, top + jitter + proportions.height);
        let plant = Plant::spawn(slot, base, proportions, &self.config, rng);

        debug!("spawned plant in {:?} row {} at ({:.0}, {:.0})", slot.side, slot.row, base.x, base.y);
        self.plants.push(plant);
        true
    }

    /// Random x inside the usable band of a margin, if the margin is wide enough
    fn margin_x<R: Rng + ?Sized>(&self, side: Side, rng: &mut R) -> Option<f32> {
        let width = self.viewport.width;
        let content = self.config.content_width.min(width);
        let content_left = (width - content) / 2.0;
        let content_right = content_left + content;

        let (space, start) = match side {
            Side::Left => (content_left, LEFT_INSET),
            Side::Right => (width - content_right, content_right + RIGHT_INSET),
        };

        if space < self.config.min_side_space {
            return None;
        }
        Some(start + rng.gen_range(0.0..(space - MARGIN_TRIM).max(f32::EPSILON)))
    }

    /// Advance one frame: lifecycle, pointer push and stem pose for every
    /// plant, then a chance of a background spawn.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.clock = (self.clock + 1.0) % CLOCK_PERIOD;
        let time = self.time();

        // Reverse order so removal doesn't disturb the unvisited plants
        for i in (0..self.plants.len()).rev() {
            let stage = self.plants[i].tick(time, self.pointer, &self.config);
            if stage == Stage::Removed {
                let plant = self.plants.remove(i);
                self.slots.release(plant.slot);
                debug!("removed plant from {:?} row {}", plant.slot.side, plant.slot.row);
            }
        }

        if self.plants.len() < self.config.max_plants && rng.gen_bool(self.config.spawn_chance) {
            self.spawn(rng);
        }
    }
}
