use crate::animation::approach;
use crate::config::FieldConfig;
use crate::math::Vec2;

/// Closest stem joint to the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactProbe {
    pub distance: f32,
    /// Normalized position of the joint along the stem (0 = base, 1 = tip)
    pub t: f32,
    pub joint: Vec2,
}

/// Find the joint nearest to `pointer` by squared distance
pub fn closest_joint(positions: &[Vec2], pointer: Vec2) -> Option<ContactProbe> {
    let segments = positions.len().checked_sub(1)?;

    let mut closest: Option<(usize, f32)> = None;
    for (i, joint) in positions.iter().enumerate() {
        let d2 = joint.distance_squared(&pointer);
        if closest.map_or(true, |(_, best)| d2 < best) {
            closest = Some((i, d2));
        }
    }

    closest.map(|(i, d2)| ContactProbe {
        distance: d2.sqrt(),
        t: if segments == 0 { 0.0 } else { i as f32 / segments as f32 },
        joint: positions[i],
    })
}

/// What the push state is easing toward this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PushTarget {
    pub push: f32,
    /// `None` keeps the previous contact target
    pub contact: Option<f32>,
}

/// Derive the push target from last frame's joints and the pointer
pub fn push_target(positions: &[Vec2], pointer: Option<Vec2>, config: &FieldConfig) -> PushTarget {
    let released = PushTarget {
        push: 0.0,
        contact: None,
    };

    let Some(pointer) = pointer else {
        return released;
    };
    let Some(probe) = closest_joint(positions, pointer) else {
        return released;
    };
    if probe.distance >= config.mouse_radius {
        return released;
    }

    // Push away from the pointer
    let side = if probe.joint.x >= pointer.x { 1.0 } else { -1.0 };

    PushTarget {
        push: config.mouse_strength * (1.0 - probe.distance / config.mouse_radius) * side,
        contact: Some(probe.t.max(config.contact_floor)),
    }
}

/// Smoothed pointer push acting on one plant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PushState {
    /// Signed push magnitude (radians at full contact weight)
    pub push: f32,
    /// Smoothed contact parameter in [0, 1]
    pub contact: f32,
    target_contact: f32,
}

impl Default for PushState {
    fn default() -> Self {
        Self {
            push: 0.0,
            contact: 0.5,
            target_contact: 0.5,
        }
    }
}

impl PushState {
    pub fn target_contact(&self) -> f32 {
        self.target_contact
    }

    /// Probe the pointer against `positions` and ease toward the result
    pub fn track(&mut self, positions: &[Vec2], pointer: Option<Vec2>, config: &FieldConfig) {
        let target = push_target(positions, pointer, config);
        self.settle(target, config);
    }

    /// Ease push and contact toward `target`, snapping negligible push to zero
    pub fn settle(&mut self, target: PushTarget, config: &FieldConfig) {
        if let Some(contact) = target.contact {
            self.target_contact = contact;
        }

        self.push = approach(self.push, target.push, config.smoothing_rate);
        self.contact = approach(self.contact, self.target_contact, config.smoothing_rate);

        if self.push.abs() < config.push_snap {
            self.push = 0.0;
        }
    }
}
