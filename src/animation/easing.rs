//! Easing functions for smooth animations

/// Hermite smoothstep on a value t in range [0, 1]
pub fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Eased visibility of something that starts appearing at `start` and is
/// fully shown `span` later, driven by `progress`
pub fn reveal(progress: f32, start: f32, span: f32) -> f32 {
    if progress <= start {
        return 0.0;
    }
    smoothstep((progress - start) / span)
}

/// One step of exponential easing from `current` toward `target`
pub fn approach(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * rate
}
