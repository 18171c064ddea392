//! Tunable constants for the flower field
//!
//! Every field has a default, so a YAML override only needs to name the
//! values it changes.

mod palette;

pub use palette::{Palette, PlantColors};

use serde::Deserialize;
use crate::error::FieldError;

/// Simulation and layout parameters
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Segments per stem polyline (a stem has `resolution + 1` joints)
    pub resolution: usize,
    /// Peak wind deflection at the stem tip (radians)
    pub wind_strength: f32,
    /// Pointer interaction radius (pixels)
    pub mouse_radius: f32,
    /// Peak pointer deflection at full contact (radians)
    pub mouse_strength: f32,
    /// Exponential easing rate applied to push and contact each frame
    pub smoothing_rate: f32,
    /// Half-width of the bell-shaped contact weighting, in stem parameter units
    pub contact_width: f32,
    /// Lowest contact parameter a push may target
    pub contact_floor: f32,
    /// Push magnitudes below this snap to zero
    pub push_snap: f32,
    /// Height of one placement row (pixels)
    pub slot_height: f32,
    pub max_plants: usize,
    /// Plants spawned eagerly when the field starts
    pub initial_plants: usize,
    /// Per-frame probability of a background spawn attempt
    pub spawn_chance: f64,
    /// Width of the centered content column plants stay out of
    pub content_width: f32,
    /// Narrowest side margin that can host a plant
    pub min_side_space: f32,
    /// Opacity gained per frame while growing
    pub opacity_step: f32,
    /// Opacity lost per frame while fading
    pub fade_step: f32,
    pub palette: Palette,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            resolution: 40,
            wind_strength: 0.12,
            mouse_radius: 120.0,
            mouse_strength: 0.6,
            smoothing_rate: 0.06,
            contact_width: 0.15,
            contact_floor: 0.05,
            push_snap: 0.001,
            slot_height: 250.0,
            max_plants: 10,
            initial_plants: 4,
            spawn_chance: 0.005,
            content_width: 720.0,
            min_side_space: 80.0,
            opacity_step: 0.002,
            fade_step: 0.001,
            palette: Palette::default(),
        }
    }
}

impl FieldConfig {
    /// Parse overrides from YAML, falling back to defaults for missing keys
    pub fn from_yaml(yaml: &str) -> Result<Self, FieldError> {
        let config: FieldConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), FieldError> {
        if self.resolution == 0 {
            return Err(FieldError::InvalidConfig("resolution must be at least 1".into()));
        }
        positive("slot_height", self.slot_height)?;
        positive("mouse_radius", self.mouse_radius)?;
        positive("contact_width", self.contact_width)?;
        positive("opacity_step", self.opacity_step)?;
        // Fading plants are only removed once opacity reaches zero
        positive("fade_step", self.fade_step)?;
        if !(self.smoothing_rate > 0.0 && self.smoothing_rate <= 1.0) {
            return Err(FieldError::InvalidConfig(format!(
                "smoothing_rate must be in (0, 1], got {}",
                self.smoothing_rate
            )));
        }
        if !(self.push_snap >= 0.0 && self.push_snap.is_finite()) {
            return Err(FieldError::InvalidConfig(format!(
                "push_snap must be non-negative, got {}",
                self.push_snap
            )));
        }
        if !(0.0..=1.0).contains(&self.spawn_chance) {
            return Err(FieldError::InvalidConfig(format!(
                "spawn_chance must be a probability, got {}",
                self.spawn_chance
            )));
        }
        Ok(())
    }
}

/// Rejects zero, negative, infinite and NaN values
fn positive(name: &str, value: f32) -> Result<(), FieldError> {
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(FieldError::InvalidConfig(format!("{} must be positive, got {}", name, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = FieldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.resolution, 40);
        assert_eq!(config.max_plants, 10);
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let yaml = r#"
max_plants: 6
wind_strength: 0.2
"#;
        let config = FieldConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.max_plants, 6);
        assert!((config.wind_strength - 0.2).abs() < 1e-6);
        assert_eq!(config.resolution, 40);
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn test_palette_override() {
        let yaml = r##"
palette:
  flower: ["#ff0000", "#00ff00"]
"##;
        let config = FieldConfig::from_yaml(yaml).unwrap();
        assert_eq!(config.palette.flower[0], "#ff0000");
        assert_eq!(config.palette.stem, Palette::default().stem);
    }

    #[test]
    fn test_invalid_yaml() {
        let result = FieldConfig::from_yaml("max_plants: [oops");
        assert!(matches!(result, Err(FieldError::Config(_))));
    }

    #[test]
    fn test_rejects_bad_values() {
        let result = FieldConfig::from_yaml("smoothing_rate: 1.5");
        assert!(matches!(result, Err(FieldError::InvalidConfig(_))));

        let result = FieldConfig::from_yaml("resolution: 0");
        assert!(matches!(result, Err(FieldError::InvalidConfig(_))));

        for yaml in [
            "mouse_radius: .nan",
            "contact_width: .nan",
            "slot_height: .inf",
            "fade_step: 0",
            "opacity_step: -0.01",
            "push_snap: -1",
            "smoothing_rate: .nan",
        ] {
            let result = FieldConfig::from_yaml(yaml);
            assert!(
                matches!(result, Err(FieldError::InvalidConfig(_))),
                "accepted {}",
                yaml
            );
        }
    }
}
