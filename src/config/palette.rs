use rand::Rng;
use serde::Deserialize;

/// Two-way color choices; each plant picks one entry per role at spawn.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub stem: [String; 2],
    pub leaf: [String; 2],
    pub flower: [String; 2],
    /// Secondary flower color (petal centers, rose spiral)
    pub accent: [String; 2],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            stem: ["#8a6a5a".to_string(), "#7a6050".to_string()],
            leaf: ["#8a7a5a".to_string(), "#7a6a50".to_string()],
            flower: ["#c4817b".to_string(), "#d4956a".to_string()],
            accent: ["#e8b990".to_string(), "#e8c4a8".to_string()],
        }
    }
}

/// Colors rolled for a single plant
#[derive(Debug, Clone, PartialEq)]
pub struct PlantColors {
    pub stem: String,
    pub leaf: String,
    pub flower: String,
    pub accent: String,
}

impl Palette {
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> PlantColors {
        PlantColors {
            stem: pick(&self.stem, rng),
            leaf: pick(&self.leaf, rng),
            flower: pick(&self.flower, rng),
            accent: pick(&self.accent, rng),
        }
    }
}

fn pick<R: Rng + ?Sized>(pair: &[String; 2], rng: &mut R) -> String {
    if rng.gen_bool(0.5) {
        pair[0].clone()
    } else {
        pair[1].clone()
    }
}
