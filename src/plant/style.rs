use rand::Rng;

/// Plant size family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Medium,
    Large,
}

/// Dimensions rolled for one plant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Proportions {
    pub class: SizeClass,
    pub height: f32,
    pub stem_width: f32,
    pub leaf_size: f32,
    pub flower_size: f32,
    pub leaf_count: usize,
}

impl Proportions {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let class = if rng.gen_bool(0.5) {
            SizeClass::Medium
        } else {
            SizeClass::Large
        };
        Self::roll_class(class, rng)
    }

    pub fn roll_class<R: Rng + ?Sized>(class: SizeClass, rng: &mut R) -> Self {
        match class {
            SizeClass::Medium => Self {
                class,
                height: rng.gen_range(140.0..260.0),
                stem_width: rng.gen_range(1.5..2.5),
                leaf_size: rng.gen_range(8.0..18.0),
                flower_size: rng.gen_range(10.0..20.0),
                leaf_count: rng.gen_range(2..5),
            },
            SizeClass::Large => Self {
                class,
                height: rng.gen_range(260.0..400.0),
                stem_width: rng.gen_range(2.5..4.0),
                leaf_size: rng.gen_range(14.0..30.0),
                flower_size: rng.gen_range(16.0..30.0),
                leaf_count: rng.gen_range(3..7),
            },
        }
    }
}

/// Per-plant timing and fade parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tempo {
    /// Growth gained per frame
    pub speed: f32,
    pub max_opacity: f32,
    /// Frames before the plant starts fading
    pub lifetime: u32,
}

impl Tempo {
    pub fn roll<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            speed: rng.gen_range(0.001..0.003),
            max_opacity: rng.gen_range(0.2..0.35),
            lifetime: rng.gen_range(1000..1800),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_classes_do_not_overlap_in_height() {
        let mut rng = SmallRng::seed_from_u64(12);
        for _ in 0..100 {
            let medium = Proportions::roll_class(SizeClass::Medium, &mut rng);
            let large = Proportions::roll_class(SizeClass::Large, &mut rng);
            assert!(medium.height < 260.0);
            assert!(large.height >= 260.0);
            assert!((2..5).contains(&medium.leaf_count));
            assert!((3..7).contains(&large.leaf_count));
        }
    }

    #[test]
    fn test_tempo_ranges() {
        let mut rng = SmallRng::seed_from_u64(12);
        for _ in 0..100 {
            let tempo = Tempo::roll(&mut rng);
            assert!(tempo.speed >= 0.001 && tempo.speed < 0.003);
            assert!(tempo.max_opacity >= 0.2 && tempo.max_opacity < 0.35);
            assert!((1000..1800).contains(&tempo.lifetime));
        }
    }
}
