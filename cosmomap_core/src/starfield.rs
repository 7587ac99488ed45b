//! Decorative background noise: twinkling stars, shooting stars, nebulae.
//!
//! Generated once per mount from an injected RNG, so the layout is stable
//! while the page is open and reproducible in tests.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// How much of each layer to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    /// Bright twinkling stars
    pub large_stars: u16,
    /// Faint background stars
    pub small_stars: u16,
    /// Streaks crossing the upper part of the map
    pub shooting_stars: u16,
    /// Blurred colour clouds; the first three are fixed
    pub nebulae: u16,
}

impl Default for StarfieldConfig {
    fn default() -> Self {
        Self {
            large_stars: 50,
            small_stars: 200,
            shooting_stars: 1,
            nebulae: 3,
        }
    }
}

/// One twinkling star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    /// Percent from the top
    pub top: f32,
    /// Percent from the left
    pub left: f32,
    /// Peak opacity
    pub opacity: f32,
    /// Twinkle animation delay, seconds
    pub delay_s: f32,
    /// Twinkle animation period, seconds
    pub duration_s: f32,
}

/// One shooting star.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Streak {
    /// Percent from the top
    pub top: f32,
    /// Percent from the left
    pub left: f32,
    /// Animation delay, seconds
    pub delay_s: f32,
    /// Animation period, seconds
    pub duration_s: f32,
}

/// Drift animation of a nebula.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Drift {
    /// Default float
    Float,
    /// Float, started late
    FloatDelayed,
    /// Slower float
    FloatSlow,
}

impl Drift {
    /// CSS animation class.
    pub fn class(self) -> &'static str {
        match self {
            Drift::Float => "animate-float",
            Drift::FloatDelayed => "animate-float-delayed",
            Drift::FloatSlow => "animate-float-slow",
        }
    }
}

/// One nebula cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nebula {
    /// Centre, percent from the top
    pub top: f32,
    /// Centre, percent from the left
    pub left: f32,
    /// Diameter in rem
    pub size_rem: f32,
    /// Hex colour
    pub color: &'static str,
    /// Opacity
    pub opacity: f32,
    /// Drift animation
    pub drift: Drift,
}

impl Nebula {
    /// Inline style for an absolutely positioned blurred disc.
    pub fn style_attr(&self) -> String {
        format!(
            "top: {:.2}%; left: {:.2}%; width: {size}rem; height: {size}rem; background: {}; opacity: {};",
            self.top,
            self.left,
            self.color,
            self.opacity,
            size = self.size_rem
        )
    }
}

const FIXED_NEBULAE: [Nebula; 3] = [
    Nebula {
        top: 25.0,
        left: 25.0,
        size_rem: 24.0,
        color: "#9333ea",
        opacity: 0.2,
        drift: Drift::Float,
    },
    Nebula {
        top: 75.0,
        left: 75.0,
        size_rem: 20.0,
        color: "#2563eb",
        opacity: 0.2,
        drift: Drift::FloatDelayed,
    },
    Nebula {
        top: 50.0,
        left: 50.0,
        size_rem: 16.0,
        color: "#db2777",
        opacity: 0.1,
        drift: Drift::FloatSlow,
    },
];

/// Everything the background draws.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Starfield {
    /// Bright stars
    pub large: Vec<Star>,
    /// Faint stars
    pub small: Vec<Star>,
    /// Shooting stars
    pub streaks: Vec<Streak>,
    /// Nebulae
    pub nebulae: Vec<Nebula>,
}

/// Build a starfield from `rng`.
pub fn generate<R: Rng>(rng: &mut R, config: &StarfieldConfig) -> Starfield {
    let large = (0..config.large_stars)
        .map(|_| Star {
            top: rng.gen_range(0.0..100.0),
            left: rng.gen_range(0.0..100.0),
            opacity: rng.gen_range(0.6..=1.0),
            delay_s: rng.gen_range(0.0..5.0),
            duration_s: rng.gen_range(3.0..7.0),
        })
        .collect();

    let small = (0..config.small_stars)
        .map(|_| Star {
            top: rng.gen_range(0.0..100.0),
            left: rng.gen_range(0.0..100.0),
            opacity: rng.gen_range(0.3..=1.0),
            delay_s: rng.gen_range(0.0..5.0),
            duration_s: rng.gen_range(3.0..7.0),
        })
        .collect();

    let streaks = (0..config.shooting_stars)
        .map(|_| Streak {
            top: rng.gen_range(0.0..40.0),
            left: rng.gen_range(40.0..100.0),
            delay_s: rng.gen_range(0.0..8.0),
            duration_s: 8.0,
        })
        .collect();

    let nebulae = (0..usize::from(config.nebulae))
        .map(|i| match FIXED_NEBULAE.get(i) {
            Some(fixed) => *fixed,
            None => {
                let template = FIXED_NEBULAE[i % FIXED_NEBULAE.len()];
                Nebula {
                    top: rng.gen_range(10.0..90.0),
                    left: rng.gen_range(10.0..90.0),
                    size_rem: rng.gen_range(12.0..24.0),
                    opacity: 0.1,
                    ..template
                }
            }
        })
        .collect();

    Starfield {
        large,
        small,
        streaks,
        nebulae,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn counts_follow_config() {
        let mut rng = SmallRng::seed_from_u64(7);
        let field = generate(&mut rng, &StarfieldConfig::default());
        assert_eq!(field.large.len(), 50);
        assert_eq!(field.small.len(), 200);
        assert_eq!(field.streaks.len(), 1);
        assert_eq!(field.nebulae.len(), 3);
    }

    #[test]
    fn values_stay_in_range() {
        let mut rng = SmallRng::seed_from_u64(42);
        let field = generate(&mut rng, &StarfieldConfig::default());
        for star in field.large.iter().chain(&field.small) {
            assert!((0.0..100.0).contains(&star.top));
            assert!((0.0..100.0).contains(&star.left));
            assert!((0.3..=1.0).contains(&star.opacity));
            assert!((3.0..7.0).contains(&star.duration_s));
        }
        assert!(field.large.iter().all(|s| s.opacity >= 0.6));
        for streak in &field.streaks {
            assert!(streak.top < 40.0 && streak.left >= 40.0);
        }
    }

    #[test]
    fn same_seed_same_sky() {
        let config = StarfieldConfig::default();
        let a = generate(&mut SmallRng::seed_from_u64(1), &config);
        let b = generate(&mut SmallRng::seed_from_u64(1), &config);
        assert_eq!(a, b);
    }

    #[test]
    fn first_nebulae_are_fixed_and_extras_cycle_colours() {
        let config = StarfieldConfig {
            nebulae: 5,
            ..StarfieldConfig::default()
        };
        let field = generate(&mut SmallRng::seed_from_u64(3), &config);
        assert_eq!(&field.nebulae[..3], &FIXED_NEBULAE[..]);
        assert_eq!(field.nebulae[3].color, "#9333ea");
        assert_eq!(field.nebulae[4].drift, Drift::FloatDelayed);
    }

    #[test]
    fn empty_config_draws_nothing() {
        let config = StarfieldConfig {
            large_stars: 0,
            small_stars: 0,
            shooting_stars: 0,
            nebulae: 0,
        };
        assert_eq!(generate(&mut SmallRng::seed_from_u64(0), &config), Starfield::default());
    }

    #[test]
    fn partial_config_json_fills_defaults() {
        let config: StarfieldConfig = serde_json::from_str(r#"{"small_stars": 10}"#).unwrap();
        assert_eq!(config.small_stars, 10);
        assert_eq!(config.large_stars, 50);
    }

    #[test]
    fn nebula_style_attr() {
        assert_eq!(
            FIXED_NEBULAE[2].style_attr(),
            "top: 50.00%; left: 50.00%; width: 16rem; height: 16rem; background: #db2777; opacity: 0.1;"
        );
    }
}
