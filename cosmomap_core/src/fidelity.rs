//! Rendering tiers for markers and the detail view.
//!
//! One marker component, parameterized by tier, replaces a family of
//! near-identical components. Every tier honours the same contract: draw
//! something clickable, centred on the body's anchor.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::style::{BodyStyle, Decoration};
use crate::types::BodyKind;

/// Visual fidelity of a marker, from cheapest to richest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FidelityTier {
    /// Single flat colour disc
    Flat,
    /// CSS gradient sphere with per-body decorations
    #[default]
    Gradient,
    /// Faceted sphere with Lambert shading
    LowPoly,
    /// Texture-mapped sphere
    Textured,
    /// Texture-mapped sphere with a day/night terminator
    Shaded,
}

impl FidelityTier {
    /// Every tier, cheapest first.
    pub const ALL: [FidelityTier; 5] = [
        FidelityTier::Flat,
        FidelityTier::Gradient,
        FidelityTier::LowPoly,
        FidelityTier::Textured,
        FidelityTier::Shaded,
    ];

    /// Kebab-case name used in config files and the query string.
    pub fn as_str(self) -> &'static str {
        match self {
            FidelityTier::Flat => "flat",
            FidelityTier::Gradient => "gradient",
            FidelityTier::LowPoly => "low-poly",
            FidelityTier::Textured => "textured",
            FidelityTier::Shaded => "shaded",
        }
    }

    /// Whether this tier needs a texture fetched before it can render fully.
    pub fn uses_texture(self) -> bool {
        matches!(self, FidelityTier::Textured | FidelityTier::Shaded)
    }

    /// Whether the marker spins when animation is enabled.
    pub fn rotates(self) -> bool {
        matches!(
            self,
            FidelityTier::LowPoly | FidelityTier::Textured | FidelityTier::Shaded
        )
    }

    /// Tier to fall back to when this one's resources fail to load.
    pub fn degraded(self) -> FidelityTier {
        match self {
            FidelityTier::Textured | FidelityTier::Shaded => FidelityTier::Gradient,
            other => other,
        }
    }

    /// Whether a decoration is drawn at this tier.
    ///
    /// Texture tiers carry bands and continents in the image itself, so only
    /// the procedural tier draws them.
    pub fn shows(self, decoration: Decoration) -> bool {
        use Decoration::*;
        match self {
            FidelityTier::Flat => false,
            FidelityTier::Gradient => matches!(decoration, Rings | Corona | Bands | Blotches),
            FidelityTier::LowPoly => matches!(decoration, Rings),
            FidelityTier::Textured | FidelityTier::Shaded => {
                matches!(decoration, Rings | Corona | Atmosphere)
            }
        }
    }

    /// Relative sphere scale inside the marker box.
    pub fn scale(self, kind: BodyKind, style: &BodyStyle) -> f32 {
        match self {
            FidelityTier::Flat | FidelityTier::Gradient => 1.0,
            FidelityTier::LowPoly => match kind {
                BodyKind::Star => 1.5,
                BodyKind::Satellite => 0.5,
                BodyKind::Planet | BodyKind::Asteroid => 1.0,
            },
            FidelityTier::Textured => style.realistic_scale,
            FidelityTier::Shaded => style.shaded_scale,
        }
    }
}

impl fmt::Display for FidelityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FidelityTier {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "flat" => Ok(FidelityTier::Flat),
            "gradient" | "css" => Ok(FidelityTier::Gradient),
            "low-poly" | "lowpoly" | "3d" => Ok(FidelityTier::LowPoly),
            "textured" | "realistic" => Ok(FidelityTier::Textured),
            "shaded" | "ultra" => Ok(FidelityTier::Shaded),
            _ => Err(ConfigError::UnknownTier(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleRegistry;

    #[test]
    fn names_round_trip_through_from_str() {
        for tier in FidelityTier::ALL {
            assert_eq!(tier.as_str().parse::<FidelityTier>(), Ok(tier));
        }
        assert_eq!("LOW_POLY".parse::<FidelityTier>(), Ok(FidelityTier::LowPoly));
        assert_eq!(
            "holographic".parse::<FidelityTier>(),
            Err(ConfigError::UnknownTier("holographic".into()))
        );
    }

    #[test]
    fn texture_tiers_degrade_to_gradient() {
        assert_eq!(FidelityTier::Textured.degraded(), FidelityTier::Gradient);
        assert_eq!(FidelityTier::Shaded.degraded(), FidelityTier::Gradient);
        assert_eq!(FidelityTier::LowPoly.degraded(), FidelityTier::LowPoly);
        for tier in FidelityTier::ALL {
            assert!(!tier.degraded().uses_texture());
        }
    }

    #[test]
    fn flat_tier_draws_no_decorations() {
        for decoration in Decoration::ALL {
            assert!(!FidelityTier::Flat.shows(decoration));
        }
        assert!(FidelityTier::Gradient.shows(Decoration::Bands));
        assert!(!FidelityTier::Shaded.shows(Decoration::Bands));
        assert!(FidelityTier::Shaded.shows(Decoration::Atmosphere));
    }

    #[test]
    fn scales_follow_tier() {
        let registry = StyleRegistry::builtin();
        let sun = registry.resolve("sun");
        let moon = registry.resolve("moon");

        assert_eq!(FidelityTier::Gradient.scale(BodyKind::Star, sun), 1.0);
        assert_eq!(FidelityTier::LowPoly.scale(BodyKind::Star, sun), 1.5);
        assert_eq!(FidelityTier::LowPoly.scale(BodyKind::Satellite, moon), 0.5);
        assert_eq!(FidelityTier::Textured.scale(BodyKind::Star, sun), 2.5);
        assert_eq!(FidelityTier::Shaded.scale(BodyKind::Satellite, moon), 0.35);
    }

    #[test]
    fn serde_uses_kebab_case() {
        assert_eq!(
            serde_json::to_string(&FidelityTier::LowPoly).unwrap(),
            r#""low-poly""#
        );
        let tier: FidelityTier = serde_json::from_str(r#""shaded""#).unwrap();
        assert_eq!(tier, FidelityTier::Shaded);
    }
}
