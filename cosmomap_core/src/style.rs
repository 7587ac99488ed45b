//! Per-body visual descriptors and marker layout.
//!
//! Styling is a total mapping: every id resolves to a [`BodyStyle`], either
//! its own entry or the registry's default. The registry is checked against
//! the catalog at load time so ids that silently fall through to the default
//! show up in the log.

use crate::catalog::Catalog;
use crate::fidelity::FidelityTier;
use crate::types::{BodyKind, CelestialBody, Percent};

/// Camera distance used by the 3D tiers (sphere radius 1).
pub const CAMERA_DISTANCE: f32 = 3.0;
/// Vertical field of view of the 3D tiers, in degrees.
pub const CAMERA_FOV_DEG: f32 = 50.0;

/// Fraction of the marker box a unit sphere fills under the 3D camera.
pub fn view_fill() -> f32 {
    1.0 / (CAMERA_DISTANCE * (CAMERA_FOV_DEG.to_radians() / 2.0).tan())
}

/// Cosmetic extras keyed by body.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Decoration {
    /// Tilted ring system (saturn)
    Rings,
    /// Hot glow around a star (sun)
    Corona,
    /// Horizontal cloud bands (jupiter)
    Bands,
    /// Patchy continents (earth)
    Blotches,
    /// Thin bluish rim (earth)
    Atmosphere,
}

impl Decoration {
    /// Every decoration kind.
    pub const ALL: [Decoration; 5] = [
        Decoration::Rings,
        Decoration::Corona,
        Decoration::Bands,
        Decoration::Blotches,
        Decoration::Atmosphere,
    ];

    /// CSS class suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            Decoration::Rings => "rings",
            Decoration::Corona => "corona",
            Decoration::Bands => "bands",
            Decoration::Blotches => "blotches",
            Decoration::Atmosphere => "atmosphere",
        }
    }
}

/// Surface response for the shaded 3D tiers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    /// Base colour, `#rrggbb`
    pub color: &'static str,
    /// 0 = mirror, 1 = chalk
    pub roughness: f32,
    /// 0 = dielectric, 1 = metal
    pub metalness: f32,
    /// Self-lit bodies ignore the light direction
    pub emissive: bool,
}

/// Texture sources for the textured tiers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextureSet {
    /// Standard equirectangular map (textured tier)
    pub map: &'static str,
    /// Higher resolution map (shaded tier)
    pub hd_map: &'static str,
    /// Night-side lights, blended across the terminator
    pub night: Option<&'static str>,
    /// Cloud layer drawn over the surface
    pub clouds: Option<&'static str>,
    /// Ring alpha texture
    pub ring: Option<&'static str>,
}

impl TextureSet {
    /// The primary map for a tier, if the tier uses textures at all.
    pub fn map_for(&self, tier: FidelityTier) -> Option<&'static str> {
        match tier {
            FidelityTier::Textured => Some(self.map),
            FidelityTier::Shaded => Some(self.hd_map),
            _ => None,
        }
    }
}

/// Everything needed to draw one body at any tier.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyStyle {
    /// Three gradient stops, light to dark
    pub gradient: [&'static str; 3],
    /// Glow shadow colour
    pub glow: Option<&'static str>,
    /// 3D material
    pub material: Material,
    /// Scale in the textured tier
    pub realistic_scale: f32,
    /// Scale in the shaded tier
    pub shaded_scale: f32,
    /// Cosmetic extras
    pub decorations: &'static [Decoration],
    /// Texture sources, if the body has any
    pub textures: Option<TextureSet>,
}

impl BodyStyle {
    /// Whether this body carries a decoration.
    pub fn has(&self, decoration: Decoration) -> bool {
        self.decorations.contains(&decoration)
    }

    /// Decorations drawn at a given tier.
    pub fn decorations_for(&self, tier: FidelityTier) -> impl Iterator<Item = Decoration> + '_ {
        self.decorations
            .iter()
            .copied()
            .filter(move |d| tier.shows(*d))
    }
}

macro_rules! textures {
    ($simple:literal, $hd:literal) => {
        textures!($simple, $hd, None, None, None)
    };
    ($simple:literal, $hd:literal, $night:expr, $clouds:expr, $ring:expr) => {
        Some(TextureSet {
            map: concat!(
                "https://raw.githubusercontent.com/mrdoob/three.js/dev/examples/textures/planets/",
                $simple
            ),
            hd_map: concat!("https://www.solarsystemscope.com/textures/download/", $hd),
            night: $night,
            clouds: $clouds,
            ring: $ring,
        })
    };
}

const DEFAULT_STYLE: BodyStyle = BodyStyle {
    gradient: ["#9ca3af", "#6b7280", "#4b5563"],
    glow: None,
    material: Material {
        color: "#808080",
        roughness: 0.5,
        metalness: 0.0,
        emissive: false,
    },
    realistic_scale: 1.0,
    shaded_scale: 1.0,
    decorations: &[],
    textures: None,
};

const BUILTIN: &[(&str, BodyStyle)] = &[
    (
        "sun",
        BodyStyle {
            gradient: ["#fde047", "#fb923c", "#ef4444"],
            glow: Some("rgba(255, 204, 0, 0.8)"),
            material: Material {
                color: "#fdb813",
                roughness: 1.0,
                metalness: 0.0,
                emissive: true,
            },
            realistic_scale: 2.5,
            shaded_scale: 3.0,
            decorations: &[Decoration::Corona],
            textures: textures!("sun.jpg", "2k_sun.jpg"),
        },
    ),
    (
        "mercury",
        BodyStyle {
            gradient: ["#9ca3af", "#6b7280", "#4b5563"],
            glow: Some("rgba(156, 163, 175, 0.6)"),
            material: Material {
                color: "#8c8c8c",
                roughness: 0.7,
                metalness: 0.3,
                emissive: false,
            },
            realistic_scale: 0.4,
            shaded_scale: 0.4,
            decorations: &[],
            textures: textures!("mercury.jpg", "2k_mercury.jpg"),
        },
    ),
    (
        "venus",
        BodyStyle {
            gradient: ["#fef9c3", "#fef08a", "#fed7aa"],
            glow: Some("rgba(254, 240, 138, 0.6)"),
            material: Material {
                color: "#ffc94c",
                roughness: 0.8,
                metalness: 0.2,
                emissive: false,
            },
            realistic_scale: 0.7,
            shaded_scale: 0.75,
            decorations: &[],
            textures: textures!("venus.jpg", "2k_venus_surface.jpg"),
        },
    ),
    (
        "earth",
        BodyStyle {
            gradient: ["#60a5fa", "#3b82f6", "#4ade80"],
            glow: Some("rgba(59, 130, 246, 0.6)"),
            material: Material {
                color: "#4b9bff",
                roughness: 0.5,
                metalness: 0.1,
                emissive: false,
            },
            realistic_scale: 0.7,
            shaded_scale: 0.8,
            decorations: &[Decoration::Blotches, Decoration::Atmosphere],
            textures: textures!(
                "earth.jpg",
                "2k_earth_daymap.jpg",
                Some("https://www.solarsystemscope.com/textures/download/2k_earth_nightmap.jpg"),
                Some("https://www.solarsystemscope.com/textures/download/2k_earth_clouds.jpg"),
                None
            ),
        },
    ),
    (
        "moon",
        BodyStyle {
            gradient: ["#e5e7eb", "#d1d5db", "#9ca3af"],
            glow: Some("rgba(229, 231, 235, 0.6)"),
            material: Material {
                color: "#e6e6e6",
                roughness: 0.9,
                metalness: 0.1,
                emissive: false,
            },
            realistic_scale: 0.3,
            shaded_scale: 0.35,
            decorations: &[],
            textures: textures!("moon.jpg", "2k_moon.jpg"),
        },
    ),
    (
        "mars",
        BodyStyle {
            gradient: ["#f87171", "#ef4444", "#f97316"],
            glow: Some("rgba(239, 68, 68, 0.6)"),
            material: Material {
                color: "#cd5c5c",
                roughness: 0.8,
                metalness: 0.2,
                emissive: false,
            },
            realistic_scale: 0.5,
            shaded_scale: 0.6,
            decorations: &[],
            textures: textures!("mars.jpg", "2k_mars.jpg"),
        },
    ),
    (
        "jupiter",
        BodyStyle {
            gradient: ["#ca8a04", "#fdba74", "#fca5a5"],
            glow: Some("rgba(251, 191, 36, 0.6)"),
            material: Material {
                color: "#daa520",
                roughness: 0.6,
                metalness: 0.2,
                emissive: false,
            },
            realistic_scale: 1.4,
            shaded_scale: 1.8,
            decorations: &[Decoration::Bands],
            textures: textures!("jupiter.jpg", "2k_jupiter.jpg"),
        },
    ),
    (
        "saturn",
        BodyStyle {
            gradient: ["#fef08a", "#fde68a", "#fed7aa"],
            glow: Some("rgba(254, 243, 199, 0.6)"),
            material: Material {
                color: "#fada5e",
                roughness: 0.6,
                metalness: 0.2,
                emissive: false,
            },
            realistic_scale: 1.2,
            shaded_scale: 1.6,
            decorations: &[Decoration::Rings],
            textures: textures!(
                "saturn.jpg",
                "2k_saturn.jpg",
                None,
                None,
                Some("https://www.solarsystemscope.com/textures/download/2k_saturn_ring_alpha.png")
            ),
        },
    ),
    (
        "uranus",
        BodyStyle {
            gradient: ["#67e8f9", "#22d3ee", "#2dd4bf"],
            glow: Some("rgba(34, 211, 238, 0.6)"),
            material: Material {
                color: "#4fd0e0",
                roughness: 0.5,
                metalness: 0.3,
                emissive: false,
            },
            realistic_scale: 0.8,
            shaded_scale: 0.9,
            decorations: &[],
            textures: textures!("uranus.jpg", "2k_uranus.jpg"),
        },
    ),
    (
        "neptune",
        BodyStyle {
            gradient: ["#3b82f6", "#2563eb", "#4f46e5"],
            glow: Some("rgba(59, 130, 246, 0.6)"),
            material: Material {
                color: "#4b70dd",
                roughness: 0.5,
                metalness: 0.3,
                emissive: false,
            },
            realistic_scale: 0.8,
            shaded_scale: 0.9,
            decorations: &[],
            textures: textures!("neptune.jpg", "2k_neptune.jpg"),
        },
    ),
];

/// Total `id -> style` lookup with an explicit default.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleRegistry {
    entries: Vec<(&'static str, BodyStyle)>,
    fallback: BodyStyle,
}

impl StyleRegistry {
    /// The built-in table covering the bundled catalog.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN.to_vec(),
            fallback: DEFAULT_STYLE,
        }
    }

    /// Style for an id, or the default when the id has no entry.
    pub fn resolve(&self, id: &str) -> &BodyStyle {
        self.entries
            .iter()
            .find(|(key, _)| *key == id)
            .map(|(_, style)| style)
            .unwrap_or(&self.fallback)
    }

    /// Whether an id has its own entry.
    pub fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|(key, _)| *key == id)
    }

    /// The style used for unknown ids.
    pub fn fallback(&self) -> &BodyStyle {
        &self.fallback
    }

    /// Catalog ids that only resolve through the default.
    pub fn missing(&self, catalog: &Catalog) -> Vec<String> {
        catalog
            .iter()
            .filter(|body| !self.contains(&body.id))
            .map(|body| body.id.clone())
            .collect()
    }

    /// Log every catalog id that falls through to the default style.
    pub fn validate(&self, catalog: &Catalog) -> Vec<String> {
        let missing = self.missing(catalog);
        for id in &missing {
            tracing::warn!(id = %id, "no style entry, using default");
        }
        missing
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Three discrete marker sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeClass {
    /// Stars
    Large,
    /// Planets
    Medium,
    /// Satellites and asteroids
    Small,
}

impl SizeClass {
    /// Size class for a body kind: star > planet > satellite = asteroid.
    pub fn for_kind(kind: BodyKind) -> Self {
        match kind {
            BodyKind::Star => SizeClass::Large,
            BodyKind::Planet => SizeClass::Medium,
            BodyKind::Satellite | BodyKind::Asteroid => SizeClass::Small,
        }
    }

    /// Edge length of the marker box in `rem`.
    pub fn rem(self) -> f32 {
        match self {
            SizeClass::Large => 8.0,
            SizeClass::Medium => 5.0,
            SizeClass::Small => 3.0,
        }
    }

    /// CSS class suffix.
    pub fn as_str(self) -> &'static str {
        match self {
            SizeClass::Large => "large",
            SizeClass::Medium => "medium",
            SizeClass::Small => "small",
        }
    }
}

/// Where and how large a marker is drawn.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarkerLayout {
    /// Anchor distance from the top edge
    pub top: Percent,
    /// Anchor distance from the left edge
    pub left: Percent,
    /// Box size
    pub size: SizeClass,
    /// Relative sphere scale at this tier
    pub scale: f32,
    /// Tier the layout was computed for
    pub tier: FidelityTier,
}

impl MarkerLayout {
    /// Layout for a body at a tier.
    pub fn for_body(body: &CelestialBody, tier: FidelityTier, style: &BodyStyle) -> Self {
        Self {
            top: body.position.top,
            left: body.position.left,
            size: SizeClass::for_kind(body.kind),
            scale: tier.scale(body.kind, style),
            tier,
        }
    }

    /// Inline style placing the box centre on the anchor.
    pub fn style_attr(&self) -> String {
        let edge = self.size.rem();
        format!(
            "top: {}; left: {}; width: {edge}rem; height: {edge}rem; transform: translate(-50%, -50%);",
            self.top, self.left
        )
    }

    /// Sphere diameter as a percentage of the box edge.
    ///
    /// Flat tiers fill the box; 3D tiers project the scaled unit sphere
    /// through the fixed camera and clip at the box edge.
    pub fn sphere_pct(&self) -> f32 {
        if self.tier.rotates() {
            (self.scale * view_fill()).min(1.0) * 100.0
        } else {
            100.0
        }
    }
}

/// 8-bit RGB colour used for procedural shading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Parse `#rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }

    /// Multiply every channel by `factor`, clamped to 0..=255.
    pub fn scaled(self, factor: f32) -> Self {
        let apply = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
        Rgb(apply(self.0), apply(self.1), apply(self.2))
    }

    /// Blend toward white by `amount` (0..=1).
    pub fn lightened(self, amount: f32) -> Self {
        let t = amount.clamp(0.0, 1.0);
        let apply = |c: u8| (c as f32 + (255.0 - c as f32) * t).round() as u8;
        Rgb(apply(self.0), apply(self.1), apply(self.2))
    }

    /// CSS `rgb()` notation.
    pub fn css(self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }
}
