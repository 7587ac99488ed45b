//! Celestial body records as they appear in the catalog.
//!
//! These types mirror the bundled JSON file one-to-one:
//!
//! ```json
//! {
//!   "id": "saturn",
//!   "name": "土星",
//!   "type": "planet",
//!   "position": { "top": "62%", "left": "75%" },
//!   "image": "/images/saturn.jpg",
//!   "description": "..."
//! }
//! ```

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Closed set of body kinds. Drives size class, glyph fallback and labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    /// A star (the Sun)
    Star,
    /// A planet
    Planet,
    /// A natural satellite
    Satellite,
    /// An asteroid or dwarf body
    Asteroid,
}

impl BodyKind {
    /// Every kind, in display order.
    pub const ALL: [BodyKind; 4] = [
        BodyKind::Star,
        BodyKind::Planet,
        BodyKind::Satellite,
        BodyKind::Asteroid,
    ];

    /// Lowercase identifier used in JSON and CSS classes.
    pub fn as_str(self) -> &'static str {
        match self {
            BodyKind::Star => "star",
            BodyKind::Planet => "planet",
            BodyKind::Satellite => "satellite",
            BodyKind::Asteroid => "asteroid",
        }
    }
}

impl fmt::Display for BodyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Percentage offset inside the full-viewport map.
///
/// Accepts both `"42%"` strings and bare numbers on input and always
/// serializes back to the `"42%"` form. Range checking (0..=100) happens in
/// catalog validation so the error can name the offending body.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Percent(f32);

impl Percent {
    /// Wrap a raw percentage value.
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// The numeric value, e.g. `42.0` for `"42%"`.
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether the value lies inside the visible map.
    pub fn in_bounds(self) -> bool {
        self.0.is_finite() && (0.0..=100.0).contains(&self.0)
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl Serialize for Percent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Percent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f32),
            Text(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Number(value) => Ok(Percent(value)),
            Raw::Text(text) => {
                let trimmed = text.trim();
                let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
                digits
                    .parse::<f32>()
                    .map(Percent)
                    .map_err(|_| de::Error::custom(format!("invalid percentage `{text}`")))
            }
        }
    }
}

/// Marker anchor inside the map container. Purely presentational.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Distance from the top edge
    pub top: Percent,
    /// Distance from the left edge
    pub left: Percent,
}

impl Position {
    /// Build a position from raw percentages.
    pub const fn new(top: f32, left: f32) -> Self {
        Self {
            top: Percent::new(top),
            left: Percent::new(left),
        }
    }
}

/// One immutable catalog entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    /// Stable lowercase ASCII key, unique within the catalog
    pub id: String,
    /// Display name (localized in the data file)
    pub name: String,
    /// Body kind; stored as `type` in the data file
    #[serde(rename = "type", alias = "kind")]
    pub kind: BodyKind,
    /// Marker anchor on the map
    pub position: Position,
    /// Display text for the detail view
    pub description: String,
    /// Optional static asset reference
    #[serde(
        default,
        rename = "image",
        alias = "imageRef",
        skip_serializing_if = "Option::is_none"
    )]
    pub image: Option<String>,
}

impl CelestialBody {
    /// The image reference, treating an empty string as absent.
    pub fn image_ref(&self) -> Option<&str> {
        self.image.as_deref().filter(|s| !s.trim().is_empty())
    }
}
