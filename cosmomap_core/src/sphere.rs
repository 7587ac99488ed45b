//! Procedural sphere geometry for the 3D tiers.
//!
//! The low-poly tier draws a UV sphere as flat-shaded SVG polygons in a
//! `0 0 100 100` viewBox, viewed orthographically along -z. The shaded tier
//! only needs the day/night terminator, expressed as CSS gradients over a
//! texture.

use crate::style::{Material, Rgb};

/// Ambient term so the night side never goes fully black.
const AMBIENT: f32 = 0.22;
/// Specular exponent for the Blinn-Phong highlight.
const SHININESS: i32 = 16;
/// Half-width of the terminator blend, in percent of the diameter.
const TERMINATOR_SOFTNESS: f32 = 4.0;

/// Minimal 3-vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    /// Right
    pub x: f32,
    /// Up
    pub y: f32,
    /// Toward the viewer
    pub z: f32,
}

impl Vec3 {
    /// Construct a vector.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Dot product.
    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction; the zero vector maps to +z.
    pub fn normalized(self) -> Vec3 {
        let len = self.length();
        if len <= f32::EPSILON {
            Vec3::new(0.0, 0.0, 1.0)
        } else {
            Vec3::new(self.x / len, self.y / len, self.z / len)
        }
    }

    fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

/// Fixed key light used by the low-poly tier, up and to the left.
pub const DEFAULT_LIGHT: Vec3 = Vec3::new(-0.6, 0.5, 0.8);
/// Fixed sun direction used by the shaded tier.
pub const DEFAULT_SUN: Vec3 = Vec3::new(5.0, 0.0, 5.0);

/// Tessellation of the UV sphere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Latitude bands
    pub rings: u16,
    /// Longitude slices
    pub segments: u16,
}

impl Resolution {
    /// Deliberately coarse, for the faceted look.
    pub const LOW_POLY: Resolution = Resolution {
        rings: 8,
        segments: 12,
    };
}

/// One visible polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct Facet {
    /// Projected corners in viewBox units
    pub points: Vec<(f32, f32)>,
    /// Diffuse plus ambient brightness, 0..=1
    pub shade: f32,
    /// Specular highlight, 0..=1
    pub highlight: f32,
    /// Depth of the facet centre, larger is closer
    pub depth: f32,
}

impl Facet {
    /// `points` attribute of an SVG `<polygon>`.
    pub fn svg_points(&self) -> String {
        self.points
            .iter()
            .map(|(x, y)| format!("{x:.2},{y:.2}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Fill colour for `base`.
    pub fn fill(&self, base: Rgb) -> String {
        base.scaled(self.shade).lightened(self.highlight).css()
    }
}

fn surface_point(lat: f32, lon: f32) -> Vec3 {
    Vec3::new(lat.cos() * lon.sin(), lat.sin(), lat.cos() * lon.cos())
}

fn project(p: Vec3) -> (f32, f32) {
    (50.0 + 50.0 * p.x, 50.0 - 50.0 * p.y)
}

/// Front-facing facets of a unit sphere spun `rotation` radians about the
/// vertical axis, lit from `light`, back to front.
pub fn facets(resolution: Resolution, rotation: f32, light: Vec3, material: &Material) -> Vec<Facet> {
    let rings = resolution.rings.max(2);
    let segments = resolution.segments.max(3);
    let light = light.normalized();
    let half = light.add(Vec3::new(0.0, 0.0, 1.0)).normalized();
    let lat_step = std::f32::consts::PI / f32::from(rings);
    let lon_step = std::f32::consts::TAU / f32::from(segments);

    let mut out = Vec::with_capacity(usize::from(rings) * usize::from(segments) / 2 + 1);
    for ring in 0..rings {
        let lat0 = -std::f32::consts::FRAC_PI_2 + f32::from(ring) * lat_step;
        let lat1 = lat0 + lat_step;
        for segment in 0..segments {
            let lon0 = rotation + f32::from(segment) * lon_step;
            let lon1 = lon0 + lon_step;

            let normal = surface_point(lat0 + lat_step / 2.0, lon0 + lon_step / 2.0);
            if normal.z <= 0.0 {
                continue;
            }

            let mut points = vec![
                project(surface_point(lat0, lon0)),
                project(surface_point(lat0, lon1)),
                project(surface_point(lat1, lon1)),
                project(surface_point(lat1, lon0)),
            ];
            // Pole bands collapse to triangles.
            points.dedup_by(|a, b| (a.0 - b.0).abs() < 1e-3 && (a.1 - b.1).abs() < 1e-3);

            let (shade, highlight) = shade(normal, light, half, material);
            out.push(Facet {
                points,
                shade,
                highlight,
                depth: normal.z,
            });
        }
    }
    out.sort_by(|a, b| a.depth.total_cmp(&b.depth));
    out
}

fn shade(normal: Vec3, light: Vec3, half: Vec3, material: &Material) -> (f32, f32) {
    if material.emissive {
        return (1.0, 0.0);
    }
    let lambert = normal.dot(light).max(0.0);
    let diffuse = lambert * (1.0 - 0.5 * material.metalness.clamp(0.0, 1.0));
    let shade = (AMBIENT + (1.0 - AMBIENT) * diffuse).clamp(0.0, 1.0);
    let gloss = 1.0 - material.roughness.clamp(0.0, 1.0);
    let highlight = if lambert > 0.0 {
        (gloss * normal.dot(half).max(0.0).powi(SHININESS)).clamp(0.0, 1.0)
    } else {
        0.0
    };
    (shade, highlight)
}

/// Day/night terminator of a sphere lit by a distant sun, in screen terms.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DayNight {
    /// CSS gradient angle pointing at the sun (0 = up, 90 = right)
    pub angle_deg: f32,
    /// Terminator position along that axis, 0 at the anti-sun limb
    pub terminator_pct: f32,
}

impl DayNight {
    /// Terminator for a sun in direction `sun` (need not be normalized).
    ///
    /// Along the projected sun axis the terminator sits at `-s.z` on the
    /// unit disc, which maps to `(1 - s.z) / 2` of the diameter.
    pub fn from_sun(sun: Vec3) -> Self {
        let s = sun.normalized();
        Self {
            angle_deg: s.x.atan2(s.y).to_degrees(),
            terminator_pct: (1.0 - s.z) / 2.0 * 100.0,
        }
    }

    /// Mask that reveals the night texture on the dark side.
    pub fn night_mask(&self) -> String {
        format!(
            "linear-gradient({:.1}deg, black {:.1}%, transparent {:.1}%)",
            self.angle_deg,
            (self.terminator_pct - TERMINATOR_SOFTNESS).max(0.0),
            (self.terminator_pct + TERMINATOR_SOFTNESS).min(100.0)
        )
    }

    /// Darkening overlay for bodies without a night texture.
    pub fn shadow_overlay(&self) -> String {
        format!(
            "linear-gradient({:.1}deg, rgba(0, 0, 0, 0.85) {:.1}%, transparent {:.1}%)",
            self.angle_deg,
            (self.terminator_pct - TERMINATOR_SOFTNESS).max(0.0),
            (self.terminator_pct + TERMINATOR_SOFTNESS).min(100.0)
        )
    }
}

impl Default for DayNight {
    fn default() -> Self {
        Self::from_sun(DEFAULT_SUN)
    }
}
