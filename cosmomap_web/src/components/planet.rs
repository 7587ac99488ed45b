//! One sphere, drawn at a chosen fidelity tier.
//!
//! Used by both the map markers and the detail view hero. Texture tiers
//! start with a placeholder and probe their texture with a hidden `<img>`;
//! click handling never waits on it. A failed probe drops to the gradient
//! tier and notifies `on_failed`.

use std::f32::consts::TAU;
use std::time::Duration;

use cosmomap_core::sphere::{self, DEFAULT_LIGHT, DayNight, Resolution};
use cosmomap_core::style::Rgb;
use cosmomap_core::{BodyStyle, Decoration, FidelityTier, TexturePresentation, TextureSlot};
use leptos::prelude::*;

/// Radians per spin tick on the low-poly tier.
const SPIN_STEP: f32 = TAU / 240.0;
const SPIN_TICK: Duration = Duration::from_millis(50);
/// Seconds for a texture to scroll once around the sphere.
const TEXTURE_PERIOD_S: u32 = 40;
const NEUTRAL_GRAY: Rgb = Rgb(128, 128, 128);

pub fn frame_style(sphere_pct: f32) -> String {
    format!("width: {sphere_pct:.1}%; height: {sphere_pct:.1}%;")
}

pub fn flat_style(style: &BodyStyle) -> String {
    format!("background: {};", style.gradient[1])
}

/// Off-centre radial gradient plus optional glow.
pub fn gradient_style(style: &BodyStyle) -> String {
    let [light, mid, dark] = style.gradient;
    let glow = style
        .glow
        .map(|g| format!(" box-shadow: 0 0 30px {g};"))
        .unwrap_or_default();
    format!("background: radial-gradient(circle at 30% 30%, {light}, {mid} 55%, {dark});{glow}")
}

/// Equirectangular map, twice as wide as the disc so it can scroll.
pub fn texture_style(url: &str, animate: bool) -> String {
    format!(
        "background-image: url('{url}'); background-size: 200% 100%;{}",
        scroll_animation(animate)
    )
}

/// Night texture revealed on the dark side of the terminator.
pub fn night_style(url: &str, day_night: &DayNight, animate: bool) -> String {
    let mask = day_night.night_mask();
    format!(
        "background-image: url('{url}'); background-size: 200% 100%; mask-image: {mask}; -webkit-mask-image: {mask};{}",
        scroll_animation(animate)
    )
}

fn scroll_animation(animate: bool) -> String {
    if animate {
        format!(" animation: texture-scroll {TEXTURE_PERIOD_S}s linear infinite;")
    } else {
        String::new()
    }
}

pub fn decoration_class(decoration: Decoration) -> String {
    format!("decoration decoration-{}", decoration.as_str())
}

#[component]
pub fn PlanetVisual(
    body_style: BodyStyle,
    tier: FidelityTier,
    /// Sphere diameter as a percentage of the containing box
    sphere_pct: f32,
    animate: bool,
    #[prop(optional)] on_failed: Option<Callback<()>>,
) -> impl IntoView {
    let style = body_style;
    let sphere = match tier {
        FidelityTier::Flat => {
            view! { <div class="planet planet-flat" style=flat_style(&style)></div> }.into_any()
        }
        FidelityTier::Gradient => gradient_sphere(style, tier).into_any(),
        FidelityTier::LowPoly => low_poly_sphere(style, animate).into_any(),
        FidelityTier::Textured | FidelityTier::Shaded => {
            textured_sphere(style, tier, animate, on_failed)
        }
    };

    view! {
        <div class=format!("planet-frame tier-{}", tier.as_str()) style=frame_style(sphere_pct)>
            {sphere}
        </div>
    }
}

fn gradient_sphere(style: BodyStyle, tier: FidelityTier) -> impl IntoView {
    let decorations = style
        .decorations_for(tier)
        .map(|d| view! { <div class=decoration_class(d)></div> })
        .collect_view();
    view! {
        <div class="planet planet-gradient" style=gradient_style(&style)>
            <div class="planet-highlight"></div>
            <div class="planet-shadow"></div>
        </div>
        {decorations}
    }
}

fn low_poly_sphere(style: BodyStyle, animate: bool) -> impl IntoView {
    let rotation = RwSignal::new(0.0f32);
    if animate {
        let spin = move || {
            rotation.try_update(|r| *r = (*r + SPIN_STEP) % TAU);
        };
        match set_interval_with_handle(spin, SPIN_TICK) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => tracing::warn!(error = ?err, "spin timer unavailable"),
        }
    }

    let material = style.material;
    let base = Rgb::from_hex(material.color).unwrap_or(NEUTRAL_GRAY);
    let rings = style.has(Decoration::Rings);

    view! {
        <svg class="planet planet-low-poly" viewBox="0 0 100 100" aria-hidden="true">
            {rings.then(|| view! { <ellipse class="ring ring-back" cx="50" cy="50" rx="80" ry="16"></ellipse> })}
            <g class="facets">
                {move || {
                    sphere::facets(Resolution::LOW_POLY, rotation.get(), DEFAULT_LIGHT, &material)
                        .into_iter()
                        .map(|f| view! { <polygon points=f.svg_points() fill=f.fill(base)></polygon> })
                        .collect_view()
                }}
            </g>
            {rings.then(|| view! { <path class="ring ring-front" d="M -30 50 A 80 16 0 0 0 130 50"></path> })}
        </svg>
    }
}

fn textured_sphere(
    style: BodyStyle,
    tier: FidelityTier,
    animate: bool,
    on_failed: Option<Callback<()>>,
) -> AnyView {
    let Some((textures, map)) = style
        .textures
        .and_then(|t| t.map_for(tier).map(|map| (t, map)))
    else {
        return gradient_sphere(style, tier.degraded()).into_any();
    };

    let mut initial = TextureSlot::default();
    let ticket = initial.begin(map);
    let slot = RwSignal::new(initial);
    on_cleanup(move || {
        slot.try_update_untracked(TextureSlot::cancel);
    });

    let shaded = tier == FidelityTier::Shaded;
    let night = textures.night.filter(|_| shaded);
    let terminator = shaded && night.is_none() && !style.material.emissive;
    let day_night = DayNight::default();
    let ring = textures.ring;

    let surface = move || match slot.with(|s| s.presentation(tier)) {
        TexturePresentation::Placeholder => {
            view! { <div class="planet planet-placeholder"></div> }.into_any()
        }
        TexturePresentation::Degraded(fallback) => gradient_sphere(style, fallback).into_any(),
        TexturePresentation::Textured => view! {
            <div class="planet planet-textured" style=texture_style(map, animate)>
                {night.map(|url| view! { <div class="planet-night" style=night_style(url, &day_night, animate)></div> })}
                {terminator.then(|| view! {
                    <div class="planet-terminator" style=format!("background: {};", day_night.shadow_overlay())></div>
                })}
                <div class="planet-shading"></div>
            </div>
            {style
                .decorations_for(tier)
                .map(|d| {
                    let ring_image = (d == Decoration::Rings)
                        .then_some(ring)
                        .flatten()
                        .map(|url| format!("background-image: url('{url}');"))
                        .unwrap_or_default();
                    view! { <div class=decoration_class(d) style=ring_image></div> }
                })
                .collect_view()}
        }
        .into_any(),
    };

    view! {
        <img
            class="texture-probe"
            src=map
            alt=""
            aria-hidden="true"
            on:load=move |_| {
                slot.try_update(|s| s.resolve(ticket, true));
            }
            on:error=move |_| {
                let applied = slot.try_update(|s| s.resolve(ticket, false)).unwrap_or(false);
                if let (true, Some(callback)) = (applied, on_failed) {
                    callback.run(());
                }
            }
        />
        {surface}
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmomap_core::StyleRegistry;
    use pretty_assertions::assert_eq;

    #[test]
    fn gradient_style_includes_glow_only_when_present() {
        let registry = StyleRegistry::builtin();
        let sun = gradient_style(registry.resolve("sun"));
        assert!(sun.starts_with("background: radial-gradient(circle at 30% 30%, #fde047"));
        assert!(sun.contains("box-shadow"));
        assert!(!gradient_style(registry.fallback()).contains("box-shadow"));
    }

    #[test]
    fn flat_style_uses_middle_stop() {
        let registry = StyleRegistry::builtin();
        assert_eq!(flat_style(registry.resolve("sun")), "background: #fb923c;");
    }

    #[test]
    fn texture_style_scrolls_only_when_animated() {
        assert_eq!(
            texture_style("/t/mars.jpg", false),
            "background-image: url('/t/mars.jpg'); background-size: 200% 100%;"
        );
        assert!(texture_style("/t/mars.jpg", true).ends_with("texture-scroll 40s linear infinite;"));
    }

    #[test]
    fn night_style_masks_with_terminator() {
        let style = night_style("/t/night.jpg", &DayNight::default(), false);
        assert!(style.contains("mask-image: linear-gradient(90.0deg, black"));
        assert!(style.contains("-webkit-mask-image"));
    }

    #[test]
    fn frame_and_decoration_helpers() {
        assert_eq!(frame_style(71.5), "width: 71.5%; height: 71.5%;");
        assert_eq!(decoration_class(Decoration::Rings), "decoration decoration-rings");
    }
}
