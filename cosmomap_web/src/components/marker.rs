use cosmomap_core::{BodyKind, BodyStyle, CelestialBody, FidelityTier, Locale, MarkerLayout};
use leptos::prelude::*;

use crate::components::planet::PlanetVisual;

pub fn marker_class(layout: &MarkerLayout, kind: BodyKind) -> String {
    format!(
        "marker marker-{} marker-kind-{}",
        layout.size.as_str(),
        kind.as_str()
    )
}

/// A clickable body on the map, centred on its anchor.
#[component]
pub fn Marker(
    body: CelestialBody,
    body_style: BodyStyle,
    tier: FidelityTier,
    animate: bool,
    locale: Locale,
    on_select: Callback<CelestialBody>,
) -> impl IntoView {
    let layout = MarkerLayout::for_body(&body, tier, &body_style);
    let orbit = body.kind == BodyKind::Planet;
    let label = locale.marker_label(&body.name);
    let name = body.name.clone();
    let id = body.id.clone();

    view! {
        <button
            type="button"
            class=marker_class(&layout, body.kind)
            style=layout.style_attr()
            data-body=id
            aria-label=label
            on:click=move |_| on_select.run(body.clone())
        >
            {orbit.then(|| view! { <span class="marker-orbit" aria-hidden="true"></span> })}
            <PlanetVisual body_style tier sphere_pct=layout.sphere_pct() animate />
            <span class="marker-label">{name}</span>
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmomap_core::{Catalog, StyleRegistry};
    use pretty_assertions::assert_eq;

    #[test]
    fn class_reflects_size_and_kind() {
        let catalog = Catalog::bundled();
        let registry = StyleRegistry::builtin();
        let sun = catalog.get("sun").unwrap();
        let moon = catalog.get("moon").unwrap();

        let layout = MarkerLayout::for_body(sun, FidelityTier::Gradient, registry.resolve("sun"));
        assert_eq!(marker_class(&layout, sun.kind), "marker marker-large marker-kind-star");

        let layout = MarkerLayout::for_body(moon, FidelityTier::Flat, registry.resolve("moon"));
        assert_eq!(marker_class(&layout, moon.kind), "marker marker-small marker-kind-satellite");
    }
}
