//! Overlay describing the selected body.
//!
//! Mounted only while the detail view is open. Mounting takes a scroll
//! guard and a window `keydown` listener; both are released in `on_cleanup`,
//! so every way of closing (button, Escape, backdrop, unmount) restores the
//! page. Keyboard focus moves to the close button on open.

use cosmomap_core::{
    BodyStyle, CelestialBody, DetailContent, DetailVisual, FidelityTier, ImageStatus, Locale,
    MarkerLayout,
};
use leptos::{ev, html};
use leptos::prelude::*;

use crate::components::planet::PlanetVisual;
use crate::dom;

/// Keys that dismiss the view.
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

#[component]
pub fn DetailModal(
    body: CelestialBody,
    body_style: BodyStyle,
    tier: FidelityTier,
    animate: bool,
    locale: Locale,
    on_close: Callback<()>,
) -> impl IntoView {
    let strings = locale.strings();

    let mut initial = ImageStatus::default();
    initial.observe(Some(&body.id));
    let status = RwSignal::new(initial);

    let scroll_guard = dom::body_scroll_lock().acquire();
    let keys = window_event_listener(ev::keydown, move |event| {
        if is_dismiss_key(&event.key()) {
            on_close.run(());
        }
    });
    on_cleanup(move || {
        keys.remove();
        drop(scroll_guard);
    });

    let close_button = NodeRef::<html::Button>::new();
    Effect::new(move || {
        if let Some(button) = close_button.get() {
            let _ = button.focus();
        }
    });

    let content = DetailContent::new(&body, locale, &status.get_untracked());
    let badge_class = format!("kind-badge kind-{}", body.kind.as_str());
    let failed_id = body.id.clone();
    let mark_failed = Callback::new(move |()| {
        status.update(|s| {
            s.mark_failed(&failed_id);
        });
    });

    let hero_pct = MarkerLayout {
        scale: 1.0,
        ..MarkerLayout::for_body(&body, tier, &body_style)
    }
    .sphere_pct();
    let hero = move || match status.with(|s| s.visual(&body)) {
        DetailVisual::Procedural => view! {
            <PlanetVisual body_style tier sphere_pct=hero_pct animate on_failed=mark_failed />
        }
        .into_any(),
        DetailVisual::Glyph(glyph) => {
            view! { <div class="modal-glyph" aria-hidden="true">{glyph}</div> }.into_any()
        }
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div
                class="modal-content"
                role="dialog"
                aria-modal="true"
                aria-labelledby="modal-title"
                on:click=|event| event.stop_propagation()
            >
                <header class="modal-header">
                    <h2 id="modal-title" class="modal-title">{content.name}</h2>
                    <button
                        type="button"
                        class="modal-close"
                        node_ref=close_button
                        aria-label=strings.close_label
                        on:click=move |_| on_close.run(())
                    >
                        <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round">
                            <path d="M6 18L18 6M6 6l12 12"></path>
                        </svg>
                    </button>
                </header>
                <div class="modal-body">
                    <div class="modal-hero">
                        <div class="modal-sphere">{hero}</div>
                    </div>
                    <span class=badge_class>{content.kind_label}</span>
                    <p class="modal-description">{content.description}</p>
                    <p class="modal-footnote">{strings.coming_soon}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_escape_dismisses() {
        assert!(is_dismiss_key("Escape"));
        assert!(is_dismiss_key("Esc"));
        assert!(!is_dismiss_key("Enter"));
        assert!(!is_dismiss_key(" "));
    }
}
