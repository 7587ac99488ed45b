//! The map: markers, the background, and the selection they drive.
//!
//! Selection lives in a [`SelectionController`] keyed by Leptos timeout
//! handles. Selecting cancels any pending clear, closing schedules one, and
//! unmounting cancels whatever is left.

use cosmomap_core::{AppConfig, Catalog, CelestialBody, SelectionController, StyleRegistry};
use leptos::prelude::*;

use crate::components::background::Background;
use crate::components::chrome::{Crosshair, Footer, Header, LoadingScreen};
use crate::components::detail_modal::DetailModal;
use crate::components::marker::Marker;

#[component]
pub fn SpaceMap(config: AppConfig) -> impl IntoView {
    let tier = config.fidelity;
    let locale = config.locale;
    let animate = config.animate;
    let strings = locale.strings();

    let registry = StoredValue::new(StyleRegistry::builtin());
    let catalog = RwSignal::new(None::<Catalog>);
    Effect::new(move || {
        let loaded = Catalog::bundled();
        registry.with_value(|r| {
            r.validate(&loaded);
        });
        catalog.set(Some(loaded));
    });

    let selection = RwSignal::new(SelectionController::<TimeoutHandle>::new(
        config.close_delay(),
    ));
    let visible = Memo::new(move |_| selection.with(|s| s.visible().cloned()));

    let on_select = Callback::new(move |body: CelestialBody| {
        if let Some(stale) = selection.try_update(|s| s.select(body)).flatten() {
            stale.clear();
        }
    });

    let on_close = Callback::new(move |()| {
        let Some(ticket) = selection.try_update(|s| s.request_close()).flatten() else {
            return;
        };
        let delay = selection.with_untracked(|s| s.close_delay());
        let clear = move || {
            selection.try_update(|s| s.elapse(ticket));
        };
        match set_timeout_with_handle(clear, delay) {
            Ok(handle) => {
                if let Some(orphan) = selection.try_update(|s| s.arm(ticket, handle)).flatten() {
                    orphan.clear();
                }
            }
            Err(err) => {
                tracing::warn!(error = ?err, "close timer unavailable, clearing now");
                selection.try_update(|s| s.elapse(ticket));
            }
        }
    });

    on_cleanup(move || {
        if let Some(pending) = selection.try_update_untracked(|s| s.teardown()).flatten() {
            pending.clear();
        }
    });

    let markers = move || {
        catalog.get().map(|catalog| {
            catalog
                .iter()
                .map(|body| {
                    let body_style = registry.with_value(|r| *r.resolve(&body.id));
                    view! {
                        <Marker
                            body=body.clone()
                            body_style
                            tier
                            animate
                            locale
                            on_select
                        />
                    }
                })
                .collect_view()
        })
    };

    let detail = move || {
        visible.get().map(|body| {
            let body_style = registry.with_value(|r| *r.resolve(&body.id));
            view! { <DetailModal body body_style tier animate locale on_close /> }
        })
    };

    view! {
        <div class=format!("space-map tier-{}", tier.as_str())>
            <Background config=config.starfield animate />
            <Header strings />
            <Show
                when=move || catalog.with(Option::is_some)
                fallback=move || view! { <LoadingScreen strings /> }
            >
                <main class="map-area">
                    <Crosshair />
                    {markers}
                </main>
            </Show>
            <Footer strings />
            {detail}
        </div>
    }
}
