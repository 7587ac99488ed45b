//! CosmoMap browser app (Leptos 0.8, client-side rendered).
//!
//! All decisions about what to draw live in `cosmomap_core`; this crate
//! binds them to the DOM: timers, key listeners, the body scroll lock and
//! the console logger.

pub mod app;
pub mod components;
pub mod dom;
pub mod error;
pub mod logging;

use leptos::prelude::*;

use crate::app::{App, resolve_config};

/// Entry point: install hooks, resolve config, mount the app on `<body>`.
pub fn start() {
    console_error_panic_hook::set_once();

    let (config, rejected) = resolve_config(&dom::query_string());
    logging::init(config.tracing_level());
    for err in &rejected {
        tracing::warn!(error = %err, "query override ignored");
    }
    dom::set_html_lang(config.locale);
    tracing::info!(
        tier = %config.fidelity,
        locale = %config.locale,
        close_delay_ms = config.close_delay_ms,
        "starting CosmoMap"
    );

    leptos::mount::mount_to_body(move || view! { <App config /> });
}
