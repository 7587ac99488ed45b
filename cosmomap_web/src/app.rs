//! Root component: config resolution and the retry boundary around the map.
//!
//! Catalog and texture failures degrade in place and never reach the
//! boundary; only host faults from mounting the map do.

use cosmomap_core::{AppConfig, ConfigError, UiStrings};
use leptos::prelude::*;

use crate::components::chrome::ErrorScreen;
use crate::components::space_map::SpaceMap;
use crate::dom;
use crate::error::AppError;

/// Bundled config with URL overrides applied, plus the overrides that were
/// rejected (logged once the subscriber is up).
pub fn resolve_config(query: &str) -> (AppConfig, Vec<ConfigError>) {
    let mut config = AppConfig::bundled();
    let rejected = config.apply_query(query);
    (config, rejected)
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let strings = config.locale.strings();
    let render = move || render_map(config.clone());
    view! { <RetryBoundary strings render /> }
}

/// Shows `render`, or the error screen while it fails. Retry runs `render`
/// again and the boundary clears once it succeeds.
#[component]
pub fn RetryBoundary<F, V>(strings: &'static UiStrings, render: F) -> impl IntoView
where
    F: Fn() -> Result<V, AppError> + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let attempt = RwSignal::new(0u32);
    let retry = Callback::new(move |()| attempt.update(|n| *n += 1));

    view! {
        <ErrorBoundary fallback=move |errors| {
            errors.with(|errors| {
                for (_, err) in errors.iter() {
                    tracing::error!(error = ?err, "map failed to mount");
                }
            });
            view! { <ErrorScreen strings retry /> }
        }>
            {move || {
                attempt.track();
                render()
            }}
        </ErrorBoundary>
    }
}

/// The map needs `<body>` for its scroll lock. It can disappear after
/// mount (another script replacing the document), which is the one host
/// fault surfaced through the boundary.
fn render_map(config: AppConfig) -> Result<impl IntoView, AppError> {
    dom::body()?;
    Ok(view! { <SpaceMap config /> })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmomap_core::{FidelityTier, Locale};
    use pretty_assertions::assert_eq;

    #[test]
    fn query_overrides_bundled_config() {
        let (config, rejected) = resolve_config("?tier=shaded&lang=en");
        assert!(rejected.is_empty());
        assert_eq!(config.fidelity, FidelityTier::Shaded);
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn rejected_overrides_are_returned() {
        let (config, rejected) = resolve_config("?delay=forever");
        assert_eq!(rejected.len(), 1);
        assert_eq!(config.close_delay_ms, 300);
    }
}
