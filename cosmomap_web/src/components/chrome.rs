//! Page furniture around the map.

use cosmomap_core::UiStrings;
use leptos::prelude::*;

#[component]
pub fn Header(strings: &'static UiStrings) -> impl IntoView {
    view! {
        <header class="page-header">
            <h1 class="page-title">{strings.title}</h1>
            <p class="page-subtitle">{strings.subtitle}</p>
        </header>
    }
}

#[component]
pub fn Footer(strings: &'static UiStrings) -> impl IntoView {
    view! {
        <footer class="page-footer">
            <p>{strings.footer}</p>
        </footer>
    }
}

/// Faint lines through the centre of the map.
#[component]
pub fn Crosshair() -> impl IntoView {
    view! {
        <div class="crosshair" aria-hidden="true">
            <div class="crosshair-h"></div>
            <div class="crosshair-v"></div>
        </div>
    }
}

#[component]
pub fn LoadingScreen(strings: &'static UiStrings) -> impl IntoView {
    view! {
        <div class="loading-screen" role="status">
            <div class="loading-orbit" aria-hidden="true">
                <div class="loading-planet"></div>
            </div>
            <p class="loading-text">{strings.loading}</p>
        </div>
    }
}

/// Full-screen error view with a single retry action.
#[component]
pub fn ErrorScreen(strings: &'static UiStrings, retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="error-screen" role="alert">
            <div class="error-card">
                <h2 class="error-title">{strings.error_title}</h2>
                <p class="error-body">{strings.error_body}</p>
                <button type="button" class="error-retry" on:click=move |_| retry.run(())>
                    {strings.retry}
                </button>
            </div>
        </div>
    }
}
