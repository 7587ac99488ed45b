//! Thin wrappers over the browser globals.

use std::sync::{Mutex, OnceLock, PoisonError};

use cosmomap_core::{Locale, ScrollHost, ScrollLock};
use web_sys::{Document, HtmlElement, Window};

use crate::error::AppError;

pub fn window() -> Result<Window, AppError> {
    web_sys::window().ok_or(AppError::NoWindow)
}

pub fn document() -> Result<Document, AppError> {
    window()?.document().ok_or(AppError::NoDocument)
}

pub fn body() -> Result<HtmlElement, AppError> {
    document()?.body().ok_or(AppError::NoBody)
}

/// Raw `location.search`, including the leading `?`, or empty.
pub fn query_string() -> String {
    window()
        .ok()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

/// Seed for decorative randomness.
pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}

pub fn set_html_lang(locale: Locale) {
    if let Some(root) = document().ok().and_then(|d| d.document_element()) {
        let _ = root.set_attribute("lang", locale.html_lang());
    }
}

/// `overflow: hidden` on `<body>`, restoring whatever was there before.
///
/// Holds no DOM handle, only the saved value, so it can live in a
/// `Send + Sync` lock.
#[derive(Debug, Default)]
pub struct BodyScroll {
    saved: Mutex<Option<String>>,
}

impl ScrollHost for BodyScroll {
    fn lock(&self) {
        let Ok(body) = body() else {
            tracing::warn!("scroll lock requested without a body");
            return;
        };
        let style = body.style();
        let previous = style.get_property_value("overflow").unwrap_or_default();
        *self.saved.lock().unwrap_or_else(PoisonError::into_inner) = Some(previous);
        let _ = style.set_property("overflow", "hidden");
    }

    fn unlock(&self) {
        let previous = self
            .saved
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .unwrap_or_default();
        let Ok(body) = body() else {
            return;
        };
        let style = body.style();
        if previous.is_empty() {
            let _ = style.remove_property("overflow");
        } else {
            let _ = style.set_property("overflow", &previous);
        }
    }
}

static BODY_SCROLL: OnceLock<ScrollLock<BodyScroll>> = OnceLock::new();

/// The page-wide scroll lock shared by every detail view mount.
pub fn body_scroll_lock() -> ScrollLock<BodyScroll> {
    BODY_SCROLL
        .get_or_init(|| ScrollLock::new(BodyScroll::default()))
        .clone()
}
