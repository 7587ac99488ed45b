//! What the detail view shows for the selected body.
//!
//! The view keeps one transient flag: whether the decorative image for the
//! current body failed. [`ImageStatus`] scopes that flag to a body id, so
//! the flag is reset before the next body's visual is decided.

use crate::locale::Locale;
use crate::types::{BodyKind, CelestialBody};

/// The hero visual of the detail view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetailVisual {
    /// Procedural sphere drawn from the body's style
    Procedural,
    /// Symbolic glyph, used after the visual failed to load
    Glyph(&'static str),
}

/// Glyph shown when the procedural visual is unavailable.
pub fn fallback_glyph(kind: BodyKind) -> &'static str {
    match kind {
        BodyKind::Star => "⭐",
        BodyKind::Satellite => "🌙",
        BodyKind::Planet | BodyKind::Asteroid => "🌍",
    }
}

/// "Image failed" flag scoped to one body id.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImageStatus {
    body_id: Option<String>,
    failed: bool,
}

impl ImageStatus {
    /// Track the currently selected id, resetting the flag when it changes.
    pub fn observe(&mut self, selected: Option<&str>) {
        if self.body_id.as_deref() != selected {
            self.body_id = selected.map(str::to_owned);
            self.failed = false;
        }
    }

    /// Record a load failure for `id`. Failures for any other id are late
    /// events from a previous selection and are dropped.
    pub fn mark_failed(&mut self, id: &str) -> bool {
        if self.body_id.as_deref() == Some(id) {
            if !self.failed {
                tracing::warn!(id, "detail visual failed, showing glyph");
            }
            self.failed = true;
            true
        } else {
            false
        }
    }

    /// Whether the current body's visual failed.
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Visual to show for `body`.
    pub fn visual(&self, body: &CelestialBody) -> DetailVisual {
        if self.failed && self.body_id.as_deref() == Some(body.id.as_str()) {
            DetailVisual::Glyph(fallback_glyph(body.kind))
        } else {
            DetailVisual::Procedural
        }
    }
}

/// Text and visual of the detail view, ready to render.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailContent {
    /// Body id
    pub id: String,
    /// Display name as authored
    pub name: String,
    /// Localized kind badge
    pub kind_label: &'static str,
    /// Description as authored
    pub description: String,
    /// Hero visual
    pub visual: DetailVisual,
}

impl DetailContent {
    /// Assemble the view for `body`.
    pub fn new(body: &CelestialBody, locale: Locale, status: &ImageStatus) -> Self {
        Self {
            id: body.id.clone(),
            name: body.name.clone(),
            kind_label: locale.kind_label(body.kind),
            description: body.description.clone(),
            visual: status.visual(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use pretty_assertions::assert_eq;

    #[test]
    fn glyph_depends_on_kind() {
        assert_eq!(fallback_glyph(BodyKind::Star), "⭐");
        assert_eq!(fallback_glyph(BodyKind::Satellite), "🌙");
        assert_eq!(fallback_glyph(BodyKind::Planet), "🌍");
        assert_eq!(fallback_glyph(BodyKind::Asteroid), "🌍");
    }

    #[test]
    fn failure_switches_to_glyph() {
        let catalog = Catalog::bundled();
        let sun = catalog.get("sun").unwrap();
        let mut status = ImageStatus::default();
        status.observe(Some("sun"));
        assert_eq!(status.visual(sun), DetailVisual::Procedural);
        assert!(status.mark_failed("sun"));
        assert_eq!(status.visual(sun), DetailVisual::Glyph("⭐"));
    }

    #[test]
    fn changing_selection_resets_flag_before_decision() {
        let catalog = Catalog::bundled();
        let mut status = ImageStatus::default();
        status.observe(Some("mars"));
        status.mark_failed("mars");

        status.observe(Some("moon"));
        assert!(!status.failed());
        assert_eq!(status.visual(catalog.get("moon").unwrap()), DetailVisual::Procedural);
    }

    #[test]
    fn reselecting_same_body_after_close_resets_flag() {
        let mut status = ImageStatus::default();
        status.observe(Some("mars"));
        status.mark_failed("mars");
        status.observe(None);
        status.observe(Some("mars"));
        assert!(!status.failed());
    }

    #[test]
    fn late_failure_from_previous_body_is_dropped() {
        let mut status = ImageStatus::default();
        status.observe(Some("venus"));
        assert!(!status.mark_failed("mars"));
        assert!(!status.failed());
    }

    #[test]
    fn content_uses_locale_for_kind_only() {
        let catalog = Catalog::bundled();
        let saturn = catalog.get("saturn").unwrap();
        let status = ImageStatus::default();

        let ja = DetailContent::new(saturn, Locale::Ja, &status);
        assert_eq!(ja.name, "土星");
        assert_eq!(ja.kind_label, "惑星");
        assert_eq!(ja.description, saturn.description);

        let en = DetailContent::new(saturn, Locale::En, &status);
        assert_eq!(en.name, "土星");
        assert_eq!(en.kind_label, "Planet");
    }

    #[test]
    fn fallback_catalog_renders_valid_detail() {
        let catalog = Catalog::fallback();
        let earth = catalog.get("earth").unwrap();
        let content = DetailContent::new(earth, Locale::Ja, &ImageStatus::default());
        assert_eq!(content.kind_label, "惑星");
        assert!(!content.description.is_empty());
        assert_eq!(content.visual, DetailVisual::Procedural);
    }
}
