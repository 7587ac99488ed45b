//! The static catalog of bodies.
//!
//! Loaded once at startup from the bundled JSON document and never mutated
//! afterwards. Loading cannot fail from the caller's point of view: any
//! problem with the document substitutes the Earth-only fallback, so the UI
//! never observes an empty catalog.

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::CatalogError;
use crate::types::{BodyKind, CelestialBody, Position};

/// The catalog document compiled into the binary.
pub const BUNDLED_CATALOG: &str = include_str!("../data/celestial_bodies.json");

/// Immutable, cheaply clonable list of bodies.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    bodies: Arc<[CelestialBody]>,
}

impl Catalog {
    /// Parse and validate a catalog document.
    ///
    /// Checks that the document is non-empty, that every id is lowercase
    /// ASCII and unique, and that every marker anchor lies on the map.
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        let bodies: Vec<CelestialBody> = serde_json::from_str(json)?;
        if bodies.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(bodies.len());
        for body in &bodies {
            if !is_valid_id(&body.id) {
                return Err(CatalogError::InvalidId(body.id.clone()));
            }
            if !seen.insert(body.id.as_str()) {
                return Err(CatalogError::DuplicateId(body.id.clone()));
            }
            for (axis, value) in [("top", body.position.top), ("left", body.position.left)] {
                if !value.in_bounds() {
                    return Err(CatalogError::InvalidPosition {
                        id: body.id.clone(),
                        axis,
                        value: value.value(),
                    });
                }
            }
        }

        Ok(Self {
            bodies: bodies.into(),
        })
    }

    /// Load a catalog, substituting [`Catalog::fallback`] on any error.
    pub fn load(json: &str) -> Self {
        match Self::parse(json) {
            Ok(catalog) => {
                tracing::debug!(bodies = catalog.len(), "catalog loaded");
                catalog
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog unavailable, using Earth-only fallback");
                Self::fallback()
            }
        }
    }

    /// Load the document compiled into the binary.
    pub fn bundled() -> Self {
        Self::load(BUNDLED_CATALOG)
    }

    /// The single-body catalog used when the real one cannot be loaded.
    pub fn fallback() -> Self {
        let earth = CelestialBody {
            id: "earth".into(),
            name: "地球".into(),
            kind: BodyKind::Planet,
            position: Position::new(50.0, 50.0),
            description: "私たちが住む惑星。表面の約70%が海で覆われ、生命が確認されている唯一の天体です。"
                .into(),
            image: None,
        };
        Self {
            bodies: Arc::from(vec![earth]),
        }
    }

    /// Look up a body by id.
    pub fn get(&self, id: &str) -> Option<&CelestialBody> {
        self.bodies.iter().find(|body| body.id == id)
    }

    /// Bodies in document order.
    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    /// Bodies as a slice.
    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    /// Number of bodies.
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    /// Always false for a loaded catalog; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-' || b == b'_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(id: &str, top: &str) -> String {
        format!(
            r#"{{"id":"{id}","name":"{id}","type":"planet","position":{{"top":"{top}","left":"10%"}},"description":""}}"#
        )
    }

    #[test]
    fn bundled_catalog_has_ten_unique_bodies() {
        let catalog = Catalog::parse(BUNDLED_CATALOG).expect("bundled catalog must parse");
        assert_eq!(catalog.len(), 10);

        let ids: HashSet<_> = catalog.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), catalog.len());
        for id in [
            "sun", "mercury", "venus", "earth", "moon", "mars", "jupiter", "saturn", "uranus",
            "neptune",
        ] {
            assert!(ids.contains(id), "missing {id}");
        }
    }

    #[test]
    fn bundled_kinds_match_expectations() {
        let catalog = Catalog::bundled();
        assert_eq!(catalog.get("sun").map(|b| b.kind), Some(BodyKind::Star));
        assert_eq!(catalog.get("moon").map(|b| b.kind), Some(BodyKind::Satellite));
        assert_eq!(catalog.get("saturn").map(|b| b.name.as_str()), Some("土星"));
    }

    #[test]
    fn malformed_document_falls_back_to_earth() {
        let catalog = Catalog::load("{ not json");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.bodies()[0].id, "earth");
        assert_eq!(catalog, Catalog::fallback());
    }

    #[test]
    fn empty_document_is_rejected_and_replaced() {
        assert!(matches!(Catalog::parse("[]"), Err(CatalogError::Empty)));
        assert_eq!(Catalog::load("[]").len(), 1);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let json = format!("[{},{}]", record("mars", "10%"), record("mars", "20%"));
        match Catalog::parse(&json) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id, "mars"),
            other => panic!("expected duplicate id error, got {other:?}"),
        }
    }

    #[test]
    fn uppercase_ids_are_rejected() {
        let json = format!("[{}]", record("Mars", "10%"));
        assert!(matches!(Catalog::parse(&json), Err(CatalogError::InvalidId(_))));
    }

    #[test]
    fn off_map_positions_are_rejected() {
        let json = format!("[{}]", record("mars", "140%"));
        match Catalog::parse(&json) {
            Err(CatalogError::InvalidPosition { id, axis, value }) => {
                assert_eq!(id, "mars");
                assert_eq!(axis, "top");
                assert_eq!(value, 140.0);
            }
            other => panic!("expected position error, got {other:?}"),
        }
    }

    #[test]
    fn fallback_body_is_selectable() {
        let catalog = Catalog::fallback();
        let earth = catalog.get("earth").expect("fallback holds earth");
        assert_eq!(earth.kind, BodyKind::Planet);
        assert!(earth.position.top.in_bounds() && earth.position.left.in_bounds());
        assert!(!earth.description.is_empty());
    }
}
