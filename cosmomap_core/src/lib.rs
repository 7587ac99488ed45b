//! # cosmomap-core
//!
//! Framework-free model behind the CosmoMap solar-system explorer.
//!
//! Everything the browser app needs to decide *what* to draw lives here, so
//! it can be tested natively without a DOM:
//!
//! - **Catalog** - the static list of bodies, validated on load, with an
//!   Earth-only fallback when the data is unusable
//! - **Styling** - a total `id -> style` registry, size classes and marker layout
//! - **Selection** - the open/closing/closed state machine with cancellable close timers
//! - **Side effects** - a reference-counted scroll lock released on drop
//! - **Decoration** - starfield noise and low-poly sphere shading
//!
//! ## Quick Start
//!
//! ```rust
//! use cosmomap_core::{Catalog, SelectionController, Phase};
//! use std::time::Duration;
//!
//! let catalog = Catalog::bundled();
//! let saturn = catalog.get("saturn").cloned().unwrap();
//!
//! let mut selection: SelectionController<u32> =
//!     SelectionController::new(Duration::from_millis(300));
//! let _ = selection.select(saturn);
//! assert_eq!(selection.phase(), Phase::Open);
//!
//! let ticket = selection.request_close().unwrap();
//! assert!(selection.elapse(ticket));
//! assert_eq!(selection.phase(), Phase::Closed);
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - celestial body records
//! - [`catalog`] - loading and validation
//! - [`style`] - per-body visual descriptors and marker layout
//! - [`fidelity`] - rendering tiers
//! - [`selection`] - selection controller
//! - [`scroll_lock`] - scoped scroll suppression
//! - [`detail`] - detail view content and image fallback state
//! - [`texture`] - texture load tracking
//! - [`sphere`] - low-poly facets and day/night terminator
//! - [`starfield`] - decorative background noise
//! - [`locale`] - UI strings and kind labels
//! - [`config`] - app configuration
//! - [`error`] - error types

#![warn(missing_docs)]

pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod fidelity;
pub mod locale;
pub mod scroll_lock;
pub mod selection;
pub mod sphere;
pub mod starfield;
pub mod style;
pub mod texture;
pub mod types;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use detail::{DetailContent, DetailVisual, ImageStatus};
pub use error::{CatalogError, ConfigError};
pub use fidelity::FidelityTier;
pub use locale::{Locale, UiStrings};
pub use scroll_lock::{ScrollGuard, ScrollHost, ScrollLock};
pub use selection::{CloseTicket, Phase, SelectionController};
pub use starfield::{Starfield, StarfieldConfig};
pub use style::{BodyStyle, Decoration, MarkerLayout, SizeClass, StyleRegistry};
pub use texture::{TexturePresentation, TextureSlot, TextureState, TextureTicket};
pub use types::{BodyKind, CelestialBody, Percent, Position};
