//! Error types for catalog and configuration loading.
//!
//! Neither error ever reaches the user as a hard failure: the catalog
//! degrades to a single fallback body and configuration degrades to
//! defaults. The variants exist so the degraded paths can be logged and tested.

use thiserror::Error;

/// Why a catalog document was rejected.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Malformed JSON or a record that does not match the schema
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document parsed but contained no bodies
    #[error("catalog contains no bodies")]
    Empty,
    /// Two records share an id
    #[error("duplicate body id `{0}`")]
    DuplicateId(String),
    /// Id is empty or not lowercase ASCII
    #[error("invalid body id `{0}`: expected lowercase ASCII letters, digits, `-` or `_`")]
    InvalidId(String),
    /// Marker anchor outside the map
    #[error("body `{id}` has {axis} position {value}% outside 0..=100")]
    InvalidPosition {
        /// Offending body
        id: String,
        /// `top` or `left`
        axis: &'static str,
        /// Raw value
        value: f32,
    },
}

/// Why a configuration source (JSON or query string) was rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Config JSON could not be parsed
    #[error("config is not valid JSON: {0}")]
    Parse(String),
    /// Fidelity tier name not recognised
    #[error("unknown fidelity tier `{0}`")]
    UnknownTier(String),
    /// Locale tag not recognised
    #[error("unknown locale `{0}`")]
    UnknownLocale(String),
    /// A known key carried an unusable value
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue {
        /// Query or config key
        key: String,
        /// Raw value
        value: String,
    },
}
