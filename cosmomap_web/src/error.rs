//! Host-environment faults.
//!
//! Everything else in the app degrades locally. These are the only errors
//! that reach the `ErrorBoundary` and its retry screen.

use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("no global `window` available")]
    NoWindow,
    #[error("window has no `document`")]
    NoDocument,
    #[error("document has no `<body>`")]
    NoBody,
}
