//! # GalleryError
//!
//! Centralized error handling for the gallery metadata crates.
//! Maps domain-specific failures to actionable error types.

use thiserror::Error;

/// The primary error type for all gm-core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    /// A raw URL or path could not be split into identifier and token
    #[error("malformed gallery locator {locator:?}: {reason}")]
    MalformedLocator { locator: String, reason: String },

    /// Validation failure (e.g., blank login fields)
    #[error("validation error: {0}")]
    Validation(String),

    /// The preference store rejected a read or write
    #[error("preference error: {0}")]
    Preference(String),

    /// Anything else that is not the caller's fault
    #[error("internal error: {0}")]
    Internal(String),
}

impl GalleryError {
    pub fn malformed(locator: &str, reason: impl Into<String>) -> Self {
        Self::MalformedLocator {
            locator: locator.to_string(),
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for gallery metadata logic.
pub type Result<T> = std::result::Result<T, GalleryError>;
