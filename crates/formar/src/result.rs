//! Result and error types for Formar.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for Formar operations
pub type FormarResult<T> = Result<T, FormarError>;

/// Errors that can occur in Formar
#[derive(Debug, Error)]
pub enum FormarError {
    /// Document could not be read from disk
    ///
    /// Checks are meaningless without a tree, so this aborts the whole run.
    #[error("Failed to read document '{path}': {source}. Make sure the file exists and is readable before running checks")]
    DocumentRead {
        /// Path that failed to load
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Selector failed to compile to a CSS query
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector {
        /// The selector text that failed
        selector: String,
        /// Parser diagnostic
        message: String,
    },

    /// A check failed while the reporter was in fail-fast mode
    #[error("Check '{name}' failed: {message}")]
    CheckFailed {
        /// Name of the failing check
        name: String,
        /// Mismatch message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FormarError {
    /// Create a document-read error
    #[must_use]
    pub fn document_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DocumentRead {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid-selector error
    #[must_use]
    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }

    /// Create a fail-fast check error
    #[must_use]
    pub fn check_failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CheckFailed {
            name: name.into(),
            message: message.into(),
        }
    }
}
