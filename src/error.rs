//! Error types for the MC34063 calculator.
//!
//! Validation problems (out-of-range or malformed fields) are not errors in
//! this sense: they are collected into [`Violations`](crate::input::Violations)
//! and reported to the user together. [`CalcError`] covers the failures that
//! happen around the calculation, in the field store and the presenter.

use thiserror::Error;

/// Result type alias using [`CalcError`].
pub type Result<T> = std::result::Result<T, CalcError>;

/// Unified error type for all calculator operations.
#[derive(Error, Debug)]
pub enum CalcError {
    // ============ Field Store Errors ============
    /// Error reading the field store
    #[error("Failed to read field store '{path}': {source}")]
    StoreRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Error writing the field store
    #[error("Failed to write field store '{path}': {source}")]
    StoreWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Field store contents are not a flat string map
    #[error("Field store '{path}' is corrupt: {message}")]
    StoreFormat { path: String, message: String },

    // ============ Presentation Errors ============
    /// Error writing the rendered report
    #[error("Failed to write report: {source}")]
    Present {
        #[source]
        source: std::io::Error,
    },
}

impl CalcError {
    /// Create a store read error
    pub fn store_read(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::StoreRead {
            path: path.into(),
            source,
        }
    }

    /// Create a store write error
    pub fn store_write(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::StoreWrite {
            path: path.into(),
            source,
        }
    }

    /// Create a presentation error
    pub fn present(source: std::io::Error) -> Self {
        Self::Present { source }
    }

    /// Create a store format error
    pub fn store_format(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::StoreFormat {
            path: path.into(),
            message: message.into(),
        }
    }
}
