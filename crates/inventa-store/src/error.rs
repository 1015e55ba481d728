//! Error types for inventa-store

use std::path::Path;

use thiserror::Error;

/// Errors that can occur while reading the inventory tree
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Inventory root does not exist or is not a directory
    #[error("inventory not found: {0}")]
    NotFound(String),

    /// Asset file could not be read
    #[error("failed to read {path}: {message}")]
    Io {
        /// Asset path relative to the inventory root
        path: String,
        /// Underlying I/O error
        message: String,
    },

    /// Asset body is not a valid key/value document
    #[error("invalid asset content in {path}: {message}")]
    Parse {
        /// Asset path relative to the inventory root
        path: String,
        /// Parser error
        message: String,
    },

    /// Tree traversal failed
    #[error("failed to walk inventory: {0}")]
    Walk(String),
}

impl StoreError {
    pub(crate) fn io(path: &Path, err: &std::io::Error) -> Self {
        StoreError::Io {
            path: path.display().to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn parse(path: &Path, message: impl Into<String>) -> Self {
        StoreError::Parse {
            path: path.display().to_string(),
            message: message.into(),
        }
    }

    /// Check if the error comes from unparseable asset content
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, StoreError::Parse { .. })
    }
}
