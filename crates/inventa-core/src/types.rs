//! Query result types

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// One matching asset with its projected fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRow {
    /// Asset path relative to the inventory root
    pub path: PathBuf,
    /// Requested fields in string form, in key order
    pub fields: IndexMap<String, String>,
}

impl AssetRow {
    /// Create a row without fields
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            fields: IndexMap::new(),
        }
    }

    /// Add a field
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Asset path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Field value by key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Field values in order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.fields.values().map(String::as_str)
    }
}
