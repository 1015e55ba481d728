//! Asset store trait

use std::path::{Path, PathBuf};

use crate::error::StoreError;
use crate::value::Content;

/// Read-only access to the assets of an inventory
///
/// Paths handed out by [`AssetStore::assets`] are relative to the inventory
/// root and never include bookkeeping entries.
pub trait AssetStore {
    /// Enumerate candidate asset paths in traversal order
    fn assets(&self) -> Box<dyn Iterator<Item = Result<PathBuf, StoreError>> + '_>;

    /// Load and parse the body of an asset
    ///
    /// # Errors
    /// Returns an error if the asset cannot be read or its body is not a mapping.
    fn load(&self, path: &Path) -> Result<Content, StoreError>;

    /// Store type for logging
    fn store_type(&self) -> &'static str;
}
