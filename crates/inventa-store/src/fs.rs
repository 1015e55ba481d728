//! Filesystem-backed asset store using `walkdir`

use std::path::{Path, PathBuf};

use tracing::{debug, instrument, warn};
use walkdir::{DirEntry, WalkDir};

use crate::error::StoreError;
use crate::traits::AssetStore;
use crate::value::{Content, parse_content};

/// Asset store reading a working tree on disk
///
/// Every regular file below the root is an asset, except entries whose name
/// starts with a dot (`.git`, `.inventa`, `.anchor`, ...). Hidden
/// directories are pruned as a whole.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Open the inventory rooted at `root`
    ///
    /// # Errors
    /// Returns [`StoreError::NotFound`] if `root` is not a directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        if !root.is_dir() {
            return Err(StoreError::NotFound(root.display().to_string()));
        }

        debug!(root = %root.display(), "opened inventory");
        Ok(Self { root })
    }

    /// Inventory root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Convert a walk entry into a path relative to the root
    fn relative(&self, entry: &DirEntry) -> Result<PathBuf, StoreError> {
        entry
            .path()
            .strip_prefix(&self.root)
            .map(Path::to_path_buf)
            .map_err(|e| StoreError::Walk(e.to_string()))
    }
}

/// Bookkeeping entries are hidden files and directories
fn is_bookkeeping(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

impl AssetStore for FsStore {
    fn assets(&self) -> Box<dyn Iterator<Item = Result<PathBuf, StoreError>> + '_> {
        let walker = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_bookkeeping(entry));

        Box::new(walker.filter_map(move |entry| match entry {
            Ok(entry) if entry.file_type().is_file() => Some(self.relative(&entry)),
            Ok(_) => None,
            Err(e) => {
                warn!(error = %e, "failed to read inventory entry");
                Some(Err(StoreError::Walk(e.to_string())))
            }
        }))
    }

    #[instrument(skip(self), level = "debug")]
    fn load(&self, path: &Path) -> Result<Content, StoreError> {
        let text = std::fs::read_to_string(self.root.join(path))
            .map_err(|e| StoreError::io(path, &e))?;

        let content = parse_content(path, &text)?;
        debug!(fields = content.len(), "loaded asset");

        Ok(content)
    }

    fn store_type(&self) -> &'static str {
        "fs"
    }
}
