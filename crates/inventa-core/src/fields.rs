//! Field resolution across identity and content

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use inventa_store::{AssetStore, Content, StoreError};

use crate::identity::Identity;

/// Source of field values for one asset
pub trait FieldProvider {
    /// Value of `key` in its string form
    ///
    /// # Errors
    /// Returns an error if the provider's data cannot be loaded.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Whether the provider has a value for `key`
    ///
    /// # Errors
    /// Returns an error if the provider's data cannot be loaded.
    fn has(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key)?.is_some())
    }
}

impl FieldProvider for Content {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.get(key).map(ToString::to_string))
    }
}

/// One asset as seen by a query
///
/// The identity is derived up front; content is loaded from the store on
/// first use and kept for the lifetime of the view.
pub struct AssetView<'a> {
    path: PathBuf,
    identity: Identity,
    store: &'a dyn AssetStore,
    content: OnceCell<Content>,
}

impl<'a> AssetView<'a> {
    /// Create a view of the asset at `path` in `store`
    pub fn new(path: PathBuf, store: &'a dyn AssetStore) -> Self {
        let identity = Identity::from_path(&path);
        Self {
            path,
            identity,
            store,
            content: OnceCell::new(),
        }
    }

    /// Asset path relative to the inventory root
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name-derived pseudo-keys
    #[must_use]
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Parsed content, loaded on first access
    ///
    /// # Errors
    /// Returns the store's error if the asset cannot be read or parsed.
    pub fn content(&self) -> Result<&Content, StoreError> {
        if let Some(content) = self.content.get() {
            return Ok(content);
        }

        let loaded = self.store.load(&self.path)?;
        Ok(self.content.get_or_init(|| loaded))
    }

    /// Consume the view, returning its path
    #[must_use]
    pub fn into_path(self) -> PathBuf {
        self.path
    }
}

/// Content of an [`AssetView`] as a provider; loads lazily
pub struct ContentProvider<'v, 'a> {
    view: &'v AssetView<'a>,
}

impl<'v, 'a> ContentProvider<'v, 'a> {
    pub fn new(view: &'v AssetView<'a>) -> Self {
        Self { view }
    }
}

impl FieldProvider for ContentProvider<'_, '_> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        FieldProvider::get(self.view.content()?, key)
    }
}

/// Tries providers in a fixed priority order
pub struct FieldResolver<'p> {
    providers: Vec<&'p dyn FieldProvider>,
}

impl<'p> FieldResolver<'p> {
    /// Create a resolver; earlier providers win
    pub fn new(providers: Vec<&'p dyn FieldProvider>) -> Self {
        Self { providers }
    }

    /// Resolve a single key from the first provider that has it
    ///
    /// # Errors
    /// Returns an error if a consulted provider fails to load.
    pub fn resolve(&self, key: &str) -> Result<Option<String>, StoreError> {
        for provider in &self.providers {
            if let Some(value) = provider.get(key)? {
                return Ok(Some(value));
            }
        }
        Ok(None)
    }
}
