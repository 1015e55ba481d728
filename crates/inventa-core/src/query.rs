//! Query builder and lazy result stream

use std::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;
use inventa_store::{AssetStore, StoreError};
use tracing::{debug, instrument, trace};

use crate::error::QueryError;
use crate::fields::{AssetView, ContentProvider, FieldProvider, FieldResolver};
use crate::filter::FilterSet;
use crate::identity::PSEUDO_KEYS;
use crate::scope::Scope;
use crate::types::AssetRow;

/// Depth large enough to reach every asset
pub const UNBOUNDED_DEPTH: i64 = i64::MAX;

/// Query over an inventory
///
/// Defaults to the inventory root, depth `0`, no filters and the pseudo-keys.
#[derive(Debug, Clone)]
pub struct Query {
    roots: Vec<PathBuf>,
    depth: i64,
    filters: FilterSet,
    keys: Vec<String>,
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}

impl Query {
    /// Create a query with default scope and keys
    #[must_use]
    pub fn new() -> Self {
        Self {
            roots: vec![PathBuf::from(".")],
            depth: 0,
            filters: FilterSet::default(),
            keys: PSEUDO_KEYS.iter().map(|k| (*k).to_string()).collect(),
        }
    }

    /// Restrict the query to these roots
    #[must_use]
    pub fn roots<I, P>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.roots = roots.into_iter().map(Into::into).collect();
        self
    }

    /// Maximum number of directories between a root and an asset
    #[must_use]
    pub fn depth(mut self, depth: i64) -> Self {
        self.depth = depth;
        self
    }

    /// Only include assets matching all filters
    #[must_use]
    pub fn filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    /// Fields to project for each match
    #[must_use]
    pub fn keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Compile filter expressions and apply them
    ///
    /// # Errors
    /// Returns [`QueryError::Filters`] if any expression is invalid or any
    /// key repeats.
    pub fn try_filters<I, S>(self, exprs: I) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(self.filters(FilterSet::compile(exprs)?))
    }

    /// Start a single pass over `store`
    ///
    /// Nothing is read until the returned iterator is advanced.
    #[instrument(skip(self, store), fields(query = %self, store = store.store_type()))]
    pub fn run<'a>(&self, store: &'a dyn AssetStore) -> Results<'a> {
        debug!("starting query");

        Results {
            assets: store.assets(),
            store,
            scope: Scope::new(&self.roots, self.depth),
            filters: self.filters.clone(),
            keys: self.keys.clone(),
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let roots: Vec<String> = self.roots.iter().map(|r| r.display().to_string()).collect();
        let filters: Vec<String> = self
            .filters
            .iter()
            .map(|flt| format!("{}={}", flt.key(), flt.value()))
            .collect();

        write!(
            f,
            "keys=[{}] roots=[{}] depth={}",
            self.keys.join(", "),
            roots.join(", "),
            self.depth
        )?;
        if !filters.is_empty() {
            write!(f, " filters=[{}]", filters.join(", "))?;
        }
        Ok(())
    }
}

/// Lazy stream of matching rows
///
/// Each call to `next` advances the traversal to the next matching asset.
/// Per-asset errors are yielded in place; the caller decides whether to
/// continue.
pub struct Results<'a> {
    assets: Box<dyn Iterator<Item = Result<PathBuf, StoreError>> + 'a>,
    store: &'a dyn AssetStore,
    scope: Scope,
    filters: FilterSet,
    keys: Vec<String>,
}

impl Results<'_> {
    fn project(&self, view: &AssetView<'_>) -> Result<IndexMap<String, String>, StoreError> {
        let content = ContentProvider::new(view);
        let resolver = FieldResolver::new(vec![view.identity() as &dyn FieldProvider, &content]);

        let mut fields = IndexMap::with_capacity(self.keys.len());
        for key in &self.keys {
            if let Some(value) = resolver.resolve(key)? {
                fields.insert(key.clone(), value);
            }
        }
        Ok(fields)
    }

    fn evaluate(&self, path: PathBuf) -> Result<Option<AssetRow>, QueryError> {
        if !self.scope.contains(&path) {
            trace!(path = %path.display(), "out of scope");
            return Ok(None);
        }

        let view = AssetView::new(path, self.store);
        if !self.filters.matches(&view)? {
            trace!(path = %view.path().display(), "filtered out");
            return Ok(None);
        }

        let fields = self.project(&view)?;
        debug!(path = %view.path().display(), "asset matched");

        Ok(Some(AssetRow {
            path: view.into_path(),
            fields,
        }))
    }
}

impl Iterator for Results<'_> {
    type Item = Result<AssetRow, QueryError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let path = match self.assets.next()? {
                Ok(path) => path,
                Err(e) => return Some(Err(e.into())),
            };

            match self.evaluate(path) {
                Ok(Some(row)) => return Some(Ok(row)),
                Ok(None) => {}
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
