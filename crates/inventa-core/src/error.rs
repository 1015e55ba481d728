//! Error types for inventa-core

use std::fmt;

use inventa_store::StoreError;
use thiserror::Error;

/// A single problem with the filters of a query
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Expression without a `=`
    #[error("invalid filter `{0}`: filters must be formatted as `key=value`")]
    InvalidExpression(String),

    /// Two or more filters share a key
    #[error("duplicate filter key: {0}")]
    DuplicateKey(String),
}

/// All problems found while compiling a batch of filters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterErrors(Vec<FilterError>);

impl FilterErrors {
    pub(crate) fn new(errors: Vec<FilterError>) -> Self {
        Self(errors)
    }

    /// Individual problems, in the order they were found
    #[must_use]
    pub fn errors(&self) -> &[FilterError] {
        &self.0
    }

    /// Keys given more than once
    pub fn duplicate_keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(|e| match e {
            FilterError::DuplicateKey(key) => Some(key.as_str()),
            FilterError::InvalidExpression(_) => None,
        })
    }
}

impl fmt::Display for FilterErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FilterErrors {}

/// Errors that can occur while running a query
#[derive(Error, Debug, Clone)]
pub enum QueryError {
    /// Filters failed validation; raised before any traversal
    #[error("{0}")]
    Filters(#[from] FilterErrors),

    /// Reading the tree or an asset's content failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl QueryError {
    /// Check if the error comes from an unparseable asset
    #[must_use]
    pub fn is_content_error(&self) -> bool {
        matches!(self, QueryError::Store(e) if e.is_parse_error())
    }
}
