//! `key=value` filters over asset identity and content

use std::collections::HashMap;

use inventa_store::{Content, FieldValue, StoreError, ValueKind};
use tracing::debug;

use crate::error::{FilterError, FilterErrors};
use crate::fields::AssetView;
use crate::fill::UNSET;
use crate::identity::{Identity, is_pseudo_key};
use crate::pattern::Pattern;

/// Matches content values that are sequences
pub const LIST_TAG: &str = "<list>";

/// Matches content values that are mappings
pub const DICT_TAG: &str = "<dict>";

/// A single compiled `key=value` filter
#[derive(Debug, Clone)]
pub struct Filter {
    key: String,
    value: Pattern,
}

impl Filter {
    /// Compile a filter expression
    ///
    /// The expression is split on its first `=`, so values may contain `=`.
    ///
    /// # Errors
    /// Returns [`FilterError::InvalidExpression`] if `expr` has no `=`.
    pub fn compile(expr: &str) -> Result<Self, FilterError> {
        let (key, value) = expr
            .split_once('=')
            .ok_or_else(|| FilterError::InvalidExpression(expr.to_string()))?;

        Ok(Self {
            key: key.to_string(),
            value: Pattern::new(value),
        })
    }

    /// Field the filter applies to
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Raw value pattern
    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Whether the filter reads a name-derived pseudo-key
    #[must_use]
    pub fn is_pseudo_key(&self) -> bool {
        is_pseudo_key(&self.key)
    }

    /// Evaluate the filter against an asset
    ///
    /// Pseudo-key filters never touch the asset's content.
    ///
    /// # Errors
    /// Returns an error if the content is needed and cannot be loaded.
    pub fn matches(&self, asset: &AssetView<'_>) -> Result<bool, StoreError> {
        if self.is_pseudo_key() {
            return Ok(self.matches_identity(asset.identity()));
        }

        Ok(self.matches_content(asset.content()?))
    }

    /// Match against name-derived values
    #[must_use]
    pub fn matches_identity(&self, identity: &Identity) -> bool {
        identity
            .value(&self.key)
            .is_some_and(|value| self.value.evaluate(value).is_match())
    }

    /// Match against parsed content
    #[must_use]
    pub fn matches_content(&self, content: &Content) -> bool {
        let field = content.get(&self.key);

        if self.value() == UNSET {
            return field.is_none_or(FieldValue::is_blank);
        }

        let Some(field) = field else {
            return false;
        };

        if self.value.evaluate(&field.to_string()).is_match() {
            return true;
        }

        match self.value() {
            LIST_TAG => field.kind() == ValueKind::List,
            DICT_TAG => field.kind() == ValueKind::Map,
            _ => false,
        }
    }
}

/// Validated set of filters combined with logical AND
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    /// Compile a batch of expressions
    ///
    /// Every malformed expression and every repeated key is collected, so all
    /// problems are reported in one go.
    ///
    /// # Errors
    /// Returns [`FilterErrors`] if any expression is invalid or any key repeats.
    pub fn compile<I, S>(exprs: I) -> Result<Self, FilterErrors>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filters = Vec::new();
        let mut errors = Vec::new();

        for expr in exprs {
            match Filter::compile(expr.as_ref()) {
                Ok(filter) => filters.push(filter),
                Err(e) => errors.push(e),
            }
        }

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for filter in &filters {
            *counts.entry(filter.key()).or_default() += 1;
        }

        let mut reported = Vec::new();
        for filter in &filters {
            let key = filter.key();
            if counts[key] > 1 && !reported.contains(&key) {
                reported.push(key);
                errors.push(FilterError::DuplicateKey(key.to_string()));
            }
        }

        if !errors.is_empty() {
            return Err(FilterErrors::new(errors));
        }

        debug!(count = filters.len(), "compiled filters");
        Ok(Self { filters })
    }

    /// Number of filters
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// No filters; every asset matches
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Iterate over the filters
    pub fn iter(&self) -> std::slice::Iter<'_, Filter> {
        self.filters.iter()
    }

    /// Whether all filters match the asset
    ///
    /// Stops at the first filter that does not match.
    ///
    /// # Errors
    /// Returns an error if a content filter cannot load the asset.
    pub fn matches(&self, asset: &AssetView<'_>) -> Result<bool, StoreError> {
        for filter in &self.filters {
            if !filter.matches(asset)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl<'a> IntoIterator for &'a FilterSet {
    type Item = &'a Filter;
    type IntoIter = std::slice::Iter<'a, Filter>;

    fn into_iter(self) -> Self::IntoIter {
        self.filters.iter()
    }
}
