//! inventa-core: asset query and filtering engine
//!
//! Interprets `key=value` filters against asset names and contents, scopes a
//! query to root paths and a maximum depth, projects requested fields and
//! orders the resulting rows naturally.

pub mod args;
pub mod error;
pub mod fields;
pub mod fill;
pub mod filter;
pub mod identity;
pub mod pattern;
pub mod query;
pub mod scope;
pub mod sort;
pub mod types;

pub use args::{normalize_keys, normalize_roots};
pub use error::{FilterError, FilterErrors, QueryError};
pub use fields::{AssetView, ContentProvider, FieldProvider, FieldResolver};
pub use fill::{UNSET, fill};
pub use filter::{Filter, FilterSet, LIST_TAG, DICT_TAG};
pub use identity::{Identity, PSEUDO_KEYS, identity_of, is_pseudo_key};
pub use pattern::{Pattern, PatternMatch};
pub use query::{Query, Results, UNBOUNDED_DEPTH};
pub use scope::Scope;
pub use sort::{natural_cmp, sort};
pub use types::AssetRow;
