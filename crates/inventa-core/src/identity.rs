//! Asset identity derived from file names
//!
//! Asset files are named `type_make_model.serial`. The four tokens are the
//! pseudo-keys of an asset; they never come from its content.

use std::path::Path;

use crate::fields::FieldProvider;
use inventa_store::StoreError;

/// Pseudo-keys in file name order
pub const PSEUDO_KEYS: [&str; 4] = ["type", "make", "model", "serial"];

/// Check whether `key` is one of the pseudo-keys (case-sensitive)
#[must_use]
pub fn is_pseudo_key(key: &str) -> bool {
    PSEUDO_KEYS.contains(&key)
}

/// Split a file name into its identity tokens
///
/// Splits on the first two `_`, then splits the remainder on its first `.`.
/// Names with fewer delimiters yield fewer tokens.
fn tokens(name: &str) -> Vec<&str> {
    let mut tokens: Vec<&str> = name.splitn(3, '_').collect();

    if tokens.len() == 3 {
        let last = tokens.pop().unwrap_or_default();
        match last.split_once('.') {
            Some((model, serial)) => {
                tokens.push(model);
                tokens.push(serial);
            }
            None => tokens.push(last),
        }
    }

    tokens
}

/// Zip the identity tokens of `path`'s file name with `schema`
///
/// Missing trailing fields are absent from the result. Token content is not
/// validated.
#[must_use]
pub fn identity_of(path: &Path, schema: &[&str]) -> Vec<(String, String)> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    schema
        .iter()
        .zip(tokens(&name))
        .map(|(key, value)| ((*key).to_string(), value.to_string()))
        .collect()
}

/// Pseudo-key values of a single asset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identity {
    fields: Vec<(String, String)>,
}

impl Identity {
    /// Derive the identity of the asset at `path`
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        Self {
            fields: identity_of(path, &PSEUDO_KEYS),
        }
    }

    /// Value of a pseudo-key, if the name carries it
    #[must_use]
    pub fn value(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of pseudo-keys present
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// No pseudo-key could be derived
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldProvider for Identity {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.value(key).map(str::to_string))
    }
}
