//! Normalisation of user-supplied query arguments

use std::path::PathBuf;

/// Drop repeated keys (first occurrence wins); fall back to `defaults` if empty
#[must_use]
pub fn normalize_keys<S: AsRef<str>>(keys: &[S], defaults: &[&str]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(keys.len());
    for key in keys {
        let key = key.as_ref();
        if !seen.iter().any(|k| k == key) {
            seen.push(key.to_string());
        }
    }

    if seen.is_empty() {
        defaults.iter().map(|k| (*k).to_string()).collect()
    } else {
        seen
    }
}

/// Drop repeated roots; fall back to the inventory root (`.`) if empty
#[must_use]
pub fn normalize_roots<P: Into<PathBuf> + Clone>(paths: &[P]) -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = Vec::with_capacity(paths.len());
    for path in paths {
        let path: PathBuf = path.clone().into();
        if !roots.contains(&path) {
            roots.push(path);
        }
    }

    if roots.is_empty() {
        roots.push(PathBuf::from("."));
    }
    roots
}
