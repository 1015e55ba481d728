//! Root path and depth scoping

use std::path::{Component, Path, PathBuf};

/// A query root, normalised against the inventory root
#[derive(Debug, Clone, PartialEq, Eq)]
enum Root {
    /// Components below the inventory root; empty is the root itself
    Inside(Vec<String>),
    /// Absolute, or climbing above the inventory root; matches nothing
    Outside(PathBuf),
}

impl Root {
    fn parse(path: &Path) -> Self {
        let mut parts: Vec<String> = Vec::new();

        for component in path.components() {
            match component {
                Component::CurDir => {}
                Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
                Component::ParentDir => {
                    if parts.pop().is_none() {
                        return Root::Outside(path.to_path_buf());
                    }
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Root::Outside(path.to_path_buf());
                }
            }
        }

        Root::Inside(parts)
    }
}

/// Which assets a query considers
///
/// An asset is in scope if one of the roots is an ancestor of (or equal to)
/// its directory, with at most `depth` directories in between. Depth `0`
/// means directly inside a root; a negative depth matches nothing.
#[derive(Debug, Clone)]
pub struct Scope {
    roots: Vec<Root>,
    depth: i64,
}

impl Scope {
    /// Create a scope; an empty `roots` means the inventory root
    pub fn new<I, P>(roots: I, depth: i64) -> Self
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut parsed: Vec<Root> = Vec::new();
        for root in roots {
            let root = Root::parse(root.as_ref());
            if !parsed.contains(&root) {
                parsed.push(root);
            }
        }

        if parsed.is_empty() {
            parsed.push(Root::Inside(Vec::new()));
        }

        Self {
            roots: parsed,
            depth,
        }
    }

    /// Whether the asset at `asset` (relative to the inventory root) is in scope
    #[must_use]
    pub fn contains(&self, asset: &Path) -> bool {
        if self.depth < 0 {
            return false;
        }

        let parent: Vec<String> = match asset.parent() {
            Some(parent) => parent
                .components()
                .filter_map(|c| match c {
                    Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect(),
            None => Vec::new(),
        };

        self.roots.iter().any(|root| match root {
            Root::Inside(parts) => {
                parent.starts_with(parts)
                    && i64::try_from(parent.len() - parts.len()).unwrap_or(i64::MAX) <= self.depth
            }
            Root::Outside(_) => false,
        })
    }
}
