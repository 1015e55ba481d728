//! `inventa get`: query, gap-fill and sort assets

use std::path::{Path, PathBuf};

use inventa_core::{
    AssetRow, PSEUDO_KEYS, Query, fill, normalize_keys, normalize_roots, sort,
};
use inventa_store::FsStore;
use tracing::{debug, instrument};

use crate::cli::GetArgs;
use crate::config::QuerySettings;

/// Rows ready for rendering, with the keys they were projected on
#[derive(Debug, Clone)]
pub struct GetOutput {
    /// Requested keys, deduplicated, in display order
    pub keys: Vec<String>,
    /// Gap-filled and ordered rows
    pub rows: Vec<AssetRow>,
}

/// Make user paths relative to the inventory root
///
/// Absolute paths inside the inventory are stripped of the root prefix;
/// other absolute paths are kept and match nothing.
fn inventory_paths(root: &Path, paths: &[PathBuf]) -> Vec<PathBuf> {
    paths
        .iter()
        .map(|path| match path.strip_prefix(root) {
            Ok(rel) if rel.as_os_str().is_empty() => PathBuf::from("."),
            Ok(rel) => rel.to_path_buf(),
            Err(_) => path.clone(),
        })
        .collect()
}

/// Run the query described by `args`
///
/// Filters are validated as a batch before the tree is read. The first
/// unreadable asset aborts the query.
///
/// # Errors
/// Returns error on invalid or duplicate filters, or if an asset in scope
/// cannot be read or parsed.
#[instrument(skip_all)]
pub fn execute(args: &GetArgs, store: &FsStore, settings: &QuerySettings) -> eyre::Result<GetOutput> {
    let defaults: Vec<&str> = if settings.keys.is_empty() {
        PSEUDO_KEYS.to_vec()
    } else {
        settings.keys.iter().map(String::as_str).collect()
    };
    let keys = normalize_keys(&args.keys, &defaults);
    let roots = normalize_roots(&inventory_paths(store.root(), &args.paths));
    let depth = args.depth.unwrap_or(settings.depth);

    let query = Query::new()
        .try_filters(&args.filters)?
        .roots(roots)
        .depth(depth)
        .keys(keys.clone());

    let rows = query.run(store).collect::<Result<Vec<_>, _>>()?;
    debug!(count = rows.len(), "query completed");

    let rows: Vec<AssetRow> = fill(rows, &keys, &settings.sentinel).collect();
    let sort_keys: &[String] = if args.sort_ascending || args.sort_descending {
        &keys
    } else {
        &[]
    };
    let rows = sort(rows, sort_keys, args.sort_descending);

    Ok(GetOutput { keys, rows })
}
