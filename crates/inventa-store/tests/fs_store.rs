use std::fs;
use std::path::{Path, PathBuf};

use inventa_store::{AssetStore, FieldValue, FsStore};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn fixture() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write(root, "laptop_apple_macbookpro.1", "num: 8\nstr: foo\n");
    write(root, "one/laptop_dell_precision.2", "num: '16'\n");
    write(root, "one/two/headphones_apple_pro.3", "");
    write(root, "one/.anchor", "");
    write(root, ".gitignore", "*.swp\n");
    write(root, ".git/HEAD", "ref: refs/heads/main\n");
    write(root, ".inventa/config.toml", "[query]\ndepth = 1\n");
    fs::create_dir_all(root.join("empty/dir")).unwrap();

    dir
}

#[test]
fn test_assets_skip_bookkeeping() {
    let dir = fixture();
    let store = FsStore::open(dir.path()).unwrap();

    let assets: Vec<PathBuf> = store.assets().collect::<Result<_, _>>().unwrap();

    assert_eq!(
        assets,
        vec![
            PathBuf::from("laptop_apple_macbookpro.1"),
            PathBuf::from("one/laptop_dell_precision.2"),
            PathBuf::from("one/two/headphones_apple_pro.3"),
        ]
    );
}

#[test]
fn test_load_content() {
    let dir = fixture();
    let store = FsStore::open(dir.path()).unwrap();

    let content = store.load(Path::new("laptop_apple_macbookpro.1")).unwrap();
    assert_eq!(content["num"], FieldValue::Integer(8));
    assert_eq!(content["str"], FieldValue::from("foo"));

    let content = store.load(Path::new("one/laptop_dell_precision.2")).unwrap();
    assert_eq!(content["num"], FieldValue::from("16"));

    let content = store.load(Path::new("one/two/headphones_apple_pro.3")).unwrap();
    assert!(content.is_empty());
}

#[test]
fn test_load_invalid_content() {
    let dir = fixture();
    write(dir.path(), "broken_asset_x.9", "key: [unclosed\n");
    let store = FsStore::open(dir.path()).unwrap();

    let err = store.load(Path::new("broken_asset_x.9")).unwrap_err();
    assert!(err.is_parse_error());
    assert!(err.to_string().contains("broken_asset_x.9"));
}

#[test]
fn test_load_missing_asset() {
    let dir = fixture();
    let store = FsStore::open(dir.path()).unwrap();

    let err = store.load(Path::new("missing_asset_x.1")).unwrap_err();
    assert!(!err.is_parse_error());
}
