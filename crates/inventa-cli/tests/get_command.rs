use std::fs;
use std::path::Path;

use clap::Parser;
use inventa_cli::cli::{Cli, Commands, GetArgs};
use inventa_cli::commands::get::{self, GetOutput};
use inventa_cli::config::QuerySettings;
use inventa_cli::render;
use inventa_store::FsStore;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn inventory() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();

    write(root, "laptop_apple_macbookpro.1", "num: 8\nstr: 'foo'\nbool: true\n");
    write(root, "one/laptop_dell_precision.2", "num: '16'\nstr: 'bar'\nbool: false\n");
    write(root, "one/two/headphones_apple_pro.3", "num: '8'\nstr: 'bar'\nbool: 'True'\n");
    write(root, "abc/def/monitor_dell_pro.4", "str: 'foo=bar'\n");
    write(root, ".git/config", "[core]\n");
    write(root, "one/.anchor", "");

    dir
}

fn args(argv: &[&str]) -> GetArgs {
    let mut full = vec!["inventa", "get"];
    full.extend_from_slice(argv);
    match Cli::try_parse_from(full).unwrap().command {
        Commands::Get(args) => args,
    }
}

fn get(dir: &TempDir, argv: &[&str]) -> color_eyre::Result<GetOutput> {
    let store = FsStore::open(dir.path()).unwrap();
    get::execute(&args(argv), &store, &QuerySettings::default())
}

fn lines(output: &GetOutput) -> Vec<Vec<String>> {
    let mut out = Vec::new();
    render::machine_readable(&mut out, &output.rows).unwrap();
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| l.split('\t').map(str::to_string).collect())
        .collect()
}

#[test]
fn test_defaults_root_level_pseudo_keys() {
    let dir = inventory();
    let output = get(&dir, &[]).unwrap();

    assert_eq!(output.keys, vec!["type", "make", "model", "serial"]);
    assert_eq!(
        lines(&output),
        vec![vec!["laptop", "apple", "macbookpro", "1", "laptop_apple_macbookpro.1"]]
    );
}

#[test]
fn test_filters_depth_and_keys() {
    let dir = inventory();
    let output = get(
        &dir,
        &["--filter", "str=bar", "type=laptop", "--keys", "num", "str", "bool", "--depth", "999"],
    )
    .unwrap();

    assert_eq!(
        lines(&output),
        vec![vec!["16", "bar", "False", "one/laptop_dell_precision.2"]]
    );
}

#[test]
fn test_bool_filter_matches_native_and_quoted_values() {
    let dir = inventory();
    let output = get(&dir, &["-f", "bool=True", "-k", "bool", "--depth", "999"]).unwrap();

    assert_eq!(
        lines(&output),
        vec![
            vec!["True", "laptop_apple_macbookpro.1"],
            vec!["True", "one/two/headphones_apple_pro.3"],
        ]
    );

    let output = get(&dir, &["-f", "bool=False", "--depth", "999"]).unwrap();
    assert_eq!(output.rows.len(), 1);
}

#[test]
fn test_paths_scope() {
    let dir = inventory();
    let output = get(&dir, &["--path", "one/two", "abc/def", "--depth", "0"]).unwrap();

    let paths: Vec<String> = lines(&output).into_iter().map(|l| l[4].clone()).collect();
    assert_eq!(
        paths,
        vec!["abc/def/monitor_dell_pro.4", "one/two/headphones_apple_pro.3"]
    );
}

#[test]
fn test_absolute_path_inside_inventory() {
    let dir = inventory();
    let one = dir.path().join("one");
    let output = get(&dir, &["--path", one.to_str().unwrap(), "--depth", "999"]).unwrap();

    assert_eq!(output.rows.len(), 2);
}

#[test]
fn test_absolute_path_outside_inventory() {
    let dir = inventory();
    let output = get(&dir, &["--path", "/one/two", "--depth", "999"]).unwrap();

    assert!(output.rows.is_empty());
}

#[test]
fn test_gap_fill_in_output() {
    let dir = inventory();
    let output = get(&dir, &["--keys", "num", "str", "--depth", "999", "--filter", "type=monitor"])
        .unwrap();

    assert_eq!(
        lines(&output),
        vec![vec!["<unset>", "foo=bar", "abc/def/monitor_dell_pro.4"]]
    );
}

#[test]
fn test_sort_descending_by_keys() {
    let dir = inventory();
    let output = get(&dir, &["--keys", "num", "--depth", "999", "-S"]).unwrap();

    let nums: Vec<String> = lines(&output).into_iter().map(|l| l[0].clone()).collect();
    assert_eq!(nums, vec!["<unset>", "16", "8", "8"]);
}

#[test]
fn test_duplicate_filter_keys_fail() {
    let dir = inventory();
    let err = get(&dir, &["--filter", "type=laptop", "type=headphones"]).unwrap_err();

    assert!(err.to_string().contains("duplicate filter key: type"));
}

#[test]
fn test_all_filter_errors_reported() {
    let dir = inventory();
    let err = get(&dir, &["--filter", "num", "num=8.*", "num=16.*"]).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("invalid filter `num`"));
    assert!(message.contains("duplicate filter key: num"));
}

#[test]
fn test_unparseable_asset_aborts() {
    let dir = inventory();
    write(dir.path(), "broken_asset_x.9", "key: [unclosed\n");

    let err = get(&dir, &["--keys", "num"]).unwrap_err();
    assert!(err.to_string().contains("broken_asset_x.9"));

    // Pseudo-key queries never read the body
    let output = get(&dir, &["--keys", "type"]).unwrap();
    assert_eq!(output.rows.len(), 2);
}

#[test]
fn test_configured_defaults() {
    let dir = inventory();
    let store = FsStore::open(dir.path()).unwrap();
    let settings = QuerySettings {
        depth: 999,
        keys: vec!["str".to_string()],
        sentinel: "-".to_string(),
    };

    let output = get::execute(&args(&["--filter", "num=16"]), &store, &settings).unwrap();
    assert_eq!(output.keys, vec!["str"]);
    assert_eq!(lines(&output), vec![vec!["bar", "one/laptop_dell_precision.2"]]);

    let output = get::execute(&args(&["--keys", "owner", "--depth", "0"]), &store, &settings).unwrap();
    assert_eq!(lines(&output), vec![vec!["-", "laptop_apple_macbookpro.1"]]);
}

#[test]
fn test_no_matches_table() {
    let dir = inventory();
    let output = get(&dir, &["--filter", "type=printer"]).unwrap();

    let mut out = Vec::new();
    render::table(&mut out, &output.keys, &output.rows).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", render::NO_MATCHES));
}
