//! Integration tests for splitting script files from disk

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use rust_sqldialect::{
    collect_sql_files, render_split, split_scripts, DialectError, SplitOptions, Version,
};

use crate::common::fixture_path;

fn options(product: &str, version: &str, paths: Vec<PathBuf>) -> SplitOptions {
    SplitOptions {
        product: product.to_string(),
        version: version.parse::<Version>().unwrap(),
        paths,
        json: false,
    }
}

#[test]
fn test_split_fixture_directory() {
    let files = split_scripts(&options("DB2/LINUXX8664", "11.5.8", vec![fixture_path("db2")])).unwrap();

    // Directory entries come back sorted by path
    let names: Vec<String> = files
        .iter()
        .map(|f| f.path.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["routines.sql", "schema.sql"]);
    assert_eq!(files[0].segments.len(), 14);
    assert_eq!(files[1].segments.len(), 15);
    assert_eq!(files[1].statement_count(), 10);
}

#[test]
fn test_collect_skips_non_sql_files() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("b.sql"), "SELECT 1;").unwrap();
    fs::write(dir.path().join("nested").join("a.SQL"), "SELECT 2;").unwrap();
    fs::write(dir.path().join("notes.txt"), "not sql").unwrap();

    let files = collect_sql_files(&[dir.path().to_path_buf()]).unwrap();
    assert_eq!(files.len(), 2);
    assert!(files.iter().all(|f| f.extension().is_some()));
    assert!(files.iter().any(|f| f.ends_with("nested/a.SQL")));
}

#[test]
fn test_missing_path_is_an_error() {
    let err = collect_sql_files(&[PathBuf::from("/nonexistent/scripts")]).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/scripts"));
}

#[test]
fn test_split_failure_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.sql");
    fs::write(&path, "SELECT 1;\n/* never closed").unwrap();

    let err = split_scripts(&options("PostgreSQL", "16.1", vec![path.clone()])).unwrap_err();
    match err.downcast_ref::<DialectError>() {
        Some(DialectError::ScriptSplit { path: failed, .. }) => assert_eq!(failed, &path),
        other => panic!("Expected ScriptSplit error, got {other:?}"),
    }
}

#[test]
fn test_render_text_and_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("one.sql");
    fs::write(&path, "-- note\nSELECT 1;").unwrap();
    let files = split_scripts(&options("SQLite", "3.45.1", vec![path])).unwrap();

    let text = render_split(&files, false).unwrap();
    assert!(text.contains("-- [line-comment] line 1\n-- note\n"));
    assert!(text.contains("-- [statement] line 2\nSELECT 1\n"));

    let json: serde_json::Value = serde_json::from_str(&render_split(&files, true).unwrap()).unwrap();
    let segments = json[0]["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[1]["kind"], "statement");
    assert_eq!(segments[1]["terminator"], ";");
}
