//! Common test utilities for rust-sqldialect tests

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use rust_sqldialect::{Segment, SegmentKind};

/// The table every dialect fixture opens with
pub const EMPLOYEE_TABLE: &str = "CREATE TABLE employee (
    id INTEGER NOT NULL PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    email VARCHAR(255),
    hired DATE DEFAULT CURRENT_DATE
)";

/// Path to a file under tests/fixtures
pub fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(relative)
}

/// Read a fixture script, normalizing line endings so checkouts with CRLF
/// compare the same
pub fn read_fixture(relative: &str) -> String {
    let path = fixture_path(relative);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {e}", path.display()))
        .replace("\r\n", "\n")
}

pub fn texts<'s>(segments: &[Segment<'s>]) -> Vec<&'s str> {
    segments.iter().map(|s| s.text).collect()
}

pub fn kinds(segments: &[Segment<'_>]) -> Vec<SegmentKind> {
    segments.iter().map(|s| s.kind).collect()
}

pub fn statements<'s>(segments: &[Segment<'s>]) -> Vec<&'s str> {
    segments
        .iter()
        .filter(|s| s.is_statement())
        .map(|s| s.text)
        .collect()
}
