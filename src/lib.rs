//! rust-sqldialect: database dialect profiles for schema tooling
//!
//! Resolves a reported product name and version to an immutable dialect
//! profile, parses vendor column type strings into canonical types, and
//! splits SQL scripts into statements using each vendor's conventions.

pub mod dialect;
pub mod error;
pub mod parser;
pub mod types;
pub mod version;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

pub use dialect::{generic_dialect, resolve_dialect, Dialect, DialectFeatures};
pub use error::{DialectError, TokenizeError, TypeParseError};
pub use parser::{Segment, SegmentKind, SplitFile};
pub use types::{CanonicalType, ParsedType};
pub use version::{Version, VersionMatch};

/// Options for splitting script files
#[derive(Debug, Clone)]
pub struct SplitOptions {
    /// Product name as reported by the server (`"DB2/LINUXX8664"`)
    pub product: String,
    pub version: Version,
    /// Script files, or directories walked for `*.sql`
    pub paths: Vec<PathBuf>,
    /// Render segments as JSON
    pub json: bool,
}

/// Identity and feature flags of a resolved profile
#[derive(Debug, Clone, Serialize)]
pub struct DialectSummary {
    pub family: &'static str,
    pub profile: &'static str,
    pub name: &'static str,
    pub min_version: Version,
    /// Profiles this one falls back to, newest last
    pub chain: Vec<&'static str>,
    pub features: DialectFeatures,
}

impl DialectSummary {
    pub fn new(dialect: &Dialect) -> Self {
        Self {
            family: dialect.family(),
            profile: dialect.profile_id(),
            name: dialect.name(),
            min_version: dialect.min_version(),
            chain: dialect.chain().skip(1).map(Dialect::profile_id).collect(),
            features: *dialect.features(),
        }
    }
}

/// Split every script named by the options with the resolved dialect
pub fn split_scripts(options: &SplitOptions) -> Result<Vec<SplitFile>> {
    let dialect = resolve_dialect(
        &options.product,
        options.version.major,
        options.version.minor,
        Some(options.version.revision),
    );
    info!(dialect = dialect.name(), "Splitting with dialect");

    let files = collect_sql_files(&options.paths)?;
    info!(count = files.len(), "Found SQL files");

    let split = parser::split_files(&dialect.splitter(), &files)?;
    let statements: usize = split.iter().map(SplitFile::statement_count).sum();
    info!(statements, "Split SQL statements");
    Ok(split)
}

/// Render split files as text or JSON
pub fn render_split(files: &[SplitFile], json: bool) -> Result<String> {
    if json {
        return serde_json::to_string_pretty(files).context("Failed to serialize segments");
    }

    let mut out = String::new();
    for file in files {
        out.push_str(&format!("== {}\n", file.path.display()));
        for segment in &file.segments {
            out.push_str(&format!(
                "-- [{}] line {}\n{}\n",
                segment.kind.as_str(),
                segment.line,
                segment.text
            ));
        }
    }
    Ok(out)
}

/// Expand directories into the `*.sql` files beneath them, sorted by path
pub fn collect_sql_files(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut found: Vec<PathBuf> = walkdir::WalkDir::new(path)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.file_type().is_file() && is_sql_file(e.path()))
                .map(|e| e.into_path())
                .collect();
            found.sort();
            debug!(dir = %path.display(), count = found.len(), "collected SQL files");
            files.extend(found);
        } else if path.exists() {
            files.push(path.clone());
        } else {
            anyhow::bail!("No such file or directory: {}", path.display());
        }
    }
    Ok(files)
}

fn is_sql_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("sql"))
}
