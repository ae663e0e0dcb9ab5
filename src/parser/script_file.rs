//! Splitting SQL script files from disk

use std::path::{Path, PathBuf};

use anyhow::Result;
use encoding_rs::WINDOWS_1252;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use super::segment::OwnedSegment;
use super::splitter::StatementSplitter;
use crate::error::DialectError;

/// Minimum number of files before splitting fans out across threads
const PARALLEL_THRESHOLD: usize = 8;

/// Segments of one script file
#[derive(Debug, Clone, Serialize)]
pub struct SplitFile {
    pub path: PathBuf,
    pub segments: Vec<OwnedSegment>,
}

impl SplitFile {
    pub fn statement_count(&self) -> usize {
        self.segments.iter().filter(|s| s.is_statement()).count()
    }
}

/// Read a script as UTF-8, falling back to Windows-1252, without a leading BOM
pub fn read_script(path: &Path) -> Result<String, DialectError> {
    let bytes = std::fs::read(path).map_err(|e| DialectError::ScriptRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let text = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => {
            let bytes = err.into_bytes();
            // Every byte maps to a Windows-1252 character
            let (decoded, _, _) = WINDOWS_1252.decode(&bytes);
            warn!(path = %path.display(), "script is not UTF-8, decoded as Windows-1252");
            decoded.into_owned()
        }
    };

    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Split a single script file
pub fn split_file(splitter: &StatementSplitter<'_>, path: &Path) -> Result<SplitFile> {
    let content = read_script(path)?;
    let segments = splitter
        .split(&content)
        .map_err(|e| DialectError::ScriptSplit {
            path: path.to_path_buf(),
            source: e,
        })?;
    debug!(path = %path.display(), segments = segments.len(), "split script file");

    Ok(SplitFile {
        path: path.to_path_buf(),
        segments: segments.iter().map(|s| s.to_owned_segment()).collect(),
    })
}

/// Split multiple script files, in parallel for larger file sets
///
/// Results keep the order of `paths`; the first failure is returned.
pub fn split_files(splitter: &StatementSplitter<'_>, paths: &[PathBuf]) -> Result<Vec<SplitFile>> {
    if paths.len() >= PARALLEL_THRESHOLD {
        paths
            .par_iter()
            .map(|path| split_file(splitter, path))
            .collect()
    } else {
        paths.iter().map(|path| split_file(splitter, path)).collect()
    }
}
