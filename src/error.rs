//! Error types for rust-sqldialect

use std::path::PathBuf;
use thiserror::Error;

/// A raw column type string that no registry pattern or alias recognized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeParseError {
    #[error("Unrecognized column type: '{0}'")]
    Unrecognized(String),
}

/// Scanning reached end of input while a construct was still open
///
/// `position` is a byte offset into the script, `line` is 1-based, and
/// `snippet` is a short excerpt starting where the open construct began.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("Unterminated literal at line {line} (offset {position}): {snippet}")]
    UnterminatedLiteral {
        position: usize,
        line: usize,
        snippet: String,
    },

    #[error("Unterminated comment at line {line} (offset {position}): {snippet}")]
    UnterminatedComment {
        position: usize,
        line: usize,
        snippet: String,
    },

    #[error("Unmatched compound block at line {line} (offset {position}): {snippet}")]
    UnmatchedBlock {
        position: usize,
        line: usize,
        snippet: String,
    },
}

impl TokenizeError {
    /// Byte offset where the offending construct starts
    pub fn position(&self) -> usize {
        match self {
            TokenizeError::UnterminatedLiteral { position, .. }
            | TokenizeError::UnterminatedComment { position, .. }
            | TokenizeError::UnmatchedBlock { position, .. } => *position,
        }
    }

    /// 1-based line where the offending construct starts
    pub fn line(&self) -> usize {
        match self {
            TokenizeError::UnterminatedLiteral { line, .. }
            | TokenizeError::UnterminatedComment { line, .. }
            | TokenizeError::UnmatchedBlock { line, .. } => *line,
        }
    }
}

/// Errors raised at the file boundary of the crate
#[derive(Error, Debug)]
pub enum DialectError {
    #[error("Failed to read SQL script: {path}")]
    ScriptRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to split {path}: {source}")]
    ScriptSplit {
        path: PathBuf,
        #[source]
        source: TokenizeError,
    },

    #[error("Invalid version string: '{0}'")]
    InvalidVersion(String),
}
