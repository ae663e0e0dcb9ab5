//! Classified spans produced by the statement splitter

use serde::Serialize;

/// What a segment of a script is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SegmentKind {
    Statement,
    LineComment,
    BlockComment,
    /// A delimiter-change directive (`--#SET TERMINATOR`, `DELIMITER`, ...)
    Directive,
}

impl SegmentKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SegmentKind::Statement => "statement",
            SegmentKind::LineComment => "line-comment",
            SegmentKind::BlockComment => "block-comment",
            SegmentKind::Directive => "directive",
        }
    }
}

/// One span of the original script
///
/// `text` is an exact slice of the input. Statement text excludes the
/// terminator and trailing whitespace; the terminator that ended the
/// statement, if any, is kept in `terminator`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    pub text: &'a str,
    /// Byte offset of `text` in the script
    pub start: usize,
    /// 1-based line of `start`
    pub line: usize,
    pub terminator: Option<&'a str>,
}

impl<'a> Segment<'a> {
    /// Byte offset just past `text`
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn is_statement(&self) -> bool {
        self.kind == SegmentKind::Statement
    }

    pub fn is_comment(&self) -> bool {
        matches!(
            self.kind,
            SegmentKind::LineComment | SegmentKind::BlockComment
        )
    }

    pub fn to_owned_segment(&self) -> OwnedSegment {
        OwnedSegment {
            kind: self.kind,
            text: self.text.to_string(),
            start: self.start,
            line: self.line,
            terminator: self.terminator.map(str::to_string),
        }
    }
}

/// A segment detached from the script it was split from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnedSegment {
    pub kind: SegmentKind,
    pub text: String,
    pub start: usize,
    pub line: usize,
    pub terminator: Option<String>,
}

impl OwnedSegment {
    pub fn is_statement(&self) -> bool {
        self.kind == SegmentKind::Statement
    }
}

/// Reassemble a script from its segments
///
/// Text between segments (whitespace, terminators, batch separators, empty
/// statements) is taken from `source`; the result equals `source` for any
/// segment list produced by splitting it.
pub fn reassemble(source: &str, segments: &[Segment<'_>]) -> String {
    let mut out = String::with_capacity(source.len());
    let mut cursor = 0;
    for segment in segments {
        out.push_str(&source[cursor..segment.start]);
        out.push_str(segment.text);
        cursor = segment.end();
    }
    out.push_str(&source[cursor..]);
    out
}

/// Text between consecutive segments and after the last one
pub fn gaps<'a>(source: &'a str, segments: &[Segment<'a>]) -> Vec<&'a str> {
    let mut cursor = 0;
    let mut out = Vec::with_capacity(segments.len() + 1);
    for segment in segments {
        out.push(&source[cursor..segment.start]);
        cursor = segment.end();
    }
    out.push(&source[cursor..]);
    out
}
