//! Scanner primitives shared by every dialect
//!
//! The scanner answers positional questions about a script: does a comment, a
//! quoted literal, the active delimiter or a line delimiter start here, and
//! where does it end? Scanning is byte-oriented. Every construct it recognizes
//! starts with an ASCII byte or with the first byte of a delimiter, so every
//! position it reports is a char boundary.

use std::sync::LazyLock;

use regex::Regex;

use super::rules::ScriptRules;
use crate::error::TokenizeError;

/// Opening tag of a dollar-quoted body (`$$` or `$tag$`)
static DOLLAR_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\A\$(?:[A-Za-z_][A-Za-z0-9_]*)?\$").unwrap());

const SNIPPET_CHARS: usize = 40;

/// Byte offsets of line starts, for 1-based line lookups
#[derive(Debug)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut starts = vec![0];
        starts.extend(
            text.bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'\n')
                .map(|(i, _)| i + 1),
        );
        Self { starts }
    }

    /// 1-based line containing byte offset `pos`
    pub fn line_of(&self, pos: usize) -> usize {
        self.starts.partition_point(|&start| start <= pos)
    }

    /// Byte offset where the line containing `pos` starts
    pub fn line_start(&self, pos: usize) -> usize {
        self.starts[self.line_of(pos) - 1]
    }
}

pub struct Scanner<'s, 'r> {
    src: &'s str,
    bytes: &'s [u8],
    rules: &'r ScriptRules,
    lines: LineIndex,
}

impl<'s, 'r> Scanner<'s, 'r> {
    pub fn new(src: &'s str, rules: &'r ScriptRules) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            rules,
            lines: LineIndex::new(src),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn src(&self) -> &'s str {
        self.src
    }

    pub fn rules(&self) -> &'r ScriptRules {
        self.rules
    }

    pub fn line_of(&self, pos: usize) -> usize {
        self.lines.line_of(pos)
    }

    /// First non-whitespace position at or after `pos`
    pub fn skip_whitespace(&self, pos: usize) -> usize {
        self.src[pos..]
            .char_indices()
            .find(|(_, c)| !c.is_whitespace())
            .map_or(self.len(), |(offset, _)| pos + offset)
    }

    /// `pos` is the first byte of a line
    #[inline]
    pub fn at_line_start(&self, pos: usize) -> bool {
        pos == 0 || self.bytes[pos - 1] == b'\n'
    }

    /// End of the line containing `pos`, excluding the newline
    pub fn line_end(&self, pos: usize) -> usize {
        self.bytes[pos..]
            .iter()
            .position(|&b| b == b'\n')
            .map_or(self.len(), |offset| pos + offset)
    }

    /// If the line starting at `line_start` is a line delimiter, return the
    /// span of its visible text
    pub fn line_delimiter_at(&self, line_start: usize) -> Option<(usize, usize)> {
        if !self.rules.has_line_delimiter() {
            return None;
        }
        let end = self.line_end(line_start);
        let line = &self.src[line_start..end];
        if !self.rules.is_line_delimiter(line) {
            return None;
        }
        let start = line_start + (line.len() - line.trim_start().len());
        let stop = line_start + line.trim_end().len();
        Some((start, stop))
    }

    /// Whether everything between the start of `pos`'s line and `pos` is
    /// blank, returning the line start if so
    pub fn blank_line_prefix(&self, pos: usize) -> Option<usize> {
        let start = self.lines.line_start(pos);
        self.src[start..pos].trim().is_empty().then_some(start)
    }

    /// Whether the active delimiter starts at `pos`
    #[inline]
    pub fn delimiter_at(&self, pos: usize, delimiter: &str) -> bool {
        let d = delimiter.as_bytes();
        !d.is_empty()
            && self.bytes.len() - pos >= d.len()
            && self.bytes[pos..pos + d.len()].eq_ignore_ascii_case(d)
    }

    pub fn line_comment_at(&self, pos: usize) -> bool {
        let rest = &self.bytes[pos..];
        rest.starts_with(b"--")
            || self
                .rules
                .lexical
                .line_comment_prefixes
                .iter()
                .any(|p| rest.starts_with(p.as_bytes()))
    }

    /// End of a line comment, excluding the newline and any carriage return
    pub fn line_comment_end(&self, pos: usize) -> usize {
        let end = self.line_end(pos);
        if end > pos && self.bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        }
    }

    pub fn block_comment_at(&self, pos: usize) -> bool {
        self.bytes[pos..].starts_with(b"/*")
    }

    /// Position just past the `*/` closing the comment opened at `pos`
    pub fn block_comment_end(&self, pos: usize) -> Result<usize, TokenizeError> {
        let nested = self.rules.lexical.nested_block_comments;
        let mut depth = 0usize;
        let mut i = pos;
        while i + 1 < self.len() {
            match (self.bytes[i], self.bytes[i + 1]) {
                (b'/', b'*') if depth == 0 || nested => {
                    depth += 1;
                    i += 2;
                }
                (b'*', b'/') => {
                    depth -= 1;
                    i += 2;
                    if depth == 0 {
                        return Ok(i);
                    }
                }
                _ => i += 1,
            }
        }
        Err(TokenizeError::UnterminatedComment {
            position: pos,
            line: self.line_of(pos),
            snippet: self.snippet(pos),
        })
    }

    /// Whether a quoted literal or delimited identifier starts at `pos`
    pub fn literal_at(&self, pos: usize) -> bool {
        match self.bytes[pos] {
            b'\'' | b'"' => true,
            b'$' => self.rules.lexical.dollar_quotes && self.dollar_tag(pos).is_some(),
            b => self
                .rules
                .lexical
                .identifier_quotes
                .iter()
                .any(|(open, _)| *open == b),
        }
    }

    /// Position just past the literal opened at `pos`
    ///
    /// A doubled closing quote is an escaped quote, not a terminator.
    /// Backslash escapes apply to string literals only, never to delimited
    /// identifiers.
    pub fn literal_end(&self, pos: usize) -> Result<usize, TokenizeError> {
        let open = self.bytes[pos];
        let found = if open == b'$' {
            self.dollar_quote_end(pos)
        } else {
            let lexical = &self.rules.lexical;
            let string = matches!(open, b'\'' | b'"');
            let close = if string {
                open
            } else {
                lexical
                    .identifier_quotes
                    .iter()
                    .find(|(o, _)| *o == open)
                    .map_or(open, |(_, c)| *c)
            };
            self.quoted_end(pos, close, string && lexical.backslash_escapes)
        };
        found.ok_or_else(|| TokenizeError::UnterminatedLiteral {
            position: pos,
            line: self.line_of(pos),
            snippet: self.snippet(pos),
        })
    }

    fn quoted_end(&self, pos: usize, close: u8, escapes: bool) -> Option<usize> {
        let mut i = pos + 1;
        while i < self.len() {
            let b = self.bytes[i];
            if escapes && b == b'\\' {
                i += 2;
            } else if b == close {
                if self.bytes.get(i + 1) == Some(&close) {
                    i += 2;
                } else {
                    return Some(i + 1);
                }
            } else {
                i += 1;
            }
        }
        None
    }

    fn dollar_tag(&self, pos: usize) -> Option<&'s str> {
        DOLLAR_TAG_RE.find(&self.src[pos..]).map(|m| m.as_str())
    }

    fn dollar_quote_end(&self, pos: usize) -> Option<usize> {
        let tag = self.dollar_tag(pos)?;
        let body = pos + tag.len();
        self.src[body..]
            .find(tag)
            .map(|offset| body + offset + tag.len())
    }

    /// Whether a keyword-like word starts at `pos`
    pub fn word_at(&self, pos: usize) -> Option<&'s str> {
        if !self.bytes[pos].is_ascii_alphabetic() {
            return None;
        }
        if pos > 0 {
            let prev = self.bytes[pos - 1];
            if is_word_byte(prev) || prev == b'.' || prev == b'$' {
                return None;
            }
        }
        let end = self.bytes[pos..]
            .iter()
            .position(|&b| !is_word_byte(b))
            .map_or(self.len(), |offset| pos + offset);
        Some(&self.src[pos..end])
    }

    /// The word following `pos` across whitespace only
    pub fn next_word(&self, pos: usize) -> Option<(usize, &'s str)> {
        let start = self.skip_whitespace(pos);
        if start >= self.len() {
            return None;
        }
        self.word_at(start).map(|w| (start, w))
    }

    /// Short excerpt of the script starting at `pos`, for diagnostics
    pub fn snippet(&self, pos: usize) -> String {
        self.src[pos..]
            .lines()
            .next()
            .unwrap_or("")
            .chars()
            .take(SNIPPET_CHARS)
            .collect()
    }
}

/// `$` is left out so that `END$$` still ends a block
#[inline]
fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b >= 0x80
}
