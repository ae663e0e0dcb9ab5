//! Statement splitting state machine
//!
//! ```text
//! ScanningWhitespaceOrComment ──► ScanningStatementBody ──► DelimiterFound ────────┐
//!          ▲                               │                                      │
//!          │                               └──► CompoundBlockDetected ──┐         │
//!          │                                                            ▼         ▼
//!          └───────────────────────────────────────────────────────── EmitSegment
//! ```
//!
//! Between statements the splitter emits comments and delimiter-change
//! directives as their own segments and silently steps over whitespace, empty
//! statements and stray batch separators. A statement ends at the active
//! delimiter outside literals and comments, at a line delimiter, or at end of
//! input. Statements whose head opens a compound block are scanned with nesting
//! tracked so that delimiters inside the body do not end them.

use tracing::{debug, trace};

use super::rules::{BlockEnd, NestingWords, ScriptRules};
use super::scanner::Scanner;
use super::segment::{Segment, SegmentKind};
use crate::error::TokenizeError;

/// Splits scripts using one dialect's rules
#[derive(Debug, Clone, Copy)]
pub struct StatementSplitter<'r> {
    rules: &'r ScriptRules,
}

impl<'r> StatementSplitter<'r> {
    pub fn new(rules: &'r ScriptRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &'r ScriptRules {
        self.rules
    }

    /// Split a script into ordered statement, comment and directive segments
    pub fn split<'s>(&self, script: &'s str) -> Result<Vec<Segment<'s>>, TokenizeError> {
        let segments = SplitRun::new(script, self.rules).run()?;
        debug!(
            segments = segments.len(),
            statements = segments.iter().filter(|s| s.is_statement()).count(),
            "split script"
        );
        Ok(segments)
    }

    /// Statement segments only
    pub fn statements<'s>(&self, script: &'s str) -> Result<Vec<Segment<'s>>, TokenizeError> {
        Ok(self
            .split(script)?
            .into_iter()
            .filter(Segment::is_statement)
            .collect())
    }
}

/// Where a statement body stops
struct StatementEnd<'s> {
    /// End of the statement text, before trimming trailing whitespace
    body_end: usize,
    /// Where scanning resumes
    resume: usize,
    terminator: Option<&'s str>,
}

/// State of one split call
struct SplitRun<'s, 'r> {
    scanner: Scanner<'s, 'r>,
    pos: usize,
    delimiter: &'s str,
    segments: Vec<Segment<'s>>,
}

impl<'s, 'r> SplitRun<'s, 'r> {
    fn new(src: &'s str, rules: &'r ScriptRules) -> Self {
        Self {
            scanner: Scanner::new(src, rules),
            pos: 0,
            delimiter: rules.default_delimiter,
            segments: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Segment<'s>>, TokenizeError> {
        let src = self.scanner.src();
        let len = self.scanner.len();

        loop {
            self.pos = self.scanner.skip_whitespace(self.pos);
            if self.pos >= len {
                break;
            }
            let pos = self.pos;

            if let Some((length, requested)) = self.scanner.rules().match_directive(&src[pos..]) {
                self.change_delimiter(requested);
                self.push(SegmentKind::Directive, pos, pos + length, None);
                self.pos = pos + length;
                continue;
            }

            if let Some(line_start) = self.scanner.blank_line_prefix(pos) {
                if let Some((_, stop)) = self.scanner.line_delimiter_at(line_start) {
                    self.pos = stop;
                    continue;
                }
            }

            if self.scanner.delimiter_at(pos, self.delimiter) {
                self.pos = pos + self.delimiter.len();
                continue;
            }

            if self.scanner.line_comment_at(pos) {
                let end = self.scanner.line_comment_end(pos);
                self.push(SegmentKind::LineComment, pos, end, None);
                self.pos = end;
                continue;
            }

            if self.scanner.block_comment_at(pos) {
                let end = self.scanner.block_comment_end(pos)?;
                self.push(SegmentKind::BlockComment, pos, end, None);
                self.pos = end;
                continue;
            }

            let end = if self.scanner.rules().starts_block(&src[pos..]) {
                trace!(line = self.scanner.line_of(pos), "compound block detected");
                self.scan_block(pos)?
            } else {
                self.scan_statement(pos)?
            };
            let body_end = pos + src[pos..end.body_end].trim_end().len();
            self.push(SegmentKind::Statement, pos, body_end, end.terminator);
            self.pos = end.resume;
        }

        Ok(self.segments)
    }

    fn push(&mut self, kind: SegmentKind, start: usize, end: usize, terminator: Option<&'s str>) {
        let src = self.scanner.src();
        self.segments.push(Segment {
            kind,
            text: &src[start..end],
            start,
            line: self.scanner.line_of(start),
            terminator,
        });
    }

    fn change_delimiter(&mut self, requested: Option<&'s str>) {
        let default = self.scanner.rules().default_delimiter;
        let next = match requested {
            // `SET TERM ^;` glues the new terminator to the current one
            Some(d) if d.len() > self.delimiter.len() && d.ends_with(self.delimiter) => {
                &d[..d.len() - self.delimiter.len()]
            }
            Some(d) => d,
            None => default,
        };
        debug!(from = self.delimiter, to = next, "statement delimiter changed");
        self.delimiter = next;
    }

    /// Skip a literal or comment starting at `i`, returning where it ends
    fn skip_quoted_or_comment(&self, i: usize) -> Result<Option<usize>, TokenizeError> {
        if self.scanner.literal_at(i) {
            return self.scanner.literal_end(i).map(Some);
        }
        if self.scanner.line_comment_at(i) {
            return Ok(Some(self.scanner.line_comment_end(i)));
        }
        if self.scanner.block_comment_at(i) {
            return self.scanner.block_comment_end(i).map(Some);
        }
        Ok(None)
    }

    /// A line delimiter on the line starting at `i`, if `i` begins a line
    /// inside the statement
    fn line_delimiter_end(&self, start: usize, i: usize) -> Option<StatementEnd<'s>> {
        if i == start || !self.scanner.at_line_start(i) {
            return None;
        }
        let (from, to) = self.scanner.line_delimiter_at(i)?;
        Some(StatementEnd {
            body_end: i,
            resume: to,
            terminator: Some(&self.scanner.src()[from..to]),
        })
    }

    fn delimiter_end(&self, i: usize) -> StatementEnd<'s> {
        let resume = i + self.delimiter.len();
        StatementEnd {
            body_end: i,
            resume,
            terminator: Some(&self.scanner.src()[i..resume]),
        }
    }

    fn end_of_input(&self) -> StatementEnd<'s> {
        let len = self.scanner.len();
        StatementEnd {
            body_end: len,
            resume: len,
            terminator: None,
        }
    }

    /// Scan a plain statement to the active delimiter
    fn scan_statement(&self, start: usize) -> Result<StatementEnd<'s>, TokenizeError> {
        let mut i = start;
        while i < self.scanner.len() {
            if let Some(end) = self.line_delimiter_end(start, i) {
                return Ok(end);
            }
            if let Some(next) = self.skip_quoted_or_comment(i)? {
                i = next;
                continue;
            }
            if self.scanner.delimiter_at(i, self.delimiter) {
                return Ok(self.delimiter_end(i));
            }
            i += 1;
        }
        Ok(self.end_of_input())
    }

    fn scan_block(&self, start: usize) -> Result<StatementEnd<'s>, TokenizeError> {
        match self.scanner.rules().block_end_mode() {
            BlockEnd::Nested(words) => self.scan_nested_block(start, &words),
            BlockEnd::LineDelimiter => self.scan_to_line_delimiter(start),
        }
    }

    /// Scan a compound block whose body nests BEGIN/END pairs
    ///
    /// Delimiters only count at depth zero: before the first opener (a block
    /// head with no body) or after the closer that balances it.
    fn scan_nested_block(
        &self,
        start: usize,
        words: &NestingWords,
    ) -> Result<StatementEnd<'s>, TokenizeError> {
        let mut depth = 0usize;
        let mut i = start;
        while i < self.scanner.len() {
            if let Some(end) = self.line_delimiter_end(start, i) {
                return Ok(end);
            }
            if let Some(next) = self.skip_quoted_or_comment(i)? {
                i = next;
                continue;
            }
            if depth == 0 && self.scanner.delimiter_at(i, self.delimiter) {
                return Ok(self.delimiter_end(i));
            }
            if let Some(word) = self.scanner.word_at(i) {
                i += word.len();
                if words.is_opener(word) {
                    depth += 1;
                } else if words.is_closer(word) && depth > 0 {
                    match self.scanner.next_word(i) {
                        Some((_, next)) if words.is_non_closing(next) => {}
                        Some((at, next)) if words.is_named_closer(next) => {
                            // END CASE closes the CASE it names
                            depth -= 1;
                            i = at + next.len();
                        }
                        _ => depth -= 1,
                    }
                }
                continue;
            }
            i += 1;
        }

        if depth > 0 {
            return Err(TokenizeError::UnmatchedBlock {
                position: start,
                line: self.scanner.line_of(start),
                snippet: self.scanner.snippet(start),
            });
        }
        Ok(self.end_of_input())
    }

    /// Scan a compound block that runs to the next line delimiter
    fn scan_to_line_delimiter(&self, start: usize) -> Result<StatementEnd<'s>, TokenizeError> {
        let mut i = start;
        while i < self.scanner.len() {
            if let Some(end) = self.line_delimiter_end(start, i) {
                return Ok(end);
            }
            if let Some(next) = self.skip_quoted_or_comment(i)? {
                i = next;
                continue;
            }
            i += 1;
        }
        Ok(self.end_of_input())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::rules::LexicalRules;
    use crate::parser::segment::reassemble;

    fn texts<'s>(segments: &[Segment<'s>]) -> Vec<&'s str> {
        segments.iter().map(|s| s.text).collect()
    }

    fn db2_rules() -> ScriptRules {
        ScriptRules::new(";")
            .directive(r"--#SET[ \t]+TERMINATOR(?:[ \t]+(\S+))?[ \t]*$")
            .block_start(r"CREATE\s+(?:OR\s+REPLACE\s+)?(?:PROCEDURE|FUNCTION|TRIGGER)\b")
    }

    #[test]
    fn test_simple_statements() {
        let rules = ScriptRules::default();
        let segments = StatementSplitter::new(&rules)
            .split("SELECT 1;\nSELECT 2 ;\n\nSELECT 3")
            .unwrap();
        assert_eq!(texts(&segments), vec!["SELECT 1", "SELECT 2", "SELECT 3"]);
        assert_eq!(segments[0].terminator, Some(";"));
        assert_eq!(segments[2].terminator, None);
        assert_eq!(segments[2].line, 4);
    }

    #[test]
    fn test_delimiter_inside_literal_and_comment() {
        let rules = ScriptRules::default();
        let sql = "INSERT INTO t VALUES ('a;b', \"c;d\") -- trailing; note\n;\nSELECT /* ; */ 1;";
        let segments = StatementSplitter::new(&rules).split(sql).unwrap();
        assert_eq!(segments.len(), 2);
        assert!(segments[0].text.ends_with("-- trailing; note"));
        assert_eq!(segments[1].text, "SELECT /* ; */ 1");
    }

    #[test]
    fn test_comments_between_statements_are_segments() {
        let rules = ScriptRules::default();
        let sql = "-- header\n/* block */\nSELECT 1; -- after\n";
        let segments = StatementSplitter::new(&rules).split(sql).unwrap();
        let kinds: Vec<_> = segments.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SegmentKind::LineComment,
                SegmentKind::BlockComment,
                SegmentKind::Statement,
                SegmentKind::LineComment,
            ]
        );
        assert_eq!(segments[0].text, "-- header");
        assert_eq!(segments[3].text, "-- after");
    }

    #[test]
    fn test_empty_statements_are_skipped() {
        let rules = ScriptRules::default();
        let segments = StatementSplitter::new(&rules).split(";;SELECT 1;;;").unwrap();
        assert_eq!(texts(&segments), vec!["SELECT 1"]);
    }

    #[test]
    fn test_terminator_directive() {
        let rules = db2_rules();
        let sql = "--#SET TERMINATOR !!\nCREATE VIEW v AS SELECT 1 FROM t; !!\n--#SET TERMINATOR\nSELECT 1;";
        let segments = StatementSplitter::new(&rules).split(sql).unwrap();
        let statements: Vec<_> = segments.iter().filter(|s| s.is_statement()).collect();
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].text, "CREATE VIEW v AS SELECT 1 FROM t;");
        assert_eq!(statements[0].terminator, Some("!!"));
        assert_eq!(statements[1].text, "SELECT 1");
        assert_eq!(statements[1].terminator, Some(";"));
        assert_eq!(
            segments
                .iter()
                .filter(|s| s.kind == SegmentKind::Directive)
                .count(),
            2
        );
    }

    #[test]
    fn test_nested_block() {
        let rules = db2_rules();
        let sql = "CREATE PROCEDURE p()\nBEGIN\n  DECLARE x INT;\n  IF x > 0 THEN\n    BEGIN\n      SET x = CASE WHEN x > 1 THEN 1 ELSE 0 END;\n    END;\n  END IF;\nEND;\nSELECT 1;";
        let segments = StatementSplitter::new(&rules).split(sql).unwrap();
        assert_eq!(segments.len(), 2);
        assert!(segments[0].text.starts_with("CREATE PROCEDURE p()"));
        assert!(segments[0].text.ends_with("END IF;\nEND"));
        assert_eq!(segments[1].text, "SELECT 1");
    }

    #[test]
    fn test_end_case_and_following_block() {
        let rules = db2_rules();
        let sql = "CREATE PROCEDURE p()\nBEGIN\n  CASE x\n    WHEN 1 THEN SET y = 1;\n  END CASE;\n  BEGIN\n    SET y = 2;\n  END;\nEND;\nSELECT 1;";
        let segments = StatementSplitter::new(&rules).split(sql).unwrap();
        assert_eq!(segments.len(), 2);
        assert!(segments[0].text.ends_with("SET y = 2;\n  END;\nEND"));
        assert_eq!(segments[1].text, "SELECT 1");
    }

    #[test]
    fn test_block_head_without_body() {
        let rules = db2_rules();
        let sql = "CREATE FUNCTION f() RETURNS INT RETURN 1;\nSELECT f();";
        let segments = StatementSplitter::new(&rules).split(sql).unwrap();
        assert_eq!(
            texts(&segments),
            vec!["CREATE FUNCTION f() RETURNS INT RETURN 1", "SELECT f()"]
        );
    }

    #[test]
    fn test_unmatched_block() {
        let rules = db2_rules();
        let sql = "SELECT 1;\nCREATE TRIGGER t AFTER INSERT ON x\nBEGIN\n  UPDATE y SET a = 1;\n";
        let err = StatementSplitter::new(&rules).split(sql).unwrap_err();
        assert!(matches!(
            err,
            TokenizeError::UnmatchedBlock { position: 10, line: 2, .. }
        ));
    }

    #[test]
    fn test_unterminated_block_comment_fails() {
        let rules = ScriptRules::default();
        let err = StatementSplitter::new(&rules)
            .split("SELECT 1;\n/* never closed\nSELECT 2;")
            .unwrap_err();
        assert!(matches!(err, TokenizeError::UnterminatedComment { .. }));
    }

    #[test]
    fn test_unterminated_literal_fails() {
        let rules = ScriptRules::default();
        let err = StatementSplitter::new(&rules)
            .split("SELECT 'open;\n")
            .unwrap_err();
        assert!(matches!(
            err,
            TokenizeError::UnterminatedLiteral { position: 7, .. }
        ));
    }

    #[test]
    fn test_line_delimiter_batches() {
        let rules = ScriptRules::new(";")
            .lexical(LexicalRules {
                identifier_quotes: &[(b'[', b']')],
                ..LexicalRules::STANDARD
            })
            .line_delimiter(r"GO;?")
            .block_start(r"CREATE\s+(?:OR\s+ALTER\s+)?(?:PROC|PROCEDURE)\b")
            .block_end(BlockEnd::LineDelimiter);
        let sql = "CREATE PROCEDURE [p] AS\nBEGIN\n  SELECT 1;\n  SELECT 2;\nEND\nGO\nSELECT 3\ngo\nSELECT 4;";
        let segments = StatementSplitter::new(&rules).split(sql).unwrap();
        assert_eq!(segments.len(), 3);
        assert!(segments[0].text.ends_with("SELECT 2;\nEND"));
        assert_eq!(segments[0].terminator, Some("GO"));
        assert_eq!(segments[1].text, "SELECT 3");
        assert_eq!(segments[1].terminator, Some("go"));
        assert_eq!(segments[2].text, "SELECT 4");
    }

    #[test]
    fn test_lossless() {
        let rules = db2_rules();
        let sql = "  -- lead\r\nSELECT 'x;y' FROM t ;  \n--#SET TERMINATOR @\nCREATE TRIGGER a BEGIN ATOMIC SET x = 1; END@\n/* tail */";
        let segments = StatementSplitter::new(&rules).split(sql).unwrap();
        assert_eq!(reassemble(sql, &segments), sql);
        for segment in &segments {
            assert_eq!(&sql[segment.start..segment.end()], segment.text);
        }
    }
}
