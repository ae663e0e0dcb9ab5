//! Per-dialect script conventions, expressed as data
//!
//! One scanning algorithm serves every dialect. What differs between vendors is
//! captured here: how literals and comments are written, which in-script
//! directive changes the statement terminator, which statements open a
//! compound block, and how such a block ends.

use regex::Regex;

/// How comments and quoted regions are written
#[derive(Debug, Clone, Copy)]
pub struct LexicalRules {
    /// Quote pairs for delimited identifiers, on top of `'` and `"`
    pub identifier_quotes: &'static [(u8, u8)],
    /// Line comment prefixes, on top of `--`
    pub line_comment_prefixes: &'static [&'static str],
    /// `/* /* */ */` nests
    pub nested_block_comments: bool,
    /// `$tag$ ... $tag$` bodies are literals
    pub dollar_quotes: bool,
    /// Backslash escapes the next character inside literals
    pub backslash_escapes: bool,
}

impl LexicalRules {
    pub const STANDARD: LexicalRules = LexicalRules {
        identifier_quotes: &[],
        line_comment_prefixes: &[],
        nested_block_comments: false,
        dollar_quotes: false,
        backslash_escapes: false,
    };
}

impl Default for LexicalRules {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Words that open and close a compound block
#[derive(Debug, Clone, Copy)]
pub struct NestingWords {
    /// Each occurrence opens one level (`BEGIN`, `CASE`)
    pub openers: &'static [&'static str],
    /// Closes one level (`END`)
    pub closer: &'static str,
    /// A closer followed by one of these closes a control statement, not a
    /// block (`END IF`, `END LOOP`)
    pub non_closing: &'static [&'static str],
    /// Openers that may be repeated after their closer (`END CASE`)
    pub named_closers: &'static [&'static str],
}

impl NestingWords {
    pub const BEGIN_END: NestingWords = NestingWords {
        openers: &["BEGIN", "CASE"],
        closer: "END",
        non_closing: &["IF", "LOOP", "WHILE", "REPEAT", "FOR"],
        named_closers: &["CASE"],
    };

    pub fn is_opener(&self, word: &str) -> bool {
        self.openers.iter().any(|w| w.eq_ignore_ascii_case(word))
    }

    pub fn is_closer(&self, word: &str) -> bool {
        self.closer.eq_ignore_ascii_case(word)
    }

    pub fn is_non_closing(&self, word: &str) -> bool {
        self.non_closing.iter().any(|w| w.eq_ignore_ascii_case(word))
    }

    pub fn is_named_closer(&self, word: &str) -> bool {
        self.named_closers.iter().any(|w| w.eq_ignore_ascii_case(word))
    }
}

/// How a detected compound block finds its end
#[derive(Debug, Clone, Copy)]
pub enum BlockEnd {
    /// The END that brings nesting back to zero, then the next active
    /// delimiter
    Nested(NestingWords),
    /// The next line delimiter, or end of input
    LineDelimiter,
}

/// Script splitting conventions of one dialect
#[derive(Debug, Clone)]
pub struct ScriptRules {
    pub default_delimiter: &'static str,
    pub lexical: LexicalRules,
    directive: Option<Regex>,
    block_start: Option<Regex>,
    block_end: BlockEnd,
    line_delimiter: Option<Regex>,
}

impl Default for ScriptRules {
    fn default() -> Self {
        Self::new(";")
    }
}

impl ScriptRules {
    pub fn new(default_delimiter: &'static str) -> Self {
        Self {
            default_delimiter,
            lexical: LexicalRules::STANDARD,
            directive: None,
            block_start: None,
            block_end: BlockEnd::Nested(NestingWords::BEGIN_END),
            line_delimiter: None,
        }
    }

    pub fn lexical(mut self, lexical: LexicalRules) -> Self {
        self.lexical = lexical;
        self
    }

    /// Delimiter-change directive, matched at a statement boundary
    ///
    /// Capture group 1 holds the new delimiter; when it does not participate
    /// the delimiter resets to the default. The pattern is anchored at the
    /// boundary and `$` matches at end of line.
    pub fn directive(mut self, pattern: &str) -> Self {
        self.directive = Some(compile(&format!(r"(?im)\A(?:{pattern})")));
        self
    }

    /// Statement heads that open a compound block
    pub fn block_start(mut self, pattern: &str) -> Self {
        self.block_start = Some(compile(&format!(r"(?is)\A(?:{pattern})")));
        self
    }

    pub fn block_end(mut self, block_end: BlockEnd) -> Self {
        self.block_end = block_end;
        self
    }

    /// Batch separator that must stand alone on its line
    pub fn line_delimiter(mut self, pattern: &str) -> Self {
        self.line_delimiter = Some(compile(&format!(r"(?i)\A[ \t]*(?:{pattern})[ \t]*\r?\z")));
        self
    }

    /// Match a delimiter-change directive at the start of `text`
    ///
    /// Returns the directive's length and the requested delimiter, if any.
    pub fn match_directive<'t>(&self, text: &'t str) -> Option<(usize, Option<&'t str>)> {
        let caps = self.directive.as_ref()?.captures(text)?;
        let whole = caps.get(0)?;
        let length = whole.as_str().trim_end().len();
        Some((length, caps.get(1).map(|m| m.as_str())))
    }

    pub fn starts_block(&self, text: &str) -> bool {
        self.block_start
            .as_ref()
            .is_some_and(|re| re.is_match(text))
    }

    pub fn block_end_mode(&self) -> BlockEnd {
        self.block_end
    }

    pub fn has_line_delimiter(&self) -> bool {
        self.line_delimiter.is_some()
    }

    /// Whether `line` (without its newline) is a line delimiter
    pub fn is_line_delimiter(&self, line: &str) -> bool {
        self.line_delimiter
            .as_ref()
            .is_some_and(|re| re.is_match(line))
    }
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid script rule pattern")
}
