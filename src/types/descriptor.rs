//! Declarative type descriptor records
//!
//! Each dialect family registers an ordered list of [`TypeDescriptor`]s. A
//! descriptor carries the canonical type it stands for, the regex spellings
//! that recognize it (primary first, then aliases), size defaults and bounds,
//! the literal delimiters for values of the type, and an optional
//! [`SurrogateRule`] that redirects the result to another canonical type once
//! a size threshold is crossed.
//!
//! Patterns are written with the helpers in this module so the tables read as
//! data:
//!
//! ```ignore
//! TypeDescriptor::new(CanonicalType::Varchar, &sized("VARCHAR"))
//!     .alias(&sized("CHARACTER VARYING"))
//!     .default_length(1)
//!     .surrogate(SurrogateRule::above(32_700, CanonicalType::Clob))
//! ```
//!
//! Named captures: `len` (length or total digits), `prec` (fractional-second,
//! float or interval precision), `scale`, and `unit` (`K`, `M` or `G`
//! multiplier of `len`).

use regex::{Captures, Regex};
use serde::Serialize;

use super::canonical::CanonicalType;

/// Join the words of a type name with flexible whitespace
pub fn words(name: &str) -> String {
    name.split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}

/// A type name with no size argument (`INTEGER`, `DOUBLE PRECISION`)
pub fn exact(name: &str) -> String {
    words(name)
}

/// A type name with an optional length argument (`VARCHAR(40)`)
///
/// Oracle's `CHAR`/`BYTE` length semantics qualifier is accepted.
pub fn sized(name: &str) -> String {
    format!(
        r"{}(?:\s*\(\s*(?P<len>\d+)(?:\s+(?:CHAR|BYTE))?\s*\))?",
        words(name)
    )
}

/// A large-object type name with an optional length and size unit
/// (`CLOB(1M)`, `BLOB(2 G)`)
pub fn lob(name: &str) -> String {
    format!(
        r"{}(?:\s*\(\s*(?P<len>\d+)\s*(?P<unit>[KMG])?\s*\))?",
        words(name)
    )
}

/// A type name with an optional length argument followed by a suffix
/// (`CHAR(16) FOR BIT DATA`)
pub fn sized_with_suffix(name: &str, suffix: &str) -> String {
    format!(r"{}\s+{}", sized(name), words(suffix))
}

/// A type name with a mandatory, exact length (`BINARY(16)`)
pub fn fixed(name: &str, length: u32) -> String {
    format!(r"{}\s*\(\s*(?P<len>{length})\s*\)", words(name))
}

/// A type name with optional precision and scale (`DECIMAL(10, 2)`)
pub fn numeric(name: &str) -> String {
    format!(
        r"{}(?:\s*\(\s*(?P<len>\d+)\s*(?:,\s*(?P<scale>-?\d+)\s*)?\))?",
        words(name)
    )
}

/// A type name with an optional precision argument (`FLOAT(53)`,
/// `DATETIME2(7)`)
pub fn precise(name: &str) -> String {
    format!(r"{}(?:\s*\(\s*(?P<prec>\d+)\s*\))?", words(name))
}

/// A temporal type name with optional fractional precision followed by a
/// suffix (`TIMESTAMP(6) WITH TIME ZONE`)
pub fn precise_with_suffix(name: &str, suffix: &str) -> String {
    format!(r"{}\s+{}", precise(name), words(suffix))
}

/// `INTERVAL DAY[(p)] TO SECOND[(s)]`
pub fn interval_day_to_second() -> String {
    r"INTERVAL\s+DAY(?:\s*\(\s*(?P<prec>\d+)\s*\))?\s+TO\s+SECOND(?:\s*\(\s*(?P<scale>\d+)\s*\))?"
        .to_string()
}

/// `INTERVAL YEAR[(p)] TO MONTH`
pub fn interval_year_to_month() -> String {
    r"INTERVAL\s+YEAR(?:\s*\(\s*(?P<prec>\d+)\s*\))?\s+TO\s+MONTH".to_string()
}

/// Vendor attribute keywords trailing a type spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TypeAttribute {
    Unsigned,
    Signed,
    Zerofill,
}

/// When a surrogate rule fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurrogateCondition {
    /// Extracted size strictly greater than the threshold
    Above(u32),
    /// Extracted size exactly equal to the value
    Equals(u32),
}

/// Redirects a parsed type to a different canonical type by size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurrogateRule {
    pub condition: SurrogateCondition,
    pub target: CanonicalType,
    /// Native spelling reported for the target; the target's default
    /// spelling when `None`
    pub native: Option<&'static str>,
}

impl SurrogateRule {
    pub fn above(threshold: u32, target: CanonicalType) -> Self {
        Self {
            condition: SurrogateCondition::Above(threshold),
            target,
            native: None,
        }
    }

    pub fn equals(size: u32, target: CanonicalType) -> Self {
        Self {
            condition: SurrogateCondition::Equals(size),
            target,
            native: None,
        }
    }

    pub fn named(mut self, native: &'static str) -> Self {
        self.native = Some(native);
        self
    }

    pub fn applies(&self, size: u32) -> bool {
        match self.condition {
            SurrogateCondition::Above(threshold) => size > threshold,
            SurrogateCondition::Equals(expected) => size == expected,
        }
    }
}

/// One compiled spelling of a descriptor
#[derive(Debug, Clone)]
pub struct TypePattern {
    regex: Regex,
    /// Fixed native name reported for matches of this spelling
    native: Option<&'static str>,
}

impl TypePattern {
    fn compile(body: &str) -> Self {
        let regex = Regex::new(&format!(r"(?i)^{body}$")).expect("Invalid type pattern");
        Self {
            regex,
            native: None,
        }
    }

    pub fn captures<'t>(&self, text: &'t str) -> Option<Captures<'t>> {
        self.regex.captures(text)
    }

    pub fn native(&self) -> Option<&'static str> {
        self.native
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// One entry of a type registry
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    pub canonical: CanonicalType,
    patterns: Vec<TypePattern>,
    pub default_length: Option<u32>,
    pub default_precision: Option<u32>,
    pub default_scale: Option<i32>,
    pub min_size: Option<u32>,
    pub max_size: Option<u32>,
    pub literal_prefix: Option<&'static str>,
    pub literal_suffix: Option<&'static str>,
    pub surrogate: Option<SurrogateRule>,
}

impl TypeDescriptor {
    /// Create a descriptor with its primary spelling
    ///
    /// Character, binary and temporal types get the usual quoted-literal
    /// delimiters; override with [`TypeDescriptor::literal`].
    pub fn new(canonical: CanonicalType, primary: &str) -> Self {
        let (literal_prefix, literal_suffix) = default_literal(canonical);
        Self {
            canonical,
            patterns: vec![TypePattern::compile(primary)],
            default_length: None,
            default_precision: None,
            default_scale: None,
            min_size: None,
            max_size: None,
            literal_prefix,
            literal_suffix,
            surrogate: None,
        }
    }

    /// Add an alias spelling, tried after the ones already registered
    pub fn alias(mut self, pattern: &str) -> Self {
        self.patterns.push(TypePattern::compile(pattern));
        self
    }

    /// Report a fixed native name for the most recently added spelling
    pub fn named(mut self, native: &'static str) -> Self {
        if let Some(last) = self.patterns.last_mut() {
            last.native = Some(native);
        }
        self
    }

    pub fn default_length(mut self, length: u32) -> Self {
        self.default_length = Some(length);
        self
    }

    pub fn default_precision(mut self, precision: u32) -> Self {
        self.default_precision = Some(precision);
        self
    }

    pub fn default_scale(mut self, scale: i32) -> Self {
        self.default_scale = Some(scale);
        self
    }

    pub fn bounds(mut self, min: u32, max: u32) -> Self {
        self.min_size = Some(min);
        self.max_size = Some(max);
        self
    }

    pub fn literal(mut self, prefix: &'static str, suffix: &'static str) -> Self {
        self.literal_prefix = Some(prefix);
        self.literal_suffix = Some(suffix);
        self
    }

    pub fn surrogate(mut self, rule: SurrogateRule) -> Self {
        self.surrogate = Some(rule);
        self
    }

    pub fn patterns(&self) -> &[TypePattern] {
        &self.patterns
    }

    /// Clamp a requested size into this descriptor's bounds
    pub fn clamp_size(&self, size: u32) -> u32 {
        let size = self.min_size.map_or(size, |min| size.max(min));
        self.max_size.map_or(size, |max| size.min(max))
    }
}

fn default_literal(canonical: CanonicalType) -> (Option<&'static str>, Option<&'static str>) {
    if canonical.is_numeric() || matches!(canonical, CanonicalType::Boolean | CanonicalType::Bit) {
        (None, None)
    } else if canonical.is_binary() {
        (Some("X'"), Some("'"))
    } else {
        (Some("'"), Some("'"))
    }
}
