//! Type registry and the shared parsing algorithm

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;
use tracing::trace;

use super::canonical::CanonicalType;
use super::descriptor::{TypeAttribute, TypeDescriptor};
use crate::error::TypeParseError;

/// Parenthesized size arguments, stripped when echoing a native spelling
static SIZE_ARGS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\([^)]*\)").unwrap());

/// Result of parsing a raw column type string
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedType {
    pub canonical: CanonicalType,
    /// Character/byte length, or total digits of an exact numeric
    pub length: Option<u32>,
    /// Fractional-second, float or interval leading precision
    pub precision: Option<u32>,
    /// Digits right of the decimal point; negative rounds left of it
    pub scale: Option<i32>,
    /// Native spelling, only when it differs from the canonical default
    pub native_name: Option<String>,
    pub attributes: Vec<TypeAttribute>,
}

impl ParsedType {
    /// A bare canonical type with no size information
    pub fn bare(canonical: CanonicalType) -> Self {
        Self {
            canonical,
            length: None,
            precision: None,
            scale: None,
            native_name: None,
            attributes: Vec::new(),
        }
    }

    /// The spelling to echo back: native name if retained, else canonical
    pub fn type_name(&self) -> &str {
        self.native_name
            .as_deref()
            .unwrap_or_else(|| self.canonical.default_name())
    }

    /// Length if present, otherwise precision
    pub fn size(&self) -> Option<u32> {
        self.length.or(self.precision)
    }

    pub fn has_attribute(&self, attribute: TypeAttribute) -> bool {
        self.attributes.contains(&attribute)
    }
}

impl fmt::Display for ParsedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())?;
        match (self.size(), self.scale) {
            (Some(size), Some(scale)) => write!(f, "({size},{scale})")?,
            (Some(size), None) => write!(f, "({size})")?,
            _ => {}
        }
        for attribute in &self.attributes {
            match attribute {
                TypeAttribute::Unsigned => f.write_str(" UNSIGNED")?,
                TypeAttribute::Signed => f.write_str(" SIGNED")?,
                TypeAttribute::Zerofill => f.write_str(" ZEROFILL")?,
            }
        }
        Ok(())
    }
}

/// Ordered type descriptors of one dialect plus its last-resort synonyms
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    descriptors: Vec<TypeDescriptor>,
    aliases: Vec<(&'static str, CanonicalType)>,
    attributes: Vec<(&'static str, TypeAttribute)>,
}

impl TypeRegistry {
    pub fn new(descriptors: Vec<TypeDescriptor>) -> Self {
        Self {
            descriptors,
            ..Default::default()
        }
    }

    /// Plain synonyms consulted when no descriptor pattern matches
    pub fn with_aliases(mut self, aliases: &[(&'static str, CanonicalType)]) -> Self {
        self.aliases.extend_from_slice(aliases);
        self
    }

    /// Trailing keywords recorded as attribute flags (`UNSIGNED`, ...)
    pub fn with_attributes(mut self, attributes: &[(&'static str, TypeAttribute)]) -> Self {
        self.attributes.extend_from_slice(attributes);
        self
    }

    pub fn descriptors(&self) -> &[TypeDescriptor] {
        &self.descriptors
    }

    /// First registered descriptor for a canonical type
    pub fn descriptor(&self, canonical: CanonicalType) -> Option<&TypeDescriptor> {
        self.descriptors.iter().find(|d| d.canonical == canonical)
    }

    /// Parse a raw native type string into its canonical form
    ///
    /// Descriptors are tried in registration order, each spelling of a
    /// descriptor in order; the first match wins.
    pub fn parse(&self, raw: &str) -> Result<ParsedType, TypeParseError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TypeParseError::Unrecognized(raw.to_string()));
        }

        let (body, attributes) = self.strip_attributes(trimmed);

        for descriptor in &self.descriptors {
            for pattern in descriptor.patterns() {
                if let Some(caps) = pattern.captures(body) {
                    let mut parsed = apply_descriptor(descriptor, &caps, pattern.native());
                    parsed.attributes = attributes;
                    return Ok(parsed);
                }
            }
        }

        let normalized = collapse_whitespace(body);
        if let Some((synonym, canonical)) = self
            .aliases
            .iter()
            .find(|(synonym, _)| synonym.eq_ignore_ascii_case(&normalized))
        {
            trace!(raw, synonym, %canonical, "type resolved through alias table");
            let mut parsed = ParsedType::bare(*canonical);
            parsed.native_name = retained_name(normalized, *canonical);
            parsed.attributes = attributes;
            return Ok(parsed);
        }

        Err(TypeParseError::Unrecognized(raw.to_string()))
    }

    /// Render a value as a literal of the given type
    ///
    /// Quoted literals double embedded single quotes; types without literal
    /// delimiters (numerics) are returned unchanged.
    pub fn quote_literal(&self, canonical: CanonicalType, value: &str) -> String {
        let (prefix, suffix) = match self.descriptor(canonical) {
            Some(d) => (d.literal_prefix, d.literal_suffix),
            None if canonical.is_numeric() => (None, None),
            None => (Some("'"), Some("'")),
        };
        match (prefix, suffix) {
            (Some(prefix), Some(suffix)) => {
                format!("{prefix}{}{suffix}", value.replace('\'', "''"))
            }
            _ => value.to_string(),
        }
    }

    fn strip_attributes<'a>(&self, text: &'a str) -> (&'a str, Vec<TypeAttribute>) {
        let mut body = text;
        let mut found = Vec::new();
        'outer: loop {
            for (keyword, attribute) in &self.attributes {
                if let Some(rest) = strip_trailing_word(body, keyword) {
                    body = rest;
                    found.push(*attribute);
                    continue 'outer;
                }
            }
            break;
        }
        found.reverse();
        (body, found)
    }
}

fn apply_descriptor(
    descriptor: &TypeDescriptor,
    caps: &Captures<'_>,
    fixed_native: Option<&'static str>,
) -> ParsedType {
    let capture = |name: &str| caps.name(name).map(|m| saturating_size(m.as_str()));

    let length = capture("len")
        .map(|len| len.saturating_mul(unit_multiplier(caps)))
        .or(descriptor.default_length);
    let precision = capture("prec").or(descriptor.default_precision);
    let scale = caps
        .name("scale")
        .map(|m| saturating_scale(m.as_str()))
        .or(descriptor.default_scale);

    let mut canonical = descriptor.canonical;
    let mut native = match fixed_native {
        Some(name) => name.to_string(),
        None => native_spelling(caps.get(0).map_or("", |m| m.as_str())),
    };

    if let Some(rule) = &descriptor.surrogate {
        if let Some(size) = length.or(precision) {
            if rule.applies(size) {
                trace!(from = %canonical, to = %rule.target, size, "surrogate type applied");
                canonical = rule.target;
                native = rule
                    .native
                    .unwrap_or_else(|| rule.target.default_name())
                    .to_string();
            }
        }
    }

    ParsedType {
        canonical,
        length,
        precision,
        scale,
        native_name: retained_name(native, canonical),
        attributes: Vec::new(),
    }
}

/// Captured digits as a size; values past `u32::MAX` saturate so that
/// surrogate thresholds still apply
fn saturating_size(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}

fn saturating_scale(digits: &str) -> i32 {
    digits.parse().unwrap_or(if digits.starts_with('-') {
        i32::MIN
    } else {
        i32::MAX
    })
}

fn unit_multiplier(caps: &Captures<'_>) -> u32 {
    match caps.name("unit").map(|m| m.as_str().to_ascii_uppercase()) {
        Some(unit) if unit == "K" => 1 << 10,
        Some(unit) if unit == "M" => 1 << 20,
        Some(unit) if unit == "G" => 1 << 30,
        _ => 1,
    }
}

fn retained_name(native: String, canonical: CanonicalType) -> Option<String> {
    if native.eq_ignore_ascii_case(canonical.default_name()) {
        None
    } else {
        Some(native)
    }
}

/// Matched text without size arguments, whitespace collapsed, casing kept
fn native_spelling(matched: &str) -> String {
    collapse_whitespace(&SIZE_ARGS_RE.replace_all(matched, ""))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Strip `word` from the end of `text` when it stands as a separate word
fn strip_trailing_word<'a>(text: &'a str, word: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(word.len())?;
    if !text.is_char_boundary(split) || !text[split..].eq_ignore_ascii_case(word) {
        return None;
    }
    let rest = &text[..split];
    if rest.ends_with(char::is_whitespace) {
        Some(rest.trim_end())
    } else {
        None
    }
}
