//! Declarative family and version profile records

use crate::parser::ScriptRules;
use crate::types::{CanonicalType, TypeAttribute, TypeDescriptor};
use crate::version::{Version, VersionMatch};

use super::features::{DialectFeatures, FeatureDelta};

/// Identifier quote characters of a dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quoting {
    pub open: char,
    pub close: char,
}

impl Quoting {
    pub const DOUBLE_QUOTE: Quoting = Quoting {
        open: '"',
        close: '"',
    };
    pub const BACKTICK: Quoting = Quoting {
        open: '`',
        close: '`',
    };
    pub const BRACKETS: Quoting = Quoting {
        open: '[',
        close: ']',
    };

    /// Quote an identifier, doubling any embedded closing quote
    pub fn quote(&self, name: &str) -> String {
        let mut doubled = String::with_capacity(self.close.len_utf8() * 2);
        doubled.push(self.close);
        doubled.push(self.close);
        format!(
            "{}{}{}",
            self.open,
            name.replace(self.close, &doubled),
            self.close
        )
    }
}

/// Behavior of the newest release of a family
///
/// Every version profile starts from this and applies the deltas of the
/// profiles between it and the newest one.
#[derive(Debug)]
pub struct FamilyBase {
    pub features: DialectFeatures,
    pub quoting: Quoting,
    pub script: ScriptRules,
    pub types: Vec<TypeDescriptor>,
    /// Last-resort plain synonyms
    pub aliases: &'static [(&'static str, CanonicalType)],
    pub attributes: &'static [(&'static str, TypeAttribute)],
    /// Discouraged type → preferred type, for DDL generation
    pub recommended: &'static [(CanonicalType, CanonicalType)],
}

/// One known release of a family and what it changes relative to the next
/// newer release
#[derive(Debug)]
pub struct ProfileSpec {
    /// Stable profile identity, unique within the family (`"10.5"`)
    pub id: &'static str,
    pub name: &'static str,
    /// Minimum version this profile applies to
    pub since: Version,
    pub features: FeatureDelta,
    /// Descriptors tried before the inherited ones
    pub types: fn() -> Vec<TypeDescriptor>,
}

impl ProfileSpec {
    /// A profile that only differs in its feature flags
    pub const fn new(
        id: &'static str,
        name: &'static str,
        since: Version,
        features: FeatureDelta,
    ) -> Self {
        Self {
            id,
            name,
            since,
            features,
            types: no_type_overrides,
        }
    }

    pub const fn with_types(mut self, types: fn() -> Vec<TypeDescriptor>) -> Self {
        self.types = types;
        self
    }
}

/// A product family: the name pattern it answers to and its profiles
#[derive(Debug)]
pub struct FamilySpec {
    /// Family identity (`"db2"`)
    pub id: &'static str,
    /// Matched case-insensitively against the trimmed product name
    pub product_pattern: &'static str,
    pub version_match: VersionMatch,
    pub base: fn() -> &'static FamilyBase,
    /// Ordered oldest to newest
    pub profiles: &'static [ProfileSpec],
}

impl FamilySpec {
    /// Index of the newest profile whose minimum version does not exceed
    /// `version`, or the oldest profile when all of them do
    pub fn profile_index(&self, version: Version) -> usize {
        let requested = version.truncate(self.version_match);
        self.profiles
            .iter()
            .rposition(|p| p.since.truncate(self.version_match) <= requested)
            .unwrap_or(0)
    }
}

fn no_type_overrides() -> Vec<TypeDescriptor> {
    Vec::new()
}
