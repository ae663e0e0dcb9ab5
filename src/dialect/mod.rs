//! Dialect profiles and their resolution from product name and version
//!
//! A [`Dialect`] is one immutable profile of a product family at a given
//! release. Profiles of a family form a chain from oldest to newest; each
//! profile holds a reference to the next newer one and stores only what it
//! changes. Profiles are built once on first use and shared for the life of
//! the process.

mod families;
mod features;
mod profile;
mod resolver;

use std::sync::Arc;

pub use features::{DialectFeatures, FeatureDelta};
pub use profile::{FamilyBase, FamilySpec, ProfileSpec, Quoting};
pub use resolver::{generic_dialect, resolve_dialect, DialectResolver, VersionResolver};

use crate::error::{TokenizeError, TypeParseError};
use crate::parser::{ScriptRules, Segment, StatementSplitter};
use crate::types::{CanonicalType, ParsedType, TypeRegistry};
use crate::version::Version;

/// A resolved database dialect profile
#[derive(Debug)]
pub struct Dialect {
    family: &'static str,
    profile: &'static str,
    name: &'static str,
    since: Version,
    features: DialectFeatures,
    quoting: Quoting,
    registry: TypeRegistry,
    script: ScriptRules,
    recommended: &'static [(CanonicalType, CanonicalType)],
    next: Option<Arc<Dialect>>,
}

impl Dialect {
    /// Build a profile on top of the next newer profile of its family
    ///
    /// Without a next profile the family base is inherited directly. The
    /// profile's own type descriptors are tried before the inherited ones.
    pub(crate) fn compose(
        family: &'static FamilySpec,
        profile: &'static ProfileSpec,
        next: Option<Arc<Dialect>>,
    ) -> Self {
        let base = (family.base)();

        let inherited = next.as_ref().map_or(base.features, |n| n.features);
        let features = profile.features.apply(inherited);

        let mut descriptors = (profile.types)();
        match &next {
            Some(next) => descriptors.extend(next.registry.descriptors().iter().cloned()),
            None => descriptors.extend(base.types.iter().cloned()),
        }
        let registry = TypeRegistry::new(descriptors)
            .with_aliases(base.aliases)
            .with_attributes(base.attributes);

        Self {
            family: family.id,
            profile: profile.id,
            name: profile.name,
            since: profile.since,
            features,
            quoting: base.quoting,
            registry,
            script: base.script.clone(),
            recommended: base.recommended,
            next,
        }
    }

    /// Family identity (`"db2"`, `"oracle"`, ..., `"generic"`)
    pub fn family(&self) -> &'static str {
        self.family
    }

    /// Profile identity within the family (`"10.5"`)
    pub fn profile_id(&self) -> &'static str {
        self.profile
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Minimum version this profile applies to
    pub fn min_version(&self) -> Version {
        self.since
    }

    /// The next newer profile this one inherits from
    pub fn next(&self) -> Option<&Arc<Dialect>> {
        self.next.as_ref()
    }

    /// This profile followed by every newer profile it inherits from
    pub fn chain(&self) -> impl Iterator<Item = &Dialect> {
        std::iter::successors(Some(self), |d| d.next.as_deref())
    }

    pub fn features(&self) -> &DialectFeatures {
        &self.features
    }

    pub fn supports_sequence(&self) -> bool {
        self.features.supports_sequence
    }

    pub fn supports_cascade_delete(&self) -> bool {
        self.features.supports_cascade_delete
    }

    pub fn supports_identity(&self) -> bool {
        self.features.identity_syntax.is_some()
    }

    /// Column clause declaring an identity column
    pub fn identity_syntax(&self) -> Option<&'static str> {
        self.features.identity_syntax
    }

    pub fn supports_boolean(&self) -> bool {
        self.features.supports_boolean
    }

    pub fn supports_if_exists(&self) -> bool {
        self.features.supports_if_exists
    }

    pub fn supports_create_or_replace(&self) -> bool {
        self.features.supports_create_or_replace
    }

    pub fn max_identifier_length(&self) -> u32 {
        self.features.max_identifier_length
    }

    pub fn quoting(&self) -> Quoting {
        self.quoting
    }

    pub fn quote_identifier(&self, name: &str) -> String {
        self.quoting.quote(name)
    }

    pub fn type_registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn parse_type(&self, raw: &str) -> Result<ParsedType, TypeParseError> {
        self.registry.parse(raw)
    }

    /// Render a value as a literal of the given type
    pub fn quote_literal(&self, canonical: CanonicalType, value: &str) -> String {
        self.registry.quote_literal(canonical, value)
    }

    /// Preferred replacement for a discouraged type; the type itself when the
    /// dialect has no preference
    ///
    /// Only DDL generation consults this; [`Dialect::parse_type`] never does.
    pub fn recommended_type(&self, canonical: CanonicalType) -> CanonicalType {
        self.recommended
            .iter()
            .find(|(discouraged, _)| *discouraged == canonical)
            .map_or(canonical, |(_, preferred)| *preferred)
    }

    pub fn script_rules(&self) -> &ScriptRules {
        &self.script
    }

    /// A statement splitter bound to this dialect's script rules
    pub fn splitter(&self) -> StatementSplitter<'_> {
        StatementSplitter::new(&self.script)
    }

    pub fn split_statements<'s>(&self, script: &'s str) -> Result<Vec<Segment<'s>>, TokenizeError> {
        self.splitter().split(script)
    }
}
