//! Fallback for products no family claims

use std::sync::LazyLock;

use crate::dialect::features::{DialectFeatures, FeatureDelta};
use crate::dialect::profile::{FamilyBase, FamilySpec, ProfileSpec, Quoting};
use crate::parser::ScriptRules;
use crate::version::{Version, VersionMatch};

use super::common::{ansi_types, NO_ATTRIBUTES, STANDARD_ALIASES};

/// Not registered for name matching; only reached as the fallback
pub static FAMILY: FamilySpec = FamilySpec {
    id: "generic",
    product_pattern: r"\A\z",
    version_match: VersionMatch::MajorOnly,
    base,
    profiles: &PROFILES,
};

static PROFILES: [ProfileSpec; 1] = [ProfileSpec::new(
    "generic",
    "Generic SQL",
    Version::major(0),
    FeatureDelta::NONE,
)];

static BASE: LazyLock<FamilyBase> = LazyLock::new(|| FamilyBase {
    features: DialectFeatures::default(),
    quoting: Quoting::DOUBLE_QUOTE,
    script: ScriptRules::default(),
    types: ansi_types(),
    aliases: STANDARD_ALIASES,
    attributes: NO_ATTRIBUTES,
    recommended: &[],
});

fn base() -> &'static FamilyBase {
    &BASE
}
