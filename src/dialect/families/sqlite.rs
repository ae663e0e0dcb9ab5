//! SQLite

use std::sync::LazyLock;

use crate::dialect::features::{DialectFeatures, FeatureDelta};
use crate::dialect::profile::{FamilyBase, FamilySpec, ProfileSpec, Quoting};
use crate::parser::{LexicalRules, ScriptRules};
use crate::types::descriptor::{exact, numeric, precise, sized};
use crate::types::{CanonicalType as T, TypeDescriptor};
use crate::version::{Version, VersionMatch};

use super::common::{NO_ATTRIBUTES, STANDARD_ALIASES};

pub static FAMILY: FamilySpec = FamilySpec {
    id: "sqlite",
    product_pattern: r"^SQLite",
    version_match: VersionMatch::Full,
    base,
    profiles: &PROFILES,
};

static PROFILES: [ProfileSpec; 3] = [
    ProfileSpec::new("3.0", "SQLite 3.0", Version::new(3, 0, 0), FeatureDelta::NONE),
    ProfileSpec::new(
        "3.25",
        "SQLite 3.25",
        Version::new(3, 25, 0),
        FeatureDelta {
            supports_returning: Some(false),
            ..FeatureDelta::NONE
        },
    ),
    ProfileSpec::new("3.35", "SQLite 3.35", Version::new(3, 35, 0), FeatureDelta::NONE),
];

const LEXICAL: LexicalRules = LexicalRules {
    identifier_quotes: &[(b'`', b'`'), (b'[', b']')],
    line_comment_prefixes: &[],
    nested_block_comments: false,
    dollar_quotes: false,
    backslash_escapes: false,
};

static BASE: LazyLock<FamilyBase> = LazyLock::new(|| FamilyBase {
    features: DialectFeatures {
        supports_sequence: false,
        supports_cascade_delete: true,
        identity_syntax: Some("AUTOINCREMENT"),
        supports_boolean: false,
        supports_if_exists: true,
        supports_create_or_replace: false,
        supports_check_constraints: true,
        supports_schemas: false,
        supports_comment_on: false,
        supports_returning: true,
        supports_merge: false,
        // No fixed limit
        max_identifier_length: u32::MAX,
    },
    quoting: Quoting::DOUBLE_QUOTE,
    script: ScriptRules::new(";")
        .lexical(LEXICAL)
        .block_start(r"CREATE\s+(?:TEMP(?:ORARY)?\s+)?TRIGGER\b"),
    types: types(),
    aliases: STANDARD_ALIASES,
    attributes: NO_ATTRIBUTES,
    recommended: &[],
});

fn base() -> &'static FamilyBase {
    &BASE
}

fn types() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::new(T::Integer, &exact("INTEGER"))
            .alias(&exact("INT"))
            .alias(&exact("MEDIUMINT")),
        TypeDescriptor::new(T::TinyInt, &exact("TINYINT")),
        TypeDescriptor::new(T::SmallInt, &exact("SMALLINT")),
        TypeDescriptor::new(T::BigInt, &exact("BIGINT")).alias(&exact("UNSIGNED BIG INT")),
        TypeDescriptor::new(T::Real, &exact("REAL")),
        TypeDescriptor::new(T::Double, &exact("DOUBLE")).alias(&exact("DOUBLE PRECISION")),
        TypeDescriptor::new(T::Float, &precise("FLOAT")),
        TypeDescriptor::new(T::Numeric, &numeric("NUMERIC")),
        TypeDescriptor::new(T::Decimal, &numeric("DECIMAL")),
        TypeDescriptor::new(T::Boolean, &exact("BOOLEAN")),
        TypeDescriptor::new(T::Char, &sized("CHAR")).alias(&sized("CHARACTER")),
        TypeDescriptor::new(T::Varchar, &sized("VARCHAR"))
            .alias(&sized("VARYING CHARACTER")),
        TypeDescriptor::new(T::NChar, &sized("NCHAR")).alias(&sized("NATIVE CHARACTER")),
        TypeDescriptor::new(T::NVarchar, &sized("NVARCHAR")),
        TypeDescriptor::new(T::Clob, &exact("TEXT")).alias(&exact("CLOB")),
        TypeDescriptor::new(T::Blob, &exact("BLOB")),
        TypeDescriptor::new(T::Date, &exact("DATE")),
        TypeDescriptor::new(T::Timestamp, &exact("DATETIME")).alias(&exact("TIMESTAMP")),
    ]
}
