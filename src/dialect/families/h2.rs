//! H2 Database Engine

use std::sync::LazyLock;

use crate::dialect::features::{DialectFeatures, FeatureDelta};
use crate::dialect::profile::{FamilyBase, FamilySpec, ProfileSpec, Quoting};
use crate::parser::{LexicalRules, ScriptRules};
use crate::types::descriptor::{
    exact, interval_day_to_second, interval_year_to_month, lob, numeric, precise,
    precise_with_suffix, sized,
};
use crate::types::{CanonicalType as T, TypeDescriptor};
use crate::version::{Version, VersionMatch};

use super::common::{NO_ATTRIBUTES, STANDARD_ALIASES};

pub static FAMILY: FamilySpec = FamilySpec {
    id: "h2",
    product_pattern: r"^H2",
    version_match: VersionMatch::MajorMinor,
    base,
    profiles: &PROFILES,
};

static PROFILES: [ProfileSpec; 2] = [
    ProfileSpec::new(
        "1.4",
        "H2 1.4",
        Version::new(1, 4, 0),
        FeatureDelta {
            identity_syntax: Some(Some("AUTO_INCREMENT")),
            ..FeatureDelta::NONE
        },
    ),
    ProfileSpec::new("2.x", "H2 2.x", Version::major(2), FeatureDelta::NONE),
];

const LEXICAL: LexicalRules = LexicalRules {
    identifier_quotes: &[],
    line_comment_prefixes: &["//"],
    nested_block_comments: true,
    dollar_quotes: true,
    backslash_escapes: false,
};

static BASE: LazyLock<FamilyBase> = LazyLock::new(|| FamilyBase {
    features: DialectFeatures {
        supports_sequence: true,
        supports_cascade_delete: true,
        identity_syntax: Some("GENERATED BY DEFAULT AS IDENTITY"),
        supports_boolean: true,
        supports_if_exists: true,
        supports_create_or_replace: true,
        supports_check_constraints: true,
        supports_schemas: true,
        supports_comment_on: true,
        supports_returning: false,
        supports_merge: true,
        max_identifier_length: 256,
    },
    quoting: Quoting::DOUBLE_QUOTE,
    // Alias and trigger sources are `$$` literals
    script: ScriptRules::new(";").lexical(LEXICAL),
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
        TypeDescriptor::new(T::Boolean, &exact("BOOLEAN"))
            .alias(&exact("BOOL"))
            .alias(&exact("BIT")),
        TypeDescriptor::new(T::TinyInt, &exact("TINYINT")),
        TypeDescriptor::new(T::SmallInt, &exact("SMALLINT")).alias(&exact("INT2")),
        TypeDescriptor::new(T::Integer, &exact("INTEGER"))
            .alias(&exact("INT"))
            .alias(&exact("INT4"))
            .alias(&exact("MEDIUMINT")),
        TypeDescriptor::new(T::BigInt, &exact("BIGINT")).alias(&exact("INT8")),
        TypeDescriptor::new(T::Decimal, &numeric("DECIMAL")).alias(&numeric("DEC")),
        TypeDescriptor::new(T::Numeric, &numeric("NUMERIC")).alias(&numeric("NUMBER")),
        TypeDescriptor::new(T::DecFloat, &precise("DECFLOAT")),
        TypeDescriptor::new(T::Real, &exact("REAL")).alias(&exact("FLOAT4")),
        TypeDescriptor::new(T::Double, &exact("DOUBLE PRECISION"))
            .alias(&exact("DOUBLE"))
            .alias(&exact("FLOAT8")),
        TypeDescriptor::new(T::Float, &precise("FLOAT")),
        TypeDescriptor::new(T::Char, &sized("CHAR"))
            .alias(&sized("CHARACTER"))
            .default_length(1),
        TypeDescriptor::new(T::Varchar, &sized("VARCHAR"))
            .alias(&sized("CHARACTER VARYING"))
            .alias(&sized("VARCHAR2"))
            .alias(&sized("VARCHAR_IGNORECASE"))
            .bounds(1, 1_000_000),
        TypeDescriptor::new(T::Clob, &lob("CLOB"))
            .alias(&lob("CHARACTER LARGE OBJECT"))
            .alias(&exact("TEXT")),
        TypeDescriptor::new(T::Binary, &sized("BINARY")).default_length(1),
        TypeDescriptor::new(T::Varbinary, &sized("VARBINARY")).alias(&sized("BINARY VARYING")),
        TypeDescriptor::new(T::Blob, &lob("BLOB")).alias(&lob("BINARY LARGE OBJECT")),
        TypeDescriptor::new(T::Date, &exact("DATE")),
        TypeDescriptor::new(T::TimeWithTimeZone, &precise_with_suffix("TIME", "WITH TIME ZONE")),
        TypeDescriptor::new(T::Time, &precise("TIME")),
        TypeDescriptor::new(
            T::TimestampWithTimeZone,
            &precise_with_suffix("TIMESTAMP", "WITH TIME ZONE"),
        ),
        TypeDescriptor::new(T::Timestamp, &precise("TIMESTAMP")).alias(&precise("DATETIME")),
        TypeDescriptor::new(T::IntervalYearToMonth, &interval_year_to_month()),
        TypeDescriptor::new(T::IntervalDayToSecond, &interval_day_to_second()),
        TypeDescriptor::new(T::Uuid, &exact("UUID")),
        TypeDescriptor::new(T::Json, &exact("JSON")),
        TypeDescriptor::new(T::Geometry, &exact("GEOMETRY")),
        TypeDescriptor::new(T::Other, &exact("JAVA_OBJECT")).alias(&exact("OTHER")),
    ]
}
