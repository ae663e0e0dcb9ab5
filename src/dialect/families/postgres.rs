//! PostgreSQL

use std::sync::LazyLock;

use crate::dialect::features::{DialectFeatures, FeatureDelta};
use crate::dialect::profile::{FamilyBase, FamilySpec, ProfileSpec, Quoting};
use crate::parser::{LexicalRules, ScriptRules};
use crate::types::descriptor::{
    exact, interval_day_to_second, interval_year_to_month, numeric, precise,
    precise_with_suffix, sized,
};
use crate::types::{CanonicalType as T, TypeDescriptor};
use crate::version::{Version, VersionMatch};

use super::common::NO_ATTRIBUTES;

pub static FAMILY: FamilySpec = FamilySpec {
    id: "postgres",
    product_pattern: r"^Postgre(?:SQL|s)",
    version_match: VersionMatch::MajorMinor,
    base,
    profiles: &PROFILES,
};

static PROFILES: [ProfileSpec; 6] = [
    ProfileSpec::new("8.4", "PostgreSQL 8.4", Version::new(8, 4, 0), FeatureDelta::NONE),
    ProfileSpec::new("9.0", "PostgreSQL 9.0", Version::new(9, 0, 0), FeatureDelta::NONE),
    // SERIAL pseudo-types only before 10
    ProfileSpec::new(
        "9.5",
        "PostgreSQL 9.5",
        Version::new(9, 5, 0),
        FeatureDelta {
            identity_syntax: Some(None),
            ..FeatureDelta::NONE
        },
    ),
    ProfileSpec::new("10", "PostgreSQL 10", Version::major(10), FeatureDelta::NONE),
    ProfileSpec::new(
        "12",
        "PostgreSQL 12",
        Version::major(12),
        FeatureDelta {
            supports_merge: Some(false),
            ..FeatureDelta::NONE
        },
    ),
    ProfileSpec::new("15", "PostgreSQL 15", Version::major(15), FeatureDelta::NONE),
];

const LEXICAL: LexicalRules = LexicalRules {
    identifier_quotes: &[],
    line_comment_prefixes: &[],
    nested_block_comments: true,
    dollar_quotes: true,
    backslash_escapes: false,
};

const ALIASES: &[(&str, T)] = &[
    ("NAME", T::Varchar),
    ("CITEXT", T::Clob),
    ("INET", T::Varchar),
    ("CIDR", T::Varchar),
    ("MACADDR", T::Varchar),
    ("OID", T::BigInt),
    ("TSVECTOR", T::Other),
    ("HSTORE", T::Other),
];

const RECOMMENDED: &[(T, T)] = &[(T::Money, T::Decimal), (T::Char, T::Varchar)];

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
        supports_returning: true,
        supports_merge: true,
        max_identifier_length: 63,
    },
    quoting: Quoting::DOUBLE_QUOTE,
    // Dollar-quoted bodies are skipped as literals; `BEGIN ATOMIC` bodies nest
    script: ScriptRules::new(";")
        .lexical(LEXICAL)
        .block_start(r"CREATE\s+(?:OR\s+REPLACE\s+)?(?:FUNCTION|PROCEDURE)\b"),
    types: types(),
    aliases: ALIASES,
    attributes: NO_ATTRIBUTES,
    recommended: RECOMMENDED,
});

fn base() -> &'static FamilyBase {
    &BASE
}

fn types() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::new(T::SmallInt, &exact("SMALLINT")).alias(&exact("INT2")),
        TypeDescriptor::new(T::Integer, &exact("INTEGER"))
            .alias(&exact("INT"))
            .alias(&exact("INT4")),
        TypeDescriptor::new(T::BigInt, &exact("BIGINT")).alias(&exact("INT8")),
        TypeDescriptor::new(T::SmallInt, &exact("SMALLSERIAL")).alias(&exact("SERIAL2")),
        TypeDescriptor::new(T::Integer, &exact("SERIAL")).alias(&exact("SERIAL4")),
        TypeDescriptor::new(T::BigInt, &exact("BIGSERIAL")).alias(&exact("SERIAL8")),
        TypeDescriptor::new(T::Decimal, &numeric("DECIMAL"))
            .alias(&numeric("DEC"))
            .bounds(1, 1000),
        TypeDescriptor::new(T::Numeric, &numeric("NUMERIC")).bounds(1, 1000),
        TypeDescriptor::new(T::Real, &exact("REAL")).alias(&exact("FLOAT4")),
        TypeDescriptor::new(T::Double, &exact("DOUBLE PRECISION")).alias(&exact("FLOAT8")),
        TypeDescriptor::new(T::Float, &precise("FLOAT")).default_precision(53),
        TypeDescriptor::new(T::Money, &exact("MONEY")),
        TypeDescriptor::new(T::Boolean, &exact("BOOLEAN")).alias(&exact("BOOL")),
        TypeDescriptor::new(T::Char, &sized("CHAR"))
            .alias(&sized("CHARACTER"))
            .alias(&sized("BPCHAR"))
            .default_length(1)
            .bounds(1, 10_485_760),
        TypeDescriptor::new(T::Varchar, &sized("VARCHAR"))
            .alias(&sized("CHARACTER VARYING"))
            .bounds(1, 10_485_760),
        TypeDescriptor::new(T::Clob, &exact("TEXT")),
        TypeDescriptor::new(T::Varbinary, &exact("BYTEA")),
        TypeDescriptor::new(T::Bit, &sized("BIT"))
            .alias(&sized("BIT VARYING"))
            .alias(&sized("VARBIT"))
            .default_length(1),
        TypeDescriptor::new(T::Date, &exact("DATE")),
        TypeDescriptor::new(T::TimeWithTimeZone, &precise_with_suffix("TIME", "WITH TIME ZONE"))
            .alias(&precise("TIMETZ"))
            .default_precision(6),
        TypeDescriptor::new(T::Time, &precise("TIME"))
            .alias(&precise_with_suffix("TIME", "WITHOUT TIME ZONE"))
            .default_precision(6),
        TypeDescriptor::new(
            T::TimestampWithTimeZone,
            &precise_with_suffix("TIMESTAMP", "WITH TIME ZONE"),
        )
        .alias(&precise("TIMESTAMPTZ"))
        .default_precision(6),
        TypeDescriptor::new(T::Timestamp, &precise("TIMESTAMP"))
            .alias(&precise_with_suffix("TIMESTAMP", "WITHOUT TIME ZONE"))
            .default_precision(6),
        TypeDescriptor::new(T::IntervalYearToMonth, &interval_year_to_month()),
        TypeDescriptor::new(T::IntervalDayToSecond, &interval_day_to_second())
            .alias(&precise("INTERVAL")),
        TypeDescriptor::new(T::Uuid, &exact("UUID")),
        TypeDescriptor::new(T::Json, &exact("JSON")).alias(&exact("JSONB")),
        TypeDescriptor::new(T::Xml, &exact("XML")),
        TypeDescriptor::new(T::Geometry, &exact("GEOMETRY"))
            .alias(&exact("GEOGRAPHY"))
            .alias(&exact("POINT"))
            .alias(&exact("POLYGON")),
        // Element type followed by one or more `[]` / `[n]`
        TypeDescriptor::new(
            T::Array,
            r"[A-Za-z_][A-Za-z0-9_ ]*(?:\(\s*\d+(?:\s*,\s*\d+)?\s*\))?(?:\s*\[\s*\d*\s*\])+",
        ),
    ]
}
