//! Oracle Database

use std::sync::LazyLock;

use crate::dialect::features::{DialectFeatures, FeatureDelta};
use crate::dialect::profile::{FamilyBase, FamilySpec, ProfileSpec, Quoting};
use crate::parser::{BlockEnd, ScriptRules};
use crate::types::descriptor::{
    exact, fixed, interval_day_to_second, interval_year_to_month, numeric, precise,
    precise_with_suffix, sized,
};
use crate::types::{CanonicalType as T, SurrogateRule, TypeDescriptor};
use crate::version::{Version, VersionMatch};

use super::common::{NO_ATTRIBUTES, PREFER_LOBS, STANDARD_ALIASES};

pub static FAMILY: FamilySpec = FamilySpec {
    id: "oracle",
    product_pattern: r"^Oracle",
    version_match: VersionMatch::MajorOnly,
    base,
    profiles: &PROFILES,
};

static PROFILES: [ProfileSpec; 8] = [
    ProfileSpec::new("9i", "Oracle 9i", Version::major(9), FeatureDelta::NONE),
    ProfileSpec::new("10g", "Oracle 10g", Version::major(10), FeatureDelta::NONE),
    // Before extended data types and identity columns
    ProfileSpec::new(
        "11g",
        "Oracle 11g",
        Version::major(11),
        FeatureDelta {
            identity_syntax: Some(None),
            max_identifier_length: Some(30),
            ..FeatureDelta::NONE
        },
    )
    .with_types(standard_string_types),
    ProfileSpec::new("12c", "Oracle 12c", Version::major(12), FeatureDelta::NONE),
    ProfileSpec::new("18c", "Oracle 18c", Version::major(18), FeatureDelta::NONE),
    ProfileSpec::new("19c", "Oracle 19c", Version::major(19), FeatureDelta::NONE),
    ProfileSpec::new(
        "21c",
        "Oracle 21c",
        Version::major(21),
        FeatureDelta {
            supports_boolean: Some(false),
            supports_if_exists: Some(false),
            ..FeatureDelta::NONE
        },
    ),
    ProfileSpec::new("23ai", "Oracle 23ai", Version::major(23), FeatureDelta::NONE),
];

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
        max_identifier_length: 128,
    },
    quoting: Quoting::DOUBLE_QUOTE,
    script: ScriptRules::new(";")
        .line_delimiter(r"/")
        .block_start(concat!(
            r"CREATE\s+(?:OR\s+REPLACE\s+)?(?:(?:NON)?EDITIONABLE\s+)?",
            r"(?:PROCEDURE|FUNCTION|TRIGGER|PACKAGE|TYPE\s+BODY)\b",
            r"|DECLARE\b|BEGIN\b",
        ))
        .block_end(BlockEnd::LineDelimiter),
    types: types(),
    aliases: STANDARD_ALIASES,
    attributes: NO_ATTRIBUTES,
    recommended: PREFER_LOBS,
});

fn base() -> &'static FamilyBase {
    &BASE
}

fn types() -> Vec<TypeDescriptor> {
    let mut types = extended_string_types();
    types.extend([
        TypeDescriptor::new(T::Char, &sized("CHAR"))
            .alias(&sized("CHARACTER"))
            .default_length(1)
            .bounds(1, 2000),
        TypeDescriptor::new(T::NChar, &sized("NCHAR"))
            .alias(&sized("NATIONAL CHARACTER"))
            .default_length(1)
            .bounds(1, 1000),
        TypeDescriptor::new(T::LongVarbinary, &exact("LONG RAW")),
        TypeDescriptor::new(T::LongVarchar, &exact("LONG")),
        TypeDescriptor::new(T::Clob, &exact("CLOB")),
        TypeDescriptor::new(T::NClob, &exact("NCLOB")),
        TypeDescriptor::new(T::Blob, &exact("BLOB")).alias(&exact("BFILE")),
        TypeDescriptor::new(T::Decimal, &numeric("NUMBER"))
            .alias(&numeric("DECIMAL"))
            .alias(&numeric("DEC"))
            .bounds(1, 38),
        TypeDescriptor::new(T::Numeric, &numeric("NUMERIC")).bounds(1, 38),
        TypeDescriptor::new(T::Integer, &exact("INTEGER")).alias(&exact("INT")),
        TypeDescriptor::new(T::SmallInt, &exact("SMALLINT")),
        TypeDescriptor::new(T::Real, &exact("BINARY_FLOAT")).alias(&exact("REAL")),
        TypeDescriptor::new(T::Double, &exact("BINARY_DOUBLE"))
            .alias(&exact("DOUBLE PRECISION")),
        TypeDescriptor::new(T::Float, &precise("FLOAT")).default_precision(126),
        TypeDescriptor::new(T::Date, &exact("DATE")),
        TypeDescriptor::new(
            T::TimestampWithTimeZone,
            &precise_with_suffix("TIMESTAMP", "WITH TIME ZONE"),
        )
        .default_precision(6),
        TypeDescriptor::new(
            T::TimestampWithLocalTimeZone,
            &precise_with_suffix("TIMESTAMP", "WITH LOCAL TIME ZONE"),
        )
        .default_precision(6),
        TypeDescriptor::new(T::Timestamp, &precise("TIMESTAMP")).default_precision(6),
        TypeDescriptor::new(T::IntervalYearToMonth, &interval_year_to_month())
            .default_precision(2),
        TypeDescriptor::new(T::IntervalDayToSecond, &interval_day_to_second())
            .default_precision(2)
            .default_scale(6),
        TypeDescriptor::new(T::RowId, &exact("ROWID")).alias(&sized("UROWID")),
        TypeDescriptor::new(T::Xml, &exact("XMLTYPE")).alias(&exact("SYS.XMLTYPE")),
        TypeDescriptor::new(T::Json, &exact("JSON")),
        TypeDescriptor::new(T::Boolean, &exact("BOOLEAN")),
        TypeDescriptor::new(T::Geometry, &exact("SDO_GEOMETRY"))
            .alias(&exact("MDSYS.SDO_GEOMETRY")),
    ]);
    types
}

/// String and raw types with `MAX_STRING_SIZE = EXTENDED` limits
fn extended_string_types() -> Vec<TypeDescriptor> {
    string_types(32_767, 16_383, 32_767)
}

fn standard_string_types() -> Vec<TypeDescriptor> {
    string_types(4_000, 2_000, 2_000)
}

fn string_types(varchar: u32, nvarchar: u32, raw: u32) -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::new(T::Uuid, &fixed("RAW", 16)),
        TypeDescriptor::new(T::Varbinary, &sized("RAW"))
            .bounds(1, raw)
            .surrogate(SurrogateRule::above(raw, T::Blob)),
        TypeDescriptor::new(T::Varchar, &sized("VARCHAR2"))
            .alias(&sized("VARCHAR"))
            .alias(&sized("CHARACTER VARYING"))
            .bounds(1, varchar)
            .surrogate(SurrogateRule::above(varchar, T::Clob)),
        TypeDescriptor::new(T::NVarchar, &sized("NVARCHAR2"))
            .alias(&sized("NATIONAL CHARACTER VARYING"))
            .alias(&sized("NCHAR VARYING"))
            .bounds(1, nvarchar)
            .surrogate(SurrogateRule::above(nvarchar, T::NClob)),
    ]
}
