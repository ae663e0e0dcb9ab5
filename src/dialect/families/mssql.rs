//! Microsoft SQL Server

use std::sync::LazyLock;

use crate::dialect::features::{DialectFeatures, FeatureDelta};
use crate::dialect::profile::{FamilyBase, FamilySpec, ProfileSpec, Quoting};
use crate::parser::{BlockEnd, LexicalRules, ScriptRules};
use crate::types::descriptor::{exact, numeric, precise, sized, words};
use crate::types::{CanonicalType as T, SurrogateRule, TypeDescriptor};
use crate::version::{Version, VersionMatch};

use super::common::{NO_ATTRIBUTES, PREFER_LOBS};

pub static FAMILY: FamilySpec = FamilySpec {
    id: "mssql",
    product_pattern: r"SQL\s*Server",
    version_match: VersionMatch::MajorOnly,
    base,
    profiles: &PROFILES,
};

static PROFILES: [ProfileSpec; 8] = [
    ProfileSpec::new(
        "2005",
        "SQL Server 2005",
        Version::major(9),
        FeatureDelta {
            supports_merge: Some(false),
            ..FeatureDelta::NONE
        },
    ),
    ProfileSpec::new(
        "2008",
        "SQL Server 2008",
        Version::major(10),
        FeatureDelta {
            supports_sequence: Some(false),
            ..FeatureDelta::NONE
        },
    ),
    ProfileSpec::new("2012", "SQL Server 2012", Version::major(11), FeatureDelta::NONE),
    ProfileSpec::new(
        "2014",
        "SQL Server 2014",
        Version::major(12),
        FeatureDelta {
            supports_if_exists: Some(false),
            supports_create_or_replace: Some(false),
            ..FeatureDelta::NONE
        },
    ),
    ProfileSpec::new("2016", "SQL Server 2016", Version::major(13), FeatureDelta::NONE),
    ProfileSpec::new("2017", "SQL Server 2017", Version::major(14), FeatureDelta::NONE),
    ProfileSpec::new("2019", "SQL Server 2019", Version::major(15), FeatureDelta::NONE),
    ProfileSpec::new("2022", "SQL Server 2022", Version::major(16), FeatureDelta::NONE),
];

const LEXICAL: LexicalRules = LexicalRules {
    identifier_quotes: &[(b'[', b']')],
    line_comment_prefixes: &[],
    nested_block_comments: true,
    dollar_quotes: false,
    backslash_escapes: false,
};

const ALIASES: &[(&str, T)] = &[
    ("SYSNAME", T::NVarchar),
    ("DOUBLE PRECISION", T::Float),
    ("CURSOR", T::Other),
    ("TABLE", T::Other),
];

static BASE: LazyLock<FamilyBase> = LazyLock::new(|| FamilyBase {
    features: DialectFeatures {
        supports_sequence: true,
        supports_cascade_delete: true,
        identity_syntax: Some("IDENTITY(1,1)"),
        supports_boolean: false,
        supports_if_exists: true,
        supports_create_or_replace: true,
        supports_check_constraints: true,
        supports_schemas: true,
        supports_comment_on: false,
        supports_returning: false,
        supports_merge: true,
        max_identifier_length: 128,
    },
    quoting: Quoting::BRACKETS,
    script: ScriptRules::new(";")
        .lexical(LEXICAL)
        .line_delimiter(r"GO(?:[ \t]+\d+)?[ \t]*;?")
        .block_start(r"(?:CREATE(?:\s+OR\s+ALTER)?|ALTER)\s+(?:PROC|PROCEDURE|FUNCTION|TRIGGER)\b")
        .block_end(BlockEnd::LineDelimiter),
    types: types(),
    aliases: ALIASES,
    attributes: NO_ATTRIBUTES,
    recommended: PREFER_LOBS,
});

fn base() -> &'static FamilyBase {
    &BASE
}

/// `VARCHAR(MAX)` and friends
fn max(name: &str) -> String {
    format!(r"{}\s*\(\s*MAX\s*\)", words(name))
}

fn types() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::new(T::Bit, &exact("BIT")),
        TypeDescriptor::new(T::TinyInt, &exact("TINYINT")),
        TypeDescriptor::new(T::SmallInt, &exact("SMALLINT")),
        TypeDescriptor::new(T::Integer, &exact("INT")).alias(&exact("INTEGER")),
        TypeDescriptor::new(T::BigInt, &exact("BIGINT")),
        TypeDescriptor::new(T::Decimal, &numeric("DECIMAL"))
            .alias(&numeric("DEC"))
            .default_length(18)
            .default_scale(0)
            .bounds(1, 38),
        TypeDescriptor::new(T::Numeric, &numeric("NUMERIC"))
            .default_length(18)
            .default_scale(0)
            .bounds(1, 38),
        TypeDescriptor::new(T::Money, &exact("MONEY")).alias(&exact("SMALLMONEY")),
        TypeDescriptor::new(T::Float, &precise("FLOAT")).default_precision(53),
        TypeDescriptor::new(T::Real, &exact("REAL")),
        TypeDescriptor::new(T::Clob, &max("VARCHAR")).named("VARCHAR(MAX)"),
        TypeDescriptor::new(T::NClob, &max("NVARCHAR")).named("NVARCHAR(MAX)"),
        TypeDescriptor::new(T::Blob, &max("VARBINARY")).named("VARBINARY(MAX)"),
        TypeDescriptor::new(T::Char, &sized("CHAR"))
            .alias(&sized("CHARACTER"))
            .default_length(1)
            .bounds(1, 8000),
        TypeDescriptor::new(T::Varchar, &sized("VARCHAR"))
            .alias(&sized("CHARACTER VARYING"))
            .alias(&sized("CHAR VARYING"))
            .default_length(1)
            .bounds(1, 8000)
            .surrogate(SurrogateRule::above(8000, T::Clob).named("VARCHAR(MAX)")),
        TypeDescriptor::new(T::NChar, &sized("NCHAR"))
            .alias(&sized("NATIONAL CHARACTER"))
            .default_length(1)
            .bounds(1, 4000),
        TypeDescriptor::new(T::NVarchar, &sized("NVARCHAR"))
            .alias(&sized("NATIONAL CHARACTER VARYING"))
            .default_length(1)
            .bounds(1, 4000)
            .surrogate(SurrogateRule::above(4000, T::NClob).named("NVARCHAR(MAX)")),
        TypeDescriptor::new(T::Clob, &exact("TEXT")),
        TypeDescriptor::new(T::NClob, &exact("NTEXT")),
        TypeDescriptor::new(T::Uuid, &exact("UNIQUEIDENTIFIER")),
        TypeDescriptor::new(T::Binary, &sized("BINARY"))
            .default_length(1)
            .bounds(1, 8000),
        TypeDescriptor::new(T::Varbinary, &sized("VARBINARY"))
            .default_length(1)
            .bounds(1, 8000)
            .surrogate(SurrogateRule::above(8000, T::Blob).named("VARBINARY(MAX)")),
        TypeDescriptor::new(T::Blob, &exact("IMAGE")),
        // TIMESTAMP is a row version stamp here, not a date and time
        TypeDescriptor::new(T::Binary, &exact("ROWVERSION"))
            .alias(&exact("TIMESTAMP"))
            .default_length(8),
        TypeDescriptor::new(T::Date, &exact("DATE")),
        TypeDescriptor::new(T::Time, &precise("TIME")).default_precision(7),
        TypeDescriptor::new(T::Timestamp, &precise("DATETIME2")).default_precision(7),
        TypeDescriptor::new(T::Timestamp, &exact("DATETIME")).alias(&exact("SMALLDATETIME")),
        TypeDescriptor::new(T::TimestampWithTimeZone, &precise("DATETIMEOFFSET"))
            .default_precision(7),
        TypeDescriptor::new(T::Xml, &exact("XML")),
        TypeDescriptor::new(T::Geometry, &exact("GEOMETRY")).alias(&exact("GEOGRAPHY")),
        TypeDescriptor::new(T::Other, &exact("SQL_VARIANT")).alias(&exact("HIERARCHYID")),
    ]
}
