//! IBM Db2 for Linux, UNIX and Windows

use std::sync::LazyLock;

use crate::dialect::features::{DialectFeatures, FeatureDelta};
use crate::dialect::profile::{FamilyBase, FamilySpec, ProfileSpec, Quoting};
use crate::parser::ScriptRules;
use crate::types::descriptor::{exact, lob, numeric, precise, sized, sized_with_suffix};
use crate::types::{CanonicalType as T, SurrogateRule, TypeDescriptor};
use crate::version::{Version, VersionMatch};

use super::common::{NO_ATTRIBUTES, PREFER_LOBS, STANDARD_ALIASES};

/// Character columns longer than this become CLOBs
const VARCHAR_LIMIT: u32 = 32_700;
/// Graphic columns longer than this become DBCLOBs
const VARGRAPHIC_LIMIT: u32 = 16_336;

pub static FAMILY: FamilySpec = FamilySpec {
    id: "db2",
    product_pattern: r"^DB2",
    version_match: VersionMatch::MajorMinor,
    base,
    profiles: &PROFILES,
};

static PROFILES: [ProfileSpec; 6] = [
    ProfileSpec::new(
        "9.5",
        "DB2 9.5",
        Version::new(9, 5, 0),
        FeatureDelta {
            supports_create_or_replace: Some(false),
            ..FeatureDelta::NONE
        },
    ),
    ProfileSpec::new("9.7", "DB2 9.7", Version::new(9, 7, 0), FeatureDelta::NONE),
    ProfileSpec::new("9.8", "DB2 9.8", Version::new(9, 8, 0), FeatureDelta::NONE),
    ProfileSpec::new("10.1", "DB2 10.1", Version::new(10, 1, 0), FeatureDelta::NONE),
    ProfileSpec::new(
        "10.5",
        "DB2 10.5",
        Version::new(10, 5, 0),
        FeatureDelta {
            supports_boolean: Some(false),
            ..FeatureDelta::NONE
        },
    ),
    ProfileSpec::new("11.x", "DB2 11.x", Version::new(11, 0, 0), FeatureDelta::NONE),
];

static BASE: LazyLock<FamilyBase> = LazyLock::new(|| FamilyBase {
    features: DialectFeatures {
        supports_sequence: true,
        supports_cascade_delete: true,
        identity_syntax: Some("GENERATED BY DEFAULT AS IDENTITY"),
        supports_boolean: true,
        supports_if_exists: false,
        supports_create_or_replace: true,
        supports_check_constraints: true,
        supports_schemas: true,
        supports_comment_on: true,
        supports_returning: false,
        supports_merge: true,
        max_identifier_length: 128,
    },
    quoting: Quoting::DOUBLE_QUOTE,
    script: ScriptRules::new(";")
        .directive(r"--#SET[ \t]+TERMINATOR(?:[ \t]+(\S+))?[ \t]*$")
        .block_start(
            r"CREATE\s+(?:OR\s+REPLACE\s+)?(?:PROCEDURE|FUNCTION|TRIGGER)\b|BEGIN(?:\s+ATOMIC)?\b",
        ),
    types: types(),
    aliases: STANDARD_ALIASES,
    attributes: NO_ATTRIBUTES,
    recommended: PREFER_LOBS,
});

fn base() -> &'static FamilyBase {
    &BASE
}

fn types() -> Vec<TypeDescriptor> {
    vec![
        // FOR BIT DATA spellings go before the character types they extend
        TypeDescriptor::new(T::Binary, &sized_with_suffix("CHAR", "FOR BIT DATA"))
            .alias(&sized_with_suffix("CHARACTER", "FOR BIT DATA"))
            .default_length(1)
            .bounds(1, 254)
            .surrogate(SurrogateRule::equals(16, T::Uuid)),
        TypeDescriptor::new(T::Varbinary, &sized_with_suffix("VARCHAR", "FOR BIT DATA"))
            .alias(&sized_with_suffix("CHARACTER VARYING", "FOR BIT DATA"))
            .alias(&sized_with_suffix("CHAR VARYING", "FOR BIT DATA"))
            .bounds(1, 32_672)
            .surrogate(SurrogateRule::above(32_672, T::Blob)),
        TypeDescriptor::new(T::LongVarbinary, &exact("LONG VARCHAR FOR BIT DATA")),
        TypeDescriptor::new(T::Char, &sized("CHAR"))
            .alias(&sized("CHARACTER"))
            .default_length(1)
            .bounds(1, 254),
        TypeDescriptor::new(T::Varchar, &sized("VARCHAR"))
            .alias(&sized("CHARACTER VARYING"))
            .alias(&sized("CHAR VARYING"))
            .alias(&sized("VARCHAR2"))
            .bounds(1, 32_672)
            .surrogate(SurrogateRule::above(VARCHAR_LIMIT, T::Clob)),
        TypeDescriptor::new(T::LongVarchar, &exact("LONG VARCHAR")),
        TypeDescriptor::new(T::Clob, &lob("CLOB"))
            .alias(&lob("CHARACTER LARGE OBJECT"))
            .alias(&lob("CHAR LARGE OBJECT"))
            .default_length(1 << 20),
        TypeDescriptor::new(T::NChar, &sized("GRAPHIC"))
            .alias(&sized("NCHAR"))
            .alias(&sized("NATIONAL CHARACTER"))
            .default_length(1)
            .bounds(1, 127),
        TypeDescriptor::new(T::NVarchar, &sized("VARGRAPHIC"))
            .alias(&sized("NVARCHAR"))
            .alias(&sized("NATIONAL CHARACTER VARYING"))
            .bounds(1, VARGRAPHIC_LIMIT)
            .surrogate(SurrogateRule::above(VARGRAPHIC_LIMIT, T::NClob).named("DBCLOB")),
        TypeDescriptor::new(T::LongNVarchar, &exact("LONG VARGRAPHIC")),
        TypeDescriptor::new(T::NClob, &lob("DBCLOB"))
            .alias(&lob("NCLOB"))
            .default_length(1 << 20),
        TypeDescriptor::new(T::Binary, &sized("BINARY"))
            .default_length(1)
            .bounds(1, 255)
            .surrogate(SurrogateRule::equals(16, T::Uuid)),
        TypeDescriptor::new(T::Varbinary, &sized("VARBINARY"))
            .alias(&sized("BINARY VARYING"))
            .bounds(1, 32_672),
        TypeDescriptor::new(T::Blob, &lob("BLOB"))
            .alias(&lob("BINARY LARGE OBJECT"))
            .default_length(1 << 20),
        TypeDescriptor::new(T::SmallInt, &exact("SMALLINT")),
        TypeDescriptor::new(T::Integer, &exact("INTEGER")).alias(&exact("INT")),
        TypeDescriptor::new(T::BigInt, &exact("BIGINT")),
        TypeDescriptor::new(T::Decimal, &numeric("DECIMAL"))
            .alias(&numeric("DEC"))
            .default_length(5)
            .default_scale(0)
            .bounds(1, 31),
        TypeDescriptor::new(T::Numeric, &numeric("NUMERIC"))
            .alias(&numeric("NUM"))
            .default_length(5)
            .default_scale(0)
            .bounds(1, 31),
        TypeDescriptor::new(T::DecFloat, &precise("DECFLOAT")).default_precision(34),
        TypeDescriptor::new(T::Real, &exact("REAL")),
        TypeDescriptor::new(T::Double, &exact("DOUBLE")).alias(&exact("DOUBLE PRECISION")),
        TypeDescriptor::new(T::Float, &precise("FLOAT")).default_precision(53),
        TypeDescriptor::new(T::Date, &exact("DATE")),
        TypeDescriptor::new(T::Time, &exact("TIME")),
        TypeDescriptor::new(T::Timestamp, &precise("TIMESTAMP")).default_precision(6),
        TypeDescriptor::new(T::Xml, &exact("XML")),
        TypeDescriptor::new(T::Boolean, &exact("BOOLEAN")),
        TypeDescriptor::new(T::RowId, &exact("ROWID")),
    ]
}
