//! MySQL and MariaDB

use std::sync::LazyLock;

use crate::dialect::features::{DialectFeatures, FeatureDelta};
use crate::dialect::profile::{FamilyBase, FamilySpec, ProfileSpec, Quoting};
use crate::parser::{LexicalRules, ScriptRules};
use crate::types::descriptor::{exact, fixed, numeric, precise, sized};
use crate::types::{CanonicalType as T, SurrogateRule, TypeAttribute, TypeDescriptor};
use crate::version::{Version, VersionMatch};

use super::common::display_width;

pub static MYSQL: FamilySpec = FamilySpec {
    id: "mysql",
    product_pattern: r"^MySQL",
    version_match: VersionMatch::MajorMinor,
    base: mysql_base,
    profiles: &MYSQL_PROFILES,
};

pub static MARIADB: FamilySpec = FamilySpec {
    id: "mariadb",
    product_pattern: r"MariaDB",
    version_match: VersionMatch::MajorMinor,
    base: mariadb_base,
    profiles: &MARIADB_PROFILES,
};

static MYSQL_PROFILES: [ProfileSpec; 6] = [
    ProfileSpec::new("4.1", "MySQL 4.1", Version::new(4, 1, 0), FeatureDelta::NONE)
        .with_types(short_varchar_types),
    ProfileSpec::new("5.0", "MySQL 5.0", Version::new(5, 0, 0), FeatureDelta::NONE),
    ProfileSpec::new("5.5", "MySQL 5.5", Version::new(5, 5, 0), FeatureDelta::NONE),
    ProfileSpec::new("5.6", "MySQL 5.6", Version::new(5, 6, 0), FeatureDelta::NONE),
    // CHECK constraints are parsed but not enforced before 8.0.16
    ProfileSpec::new(
        "5.7",
        "MySQL 5.7",
        Version::new(5, 7, 0),
        FeatureDelta {
            supports_check_constraints: Some(false),
            ..FeatureDelta::NONE
        },
    ),
    ProfileSpec::new("8.0", "MySQL 8.0", Version::new(8, 0, 0), FeatureDelta::NONE),
];

static MARIADB_PROFILES: [ProfileSpec; 6] = [
    ProfileSpec::new(
        "5.5",
        "MariaDB 5.5",
        Version::new(5, 5, 0),
        FeatureDelta {
            supports_create_or_replace: Some(false),
            ..FeatureDelta::NONE
        },
    ),
    ProfileSpec::new(
        "10.0",
        "MariaDB 10.0",
        Version::new(10, 0, 0),
        FeatureDelta {
            supports_check_constraints: Some(false),
            ..FeatureDelta::NONE
        },
    ),
    ProfileSpec::new(
        "10.2",
        "MariaDB 10.2",
        Version::new(10, 2, 0),
        FeatureDelta {
            supports_sequence: Some(false),
            ..FeatureDelta::NONE
        },
    ),
    ProfileSpec::new(
        "10.3",
        "MariaDB 10.3",
        Version::new(10, 3, 0),
        FeatureDelta {
            supports_returning: Some(false),
            ..FeatureDelta::NONE
        },
    ),
    ProfileSpec::new("10.5", "MariaDB 10.5", Version::new(10, 5, 0), FeatureDelta::NONE),
    ProfileSpec::new("11.0", "MariaDB 11", Version::new(11, 0, 0), FeatureDelta::NONE),
];

const LEXICAL: LexicalRules = LexicalRules {
    identifier_quotes: &[(b'`', b'`')],
    line_comment_prefixes: &["#"],
    nested_block_comments: false,
    dollar_quotes: false,
    backslash_escapes: true,
};

const ATTRIBUTES: &[(&str, TypeAttribute)] = &[
    ("UNSIGNED", TypeAttribute::Unsigned),
    ("SIGNED", TypeAttribute::Signed),
    ("ZEROFILL", TypeAttribute::Zerofill),
];

const ALIASES: &[(&str, T)] = &[
    ("SERIAL", T::BigInt),
    ("INT1", T::TinyInt),
    ("INT3", T::Integer),
    ("MIDDLEINT", T::Integer),
    ("LONG", T::Clob),
    ("LONG VARCHAR", T::Clob),
    ("LONG VARBINARY", T::Blob),
];

const RECOMMENDED: &[(T, T)] = &[(T::Real, T::Double), (T::LongVarchar, T::Clob)];

static MYSQL_BASE: LazyLock<FamilyBase> = LazyLock::new(|| FamilyBase {
    features: DialectFeatures {
        supports_sequence: false,
        supports_cascade_delete: true,
        identity_syntax: Some("AUTO_INCREMENT"),
        supports_boolean: true,
        supports_if_exists: true,
        supports_create_or_replace: false,
        supports_check_constraints: true,
        supports_schemas: false,
        supports_comment_on: false,
        supports_returning: false,
        supports_merge: false,
        max_identifier_length: 64,
    },
    quoting: Quoting::BACKTICK,
    script: script_rules(),
    types: types(),
    aliases: ALIASES,
    attributes: ATTRIBUTES,
    recommended: RECOMMENDED,
});

static MARIADB_BASE: LazyLock<FamilyBase> = LazyLock::new(|| {
    let mut types = vec![
        TypeDescriptor::new(T::Uuid, &exact("UUID")),
        TypeDescriptor::new(T::Varchar, &exact("INET6")).default_length(39),
    ];
    types.extend(self::types());
    FamilyBase {
        features: DialectFeatures {
            supports_sequence: true,
            supports_create_or_replace: true,
            supports_returning: true,
            ..MYSQL_BASE.features
        },
        quoting: Quoting::BACKTICK,
        script: script_rules(),
        types,
        aliases: ALIASES,
        attributes: ATTRIBUTES,
        recommended: RECOMMENDED,
    }
});

fn mysql_base() -> &'static FamilyBase {
    &MYSQL_BASE
}

fn mariadb_base() -> &'static FamilyBase {
    &MARIADB_BASE
}

fn script_rules() -> ScriptRules {
    ScriptRules::new(";")
        .lexical(LEXICAL)
        .directive(r"DELIMITER[ \t]+(\S+)[ \t]*$")
        .block_start(concat!(
            r"CREATE\s+(?:OR\s+REPLACE\s+)?(?:DEFINER\s*=\s*\S+\s+)?",
            r"(?:PROCEDURE|FUNCTION|TRIGGER|EVENT)\b",
        ))
}

fn types() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::new(T::Boolean, &exact("BOOLEAN")).alias(&exact("BOOL")),
        // Connector convention: TINYINT(1) holds a flag
        TypeDescriptor::new(T::Boolean, &fixed("TINYINT", 1)),
        TypeDescriptor::new(T::TinyInt, &display_width("TINYINT")),
        TypeDescriptor::new(T::SmallInt, &display_width("SMALLINT")),
        TypeDescriptor::new(T::Integer, &display_width("INT"))
            .alias(&display_width("INTEGER"))
            .alias(&display_width("MEDIUMINT")),
        TypeDescriptor::new(T::BigInt, &display_width("BIGINT")),
        TypeDescriptor::new(T::SmallInt, &display_width("YEAR")),
        TypeDescriptor::new(T::Decimal, &numeric("DECIMAL"))
            .alias(&numeric("DEC"))
            .alias(&numeric("FIXED"))
            .default_length(10)
            .default_scale(0)
            .bounds(1, 65),
        TypeDescriptor::new(T::Numeric, &numeric("NUMERIC"))
            .default_length(10)
            .default_scale(0)
            .bounds(1, 65),
        TypeDescriptor::new(T::Real, &numeric("FLOAT")),
        TypeDescriptor::new(T::Double, &numeric("DOUBLE"))
            .alias(&numeric("DOUBLE PRECISION"))
            .alias(&numeric("REAL")),
        TypeDescriptor::new(T::Bit, &sized("BIT")).default_length(1).bounds(1, 64),
        TypeDescriptor::new(T::Char, &sized("CHAR"))
            .alias(&sized("CHARACTER"))
            .default_length(1)
            .bounds(0, 255),
        TypeDescriptor::new(T::Varchar, &sized("VARCHAR"))
            .alias(&sized("CHARACTER VARYING"))
            .bounds(0, 65_535),
        TypeDescriptor::new(T::NChar, &sized("NCHAR"))
            .alias(&sized("NATIONAL CHAR"))
            .default_length(1)
            .bounds(0, 255),
        TypeDescriptor::new(T::NVarchar, &sized("NVARCHAR"))
            .alias(&sized("NATIONAL VARCHAR"))
            .bounds(0, 65_535),
        TypeDescriptor::new(T::Uuid, &fixed("BINARY", 16)),
        TypeDescriptor::new(T::Binary, &sized("BINARY"))
            .default_length(1)
            .bounds(0, 255),
        TypeDescriptor::new(T::Varbinary, &sized("VARBINARY")).bounds(0, 65_535),
        TypeDescriptor::new(T::Clob, &sized("TEXT"))
            .alias(&exact("TINYTEXT"))
            .alias(&exact("MEDIUMTEXT"))
            .alias(&exact("LONGTEXT")),
        TypeDescriptor::new(T::Blob, &sized("BLOB"))
            .alias(&exact("TINYBLOB"))
            .alias(&exact("MEDIUMBLOB"))
            .alias(&exact("LONGBLOB")),
        TypeDescriptor::new(T::Date, &exact("DATE")),
        TypeDescriptor::new(T::Time, &precise("TIME")),
        TypeDescriptor::new(T::Timestamp, &precise("DATETIME")).alias(&precise("TIMESTAMP")),
        TypeDescriptor::new(T::Json, &exact("JSON")),
        TypeDescriptor::new(T::Varchar, r"ENUM\s*\(.*\)").named("ENUM"),
        TypeDescriptor::new(T::Varchar, r"SET\s*\(.*\)").named("SET"),
        TypeDescriptor::new(T::Geometry, &exact("GEOMETRY"))
            .alias(&exact("POINT"))
            .alias(&exact("LINESTRING"))
            .alias(&exact("POLYGON"))
            .alias(&exact("MULTIPOINT"))
            .alias(&exact("MULTILINESTRING"))
            .alias(&exact("MULTIPOLYGON"))
            .alias(&exact("GEOMETRYCOLLECTION")),
    ]
}

/// Before 5.0.3 a VARCHAR longer than 255 was silently created as TEXT
fn short_varchar_types() -> Vec<TypeDescriptor> {
    vec![TypeDescriptor::new(T::Varchar, &sized("VARCHAR"))
        .alias(&sized("CHARACTER VARYING"))
        .bounds(0, 255)
        .surrogate(SurrogateRule::above(255, T::Clob).named("TEXT"))]
}
