//! Firebird

use std::sync::LazyLock;

use crate::dialect::features::{DialectFeatures, FeatureDelta};
use crate::dialect::profile::{FamilyBase, FamilySpec, ProfileSpec, Quoting};
use crate::parser::{BlockEnd, NestingWords, ScriptRules};
use crate::types::descriptor::{exact, numeric, precise, sized, sized_with_suffix};
use crate::types::{CanonicalType as T, SurrogateRule, TypeDescriptor};
use crate::version::{Version, VersionMatch};

use super::common::NO_ATTRIBUTES;

pub static FAMILY: FamilySpec = FamilySpec {
    id: "firebird",
    product_pattern: r"^Firebird",
    version_match: VersionMatch::MajorMinor,
    base,
    profiles: &PROFILES,
};

static PROFILES: [ProfileSpec; 4] = [
    ProfileSpec::new(
        "2.5",
        "Firebird 2.5",
        Version::new(2, 5, 0),
        FeatureDelta {
            supports_boolean: Some(false),
            identity_syntax: Some(None),
            ..FeatureDelta::NONE
        },
    ),
    ProfileSpec::new(
        "3.0",
        "Firebird 3.0",
        Version::new(3, 0, 0),
        FeatureDelta {
            max_identifier_length: Some(31),
            ..FeatureDelta::NONE
        },
    ),
    ProfileSpec::new("4.0", "Firebird 4.0", Version::new(4, 0, 0), FeatureDelta::NONE),
    ProfileSpec::new("5.0", "Firebird 5.0", Version::new(5, 0, 0), FeatureDelta::NONE),
];

/// PSQL has no `END IF` or `END CASE`, and a nested block needs no `;` after
/// its `END`
const NESTING: NestingWords = NestingWords {
    openers: &["BEGIN", "CASE"],
    closer: "END",
    non_closing: &[],
    named_closers: &[],
};

static BASE: LazyLock<FamilyBase> = LazyLock::new(|| FamilyBase {
    features: DialectFeatures {
        supports_sequence: true,
        supports_cascade_delete: true,
        identity_syntax: Some("GENERATED BY DEFAULT AS IDENTITY"),
        supports_boolean: true,
        supports_if_exists: false,
        supports_create_or_replace: true,
        supports_check_constraints: true,
        supports_schemas: false,
        supports_comment_on: true,
        supports_returning: true,
        supports_merge: true,
        max_identifier_length: 63,
    },
    quoting: Quoting::DOUBLE_QUOTE,
    script: ScriptRules::new(";")
        .directive(r"SET[ \t]+TERM(?:INATOR)?[ \t]+(\S+)(?:[ \t]+\S+)?[ \t]*$")
        .block_start(concat!(
            r"(?:(?:CREATE|RECREATE)(?:\s+OR\s+ALTER)?|ALTER)\s+",
            r"(?:TRIGGER|PROCEDURE|FUNCTION|PACKAGE(?:\s+BODY)?)\b",
            r"|EXECUTE\s+BLOCK\b",
        ))
        .block_end(BlockEnd::Nested(NESTING)),
    types: types(),
    aliases: ALIASES,
    attributes: NO_ATTRIBUTES,
    recommended: &[],
});

const ALIASES: &[(&str, T)] = &[("INT128", T::Numeric), ("BLOB SUB_TYPE BINARY", T::Blob)];

fn base() -> &'static FamilyBase {
    &BASE
}

/// A character type with an optional `CHARACTER SET` clause
fn charset(body: String) -> String {
    format!(r"{body}(?:\s+CHARACTER\s+SET\s+\w+)?")
}

fn types() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::new(T::Binary, &sized_with_suffix("CHAR", "CHARACTER SET OCTETS"))
            .default_length(1)
            .surrogate(SurrogateRule::equals(16, T::Uuid)),
        TypeDescriptor::new(T::Varbinary, &sized_with_suffix("VARCHAR", "CHARACTER SET OCTETS")),
        TypeDescriptor::new(T::SmallInt, &exact("SMALLINT")),
        TypeDescriptor::new(T::Integer, &exact("INTEGER")).alias(&exact("INT")),
        TypeDescriptor::new(T::BigInt, &exact("BIGINT")),
        TypeDescriptor::new(T::Decimal, &numeric("DECIMAL"))
            .default_length(9)
            .default_scale(0)
            .bounds(1, 38),
        TypeDescriptor::new(T::Numeric, &numeric("NUMERIC"))
            .default_length(9)
            .default_scale(0)
            .bounds(1, 38),
        TypeDescriptor::new(T::DecFloat, &precise("DECFLOAT")).default_precision(34),
        TypeDescriptor::new(T::Real, &exact("FLOAT")).alias(&exact("REAL")),
        TypeDescriptor::new(T::Double, &exact("DOUBLE PRECISION")),
        TypeDescriptor::new(T::Boolean, &exact("BOOLEAN")),
        TypeDescriptor::new(T::Char, &charset(sized("CHAR")))
            .alias(&charset(sized("CHARACTER")))
            .default_length(1)
            .bounds(1, 32_767),
        TypeDescriptor::new(T::Varchar, &charset(sized("VARCHAR")))
            .alias(&charset(sized("CHARACTER VARYING")))
            .alias(&charset(sized("CHAR VARYING")))
            .bounds(1, 32_765)
            .surrogate(SurrogateRule::above(32_765, T::Clob).named("BLOB SUB_TYPE TEXT")),
        TypeDescriptor::new(T::NChar, &sized("NCHAR"))
            .alias(&sized("NATIONAL CHARACTER"))
            .default_length(1),
        TypeDescriptor::new(T::NVarchar, &sized("NATIONAL CHARACTER VARYING"))
            .alias(&sized("NCHAR VARYING")),
        TypeDescriptor::new(
            T::Clob,
            &charset(r"BLOB\s+SUB_TYPE\s+(?:1|TEXT)(?:\s+SEGMENT\s+SIZE\s+\d+)?".to_string()),
        )
        .named("BLOB SUB_TYPE TEXT"),
        TypeDescriptor::new(
            T::Blob,
            r"BLOB(?:\s+SUB_TYPE\s+(?:0|BINARY))?(?:\s+SEGMENT\s+SIZE\s+\d+)?",
        )
        .named("BLOB"),
        TypeDescriptor::new(T::Binary, &sized("BINARY")).default_length(1),
        TypeDescriptor::new(T::Varbinary, &sized("VARBINARY")).alias(&sized("BINARY VARYING")),
        TypeDescriptor::new(T::Date, &exact("DATE")),
        TypeDescriptor::new(T::TimeWithTimeZone, &exact("TIME WITH TIME ZONE")),
        TypeDescriptor::new(T::Time, &exact("TIME")).alias(&exact("TIME WITHOUT TIME ZONE")),
        TypeDescriptor::new(T::TimestampWithTimeZone, &exact("TIMESTAMP WITH TIME ZONE")),
        TypeDescriptor::new(T::Timestamp, &exact("TIMESTAMP"))
            .alias(&exact("TIMESTAMP WITHOUT TIME ZONE")),
    ]
}
