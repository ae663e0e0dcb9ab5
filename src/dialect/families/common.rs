//! Pieces shared by several family tables

use crate::types::descriptor::{
    exact, interval_day_to_second, interval_year_to_month, lob, numeric, precise,
    precise_with_suffix, sized, words,
};
use crate::types::{CanonicalType as T, TypeAttribute, TypeDescriptor};

/// Synonyms every family understands as a last resort
pub(super) const STANDARD_ALIASES: &[(&str, T)] = &[
    ("BOOL", T::Boolean),
    ("INT2", T::SmallInt),
    ("INT4", T::Integer),
    ("INT8", T::BigInt),
    ("FLOAT4", T::Real),
    ("FLOAT8", T::Double),
    ("STRING", T::Varchar),
    ("NATIONAL CHAR", T::NChar),
];

pub(super) const NO_ATTRIBUTES: &[(&str, TypeAttribute)] = &[];

/// Long types are discouraged in favor of large objects
pub(super) const PREFER_LOBS: &[(T, T)] = &[
    (T::LongVarchar, T::Clob),
    (T::LongNVarchar, T::NClob),
    (T::LongVarbinary, T::Blob),
];

/// An integer type with an ignored display width (`INT(11)`)
pub(super) fn display_width(name: &str) -> String {
    format!(r"{}(?:\s*\(\s*\d+\s*\))?", words(name))
}

/// ISO SQL spellings
pub(super) fn ansi_types() -> Vec<TypeDescriptor> {
    vec![
        TypeDescriptor::new(T::Boolean, &exact("BOOLEAN")),
        TypeDescriptor::new(T::SmallInt, &exact("SMALLINT")),
        TypeDescriptor::new(T::Integer, &exact("INTEGER")).alias(&exact("INT")),
        TypeDescriptor::new(T::BigInt, &exact("BIGINT")),
        TypeDescriptor::new(T::Decimal, &numeric("DECIMAL"))
            .alias(&numeric("DEC"))
            .default_scale(0),
        TypeDescriptor::new(T::Numeric, &numeric("NUMERIC")).default_scale(0),
        TypeDescriptor::new(T::DecFloat, &precise("DECFLOAT")),
        TypeDescriptor::new(T::Real, &exact("REAL")),
        TypeDescriptor::new(T::Double, &exact("DOUBLE PRECISION")).alias(&exact("DOUBLE")),
        TypeDescriptor::new(T::Float, &precise("FLOAT")),
        TypeDescriptor::new(T::Char, &sized("CHAR"))
            .alias(&sized("CHARACTER"))
            .default_length(1),
        TypeDescriptor::new(T::Varchar, &sized("VARCHAR"))
            .alias(&sized("CHARACTER VARYING"))
            .alias(&sized("CHAR VARYING")),
        TypeDescriptor::new(T::NChar, &sized("NCHAR"))
            .alias(&sized("NATIONAL CHARACTER"))
            .default_length(1),
        TypeDescriptor::new(T::NVarchar, &sized("NVARCHAR"))
            .alias(&sized("NATIONAL CHARACTER VARYING"))
            .alias(&sized("NCHAR VARYING")),
        TypeDescriptor::new(T::Clob, &lob("CLOB")).alias(&lob("CHARACTER LARGE OBJECT")),
        TypeDescriptor::new(T::NClob, &lob("NCLOB"))
            .alias(&lob("NATIONAL CHARACTER LARGE OBJECT")),
        TypeDescriptor::new(T::Binary, &sized("BINARY")).default_length(1),
        TypeDescriptor::new(T::Varbinary, &sized("VARBINARY")).alias(&sized("BINARY VARYING")),
        TypeDescriptor::new(T::Blob, &lob("BLOB")).alias(&lob("BINARY LARGE OBJECT")),
        TypeDescriptor::new(T::Date, &exact("DATE")),
        TypeDescriptor::new(T::TimeWithTimeZone, &precise_with_suffix("TIME", "WITH TIME ZONE")),
        TypeDescriptor::new(T::Time, &precise("TIME"))
            .alias(&precise_with_suffix("TIME", "WITHOUT TIME ZONE")),
        TypeDescriptor::new(
            T::TimestampWithTimeZone,
            &precise_with_suffix("TIMESTAMP", "WITH TIME ZONE"),
        ),
        TypeDescriptor::new(T::Timestamp, &precise("TIMESTAMP"))
            .alias(&precise_with_suffix("TIMESTAMP", "WITHOUT TIME ZONE")),
        TypeDescriptor::new(T::IntervalYearToMonth, &interval_year_to_month()),
        TypeDescriptor::new(T::IntervalDayToSecond, &interval_day_to_second()),
        TypeDescriptor::new(T::Xml, &exact("XML")),
    ]
}
