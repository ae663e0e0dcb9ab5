//! Vendor-independent column types

use std::fmt;

use serde::Serialize;

/// The closed set of canonical types every native type string parses into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CanonicalType {
    // ===== Boolean / bit =====
    Boolean,
    Bit,

    // ===== Exact numerics =====
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Decimal,
    Numeric,
    DecFloat,
    Money,

    // ===== Approximate numerics =====
    Real,
    Float,
    Double,

    // ===== Character =====
    Char,
    Varchar,
    LongVarchar,
    NChar,
    NVarchar,
    LongNVarchar,
    Clob,
    NClob,

    // ===== Binary =====
    Binary,
    Varbinary,
    LongVarbinary,
    Blob,

    // ===== Date / time =====
    Date,
    Time,
    TimeWithTimeZone,
    Timestamp,
    TimestampWithTimeZone,
    TimestampWithLocalTimeZone,
    IntervalYearToMonth,
    IntervalDayToSecond,

    // ===== Special =====
    Uuid,
    Json,
    Xml,
    RowId,
    Geometry,
    Array,
    Other,
}

impl CanonicalType {
    /// Default spelling of the type, used to decide whether a native name is
    /// worth retaining on a parsed type
    pub fn default_name(self) -> &'static str {
        match self {
            CanonicalType::Boolean => "BOOLEAN",
            CanonicalType::Bit => "BIT",
            CanonicalType::TinyInt => "TINYINT",
            CanonicalType::SmallInt => "SMALLINT",
            CanonicalType::Integer => "INTEGER",
            CanonicalType::BigInt => "BIGINT",
            CanonicalType::Decimal => "DECIMAL",
            CanonicalType::Numeric => "NUMERIC",
            CanonicalType::DecFloat => "DECFLOAT",
            CanonicalType::Money => "MONEY",
            CanonicalType::Real => "REAL",
            CanonicalType::Float => "FLOAT",
            CanonicalType::Double => "DOUBLE",
            CanonicalType::Char => "CHAR",
            CanonicalType::Varchar => "VARCHAR",
            CanonicalType::LongVarchar => "LONG VARCHAR",
            CanonicalType::NChar => "NCHAR",
            CanonicalType::NVarchar => "NVARCHAR",
            CanonicalType::LongNVarchar => "LONG NVARCHAR",
            CanonicalType::Clob => "CLOB",
            CanonicalType::NClob => "NCLOB",
            CanonicalType::Binary => "BINARY",
            CanonicalType::Varbinary => "VARBINARY",
            CanonicalType::LongVarbinary => "LONG VARBINARY",
            CanonicalType::Blob => "BLOB",
            CanonicalType::Date => "DATE",
            CanonicalType::Time => "TIME",
            CanonicalType::TimeWithTimeZone => "TIME WITH TIME ZONE",
            CanonicalType::Timestamp => "TIMESTAMP",
            CanonicalType::TimestampWithTimeZone => "TIMESTAMP WITH TIME ZONE",
            CanonicalType::TimestampWithLocalTimeZone => "TIMESTAMP WITH LOCAL TIME ZONE",
            CanonicalType::IntervalYearToMonth => "INTERVAL YEAR TO MONTH",
            CanonicalType::IntervalDayToSecond => "INTERVAL DAY TO SECOND",
            CanonicalType::Uuid => "UUID",
            CanonicalType::Json => "JSON",
            CanonicalType::Xml => "XML",
            CanonicalType::RowId => "ROWID",
            CanonicalType::Geometry => "GEOMETRY",
            CanonicalType::Array => "ARRAY",
            CanonicalType::Other => "OTHER",
        }
    }

    /// Character types, whose literals are quoted strings
    pub fn is_character(self) -> bool {
        matches!(
            self,
            CanonicalType::Char
                | CanonicalType::Varchar
                | CanonicalType::LongVarchar
                | CanonicalType::NChar
                | CanonicalType::NVarchar
                | CanonicalType::LongNVarchar
                | CanonicalType::Clob
                | CanonicalType::NClob
        )
    }

    /// Exact and approximate numeric types, whose literals are unquoted
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            CanonicalType::TinyInt
                | CanonicalType::SmallInt
                | CanonicalType::Integer
                | CanonicalType::BigInt
                | CanonicalType::Decimal
                | CanonicalType::Numeric
                | CanonicalType::DecFloat
                | CanonicalType::Money
                | CanonicalType::Real
                | CanonicalType::Float
                | CanonicalType::Double
        )
    }

    pub fn is_binary(self) -> bool {
        matches!(
            self,
            CanonicalType::Binary
                | CanonicalType::Varbinary
                | CanonicalType::LongVarbinary
                | CanonicalType::Blob
        )
    }

    pub fn is_temporal(self) -> bool {
        matches!(
            self,
            CanonicalType::Date
                | CanonicalType::Time
                | CanonicalType::TimeWithTimeZone
                | CanonicalType::Timestamp
                | CanonicalType::TimestampWithTimeZone
                | CanonicalType::TimestampWithLocalTimeZone
                | CanonicalType::IntervalYearToMonth
                | CanonicalType::IntervalDayToSecond
        )
    }
}

impl fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_name())
    }
}
