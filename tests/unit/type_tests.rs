//! Unit tests for column type parsing across dialects

use pretty_assertions::assert_eq;

use rust_sqldialect::types::TypeAttribute;
use rust_sqldialect::{resolve_dialect, CanonicalType, ParsedType, TypeParseError};

fn db2() -> std::sync::Arc<rust_sqldialect::Dialect> {
    resolve_dialect("DB2/LINUXX8664", 11, 5, Some(0))
}

// ============================================================================
// DB2 Type Tests
// ============================================================================

#[test]
fn test_plain_decimal() {
    let parsed = db2().parse_type("DECIMAL(6)").unwrap();
    assert_eq!(
        parsed,
        ParsedType {
            canonical: CanonicalType::Decimal,
            length: Some(6),
            precision: None,
            scale: Some(0),
            native_name: None,
            attributes: vec![],
        }
    );
}

#[test]
fn test_vargraphic_keeps_native_name() {
    let parsed = db2().parse_type("VARGRAPHIC(4001)").unwrap();
    assert_eq!(parsed.canonical, CanonicalType::NVarchar);
    assert_eq!(parsed.native_name.as_deref(), Some("VARGRAPHIC"));
    assert_eq!(parsed.length, Some(4001));
}

#[test]
fn test_varchar_over_threshold_is_clob() {
    let parsed = db2().parse_type("VARCHAR(40000)").unwrap();
    assert_eq!(parsed.canonical, CanonicalType::Clob);
    assert_eq!(parsed.length, Some(40000));

    let parsed = db2().parse_type("VARCHAR(32700)").unwrap();
    assert_eq!(parsed.canonical, CanonicalType::Varchar);
}

#[test]
fn test_oversized_length_still_reaches_clob() {
    let parsed = db2().parse_type("VARCHAR(99999999999)").unwrap();
    assert_eq!(parsed.canonical, CanonicalType::Clob);
    assert_eq!(parsed.length, Some(u32::MAX));
}

#[test]
fn test_oracle_negative_scale() {
    let oracle = resolve_dialect("Oracle", 19, 0, None);
    let rounded = oracle.parse_type("NUMBER(10,-2)").unwrap();
    assert_eq!(rounded.canonical, CanonicalType::Decimal);
    assert_eq!(rounded.length, Some(10));
    assert_eq!(rounded.scale, Some(-2));
    assert_eq!(rounded.to_string(), "NUMBER(10,-2)");

    let plain = oracle.parse_type("NUMBER(10)").unwrap();
    assert_ne!(rounded, plain);
}

#[test]
fn test_decimal_defaults() {
    let parsed = db2().parse_type("dec").unwrap();
    assert_eq!(parsed.canonical, CanonicalType::Decimal);
    assert_eq!(parsed.length, Some(5));
    assert_eq!(parsed.scale, Some(0));
    assert_eq!(parsed.native_name.as_deref(), Some("dec"));
}

#[test]
fn test_whitespace_and_case_are_ignored() {
    let a = db2().parse_type("  character   varying ( 20 )  ").unwrap();
    let b = db2().parse_type("VARCHAR(20)").unwrap();
    assert_eq!(a.canonical, b.canonical);
    assert_eq!(a.length, b.length);
    assert_eq!(a.native_name.as_deref(), Some("character varying"));
}

#[test]
fn test_unrecognized_type() {
    assert_eq!(
        db2().parse_type("GIZMO(3)"),
        Err(TypeParseError::Unrecognized("GIZMO(3)".to_string()))
    );
    assert!(matches!(
        db2().parse_type(""),
        Err(TypeParseError::Unrecognized(_))
    ));
}

#[test]
fn test_parsing_is_deterministic() {
    let first = db2().parse_type("TIMESTAMP(12)").unwrap();
    for _ in 0..3 {
        assert_eq!(db2().parse_type("TIMESTAMP(12)").unwrap(), first);
    }
    assert_eq!(first.precision, Some(12));
}

// ============================================================================
// Cross-Dialect Tests
// ============================================================================

#[test]
fn test_sixteen_byte_binaries_are_uuids() {
    let cases = [
        ("DB2/NT64", 11, "CHAR(16) FOR BIT DATA"),
        ("Oracle", 19, "RAW(16)"),
        ("MySQL", 8, "BINARY(16)"),
        ("Firebird", 4, "CHAR(16) CHARACTER SET OCTETS"),
        ("PostgreSQL", 15, "uuid"),
        ("Microsoft SQL Server", 16, "uniqueidentifier"),
    ];
    for (product, major, raw) in cases {
        let dialect = resolve_dialect(product, major, 0, None);
        assert_eq!(
            dialect.parse_type(raw).unwrap().canonical,
            CanonicalType::Uuid,
            "{product}: {raw}"
        );
    }
}

#[test]
fn test_mysql_attributes() {
    let mysql = resolve_dialect("MySQL", 8, 0, Some(36));
    let parsed = mysql.parse_type("int(10) unsigned").unwrap();
    assert_eq!(parsed.canonical, CanonicalType::Integer);
    assert!(parsed.has_attribute(TypeAttribute::Unsigned));
    assert_eq!(parsed.length, None);
}

#[test]
fn test_mysql_text_before_5() {
    let legacy = resolve_dialect("MySQL", 4, 1, Some(22));
    assert_eq!(
        legacy.parse_type("VARCHAR(1000)").unwrap().canonical,
        CanonicalType::Clob
    );
    let modern = resolve_dialect("MySQL", 5, 7, None);
    assert_eq!(
        modern.parse_type("VARCHAR(1000)").unwrap().canonical,
        CanonicalType::Varchar
    );
}

#[test]
fn test_alias_table_is_last_resort() {
    let pg = resolve_dialect("PostgreSQL", 15, 0, None);
    let parsed = pg.parse_type("citext").unwrap();
    assert_eq!(parsed.canonical, CanonicalType::Clob);
    assert_eq!(parsed.native_name.as_deref(), Some("citext"));
}

#[test]
fn test_display_round_trips_spelling() {
    let oracle = resolve_dialect("Oracle", 19, 0, None);
    assert_eq!(
        oracle.parse_type("NUMBER(10,2)").unwrap().to_string(),
        "NUMBER(10,2)"
    );
    let mssql = resolve_dialect("Microsoft SQL Server", 16, 0, None);
    assert_eq!(mssql.parse_type("nvarchar(50)").unwrap().to_string(), "NVARCHAR(50)");
}

#[test]
fn test_quote_literal_by_type() {
    let mssql = resolve_dialect("Microsoft SQL Server", 16, 0, None);
    assert_eq!(
        mssql.quote_literal(CanonicalType::Varchar, "it's"),
        "'it''s'"
    );
    assert_eq!(mssql.quote_literal(CanonicalType::Integer, "7"), "7");
}
