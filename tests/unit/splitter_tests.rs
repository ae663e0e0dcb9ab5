//! Unit tests for statement splitting with dialect script rules

use pretty_assertions::assert_eq;

use rust_sqldialect::parser::reassemble;
use rust_sqldialect::{resolve_dialect, SegmentKind, TokenizeError};

// ============================================================================
// Delimiter Change Tests
// ============================================================================

#[test]
fn test_db2_terminator_change_and_reset() {
    let db2 = resolve_dialect("DB2/LINUXX8664", 11, 5, None);
    let script = "--#SET TERMINATOR !!\nCREATE PROCEDURE p()\nBEGIN\n  UPDATE t SET a = 1;\nEND !!\n--#SET TERMINATOR\nSELECT * FROM t;\n";
    let segments = db2.split_statements(script).unwrap();

    let kinds: Vec<SegmentKind> = segments.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SegmentKind::Directive,
            SegmentKind::Statement,
            SegmentKind::Directive,
            SegmentKind::Statement,
        ]
    );
    assert_eq!(segments[1].terminator, Some("!!"));
    assert!(segments[1].text.ends_with("UPDATE t SET a = 1;\nEND"));
    assert_eq!(segments[3].text, "SELECT * FROM t");
    assert_eq!(segments[3].terminator, Some(";"));
}

#[test]
fn test_mysql_delimiter_directive() {
    let mysql = resolve_dialect("MySQL", 8, 0, None);
    let script = "DELIMITER $$\nCREATE TRIGGER trg BEFORE INSERT ON t FOR EACH ROW\nBEGIN\n  SET NEW.a = 'x;y';\nEND$$\nDELIMITER ;\nINSERT INTO t VALUES ('it\\'s');\n";
    let segments = mysql.split_statements(script).unwrap();
    assert_eq!(segments.len(), 4);
    assert_eq!(segments[0].text, "DELIMITER $$");
    assert_eq!(segments[1].terminator, Some("$$"));
    assert_eq!(segments[3].text, "INSERT INTO t VALUES ('it\\'s')");
}

#[test]
fn test_firebird_glued_set_term() {
    let firebird = resolve_dialect("Firebird", 4, 0, None);
    let script = "SET TERM ^;\nEXECUTE BLOCK AS BEGIN END^\nSET TERM ;^\nSELECT 1 FROM RDB$DATABASE;";
    let segments = firebird.split_statements(script).unwrap();
    assert_eq!(segments.len(), 4);
    assert_eq!(segments[1].text, "EXECUTE BLOCK AS BEGIN END");
    assert_eq!(segments[1].terminator, Some("^"));
    assert_eq!(segments[3].terminator, Some(";"));
}

// ============================================================================
// Line Delimiter Tests
// ============================================================================

#[test]
fn test_oracle_slash_ends_plsql_block() {
    let oracle = resolve_dialect("Oracle", 19, 0, None);
    let script = "CREATE OR REPLACE PROCEDURE p IS\nBEGIN\n  NULL;\nEND;\n/\nSELECT 1 FROM dual;\n";
    let segments = oracle.split_statements(script).unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(
        segments[0].text,
        "CREATE OR REPLACE PROCEDURE p IS\nBEGIN\n  NULL;\nEND;"
    );
    assert_eq!(segments[0].terminator, Some("/"));
    assert_eq!(segments[1].text, "SELECT 1 FROM dual");
}

#[test]
fn test_division_is_not_a_line_delimiter() {
    let oracle = resolve_dialect("Oracle", 19, 0, None);
    let segments = oracle.split_statements("SELECT a\n / b FROM t;").unwrap();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "SELECT a\n / b FROM t");
}

// ============================================================================
// Lossless and Idempotence Tests
// ============================================================================

#[test]
fn test_reassemble_is_lossless() {
    let scripts = [
        ("PostgreSQL", "SELECT $$a;b$$;\n-- c\n/* d */ SELECT 2"),
        ("Microsoft SQL Server", "SELECT 1\nGO\n\nSELECT [x;y]\r\nGO 2\n"),
        ("MySQL", "# hash\nDELIMITER //\nSELECT 1//\nDELIMITER ;\n"),
    ];
    for (product, script) in scripts {
        let dialect = resolve_dialect(product, 99, 0, None);
        let segments = dialect.split_statements(script).unwrap();
        assert_eq!(reassemble(script, &segments), script, "{product}");
    }
}

#[test]
fn test_resplitting_a_statement_is_stable() {
    let db2 = resolve_dialect("DB2/LINUXX8664", 11, 5, None);
    let script = "CREATE TABLE t (a INT);\nCREATE FUNCTION f() RETURNS INT\nBEGIN ATOMIC\n  RETURN 1;\nEND;\nINSERT INTO t VALUES (1);";
    for segment in db2.split_statements(script).unwrap() {
        let again = format!("{}{}", segment.text, segment.terminator.unwrap_or(""));
        let resplit = db2.split_statements(&again).unwrap();
        assert_eq!(resplit.len(), 1);
        assert_eq!(resplit[0].text, segment.text);
        assert_eq!(resplit[0].kind, segment.kind);
    }
}

// ============================================================================
// Failure Tests
// ============================================================================

#[test]
fn test_unclosed_block_comment() {
    let db2 = resolve_dialect("DB2/LINUXX8664", 11, 5, None);
    let err = db2
        .split_statements("SELECT 1;\nSELECT 2;\n/* unclosed")
        .unwrap_err();
    assert!(matches!(
        err,
        TokenizeError::UnterminatedComment { position: 20, line: 3, .. }
    ));
    assert!(err.to_string().contains("/* unclosed"));
}

#[test]
fn test_unclosed_dollar_quote() {
    let pg = resolve_dialect("PostgreSQL", 16, 0, None);
    let err = pg.split_statements("SELECT $q$ never").unwrap_err();
    assert!(matches!(err, TokenizeError::UnterminatedLiteral { position: 7, .. }));
}

#[test]
fn test_unbalanced_block() {
    let sqlite = resolve_dialect("SQLite", 3, 45, None);
    let err = sqlite
        .split_statements("CREATE TRIGGER t AFTER INSERT ON x BEGIN DELETE FROM y;")
        .unwrap_err();
    assert!(matches!(err, TokenizeError::UnmatchedBlock { line: 1, .. }));
}
