//! Integration tests splitting vendor fixture scripts

use pretty_assertions::assert_eq;

use rust_sqldialect::parser::{gaps, reassemble};
use rust_sqldialect::{resolve_dialect, Dialect, SegmentKind};

use crate::common::{kinds, read_fixture, statements, texts, EMPLOYEE_TABLE};

fn db2() -> std::sync::Arc<Dialect> {
    resolve_dialect("DB2/LINUXX8664", 11, 5, Some(0))
}

// ============================================================================
// DB2 Fixture Tests
// ============================================================================

#[test]
fn test_db2_schema_fixture() {
    let script = read_fixture("db2/schema.sql");
    let segments = db2().split_statements(&script).unwrap();
    assert_eq!(segments.len(), 15);

    assert_eq!(segments[0].text, "-- Sample schema for the HR application");
    assert_eq!(segments[3].kind, SegmentKind::BlockComment);
    assert_eq!(segments[6].text, "COMMENT ON TABLE employee IS 'People; on payroll'");
    assert_eq!(segments[7].text, "--#SET TERMINATOR @");
    assert!(segments[8].text.starts_with("CREATE PROCEDURE raise_salary"));
    assert!(segments[8].text.ends_with("WHERE id = p_id;\nEND"));
    assert_eq!(segments[8].terminator, Some("@"));
    assert!(segments[9].text.starts_with("CREATE TRIGGER emp_audit"));
    assert_eq!(segments[10].kind, SegmentKind::Directive);
    assert_eq!(segments[14].text, "GRANT SELECT ON employee TO PUBLIC");
    assert_eq!(segments[14].terminator, Some(";"));
}

#[test]
fn test_db2_routines_fixture() {
    let script = read_fixture("db2/routines.sql");
    let segments = db2().split_statements(&script).unwrap();
    assert_eq!(segments.len(), 14);

    assert_eq!(
        kinds(&segments),
        vec![
            SegmentKind::LineComment,
            SegmentKind::Statement,
            SegmentKind::Statement,
            SegmentKind::Directive,
            SegmentKind::Statement,
            SegmentKind::Statement,
            SegmentKind::BlockComment,
            SegmentKind::Statement,
            SegmentKind::Directive,
            SegmentKind::Statement,
            SegmentKind::LineComment,
            SegmentKind::Statement,
            SegmentKind::Statement,
            SegmentKind::Statement,
        ]
    );
    assert!(segments[5].text.contains("END FOR;\n    CALL log_event(v_note);\nEND"));
    assert_eq!(segments[8].text, "--#SET TERMINATOR");
    assert_eq!(segments[13].text, "CALL restock(1, 50)");
}

#[test]
fn test_db2_fixtures_are_lossless() {
    for fixture in ["db2/schema.sql", "db2/routines.sql"] {
        let script = read_fixture(fixture);
        let segments = db2().split_statements(&script).unwrap();
        assert_eq!(reassemble(&script, &segments), script, "{fixture}");

        // Only whitespace and terminators sit between segments
        for gap in gaps(&script, &segments) {
            let rest = gap.trim().trim_start_matches([';', '@', '!']).trim();
            assert!(rest.is_empty(), "unexpected text between segments: {gap:?}");
        }
    }
}

#[test]
fn test_db2_statements_resplit_to_themselves() {
    let dialect = db2();
    let script = read_fixture("db2/routines.sql");
    for segment in dialect.split_statements(&script).unwrap() {
        if !segment.is_statement() {
            continue;
        }
        let again = match segment.terminator {
            Some(";") | None => format!("{};", segment.text),
            Some(other) => format!("--#SET TERMINATOR {other}\n{}{other}", segment.text),
        };
        let resplit = dialect.split_statements(&again).unwrap();
        assert_eq!(statements(&resplit), vec![segment.text]);
    }
}

// ============================================================================
// H2 Fixture Tests
// ============================================================================

#[test]
fn test_h2_schema_fixture() {
    let h2 = resolve_dialect("H2", 2, 2, Some(224));
    let script = read_fixture("h2/schema.sql");
    let segments = h2.split_statements(&script).unwrap();
    assert_eq!(segments.len(), 12);

    assert_eq!(segments[0].text, EMPLOYEE_TABLE);
    assert_eq!(segments[0].line, 1);
    assert_eq!(segments[4].text, "// aliases are Java source");
    assert!(segments[5].text.starts_with("CREATE ALIAS IP_ADDRESS AS $$"));
    assert!(segments[5].text.ends_with("}\n$$"));
    assert_eq!(segments[6].text, "/* seed /* nested */ rows */");
    assert_eq!(
        segments[8].text,
        "INSERT INTO employee (id, name, email) VALUES (2, 'Bob; Jr.', 'bob@example.com')"
    );
    assert_eq!(segments[11].text, "SCRIPT TO 'backup.sql'");
}

// ============================================================================
// Firebird Fixture Tests
// ============================================================================

#[test]
fn test_firebird_schema_fixture() {
    let firebird = resolve_dialect("Firebird", 4, 0, Some(2));
    let script = read_fixture("firebird/schema.sql");
    let segments = firebird.split_statements(&script).unwrap();

    assert_eq!(
        texts(&segments[..2]),
        vec!["/*create table comment*/", EMPLOYEE_TABLE]
    );
    assert_eq!(segments.len(), 8);
    assert_eq!(segments[2].text, "SET TERM ^ ;");
    assert!(segments[3].text.starts_with("CREATE OR ALTER PROCEDURE hire"));
    assert!(segments[3].text.ends_with("SUSPEND;\nEND"));
    assert_eq!(segments[4].terminator, Some("^"));
    assert_eq!(segments[5].kind, SegmentKind::Directive);
    assert_eq!(
        segments[6].text,
        "COMMENT ON TABLE employee IS 'Staff; current and former'"
    );
    assert!(segments[7].text.starts_with("EXECUTE BLOCK AS"));
    assert_eq!(segments[7].terminator, Some(";"));
}

#[test]
fn test_fixture_line_numbers() {
    let firebird = resolve_dialect("Firebird", 4, 0, None);
    let script = read_fixture("firebird/schema.sql");
    let segments = firebird.split_statements(&script).unwrap();
    let lines: Vec<usize> = segments.iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![1, 2, 9, 11, 20, 28, 30, 32]);
}
