//! Unit tests for dialect resolution
//!
//! Product names map to families, versions map to the newest profile whose
//! minimum version does not exceed them, and every resolution of the same
//! profile returns the same shared instance.

use std::sync::Arc;

use rust_sqldialect::dialect::DialectResolver;
use rust_sqldialect::{generic_dialect, resolve_dialect, Dialect, Version};

fn profile(product: &str, major: u32, minor: u32, revision: Option<u32>) -> &'static str {
    resolve_dialect(product, major, minor, revision).profile_id()
}

// ============================================================================
// Version Monotonicity Tests
// ============================================================================

#[test]
fn test_db2_exact_profile_versions() {
    assert_eq!(profile("DB2/LINUXX8664", 9, 7, Some(0)), "9.7");
    assert_eq!(profile("DB2/LINUXX8664", 10, 1, None), "10.1");
    assert_eq!(profile("DB2/LINUXX8664", 10, 5, Some(11)), "10.5");
}

#[test]
fn test_db2_between_profiles_falls_back() {
    assert_eq!(profile("DB2/LINUXX8664", 9, 9, Some(0)), "9.8");
    assert_eq!(profile("DB2/LINUXX8664", 10, 3, None), "10.1");
}

#[test]
fn test_db2_newer_than_all_profiles() {
    assert_eq!(profile("DB2/LINUXX8664", 12, 0, Some(0)), "11.x");
}

#[test]
fn test_older_than_all_profiles_uses_oldest() {
    assert_eq!(profile("DB2/LINUXX8664", 8, 2, None), "9.5");
    assert_eq!(profile("PostgreSQL", 7, 4, None), "8.4");
    assert_eq!(profile("Oracle", 8, 1, None), "9i");
}

#[test]
fn test_resolution_never_rounds_up() {
    for minor in 0..10 {
        let dialect = resolve_dialect("DB2/LINUXX8664", 10, minor, None);
        assert!(
            dialect.min_version() <= Version::new(10, minor, 0) || dialect.profile_id() == "9.5",
            "10.{minor} resolved to {}",
            dialect.profile_id()
        );
    }
}

#[test]
fn test_major_only_ignores_minor() {
    assert_eq!(profile("Oracle", 19, 0, None), "19c");
    assert_eq!(profile("Oracle", 19, 22, None), "19c");
    assert_eq!(profile("Microsoft SQL Server", 15, 4, Some(4123)), "2019");
}

#[test]
fn test_full_policy_compares_revision() {
    assert_eq!(profile("SQLite", 3, 34, Some(1)), "3.25");
    assert_eq!(profile("SQLite", 3, 35, Some(0)), "3.35");
}

// ============================================================================
// Product Name Tests
// ============================================================================

#[test]
fn test_product_names_select_family() {
    let cases = [
        ("DB2/LINUXX8664", "db2"),
        ("DB2/AIX64", "db2"),
        ("Oracle", "oracle"),
        ("MySQL", "mysql"),
        ("MariaDB", "mariadb"),
        ("PostgreSQL", "postgres"),
        ("Microsoft SQL Server", "mssql"),
        ("SQLite", "sqlite"),
        ("H2", "h2"),
        ("Firebird", "firebird"),
    ];
    for (product, family) in cases {
        assert_eq!(
            resolve_dialect(product, 99, 0, None).family(),
            family,
            "product {product}"
        );
    }
}

#[test]
fn test_product_name_is_case_insensitive() {
    assert_eq!(resolve_dialect("db2/nt64", 11, 5, None).family(), "db2");
    assert_eq!(resolve_dialect(" ORACLE ", 19, 0, None).family(), "oracle");
}

#[test]
fn test_unknown_product_resolves_to_generic() {
    let dialect = resolve_dialect("Informix Dynamic Server", 14, 10, None);
    assert_eq!(dialect.family(), "generic");
    assert!(Arc::ptr_eq(&dialect, &generic_dialect()));
    assert_eq!(resolve_dialect("", 0, 0, None).family(), "generic");
}

#[test]
fn test_resolver_instance_matches_free_function() {
    let resolver = DialectResolver::new();
    let a = resolver.resolve("PostgreSQL", Version::new(13, 4, 0));
    let b = resolve_dialect("PostgreSQL", 13, 4, None);
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(resolver.family_for("Firebird").map(|f| f.id), Some("firebird"));
    assert!(resolver.family_for("AcmeDB").is_none());
}

// ============================================================================
// Profile Chain Tests
// ============================================================================

#[test]
fn test_chain_ends_at_newest_profile() {
    let dialect = resolve_dialect("Oracle", 10, 2, None);
    let ids: Vec<&str> = dialect.chain().map(Dialect::profile_id).collect();
    assert_eq!(
        ids,
        vec!["10g", "11g", "12c", "18c", "19c", "21c", "23ai"]
    );
}

#[test]
fn test_chain_links_are_cached_profiles() {
    let oldest = resolve_dialect("Microsoft SQL Server", 9, 0, None);
    for linked in oldest.chain().skip(1) {
        let cached = resolve_dialect(
            "Microsoft SQL Server",
            linked.min_version().major,
            0,
            None,
        );
        assert!(std::ptr::eq(linked, Arc::as_ptr(&cached)));
    }
}

#[test]
fn test_feature_delta_applies_to_older_profiles() {
    // MERGE arrived in PostgreSQL 15; every older profile lacks it
    for (major, minor) in [(8, 4), (9, 6), (10, 0), (12, 0), (14, 9)] {
        assert!(
            !resolve_dialect("PostgreSQL", major, minor, None)
                .features()
                .supports_merge,
            "PostgreSQL {major}.{minor}"
        );
    }
    assert!(resolve_dialect("PostgreSQL", 15, 0, None).features().supports_merge);
}

#[test]
fn test_identifier_length_by_version() {
    assert_eq!(resolve_dialect("Oracle", 11, 2, None).max_identifier_length(), 30);
    assert_eq!(resolve_dialect("Oracle", 12, 2, None).max_identifier_length(), 128);
}
