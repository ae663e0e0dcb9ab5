//! Integration tests for sharing resolved dialects across threads

use std::sync::{Arc, Barrier};
use std::thread;

use rust_sqldialect::{resolve_dialect, CanonicalType, Dialect};

#[test]
fn test_concurrent_resolution_shares_one_instance() {
    const THREADS: usize = 16;
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                // Revisions differ; the profile does not
                resolve_dialect("H2", 1, 4, Some(i as u32))
            })
        })
        .collect();

    let resolved: Vec<Arc<Dialect>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for dialect in &resolved[1..] {
        assert!(Arc::ptr_eq(dialect, &resolved[0]));
    }
    assert_eq!(resolved[0].profile_id(), "1.4");
}

#[test]
fn test_concurrent_use_of_a_shared_dialect() {
    let dialect = resolve_dialect("Oracle", 19, 0, None);
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let dialect = Arc::clone(&dialect);
            thread::spawn(move || {
                let script = format!("SELECT {i} FROM dual;\nSELECT {i} FROM dual;");
                let count = dialect.split_statements(&script).unwrap().len();
                let parsed = dialect.parse_type(&format!("VARCHAR2({})", 100 + i)).unwrap();
                (count, parsed.canonical, parsed.length)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (count, canonical, length) = handle.join().unwrap();
        assert_eq!(count, 2);
        assert_eq!(canonical, CanonicalType::Varchar);
        assert_eq!(length, Some(100 + i as u32));
    }
}
