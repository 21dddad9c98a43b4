//! Contract tests for the predicate catalog

use core_types::Realm;
use type_check::{predicate_by_name, PREDICATES};

use crate::fixtures::canonical_values;

#[test]
fn test_every_predicate_is_total() {
    let realm = Realm::new();
    let values = canonical_values(&realm);
    for (_, predicate) in PREDICATES {
        for value in &values {
            let _ = predicate(value);
        }
    }
}

#[test]
fn test_lookup_by_name() {
    for (name, predicate) in PREDICATES {
        let found = predicate_by_name(name).unwrap();
        assert_eq!(found as usize, *predicate as usize, "{}", name);
    }
}

#[test]
fn test_unknown_name() {
    assert!(predicate_by_name("isArray").is_none());
    assert!(predicate_by_name("").is_none());
}
