//! Contract tests for resolve_object_kind and the vocabulary

use core_types::{JsValue, Realm};
use type_check::{resolve_object_kind, ObjectTypeName, OBJECT_TYPE_NAMES};

use crate::fixtures::vocabulary_instance;

#[test]
fn test_vocabulary_order() {
    let names: Vec<&str> = OBJECT_TYPE_NAMES.iter().map(|k| k.as_str()).collect();
    assert_eq!(
        &names[..11],
        &[
            "Array",
            "ArrayBuffer",
            "Blob",
            "Buffer",
            "Date",
            "Error",
            "FormData",
            "function",
            "HTMLElement",
            "Map",
            "Object",
        ]
    );
    assert_eq!(names.last(), Some(&"Observable"));
}

#[test]
fn test_vocabulary_closure() {
    let realm = Realm::new();
    for kind in OBJECT_TYPE_NAMES {
        match vocabulary_instance(&realm, kind) {
            Some(value) => assert_eq!(resolve_object_kind(&value), Some(kind), "kind {}", kind),
            None => assert!(matches!(
                kind,
                ObjectTypeName::Buffer | ObjectTypeName::Function | ObjectTypeName::NaN
            )),
        }
    }
}

#[test]
fn test_exempt_names_never_resolve() {
    let realm = Realm::new();
    assert_eq!(resolve_object_kind(&realm.buffer_from(b"a")), Some(ObjectTypeName::Uint8Array));
    assert_eq!(resolve_object_kind(&JsValue::number(f64::NAN)), None);
}

#[test]
fn test_primitives_resolve_to_absent() {
    for value in [
        JsValue::Undefined,
        JsValue::Null,
        JsValue::boolean(true),
        JsValue::number(1.0),
        JsValue::string("Array"),
        JsValue::bigint(1),
        JsValue::symbol(None),
    ] {
        assert_eq!(resolve_object_kind(&value), None);
    }
}
