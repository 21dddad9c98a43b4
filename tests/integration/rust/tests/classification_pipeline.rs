//! Classification pipeline integration tests
//!
//! JSON text is parsed into a realm, then run through the resolver, the
//! classifier and the predicate catalog. Also pins down the resolution
//! order where more than one rule could claim a value.

use core_types::{FunctionKind, JsValue, Realm, SymbolValue, TypedArrayKind};
use type_check::*;

fn tag_name(value: &JsValue) -> Option<&'static str> {
    classify(value).map(|tag| tag.as_str())
}

/// Test: Nested JSON document
#[test]
fn test_json_document_members() {
    let realm = Realm::new();
    let doc = realm
        .parse_json(r#"{"items": [], "meta": {}, "count": 0, "name": " ", "ok": false}"#)
        .unwrap();

    assert!(is_plain_object(&doc));
    assert!(!is_empty_object(&doc));
    assert!(is_empty_array(&doc.get("items")));
    assert!(is_empty_object(&doc.get("meta")));
    assert!(is_plain_object(&doc.get("meta")));
    assert!(is_timestamp(&doc.get("count")));
    assert!(!is_empty(&doc.get("count")));
    assert!(is_whitespace(&doc.get("name")));
    assert!(is_empty(&doc.get("ok")));
    assert!(is_undefined(&doc.get("missing")));
}

/// Test: Every JSON scalar lands on a primitive tag
#[test]
fn test_json_scalars() {
    let realm = Realm::new();
    let cases = [
        ("null", "null"),
        ("true", "boolean"),
        ("12", "number"),
        ("-0.25", "number"),
        ("\"\"", "string"),
        ("[1]", "Array"),
        ("{}", "Object"),
    ];
    for (text, expected) in cases {
        let value = realm.parse_json(text).unwrap();
        assert_eq!(tag_name(&value), Some(expected), "JSON {}", text);
    }
}

/// Test: Array wins over a spoofed toStringTag
#[test]
fn test_array_beats_to_string_tag() {
    let realm = Realm::new();
    let array = realm.array(vec![]);
    array
        .as_object()
        .unwrap()
        .set(SymbolValue::to_string_tag(), JsValue::string("Map"));

    assert_eq!(resolve_object_kind(&array), Some(ObjectTypeName::Map));
    assert_eq!(tag_name(&array), Some("Array"));
    assert!(!is_map(&array));
    assert!(is_empty_array(&array));

    // Same when the tag is inherited from a prototype
    let tagged_proto = realm.object_from([(SymbolValue::to_string_tag(), JsValue::string("Set"))]);
    let inherited = realm.array(vec![JsValue::Null]);
    inherited
        .as_object()
        .unwrap()
        .set_prototype(tagged_proto.as_object().cloned());
    assert_eq!(resolve_object_kind(&inherited), Some(ObjectTypeName::Set));
    assert_eq!(tag_name(&inherited), Some("Array"));
    assert!(is_not_empty_array(&inherited));
}

/// Test: A plain object can claim a kind through toStringTag
#[test]
fn test_to_string_tag_is_honored_for_ordinary_objects() {
    let realm = Realm::new();
    let fake = realm.object_from([(SymbolValue::to_string_tag(), JsValue::string("Map"))]);
    assert_eq!(tag_name(&fake), Some("Map"));
    assert!(is_map(&fake));
    // No [[MapData]], so it has no size
    assert!(!is_empty_map(&fake));
    assert!(!is_empty(&fake));

    let unknown = realm.object_from([(SymbolValue::to_string_tag(), JsValue::string("Widget"))]);
    assert_eq!(classify(&unknown), None);
    assert!(!is_object(&unknown));
    assert!(is_defined(&unknown));
}

/// Test: Boxed primitives win over their class tag
#[test]
fn test_boxed_primitive_precedence() {
    let realm = Realm::new();
    let boxed = realm.to_object(&JsValue::number(3.0)).unwrap();
    boxed
        .as_object()
        .unwrap()
        .set(SymbolValue::to_string_tag(), JsValue::string("Date"));
    assert_eq!(tag_name(&boxed), Some("number"));
    assert!(!is_date(&boxed));

    // BigInt and Symbol wrappers are not unwrapped
    assert_eq!(classify(&realm.to_object(&JsValue::bigint(1)).unwrap()), None);
    assert_eq!(classify(&realm.to_object(&JsValue::symbol(None)).unwrap()), None);
}

/// Test: Buffer wins over Uint8Array
#[test]
fn test_buffer_precedence() {
    let realm = Realm::new();
    let buffer = realm.buffer_alloc(4);
    let plain = realm.typed_array(TypedArrayKind::Uint8, 4);

    assert_eq!(tag_name(&buffer), Some("Buffer"));
    assert_eq!(tag_name(&plain), Some("Uint8Array"));
    assert_eq!(resolve_object_kind(&buffer), Some(ObjectTypeName::Uint8Array));
    assert!(!is_buffer(&plain));
}

/// Test: A user constructor exposing isBuffer is trusted
#[test]
fn test_duck_typed_buffer() {
    let realm = Realm::new();
    let ctor = realm.native_function("Fake", |_, _| Ok(JsValue::Undefined));
    let always = realm.native_function("isBuffer", |_, _| Ok(JsValue::number(1.0)));
    ctor.as_object().unwrap().set("isBuffer", always);

    let value = realm.object_from([("constructor", ctor)]);
    assert!(is_buffer(&value));
    assert_eq!(tag_name(&value), Some("Buffer"));
    // Not a typed array, so no length
    assert!(!is_empty_buffer(&value));
}

/// Test: Callables fall back to `function`
#[test]
fn test_callable_fallback() {
    let realm = Realm::new();
    let plain = realm.function(FunctionKind::Normal, "f");
    let tagged = realm.function(FunctionKind::Normal, "g");
    tagged
        .as_object()
        .unwrap()
        .set(SymbolValue::to_string_tag(), JsValue::string("Widget"));

    assert_eq!(tag_name(&plain), Some("function"));
    assert_eq!(tag_name(&tagged), Some("function"));
    assert!(is_function(&tagged));
}

/// Test: The catalog agrees with the individual predicates
#[test]
fn test_catalog_matches_functions() {
    let realm = Realm::new();
    let values = [
        JsValue::Undefined,
        JsValue::number(-1.5),
        realm.map(vec![]),
        realm.buffer_from(b"z"),
        realm.function(FunctionKind::Class, "A"),
    ];
    for value in &values {
        let matched = matching_predicates(value);
        for (name, predicate) in PREDICATES {
            assert_eq!(
                matched.contains(name),
                predicate(value),
                "{} on {:?}",
                name,
                value
            );
        }
    }
}
