//! Documented end-to-end behaviors

use core_types::{FunctionKind, JsValue, NumberObject, Realm, TypedArrayKind};
use type_check::*;

#[test]
fn test_null_scenario() {
    let value = JsValue::Null;
    assert_eq!(classify(&value).map(|t| t.as_str()), Some("null"));
    assert!(is_null(&value));
    assert!(is_empty(&value));
    assert!(!is_object(&value));
}

#[test]
fn test_boxed_number_scenario() {
    let realm = Realm::new();
    let value = realm.to_object(&JsValue::number(42.0)).unwrap();
    assert_eq!(classify(&value).map(|t| t.as_str()), Some("number"));
    assert!(is_number(&value));
    assert!(value.loose_equals(&JsValue::number(42.0)));
}

#[test]
fn test_empty_array_scenario() {
    let realm = Realm::new();
    let value = realm.array(vec![]);
    assert!(is_array(&value));
    assert!(is_empty_array(&value));
    assert!(is_empty(&value));
    assert!(!is_object(&value));
}

#[test]
fn test_async_function_scenario() {
    let realm = Realm::new();
    let value = realm.function(FunctionKind::Async, "load");
    assert_eq!(classify(&value).map(|t| t.as_str()), Some("AsyncFunction"));
    assert!(is_function(&value));
    assert!(is_async_function(&value));
}

#[test]
fn test_nan_scenario() {
    let value = JsValue::number(f64::NAN);
    assert_eq!(classify(&value).map(|t| t.as_str()), Some("number"));
    assert!(!is_number(&value));
    assert!(is_nan_value(&value));
    assert!(is_falsy(&value));
}

#[test]
fn test_uint16_array_scenario() {
    let realm = Realm::new();
    let value = realm.typed_array(TypedArrayKind::Uint16, 4);
    assert_eq!(resolve_object_kind(&value), Some(ObjectTypeName::Uint16Array));
    assert!(is_uint16_array(&value));
    assert!(!is_array(&value));
}

#[test]
fn test_boxed_and_unboxed_agree() {
    let realm = Realm::new();
    for primitive in [JsValue::string("abc"), JsValue::boolean(true), JsValue::number(7.0)] {
        let boxed = realm.to_object(&primitive).unwrap();
        assert_eq!(classify(&boxed), classify(&primitive));
        assert_eq!(is_string(&boxed), is_string(&primitive));
        assert_eq!(is_boolean(&boxed), is_boolean(&primitive));
        assert_eq!(is_number(&boxed), is_number(&primitive));
    }
}

#[test]
fn test_numeric_boundaries() {
    assert!(is_timestamp(&JsValue::number(NumberObject::MAX_SAFE_INTEGER)));
    assert!(!is_timestamp(&JsValue::number(NumberObject::TWO_POW_53)));
    assert!(is_float(&JsValue::number(1.5)));
    assert!(!is_float(&JsValue::number(1.0)));
    assert!(!is_float(&JsValue::number(f64::INFINITY)));
}

#[test]
fn test_function_excludes_generators() {
    let realm = Realm::new();
    assert!(!is_function(&realm.function(FunctionKind::Generator, "g")));
    assert!(!is_function(&realm.function(FunctionKind::AsyncGenerator, "g")));
    assert!(is_function(&realm.function(FunctionKind::Class, "C")));
    assert!(is_class(&realm.function(FunctionKind::Class, "C")));
}
