//! Exactly one mutually exclusive tag predicate holds for every value

use core_types::{JsValue, Realm};
use type_check::*;

use crate::fixtures::canonical_values;

type Check = Box<dyn Fn(&JsValue) -> bool>;

/// Predicates that partition the value space. `is_number` is replaced by
/// a tag check (it excludes NaN and overlaps `is_bigint`); `is_function` and
/// `is_uint8_array` are replaced the same way because they overlap
/// `is_async_function` and `is_buffer`.
fn exclusive_checks() -> Vec<(&'static str, Check)> {
    let tag = |expected: TypeTag| -> Check {
        Box::new(move |v: &JsValue| classify(v) == Some(expected))
    };
    let from = |f: Predicate| -> Check { Box::new(f) };
    vec![
        ("null", from(is_null)),
        ("undefined", from(is_undefined)),
        ("string", from(is_string)),
        ("boolean", from(is_boolean)),
        ("symbol", from(is_symbol)),
        ("bigint", from(is_bigint)),
        ("number", tag(TypeTag::Number)),
        ("function", tag(TypeTag::Function)),
        ("Uint8Array", tag(TypeTag::Object(ObjectTypeName::Uint8Array))),
        ("Object", from(is_object)),
        ("Array", from(is_array)),
        ("Buffer", from(is_buffer)),
        ("Date", from(is_date)),
        ("Map", from(is_map)),
        ("Set", from(is_set)),
        ("FormData", from(is_form_data)),
        ("Error", from(is_error)),
        ("Promise", from(is_promise)),
        ("RegExp", from(is_reg_exp)),
        ("WeakMap", from(is_weak_map)),
        ("WeakSet", from(is_weak_set)),
        ("WeakRef", from(is_weak_ref)),
        ("Blob", from(is_blob)),
        ("ArrayBuffer", from(is_array_buffer)),
        ("SharedArrayBuffer", from(is_shared_array_buffer)),
        ("DataView", from(is_data_view)),
        ("URL", from(is_url)),
        ("URLSearchParams", from(is_url_search_params)),
        ("HTMLElement", from(is_html_element)),
        ("Observable", from(is_observable)),
        ("AsyncFunction", from(is_async_function)),
        ("Generator", from(is_generator)),
        ("GeneratorFunction", from(is_generator_function)),
        ("AsyncGenerator", from(is_async_generator)),
        ("AsyncGeneratorFunction", from(is_async_generator_function)),
        ("Int8Array", from(is_int8_array)),
        ("Int16Array", from(is_int16_array)),
        ("Int32Array", from(is_int32_array)),
        ("Uint8ClampedArray", from(is_uint8_clamped_array)),
        ("Uint16Array", from(is_uint16_array)),
        ("Uint32Array", from(is_uint32_array)),
        ("Float32Array", from(is_float32_array)),
        ("Float64Array", from(is_float64_array)),
        ("BigInt64Array", from(is_big_int64_array)),
        ("BigUint64Array", from(is_big_uint64_array)),
    ]
}

#[test]
fn test_exactly_one_tag_holds() {
    let realm = Realm::new();
    let checks = exclusive_checks();
    for value in canonical_values(&realm) {
        let holding: Vec<&str> = checks
            .iter()
            .filter(|(_, check)| check(&value))
            .map(|(name, _)| *name)
            .collect();
        assert_eq!(holding.len(), 1, "{:?} matched {:?}", value, holding);
    }
}

#[test]
fn test_documented_overlaps() {
    let big = JsValue::bigint(3);
    assert!(is_number(&big) && is_bigint(&big));

    let ts = JsValue::number(1_700_000_000_000.0);
    assert!(is_timestamp(&ts) && is_unix_timestamp(&ts));
}
