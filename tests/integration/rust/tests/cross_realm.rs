//! Cross-realm integration tests
//!
//! Values created in one realm and inspected with the shared classifier.
//! Everything that keys off internal slots or intrinsic markers must give
//! the same answer no matter which realm built the value.

use core_types::{ErrorKind, FunctionKind, Intrinsic, JsValue, PromiseState, Realm, TypedArrayKind};
use type_check::*;

fn two_realms() -> (Realm, Realm) {
    let home = Realm::new();
    let foreign = Realm::new();
    assert!(!home.same_realm(&foreign));
    (home, foreign)
}

/// Test: Arrays from another realm are still arrays
#[test]
fn test_foreign_array() {
    let (home, foreign) = two_realms();
    let array = foreign.array(vec![JsValue::number(1.0)]);

    let home_proto = home.intrinsic(Intrinsic::ArrayPrototype);
    assert!(!array.as_object().unwrap().has_in_prototype_chain(&home_proto));

    assert_eq!(classify(&array), Some(TypeTag::Object(ObjectTypeName::Array)));
    assert!(is_array(&array));
    assert!(is_not_empty_array(&array));
    assert!(is_empty_array(&foreign.array(vec![])));
}

/// Test: Maps and sets from another realm
#[test]
fn test_foreign_collections() {
    let (_home, foreign) = two_realms();
    let map = foreign.map(vec![]);
    let set = foreign.set(vec![JsValue::string("x")]);

    assert!(is_map(&map));
    assert!(is_empty_map(&map));
    assert!(is_empty(&map));
    assert!(is_set(&set));
    assert!(!is_empty_set(&set));
    assert!(is_weak_map(&foreign.weak_map()));
}

/// Test: Function flavors from another realm
#[test]
fn test_foreign_functions() {
    let (_home, foreign) = two_realms();
    let async_fn = foreign.function(FunctionKind::Async, "load");
    let class = foreign.function(FunctionKind::Class, "Point");
    let generator_fn = foreign.function(FunctionKind::Generator, "gen");

    assert_eq!(classify(&async_fn), Some(TypeTag::Object(ObjectTypeName::AsyncFunction)));
    assert!(is_async_function(&async_fn));
    assert!(is_function(&async_fn));
    assert!(is_class(&class));
    assert!(is_generator_function(&generator_fn));
    assert!(!is_function(&generator_fn));
}

/// Test: Plain objects are recognized through the intrinsic markers
#[test]
fn test_foreign_plain_object() {
    let (home, foreign) = two_realms();
    let object = foreign.object_from([("a", JsValue::number(1.0))]);
    let home_proto = home.intrinsic(Intrinsic::ObjectPrototype);

    assert!(!object.as_object().unwrap().prototype().unwrap().ptr_eq(&home_proto));
    assert!(is_plain_object(&object));
    assert!(is_object(&object));
    assert!(!is_empty_object(&object));

    // An object built here but inheriting the other realm's Object.prototype
    let adopted = home.object_with_prototype(Some(&foreign.intrinsic(Intrinsic::ObjectPrototype)));
    assert!(is_plain_object(&adopted));
}

/// Test: A derived object is not plain in either realm
#[test]
fn test_foreign_derived_object() {
    let (home, foreign) = two_realms();
    let parent = foreign.object();
    let child = home.object_with_prototype(parent.as_object());
    assert!(is_object(&child));
    assert!(!is_plain_object(&child));
    assert!(!is_plain_object(&foreign.object_with_prototype(None)));
}

/// Test: Buffers answer through their own realm's constructor
#[test]
fn test_foreign_buffer() {
    let (home, foreign) = two_realms();
    let buffer = foreign.buffer_from(b"abc");

    // The home realm's Buffer.isBuffer does not recognize it...
    let home_ctor = home.buffer_constructor();
    let home_is_buffer = home_ctor.get("isBuffer");
    let verdict = home_is_buffer
        .as_object()
        .unwrap()
        .call(&home_ctor, std::slice::from_ref(&buffer))
        .unwrap();
    assert_eq!(verdict, JsValue::boolean(false));

    // ...but the probe goes through `buffer.constructor`
    assert!(is_buffer(&buffer));
    assert_eq!(classify(&buffer), Some(TypeTag::Object(ObjectTypeName::Buffer)));
    assert!(is_uint8_array(&buffer));
    assert!(!is_empty_buffer(&buffer));
}

/// Test: Typed arrays and binary data from another realm
#[test]
fn test_foreign_binary_data() {
    let (_home, foreign) = two_realms();
    for kind in TypedArrayKind::ALL {
        assert!(is_typed_array(&foreign.typed_array(kind, 1)), "{:?}", kind);
    }
    let buffer = foreign.array_buffer(16);
    assert!(is_array_buffer(&buffer));
    assert!(is_data_view(&foreign.data_view(&buffer).unwrap()));
    assert!(is_shared_array_buffer(&foreign.shared_array_buffer(4)));
}

/// Test: Errors, promises, dates and boxed primitives from another realm
#[test]
fn test_foreign_builtins() {
    let (_home, foreign) = two_realms();
    assert!(is_error(&foreign.error(ErrorKind::RangeError, "out of range")));
    assert!(is_promise(&foreign.promise(PromiseState::Pending)));
    assert!(is_date(&foreign.date(0.0)));
    assert!(is_reg_exp(&foreign.regexp("x", "i")));

    let boxed = foreign.to_object(&JsValue::string("")).unwrap();
    assert_eq!(classify(&boxed), Some(TypeTag::String));
    assert!(is_empty_string(&boxed));
    assert!(!is_empty(&boxed));
}

/// Test: Host objects keep their kind across realms
#[test]
fn test_foreign_host_objects() {
    let (_home, foreign) = two_realms();
    assert!(is_url(&foreign.url("https://example.com/")));
    assert!(is_form_data(&foreign.host_object(core_types::HostKind::FormData)));
    assert!(is_html_element(&foreign.host_object(core_types::HostKind::HtmlElement)));
}
