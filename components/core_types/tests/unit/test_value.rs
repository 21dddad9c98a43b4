//! Unit tests for JsValue conversions

use core_types::{ErrorKind, FunctionKind, JsValue, Realm, TypeOf, TypedArrayKind};

#[cfg(test)]
mod type_of_tests {
    use super::*;

    #[test]
    fn test_type_of_primitives() {
        assert_eq!(JsValue::Undefined.type_of(), TypeOf::Undefined);
        assert_eq!(JsValue::Null.type_of(), TypeOf::Object);
        assert_eq!(JsValue::boolean(true).type_of(), TypeOf::Boolean);
        assert_eq!(JsValue::number(1.0).type_of(), TypeOf::Number);
        assert_eq!(JsValue::string("").type_of(), TypeOf::String);
    }

    #[test]
    fn test_type_of_objects() {
        let realm = Realm::new();
        assert_eq!(realm.object().type_of(), TypeOf::Object);
        assert_eq!(realm.function(FunctionKind::Class, "C").type_of(), TypeOf::Function);
        assert_eq!(
            realm.to_object(&JsValue::number(1.0)).unwrap().type_of(),
            TypeOf::Object
        );
    }
}

#[cfg(test)]
mod object_to_string_tests {
    use super::*;

    #[test]
    fn test_primitive_tags() {
        assert_eq!(JsValue::Undefined.object_to_string(), "[object Undefined]");
        assert_eq!(JsValue::number(f64::NAN).object_to_string(), "[object Number]");
        assert_eq!(JsValue::bigint(1).object_to_string(), "[object BigInt]");
        assert_eq!(JsValue::symbol(None).object_to_string(), "[object Symbol]");
    }

    #[test]
    fn test_builtin_tags() {
        let realm = Realm::new();
        assert_eq!(realm.date(0.0).object_to_string(), "[object Date]");
        assert_eq!(realm.error(ErrorKind::TypeError, "x").object_to_string(), "[object Error]");
        assert_eq!(realm.regexp("a", "g").object_to_string(), "[object RegExp]");
        assert_eq!(realm.weak_map().object_to_string(), "[object WeakMap]");
        assert_eq!(realm.generator().object_to_string(), "[object Generator]");
        assert_eq!(
            realm.typed_array(TypedArrayKind::BigInt64, 1).object_to_string(),
            "[object BigInt64Array]"
        );
        assert_eq!(
            realm.function(FunctionKind::AsyncGenerator, "g").object_to_string(),
            "[object AsyncGeneratorFunction]"
        );
    }

    #[test]
    fn test_null_prototype_object() {
        let realm = Realm::new();
        assert_eq!(realm.object_with_prototype(None).object_to_string(), "[object Object]");
    }
}

#[cfg(test)]
mod to_js_string_tests {
    use super::*;

    #[test]
    fn test_array_join() {
        let realm = Realm::new();
        let arr = realm.array(vec![
            JsValue::number(1.0),
            JsValue::Null,
            JsValue::string("x"),
            JsValue::Undefined,
        ]);
        assert_eq!(arr.to_js_string(), "1,,x,");
    }

    #[test]
    fn test_cyclic_array() {
        let realm = Realm::new();
        let arr = realm.array(vec![JsValue::number(1.0)]);
        let object = arr.as_object().unwrap();
        if let core_types::ObjectSlots::Array(elements) = &mut *object.slots_mut() {
            elements.push(arr.clone());
        }
        assert_eq!(arr.to_js_string(), "1,");
    }

    #[test]
    fn test_object_renderings() {
        let realm = Realm::new();
        assert_eq!(realm.object().to_js_string(), "[object Object]");
        assert_eq!(realm.error(ErrorKind::RangeError, "bad").to_js_string(), "RangeError: bad");
        assert_eq!(realm.regexp("a+", "gi").to_js_string(), "/a+/gi");
        assert_eq!(realm.date(f64::NAN).to_js_string(), "Invalid Date");
        assert_eq!(
            realm.function(FunctionKind::Normal, "f").to_js_string(),
            "function f() {}"
        );
        assert_eq!(
            realm.to_object(&JsValue::boolean(false)).unwrap().to_js_string(),
            "false"
        );
    }
}

#[cfg(test)]
mod length_tests {
    use super::*;

    #[test]
    fn test_string_length_is_utf16() {
        assert_eq!(JsValue::string("héllo").length(), Some(5));
        assert_eq!(JsValue::string("😀").length(), Some(2));
    }

    #[test]
    fn test_object_lengths() {
        let realm = Realm::new();
        assert_eq!(realm.array(vec![JsValue::Null]).length(), Some(1));
        assert_eq!(realm.typed_array(TypedArrayKind::Float64, 3).length(), Some(3));
        assert_eq!(realm.object().length(), None);
        assert_eq!(JsValue::number(3.0).length(), None);
    }
}
