//! Structural predicates: arrays, buffers, callables and plain objects

use core_types::{Intrinsic, JsValue};

use crate::classify::{classify, TypeTag};
use crate::vocabulary::ObjectTypeName;

/// `Array.isArray`; works across realms
pub fn is_array(value: &JsValue) -> bool {
    value.as_object().is_some_and(|obj| obj.is_array())
}

/// Buffer capability probe: `value.constructor.isBuffer(value)`
///
/// The one check that does not go through the class tag. A throwing
/// `isBuffer` counts as `false`.
pub fn is_buffer(value: &JsValue) -> bool {
    let constructor = value.get("constructor");
    let probe = constructor.get("isBuffer");
    let Some(is_buffer) = probe.as_object().filter(|f| f.is_callable()) else {
        return false;
    };

    match is_buffer.call(&constructor, std::slice::from_ref(value)) {
        Ok(result) => result.to_boolean(),
        Err(error) => {
            tracing::debug!(%error, "isBuffer probe threw; treating value as not a buffer");
            false
        }
    }
}

/// Plain or async function; generator functions are excluded
///
/// ```
/// use core_types::{FunctionKind, Realm};
/// use type_check::is_function;
///
/// let realm = Realm::new();
/// assert!(is_function(&realm.function(FunctionKind::Arrow, "")));
/// assert!(is_function(&realm.function(FunctionKind::Async, "f")));
/// assert!(!is_function(&realm.function(FunctionKind::Generator, "g")));
/// ```
pub fn is_function(value: &JsValue) -> bool {
    matches!(
        classify(value),
        Some(TypeTag::Function | TypeTag::Object(ObjectTypeName::AsyncFunction))
    )
}

/// Function whose source text starts with `class `
///
/// This is a textual heuristic: a class with a rewritten `toString`, or a
/// transpiled class, is not detected.
pub fn is_class(value: &JsValue) -> bool {
    is_function(value)
        && value
            .as_object()
            .and_then(|obj| obj.function_source())
            .is_some_and(|source| source.starts_with("class "))
}

/// Object created by a literal, `new Object()` or JSON: its prototype is a
/// base object prototype whose `constructor` is `Object`
///
/// The prototype is matched by intrinsic marker, not by identity with one
/// realm's `Object.prototype`. A `prototype === Object.prototype` check only
/// accepts objects from the calling realm; this one also accepts plain
/// objects made in any other realm. Null-prototype objects are not plain.
pub fn is_plain_object(value: &JsValue) -> bool {
    if classify(value) != Some(TypeTag::Object(ObjectTypeName::Object)) {
        return false;
    }
    let Some(prototype) = value.as_object().and_then(|obj| obj.prototype()) else {
        return false;
    };

    let constructor = prototype.get("constructor");
    prototype.is_intrinsic(Intrinsic::ObjectPrototype)
        && constructor
            .as_object()
            .is_some_and(|ctor| ctor.is_intrinsic(Intrinsic::ObjectConstructor))
}
