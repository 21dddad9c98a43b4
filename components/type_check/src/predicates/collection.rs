//! Emptiness predicates

use core_types::JsValue;

use super::kind::{is_map, is_object, is_set};
use super::structural::{is_array, is_buffer};

/// Array with length 0
pub fn is_empty_array(value: &JsValue) -> bool {
    is_array(value) && value.length() == Some(0)
}

/// Array with at least one element
pub fn is_not_empty_array(value: &JsValue) -> bool {
    is_array(value) && value.length().is_some_and(|len| len > 0)
}

/// `Map` with size 0
pub fn is_empty_map(value: &JsValue) -> bool {
    is_map(value) && value.as_object().and_then(|obj| obj.collection_size()) == Some(0)
}

/// `Set` with size 0
pub fn is_empty_set(value: &JsValue) -> bool {
    is_set(value) && value.as_object().and_then(|obj| obj.collection_size()) == Some(0)
}

/// Buffer with length 0
pub fn is_empty_buffer(value: &JsValue) -> bool {
    is_buffer(value) && value.length() == Some(0)
}

/// Tag `Object` with no own enumerable string keys
///
/// Non-enumerable and symbol keys are not counted, so an object holding only
/// hidden state still reports empty.
pub fn is_empty_object(value: &JsValue) -> bool {
    is_object(value)
        && value
            .as_object()
            .is_some_and(|obj| obj.own_enumerable_keys().is_empty())
}

/// `undefined`, `null`, `""`, `false`, or an empty array, object, map, set or
/// buffer
///
/// `0`, `"0"`, `NaN` and boxed `false` are not empty.
///
/// ```
/// use core_types::JsValue;
/// use type_check::is_empty;
///
/// assert!(is_empty(&JsValue::Null));
/// assert!(is_empty(&JsValue::boolean(false)));
/// assert!(!is_empty(&JsValue::number(0.0)));
/// assert!(!is_empty(&JsValue::string("0")));
/// ```
pub fn is_empty(value: &JsValue) -> bool {
    match value {
        JsValue::Undefined | JsValue::Null => return true,
        JsValue::String(s) if s.is_empty() => return true,
        JsValue::Boolean(false) => return true,
        _ => {}
    }

    is_empty_array(value)
        || is_empty_object(value)
        || is_empty_map(value)
        || is_empty_set(value)
        || is_empty_buffer(value)
}
