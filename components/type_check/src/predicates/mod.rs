//! Predicate library
//!
//! Every predicate is a total `fn(&JsValue) -> bool` derived from
//! [`classify`](crate::classify) or [`resolve_object_kind`](crate::resolve_object_kind).
//! [`PREDICATES`] lists them all under their snake_case names.

use core_types::JsValue;

mod collection;
mod kind;
mod numeric;
mod primitive;
mod structural;

pub use collection::{
    is_empty, is_empty_array, is_empty_buffer, is_empty_map, is_empty_object, is_empty_set,
    is_not_empty_array,
};
pub use kind::{
    is_array_buffer, is_async_function, is_async_generator, is_async_generator_function,
    is_big_int64_array, is_big_uint64_array, is_blob, is_data_view, is_date, is_error,
    is_float32_array, is_float64_array, is_form_data, is_generator, is_generator_function,
    is_html_element, is_int16_array, is_int32_array, is_int8_array, is_map, is_object,
    is_observable, is_promise, is_reg_exp, is_set, is_shared_array_buffer, is_typed_array,
    is_uint16_array, is_uint32_array, is_uint8_array, is_uint8_clamped_array, is_url,
    is_url_search_params, is_weak_map, is_weak_ref, is_weak_set,
};
pub use numeric::{
    is_float, is_integer, is_nan_value, is_negative_number, is_number, is_positive_number,
    is_safe_integer, is_timestamp, is_unix_timestamp, is_valid_array_index,
};
pub use primitive::{
    is_bigint, is_boolean, is_defined, is_empty_string, is_falsy, is_null, is_string, is_symbol,
    is_truthy, is_undefined, is_whitespace,
};
pub use structural::{is_array, is_buffer, is_class, is_function, is_plain_object};

/// A named type predicate
pub type Predicate = fn(&JsValue) -> bool;

/// Every predicate, keyed by name, in alphabetical order
pub const PREDICATES: &[(&str, Predicate)] = &[
    ("is_array", is_array),
    ("is_array_buffer", is_array_buffer),
    ("is_async_function", is_async_function),
    ("is_async_generator", is_async_generator),
    ("is_async_generator_function", is_async_generator_function),
    ("is_big_int64_array", is_big_int64_array),
    ("is_big_uint64_array", is_big_uint64_array),
    ("is_bigint", is_bigint),
    ("is_blob", is_blob),
    ("is_boolean", is_boolean),
    ("is_buffer", is_buffer),
    ("is_class", is_class),
    ("is_data_view", is_data_view),
    ("is_date", is_date),
    ("is_defined", is_defined),
    ("is_empty", is_empty),
    ("is_empty_array", is_empty_array),
    ("is_empty_buffer", is_empty_buffer),
    ("is_empty_map", is_empty_map),
    ("is_empty_object", is_empty_object),
    ("is_empty_set", is_empty_set),
    ("is_empty_string", is_empty_string),
    ("is_error", is_error),
    ("is_falsy", is_falsy),
    ("is_float", is_float),
    ("is_float32_array", is_float32_array),
    ("is_float64_array", is_float64_array),
    ("is_form_data", is_form_data),
    ("is_function", is_function),
    ("is_generator", is_generator),
    ("is_generator_function", is_generator_function),
    ("is_html_element", is_html_element),
    ("is_int16_array", is_int16_array),
    ("is_int32_array", is_int32_array),
    ("is_int8_array", is_int8_array),
    ("is_integer", is_integer),
    ("is_map", is_map),
    ("is_nan_value", is_nan_value),
    ("is_negative_number", is_negative_number),
    ("is_not_empty_array", is_not_empty_array),
    ("is_null", is_null),
    ("is_number", is_number),
    ("is_object", is_object),
    ("is_observable", is_observable),
    ("is_plain_object", is_plain_object),
    ("is_positive_number", is_positive_number),
    ("is_promise", is_promise),
    ("is_reg_exp", is_reg_exp),
    ("is_safe_integer", is_safe_integer),
    ("is_set", is_set),
    ("is_shared_array_buffer", is_shared_array_buffer),
    ("is_string", is_string),
    ("is_symbol", is_symbol),
    ("is_timestamp", is_timestamp),
    ("is_truthy", is_truthy),
    ("is_typed_array", is_typed_array),
    ("is_uint16_array", is_uint16_array),
    ("is_uint32_array", is_uint32_array),
    ("is_uint8_array", is_uint8_array),
    ("is_uint8_clamped_array", is_uint8_clamped_array),
    ("is_undefined", is_undefined),
    ("is_unix_timestamp", is_unix_timestamp),
    ("is_url", is_url),
    ("is_url_search_params", is_url_search_params),
    ("is_valid_array_index", is_valid_array_index),
    ("is_weak_map", is_weak_map),
    ("is_weak_ref", is_weak_ref),
    ("is_weak_set", is_weak_set),
    ("is_whitespace", is_whitespace),
];

/// Look up a predicate by its snake_case name
///
/// ```
/// use core_types::JsValue;
/// use type_check::predicate_by_name;
///
/// let is_null = predicate_by_name("is_null").unwrap();
/// assert!(is_null(&JsValue::Null));
/// assert!(predicate_by_name("is_banana").is_none());
/// ```
pub fn predicate_by_name(name: &str) -> Option<Predicate> {
    PREDICATES
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, predicate)| *predicate)
}

/// Names of the predicates that hold for `value`, in catalog order
pub fn matching_predicates(value: &JsValue) -> Vec<&'static str> {
    PREDICATES
        .iter()
        .filter(|(_, predicate)| predicate(value))
        .map(|(name, _)| *name)
        .collect()
}
