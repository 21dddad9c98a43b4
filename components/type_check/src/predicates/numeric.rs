//! Numeric predicates
//!
//! `is_float`, `is_integer`, `is_safe_integer`, `is_nan_value` and the
//! timestamp checks follow `Number.is*` semantics and therefore only accept
//! primitive numbers. The sign checks compare through the relational numeric
//! view, so BigInts and boxed numbers take part.

use core_types::{JsValue, NumberObject};

use crate::classify::{classify, TypeTag};

fn is_number_tag(value: &JsValue) -> bool {
    classify(value) == Some(TypeTag::Number)
}

/// Number or BigInt, excluding primitive NaN
///
/// The NaN check follows `Number.isNaN`, which is false for every object,
/// so `new Number(NaN)` still counts as a number.
///
/// ```
/// use core_types::{JsValue, Realm};
/// use type_check::is_number;
///
/// assert!(is_number(&JsValue::number(1.5)));
/// assert!(is_number(&JsValue::bigint(7)));
/// assert!(!is_number(&JsValue::number(f64::NAN)));
/// assert!(!is_number(&JsValue::string("1")));
///
/// let realm = Realm::new();
/// assert!(is_number(&realm.to_object(&JsValue::number(f64::NAN)).unwrap()));
/// ```
pub fn is_number(value: &JsValue) -> bool {
    matches!(classify(value), Some(TypeTag::Number | TypeTag::BigInt))
        && !value.as_number().is_some_and(NumberObject::is_nan)
}

/// `is_number` and `< 0`
pub fn is_negative_number(value: &JsValue) -> bool {
    is_number(value) && value.to_numeric().is_some_and(|n| n.is_negative())
}

/// `is_number` and `> 0`
pub fn is_positive_number(value: &JsValue) -> bool {
    is_number(value) && value.to_numeric().is_some_and(|n| n.is_positive())
}

/// Finite number with a fractional part
pub fn is_float(value: &JsValue) -> bool {
    is_number_tag(value)
        && value
            .as_number()
            .is_some_and(|n| !NumberObject::is_integer(n) && NumberObject::is_finite(n))
}

/// `Number.isInteger`
pub fn is_integer(value: &JsValue) -> bool {
    value.as_number().is_some_and(NumberObject::is_integer)
}

/// `Number.isSafeInteger`
pub fn is_safe_integer(value: &JsValue) -> bool {
    value.as_number().is_some_and(NumberObject::is_safe_integer)
}

/// Primitive NaN
pub fn is_nan_value(value: &JsValue) -> bool {
    is_number_tag(value) && value.as_number().is_some_and(NumberObject::is_nan)
}

/// Non-negative integer below 2^53
pub fn is_timestamp(value: &JsValue) -> bool {
    is_unix_timestamp(value) && value.as_number().is_some_and(|n| n < NumberObject::TWO_POW_53)
}

/// Non-negative integer
pub fn is_unix_timestamp(value: &JsValue) -> bool {
    is_number_tag(value)
        && value
            .as_number()
            .is_some_and(|n| NumberObject::is_integer(n) && n >= 0.0)
}

/// Whether `parseFloat(String(value))` is a non-negative finite integer
///
/// String-encoded indices such as `"3"` are accepted.
pub fn is_valid_array_index(value: &JsValue) -> bool {
    let index = NumberObject::parse_float(&value.to_js_string());
    index >= 0.0 && index.floor() == index && index.is_finite()
}
