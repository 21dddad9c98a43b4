//! Primitive category, truthiness and text predicates

use std::sync::LazyLock;

use core_types::JsValue;
use regex::Regex;

use crate::classify::{classify, TypeTag};

/// One or more characters from the language's `\s` class
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}",
        r"\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+$",
    ))
    .expect("valid whitespace pattern")
});

/// `null`
pub fn is_null(value: &JsValue) -> bool {
    classify(value) == Some(TypeTag::Null)
}

/// `undefined`
pub fn is_undefined(value: &JsValue) -> bool {
    classify(value) == Some(TypeTag::Undefined)
}

/// Anything but `undefined`; `null` counts as defined
pub fn is_defined(value: &JsValue) -> bool {
    !value.is_undefined()
}

/// Primitive or boxed string
pub fn is_string(value: &JsValue) -> bool {
    classify(value) == Some(TypeTag::String)
}

/// Primitive symbol
pub fn is_symbol(value: &JsValue) -> bool {
    classify(value) == Some(TypeTag::Symbol)
}

/// Primitive BigInt
pub fn is_bigint(value: &JsValue) -> bool {
    classify(value) == Some(TypeTag::BigInt)
}

/// Primitive or boxed boolean
pub fn is_boolean(value: &JsValue) -> bool {
    classify(value) == Some(TypeTag::Boolean)
}

/// ToBoolean gives `true`
pub fn is_truthy(value: &JsValue) -> bool {
    value.to_boolean()
}

/// ToBoolean gives `false`
pub fn is_falsy(value: &JsValue) -> bool {
    !value.to_boolean()
}

/// A string (possibly boxed) of length zero
pub fn is_empty_string(value: &JsValue) -> bool {
    is_string(value) && value.length() == Some(0)
}

/// A string (possibly boxed) made only of whitespace, at least one character
///
/// ```
/// use core_types::JsValue;
/// use type_check::is_whitespace;
///
/// assert!(is_whitespace(&JsValue::string(" \t\n")));
/// assert!(!is_whitespace(&JsValue::string("")));
/// assert!(!is_whitespace(&JsValue::string(" a ")));
/// ```
pub fn is_whitespace(value: &JsValue) -> bool {
    is_string(value) && WHITESPACE.is_match(&value.to_js_string())
}
