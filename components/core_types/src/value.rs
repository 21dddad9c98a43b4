//! JavaScript value representation.
//!
//! Primitive values are stored inline, while objects are shared references
//! to heap records (see [`JsObject`]). The conversions here are the parts of
//! the language's abstract operations that reflection needs: ToBoolean,
//! `String(value)`, the numeric view used by relational comparison, and
//! `typeof`.

use std::fmt;

use chrono::{DateTime, Datelike, Utc};
use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed, Zero};

use crate::number::{is_js_whitespace, number_to_string, string_to_number};
use crate::object::{JsObject, PropertyKey};
use crate::slots::ObjectSlots;
use crate::symbol::SymbolValue;

/// BigInt value wrapper for arbitrary precision integers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigIntValue {
    inner: BigInt,
}

impl BigIntValue {
    /// Create a new BigIntValue from a num_bigint::BigInt
    pub fn new(inner: BigInt) -> Self {
        BigIntValue { inner }
    }

    /// Get a reference to the inner BigInt
    pub fn inner(&self) -> &BigInt {
        &self.inner
    }

    /// `0n`
    pub fn is_zero(&self) -> bool {
        self.inner.is_zero()
    }

    /// Strictly below zero
    pub fn is_negative(&self) -> bool {
        self.inner.is_negative()
    }

    /// Strictly above zero
    pub fn is_positive(&self) -> bool {
        self.inner.is_positive()
    }
}

impl From<i32> for BigIntValue {
    fn from(value: i32) -> Self {
        BigIntValue::new(BigInt::from(value))
    }
}

impl From<i64> for BigIntValue {
    fn from(value: i64) -> Self {
        BigIntValue::new(BigInt::from(value))
    }
}

impl From<BigInt> for BigIntValue {
    fn from(value: BigInt) -> Self {
        BigIntValue::new(value)
    }
}

impl fmt::Display for BigIntValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner)
    }
}

/// Represents any JavaScript value.
///
/// # Examples
///
/// ```
/// use core_types::{JsValue, TypeOf};
///
/// let undefined = JsValue::Undefined;
/// let number = JsValue::number(42.0);
///
/// assert!(!undefined.to_boolean());
/// assert!(number.to_boolean());
/// assert_eq!(number.type_of(), TypeOf::Number);
/// ```
#[derive(Debug, Clone)]
pub enum JsValue {
    /// undefined
    Undefined,
    /// null
    Null,
    /// Boolean value
    Boolean(bool),
    /// Number (IEEE 754 double)
    Number(f64),
    /// String value
    String(String),
    /// BigInt value (arbitrary precision integer)
    BigInt(BigIntValue),
    /// Symbol value
    Symbol(SymbolValue),
    /// Reference to a heap object
    Object(JsObject),
}

/// Result of the `typeof` operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeOf {
    /// "undefined"
    Undefined,
    /// "object" (including null)
    Object,
    /// "boolean"
    Boolean,
    /// "number"
    Number,
    /// "string"
    String,
    /// "symbol"
    Symbol,
    /// "bigint"
    BigInt,
    /// "function"
    Function,
}

impl TypeOf {
    /// The string `typeof` evaluates to
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeOf::Undefined => "undefined",
            TypeOf::Object => "object",
            TypeOf::Boolean => "boolean",
            TypeOf::Number => "number",
            TypeOf::String => "string",
            TypeOf::Symbol => "symbol",
            TypeOf::BigInt => "bigint",
            TypeOf::Function => "function",
        }
    }
}

/// Numeric view of a value, as seen by `<` and `>` against a number
#[derive(Debug, Clone, PartialEq)]
pub enum Numeric {
    /// Number value
    Number(f64),
    /// BigInt value
    BigInt(BigIntValue),
}

impl Numeric {
    /// NaN (never true for BigInt)
    pub fn is_nan(&self) -> bool {
        matches!(self, Numeric::Number(n) if n.is_nan())
    }

    /// `value < 0`
    pub fn is_negative(&self) -> bool {
        match self {
            Numeric::Number(n) => *n < 0.0,
            Numeric::BigInt(b) => b.is_negative(),
        }
    }

    /// `value > 0`
    pub fn is_positive(&self) -> bool {
        match self {
            Numeric::Number(n) => *n > 0.0,
            Numeric::BigInt(b) => b.is_positive(),
        }
    }
}

impl JsValue {
    /// Create undefined value
    pub fn undefined() -> Self {
        JsValue::Undefined
    }

    /// Create null value
    pub fn null() -> Self {
        JsValue::Null
    }

    /// Create boolean value
    pub fn boolean(v: bool) -> Self {
        JsValue::Boolean(v)
    }

    /// Create number value
    pub fn number(v: f64) -> Self {
        JsValue::Number(v)
    }

    /// Create string value
    pub fn string(s: impl Into<String>) -> Self {
        JsValue::String(s.into())
    }

    /// Create a BigInt value
    pub fn bigint(value: impl Into<BigIntValue>) -> Self {
        JsValue::BigInt(value.into())
    }

    /// Create a fresh unique symbol
    pub fn symbol(description: Option<&str>) -> Self {
        JsValue::Symbol(SymbolValue::new(description))
    }

    /// The `typeof` operator
    ///
    /// ```
    /// use core_types::{JsValue, TypeOf};
    ///
    /// assert_eq!(JsValue::Null.type_of(), TypeOf::Object);
    /// assert_eq!(JsValue::string("a").type_of().as_str(), "string");
    /// ```
    pub fn type_of(&self) -> TypeOf {
        match self {
            JsValue::Undefined => TypeOf::Undefined,
            JsValue::Null => TypeOf::Object, // typeof null === "object"
            JsValue::Boolean(_) => TypeOf::Boolean,
            JsValue::Number(_) => TypeOf::Number,
            JsValue::String(_) => TypeOf::String,
            JsValue::BigInt(_) => TypeOf::BigInt,
            JsValue::Symbol(_) => TypeOf::Symbol,
            JsValue::Object(obj) if obj.is_callable() => TypeOf::Function,
            JsValue::Object(_) => TypeOf::Object,
        }
    }

    /// Check if value is undefined
    pub fn is_undefined(&self) -> bool {
        matches!(self, JsValue::Undefined)
    }

    /// Check if value is null
    pub fn is_null(&self) -> bool {
        matches!(self, JsValue::Null)
    }

    /// Check if value is null or undefined
    pub fn is_nullish(&self) -> bool {
        matches!(self, JsValue::Undefined | JsValue::Null)
    }

    /// Check if value is callable
    pub fn is_callable(&self) -> bool {
        matches!(self, JsValue::Object(obj) if obj.is_callable())
    }

    /// Get as object reference
    pub fn as_object(&self) -> Option<&JsObject> {
        match self {
            JsValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Get as primitive number (wrappers excluded)
    pub fn as_number(&self) -> Option<f64> {
        match self {
            JsValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as primitive string (wrappers excluded)
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Property lookup; primitives have no reachable properties in this host
    pub fn get(&self, key: impl Into<PropertyKey>) -> JsValue {
        match self {
            JsValue::Object(obj) => obj.get(key),
            _ => JsValue::Undefined,
        }
    }

    /// ToBoolean
    pub fn to_boolean(&self) -> bool {
        match self {
            JsValue::Undefined | JsValue::Null => false,
            JsValue::Boolean(b) => *b,
            JsValue::Number(n) => !n.is_nan() && *n != 0.0,
            JsValue::String(s) => !s.is_empty(),
            JsValue::BigInt(b) => !b.is_zero(),
            JsValue::Symbol(_) | JsValue::Object(_) => true, // All objects are truthy
        }
    }

    /// Numeric view used by relational operators: number and BigInt
    /// primitives and their wrappers
    pub fn to_numeric(&self) -> Option<Numeric> {
        match self {
            JsValue::Number(n) => Some(Numeric::Number(*n)),
            JsValue::BigInt(b) => Some(Numeric::BigInt(b.clone())),
            JsValue::Object(obj) => match &*obj.slots() {
                ObjectSlots::Number(n) => Some(Numeric::Number(*n)),
                ObjectSlots::BigInt(b) => Some(Numeric::BigInt(b.clone())),
                _ => None,
            },
            _ => None,
        }
    }

    /// `length` in UTF-16 code units for strings, element count for arrays,
    /// typed arrays and string wrappers
    pub fn length(&self) -> Option<usize> {
        match self {
            JsValue::String(s) => Some(s.encode_utf16().count()),
            JsValue::Object(obj) => obj.element_count(),
            _ => None,
        }
    }

    /// Bare tag reported by `Object.prototype.toString.call(value)`
    pub fn to_string_tag(&self) -> String {
        match self {
            JsValue::Undefined => "Undefined".to_string(),
            JsValue::Null => "Null".to_string(),
            JsValue::Boolean(_) => "Boolean".to_string(),
            JsValue::Number(_) => "Number".to_string(),
            JsValue::String(_) => "String".to_string(),
            JsValue::BigInt(_) => "BigInt".to_string(),
            JsValue::Symbol(_) => "Symbol".to_string(),
            JsValue::Object(obj) => obj.class_tag(),
        }
    }

    /// `Object.prototype.toString.call(value)`
    ///
    /// ```
    /// use core_types::{JsValue, Realm};
    ///
    /// let realm = Realm::new();
    /// assert_eq!(realm.array(vec![]).object_to_string(), "[object Array]");
    /// assert_eq!(JsValue::Null.object_to_string(), "[object Null]");
    /// ```
    pub fn object_to_string(&self) -> String {
        format!("[object {}]", self.to_string_tag())
    }

    /// `String(value)`. Never fails, symbols included.
    ///
    /// Objects render with their built-in behavior; user-defined `toString`
    /// methods are not invoked.
    pub fn to_js_string(&self) -> String {
        let mut visiting = Vec::new();
        self.to_js_string_guarded(&mut visiting)
    }

    fn to_js_string_guarded(&self, visiting: &mut Vec<JsObject>) -> String {
        match self {
            JsValue::Undefined => "undefined".to_string(),
            JsValue::Null => "null".to_string(),
            JsValue::Boolean(b) => b.to_string(),
            JsValue::Number(n) => number_to_string(*n),
            JsValue::String(s) => s.clone(),
            JsValue::BigInt(b) => b.to_string(),
            JsValue::Symbol(sym) => sym.to_string(),
            JsValue::Object(obj) => {
                // Cyclic arrays join to "" at the point of recursion
                if visiting.iter().any(|seen| seen.ptr_eq(obj)) {
                    return String::new();
                }
                visiting.push(obj.clone());
                let rendered = object_to_js_string(obj, visiting);
                visiting.pop();
                rendered
            }
        }
    }

    fn to_primitive(&self) -> JsValue {
        let JsValue::Object(obj) = self else {
            return self.clone();
        };
        let unwrapped = match &*obj.slots() {
            ObjectSlots::Boolean(b) => Some(JsValue::Boolean(*b)),
            ObjectSlots::Number(n) => Some(JsValue::Number(*n)),
            ObjectSlots::String(s) => Some(JsValue::String(s.clone())),
            ObjectSlots::BigInt(b) => Some(JsValue::BigInt(b.clone())),
            ObjectSlots::Symbol(sym) => Some(JsValue::Symbol(sym.clone())),
            _ => None,
        };
        unwrapped.unwrap_or_else(|| JsValue::String(self.to_js_string()))
    }

    /// `===`
    pub fn strict_equals(&self, other: &JsValue) -> bool {
        match (self, other) {
            (JsValue::Undefined, JsValue::Undefined) => true,
            (JsValue::Null, JsValue::Null) => true,
            (JsValue::Boolean(a), JsValue::Boolean(b)) => a == b,
            (JsValue::Number(a), JsValue::Number(b)) => a == b,
            (JsValue::String(a), JsValue::String(b)) => a == b,
            (JsValue::BigInt(a), JsValue::BigInt(b)) => a == b,
            (JsValue::Symbol(a), JsValue::Symbol(b)) => a == b,
            (JsValue::Object(a), JsValue::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// `==` (IsLooselyEqual)
    ///
    /// ```
    /// use core_types::{JsValue, Realm};
    ///
    /// let realm = Realm::new();
    /// let boxed = realm.to_object(&JsValue::number(42.0)).unwrap();
    /// assert!(boxed.loose_equals(&JsValue::number(42.0)));
    /// assert!(JsValue::string("42").loose_equals(&JsValue::number(42.0)));
    /// ```
    pub fn loose_equals(&self, other: &JsValue) -> bool {
        match (self, other) {
            (a, b) if a.is_nullish() || b.is_nullish() => a.is_nullish() && b.is_nullish(),
            (JsValue::Object(a), JsValue::Object(b)) => a.ptr_eq(b),
            (JsValue::Object(_), _) => self.to_primitive().loose_equals(other),
            (_, JsValue::Object(_)) => self.loose_equals(&other.to_primitive()),
            (JsValue::Boolean(b), _) => {
                JsValue::Number(if *b { 1.0 } else { 0.0 }).loose_equals(other)
            }
            (_, JsValue::Boolean(b)) => {
                self.loose_equals(&JsValue::Number(if *b { 1.0 } else { 0.0 }))
            }
            (JsValue::Number(n), JsValue::String(s)) | (JsValue::String(s), JsValue::Number(n)) => {
                *n == string_to_number(s)
            }
            (JsValue::BigInt(b), JsValue::String(s)) | (JsValue::String(s), JsValue::BigInt(b)) => s
                .trim_matches(is_js_whitespace)
                .parse::<BigInt>()
                .is_ok_and(|parsed| &parsed == b.inner()),
            (JsValue::BigInt(b), JsValue::Number(n)) | (JsValue::Number(n), JsValue::BigInt(b)) => {
                n.is_finite()
                    && n.trunc() == *n
                    && BigInt::from_f64(*n).is_some_and(|converted| &converted == b.inner())
            }
            _ => self.strict_equals(other),
        }
    }

    /// SameValueZero, the key comparison of Map and Set
    pub fn same_value_zero(&self, other: &JsValue) -> bool {
        match (self, other) {
            (JsValue::Number(a), JsValue::Number(b)) if a.is_nan() && b.is_nan() => true,
            _ => self.strict_equals(other),
        }
    }
}

fn object_to_js_string(obj: &JsObject, visiting: &mut Vec<JsObject>) -> String {
    let slots = obj.slots();
    match &*slots {
        ObjectSlots::Array(elements) => elements
            .iter()
            .map(|element| {
                if element.is_nullish() {
                    String::new()
                } else {
                    element.to_js_string_guarded(visiting)
                }
            })
            .collect::<Vec<_>>()
            .join(","),
        ObjectSlots::TypedArray(data) => data
            .elements()
            .iter()
            .map(|element| element.to_js_string_guarded(visiting))
            .collect::<Vec<_>>()
            .join(","),
        ObjectSlots::Boolean(b) => b.to_string(),
        ObjectSlots::Number(n) => number_to_string(*n),
        ObjectSlots::String(s) => s.clone(),
        ObjectSlots::BigInt(b) => b.to_string(),
        ObjectSlots::Symbol(sym) => sym.to_string(),
        ObjectSlots::Function(data) => data.source.clone(),
        ObjectSlots::Date(time_value) => format_date(*time_value),
        ObjectSlots::Error(data) if data.message.is_empty() => data.kind.name().to_string(),
        ObjectSlots::Error(data) => format!("{}: {}", data.kind, data.message),
        ObjectSlots::RegExp { source, flags } => format!("/{}/{}", source, flags),
        _ => format!("[object {}]", obj.class_tag()),
    }
}

/// Largest time value a Date can hold, in either direction
const MAX_TIME_VALUE: f64 = 8.64e15;

/// Length of a Gregorian 400-year cycle; weekdays repeat across it
const MS_PER_400_YEARS: i64 = 146_097 * 86_400_000;

/// `Date.prototype.toString`, rendered in UTC
///
/// chrono's calendar stops short of the full time-value range, so the
/// instant is moved by whole 400-year cycles before formatting and the year
/// is written back afterwards.
fn format_date(time_value: f64) -> String {
    if !time_value.is_finite() || time_value.abs() > MAX_TIME_VALUE {
        return "Invalid Date".to_string();
    }
    let millis = time_value as i64;
    let cycles = millis / MS_PER_400_YEARS;
    let Some(date) = DateTime::<Utc>::from_timestamp_millis(millis - cycles * MS_PER_400_YEARS)
    else {
        return "Invalid Date".to_string();
    };

    let year = i64::from(date.year()) + cycles * 400;
    format!(
        "{} {}{:04} {}",
        date.format("%a %b %d"),
        if year < 0 { "-" } else { "" },
        year.abs(),
        date.format("%H:%M:%S GMT+0000 (Coordinated Universal Time)")
    )
}

impl PartialEq for JsValue {
    fn eq(&self, other: &Self) -> bool {
        self.strict_equals(other)
    }
}

/// Implementation of Display trait for JavaScript string conversion.
impl fmt::Display for JsValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_js_string())
    }
}
