//! The type classifier
//!
//! Maps any value to one canonical [`TypeTag`]. Resolution order, first match
//! wins:
//!
//! 1. `null`
//! 2. array internal slot
//! 3. buffer capability probe
//! 4. boxed String / Boolean / Number
//! 5. `typeof` of primitives
//! 6. callables: recognized kind, otherwise `function`
//! 7. everything else: recognized kind or `None`

use std::fmt;

use core_types::{JsValue, ObjectSlots, TypeOf};

use crate::object_kind::resolve_object_kind;
use crate::predicates::is_buffer;
use crate::vocabulary::ObjectTypeName;

/// Canonical classification of a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// `undefined`
    Undefined,
    /// `null`
    Null,
    /// `string`, including `new String(..)`
    String,
    /// `number`, including `new Number(..)` and NaN
    Number,
    /// `boolean`, including `new Boolean(..)`
    Boolean,
    /// `bigint`
    BigInt,
    /// `symbol`
    Symbol,
    /// `function`: callable without a recognized kind
    Function,
    /// A vocabulary kind
    Object(ObjectTypeName),
}

impl TypeTag {
    /// The canonical tag string
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeTag::Undefined => "undefined",
            TypeTag::Null => "null",
            TypeTag::String => "string",
            TypeTag::Number => "number",
            TypeTag::Boolean => "boolean",
            TypeTag::BigInt => "bigint",
            TypeTag::Symbol => "symbol",
            TypeTag::Function => "function",
            TypeTag::Object(kind) => kind.as_str(),
        }
    }

    /// The vocabulary kind, for composite tags
    pub fn object_kind(&self) -> Option<ObjectTypeName> {
        match self {
            TypeTag::Object(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl From<ObjectTypeName> for TypeTag {
    fn from(kind: ObjectTypeName) -> Self {
        match kind {
            ObjectTypeName::Function => TypeTag::Function,
            other => TypeTag::Object(other),
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a value
///
/// Never panics; `None` means the value is an object of a kind outside the
/// vocabulary.
///
/// ```
/// use core_types::{FunctionKind, JsValue, Realm};
/// use type_check::{classify, TypeTag};
///
/// let realm = Realm::new();
/// assert_eq!(classify(&JsValue::Null), Some(TypeTag::Null));
/// assert_eq!(classify(&JsValue::number(f64::NAN)), Some(TypeTag::Number));
/// assert_eq!(classify(&realm.function(FunctionKind::Arrow, "")), Some(TypeTag::Function));
///
/// let boxed = realm.to_object(&JsValue::string("s")).unwrap();
/// assert_eq!(classify(&boxed), Some(TypeTag::String));
/// ```
pub fn classify(value: &JsValue) -> Option<TypeTag> {
    if value.is_null() {
        return Some(TypeTag::Null);
    }

    if let JsValue::Object(obj) = value {
        if obj.is_array() {
            return Some(TypeTag::Object(ObjectTypeName::Array));
        }
    }

    if is_buffer(value) {
        return Some(TypeTag::Object(ObjectTypeName::Buffer));
    }

    if let JsValue::Object(obj) = value {
        match &*obj.slots() {
            ObjectSlots::String(_) => return Some(TypeTag::String),
            ObjectSlots::Boolean(_) => return Some(TypeTag::Boolean),
            ObjectSlots::Number(_) => return Some(TypeTag::Number),
            _ => {}
        }
    }

    match value.type_of() {
        TypeOf::Undefined => Some(TypeTag::Undefined),
        TypeOf::String => Some(TypeTag::String),
        TypeOf::Number => Some(TypeTag::Number),
        TypeOf::Boolean => Some(TypeTag::Boolean),
        TypeOf::BigInt => Some(TypeTag::BigInt),
        TypeOf::Symbol => Some(TypeTag::Symbol),
        TypeOf::Function => {
            Some(resolve_object_kind(value).map_or(TypeTag::Function, TypeTag::from))
        }
        TypeOf::Object => resolve_object_kind(value).map(TypeTag::from),
    }
}
