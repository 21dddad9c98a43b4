//! Internal slots fixed when an object is constructed
//!
//! The slots decide which built-in an object is, independently of its
//! prototype chain. They are what makes array, wrapper and typed-array checks
//! realm-independent.

use crate::error::ErrorKind;
use crate::function::{FunctionData, FunctionKind};
use crate::object::{JsObject, WeakObject};
use crate::symbol::SymbolValue;
use crate::typed_array::TypedArrayData;
use crate::value::{BigIntValue, JsValue};

/// Internal map data - preserves insertion order
#[derive(Debug, Clone, Default)]
pub struct MapData {
    /// Map entries in insertion order
    pub entries: Vec<(JsValue, JsValue)>,
}

/// Internal set data - preserves insertion order
#[derive(Debug, Clone, Default)]
pub struct SetData {
    /// Set values in insertion order
    pub values: Vec<JsValue>,
}

/// Internal error data
#[derive(Debug, Clone)]
pub struct ErrorData {
    /// Constructor that created the error
    pub kind: ErrorKind,
    /// Error message
    pub message: String,
}

/// Settlement state of a promise
#[derive(Debug, Clone)]
pub enum PromiseState {
    /// Not yet settled
    Pending,
    /// Resolved with a value
    Fulfilled(JsValue),
    /// Rejected with a reason
    Rejected(JsValue),
}

/// Internal slots of an object
#[derive(Debug, Clone)]
pub enum ObjectSlots {
    /// No internal slots beyond the ordinary ones
    Ordinary,
    /// Array exotic object
    Array(Vec<JsValue>),
    /// `new Boolean(..)`
    Boolean(bool),
    /// `new Number(..)`
    Number(f64),
    /// `new String(..)`
    String(String),
    /// `Object(1n)`
    BigInt(BigIntValue),
    /// `Object(Symbol())`
    Symbol(SymbolValue),
    /// Callable object
    Function(FunctionData),
    /// Time value in milliseconds since the epoch (NaN for an invalid date)
    Date(f64),
    /// Error instance
    Error(ErrorData),
    /// Map collection
    Map(MapData),
    /// Set collection
    Set(SetData),
    /// WeakMap collection (entries are not observable)
    WeakMap,
    /// WeakSet collection (entries are not observable)
    WeakSet,
    /// WeakRef to a target object
    WeakRef(WeakObject),
    /// Promise
    Promise(PromiseState),
    /// Regular expression
    RegExp {
        /// Pattern source
        source: String,
        /// Flag letters
        flags: String,
    },
    /// ArrayBuffer bytes
    ArrayBuffer(Vec<u8>),
    /// SharedArrayBuffer bytes
    SharedArrayBuffer(Vec<u8>),
    /// DataView over a buffer
    DataView {
        /// Viewed ArrayBuffer or SharedArrayBuffer
        buffer: JsObject,
        /// Number of viewed bytes
        byte_length: usize,
    },
    /// Integer-indexed exotic object
    TypedArray(TypedArrayData),
    /// Generator object
    Generator,
    /// AsyncGenerator object
    AsyncGenerator,
}

impl ObjectSlots {
    /// Built-in tag `Object.prototype.toString` falls back to when no
    /// `Symbol.toStringTag` is found
    pub fn builtin_tag(&self) -> &'static str {
        match self {
            ObjectSlots::Ordinary => "Object",
            ObjectSlots::Array(_) => "Array",
            ObjectSlots::Boolean(_) => "Boolean",
            ObjectSlots::Number(_) => "Number",
            ObjectSlots::String(_) => "String",
            ObjectSlots::BigInt(_) => "BigInt",
            ObjectSlots::Symbol(_) => "Symbol",
            ObjectSlots::Function(data) => data.kind.tag(),
            ObjectSlots::Date(_) => "Date",
            ObjectSlots::Error(_) => "Error",
            ObjectSlots::Map(_) => "Map",
            ObjectSlots::Set(_) => "Set",
            ObjectSlots::WeakMap => "WeakMap",
            ObjectSlots::WeakSet => "WeakSet",
            ObjectSlots::WeakRef(_) => "WeakRef",
            ObjectSlots::Promise(_) => "Promise",
            ObjectSlots::RegExp { .. } => "RegExp",
            ObjectSlots::ArrayBuffer(_) => "ArrayBuffer",
            ObjectSlots::SharedArrayBuffer(_) => "SharedArrayBuffer",
            ObjectSlots::DataView { .. } => "DataView",
            ObjectSlots::TypedArray(data) => data.kind().name(),
            ObjectSlots::Generator => "Generator",
            ObjectSlots::AsyncGenerator => "AsyncGenerator",
        }
    }

    /// Function kind, if these are function slots
    pub fn function_kind(&self) -> Option<FunctionKind> {
        match self {
            ObjectSlots::Function(data) => Some(data.kind),
            _ => None,
        }
    }
}
