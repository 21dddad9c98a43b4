//! The closed vocabulary of recognized object kinds
//!
//! Order matters: it is the order the names are listed in and reported by
//! `type-check vocabulary`.

use std::fmt;

/// A recognized object kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectTypeName {
    /// `Array`
    Array,
    /// `ArrayBuffer`
    ArrayBuffer,
    /// `Blob`
    Blob,
    /// `Buffer` (found by capability probe, never by class tag)
    Buffer,
    /// `Date`
    Date,
    /// `Error`
    Error,
    /// `FormData`
    FormData,
    /// `function` (the classifier fallback for callables)
    Function,
    /// `HTMLElement`
    HtmlElement,
    /// `Map`
    Map,
    /// `Object`
    Object,
    /// `Promise`
    Promise,
    /// `RegExp`
    RegExp,
    /// `Set`
    Set,
    /// `SharedArrayBuffer`
    SharedArrayBuffer,
    /// `URL`
    Url,
    /// `URLSearchParams`
    UrlSearchParams,
    /// `DataView`
    DataView,
    /// `WeakMap`
    WeakMap,
    /// `WeakRef`
    WeakRef,
    /// `WeakSet`
    WeakSet,
    /// `BigInt64Array`
    BigInt64Array,
    /// `BigUint64Array`
    BigUint64Array,
    /// `Float32Array`
    Float32Array,
    /// `Float64Array`
    Float64Array,
    /// `Int16Array`
    Int16Array,
    /// `Int32Array`
    Int32Array,
    /// `Int8Array`
    Int8Array,
    /// `Uint16Array`
    Uint16Array,
    /// `Uint32Array`
    Uint32Array,
    /// `Uint8Array`
    Uint8Array,
    /// `Uint8ClampedArray`
    Uint8ClampedArray,
    /// `AsyncFunction`
    AsyncFunction,
    /// `AsyncGenerator`
    AsyncGenerator,
    /// `AsyncGeneratorFunction`
    AsyncGeneratorFunction,
    /// `Generator`
    Generator,
    /// `GeneratorFunction`
    GeneratorFunction,
    /// `NaN` (a value marker, never a class tag)
    NaN,
    /// `Observable`
    Observable,
}

/// Every recognized kind, in vocabulary order
pub const OBJECT_TYPE_NAMES: [ObjectTypeName; 39] = [
    ObjectTypeName::Array,
    ObjectTypeName::ArrayBuffer,
    ObjectTypeName::Blob,
    ObjectTypeName::Buffer,
    ObjectTypeName::Date,
    ObjectTypeName::Error,
    ObjectTypeName::FormData,
    ObjectTypeName::Function,
    ObjectTypeName::HtmlElement,
    ObjectTypeName::Map,
    ObjectTypeName::Object,
    ObjectTypeName::Promise,
    ObjectTypeName::RegExp,
    ObjectTypeName::Set,
    ObjectTypeName::SharedArrayBuffer,
    ObjectTypeName::Url,
    ObjectTypeName::UrlSearchParams,
    ObjectTypeName::DataView,
    ObjectTypeName::WeakMap,
    ObjectTypeName::WeakRef,
    ObjectTypeName::WeakSet,
    ObjectTypeName::BigInt64Array,
    ObjectTypeName::BigUint64Array,
    ObjectTypeName::Float32Array,
    ObjectTypeName::Float64Array,
    ObjectTypeName::Int16Array,
    ObjectTypeName::Int32Array,
    ObjectTypeName::Int8Array,
    ObjectTypeName::Uint16Array,
    ObjectTypeName::Uint32Array,
    ObjectTypeName::Uint8Array,
    ObjectTypeName::Uint8ClampedArray,
    ObjectTypeName::AsyncFunction,
    ObjectTypeName::AsyncGenerator,
    ObjectTypeName::AsyncGeneratorFunction,
    ObjectTypeName::Generator,
    ObjectTypeName::GeneratorFunction,
    ObjectTypeName::NaN,
    ObjectTypeName::Observable,
];

impl ObjectTypeName {
    /// Name as it appears in `[object Name]`
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectTypeName::Array => "Array",
            ObjectTypeName::ArrayBuffer => "ArrayBuffer",
            ObjectTypeName::Blob => "Blob",
            ObjectTypeName::Buffer => "Buffer",
            ObjectTypeName::Date => "Date",
            ObjectTypeName::Error => "Error",
            ObjectTypeName::FormData => "FormData",
            ObjectTypeName::Function => "function",
            ObjectTypeName::HtmlElement => "HTMLElement",
            ObjectTypeName::Map => "Map",
            ObjectTypeName::Object => "Object",
            ObjectTypeName::Promise => "Promise",
            ObjectTypeName::RegExp => "RegExp",
            ObjectTypeName::Set => "Set",
            ObjectTypeName::SharedArrayBuffer => "SharedArrayBuffer",
            ObjectTypeName::Url => "URL",
            ObjectTypeName::UrlSearchParams => "URLSearchParams",
            ObjectTypeName::DataView => "DataView",
            ObjectTypeName::WeakMap => "WeakMap",
            ObjectTypeName::WeakRef => "WeakRef",
            ObjectTypeName::WeakSet => "WeakSet",
            ObjectTypeName::BigInt64Array => "BigInt64Array",
            ObjectTypeName::BigUint64Array => "BigUint64Array",
            ObjectTypeName::Float32Array => "Float32Array",
            ObjectTypeName::Float64Array => "Float64Array",
            ObjectTypeName::Int16Array => "Int16Array",
            ObjectTypeName::Int32Array => "Int32Array",
            ObjectTypeName::Int8Array => "Int8Array",
            ObjectTypeName::Uint16Array => "Uint16Array",
            ObjectTypeName::Uint32Array => "Uint32Array",
            ObjectTypeName::Uint8Array => "Uint8Array",
            ObjectTypeName::Uint8ClampedArray => "Uint8ClampedArray",
            ObjectTypeName::AsyncFunction => "AsyncFunction",
            ObjectTypeName::AsyncGenerator => "AsyncGenerator",
            ObjectTypeName::AsyncGeneratorFunction => "AsyncGeneratorFunction",
            ObjectTypeName::Generator => "Generator",
            ObjectTypeName::GeneratorFunction => "GeneratorFunction",
            ObjectTypeName::NaN => "NaN",
            ObjectTypeName::Observable => "Observable",
        }
    }

    /// Exact-match lookup; anything outside the vocabulary is `None`
    ///
    /// ```
    /// use type_check::ObjectTypeName;
    ///
    /// assert_eq!(ObjectTypeName::from_name("Map"), Some(ObjectTypeName::Map));
    /// assert_eq!(ObjectTypeName::from_name("map"), None);
    /// assert_eq!(ObjectTypeName::from_name("Function"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        OBJECT_TYPE_NAMES.iter().copied().find(|kind| kind.as_str() == name)
    }

    /// One of the eleven typed-array kinds
    pub fn is_typed_array(&self) -> bool {
        matches!(
            self,
            ObjectTypeName::BigInt64Array
                | ObjectTypeName::BigUint64Array
                | ObjectTypeName::Float32Array
                | ObjectTypeName::Float64Array
                | ObjectTypeName::Int16Array
                | ObjectTypeName::Int32Array
                | ObjectTypeName::Int8Array
                | ObjectTypeName::Uint16Array
                | ObjectTypeName::Uint32Array
                | ObjectTypeName::Uint8Array
                | ObjectTypeName::Uint8ClampedArray
        )
    }
}

impl fmt::Display for ObjectTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
