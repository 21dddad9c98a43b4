//! Kind predicates
//!
//! `tag_predicate!` compares the classifier's tag, `kind_predicate!` the
//! resolver's kind. They differ for values the classifier claims first: a
//! Buffer is never `is_uint8_array`-by-tag but is by kind.

use core_types::JsValue;

use crate::classify::{classify, TypeTag};
use crate::object_kind::resolve_object_kind;
use crate::vocabulary::ObjectTypeName;

macro_rules! tag_predicate {
    ($(#[$doc:meta])* $name:ident => $kind:ident) => {
        $(#[$doc])*
        pub fn $name(value: &JsValue) -> bool {
            classify(value) == Some(TypeTag::Object(ObjectTypeName::$kind))
        }
    };
}

macro_rules! kind_predicate {
    ($(#[$doc:meta])* $name:ident => $kind:ident) => {
        $(#[$doc])*
        pub fn $name(value: &JsValue) -> bool {
            resolve_object_kind(value) == Some(ObjectTypeName::$kind)
        }
    };
}

tag_predicate!(
    /// Ordinary object, including null-prototype objects
    is_object => Object
);
tag_predicate!(
    /// `Date`, valid or not
    is_date => Date
);
tag_predicate!(
    /// `Map`
    is_map => Map
);
tag_predicate!(
    /// `Set`
    is_set => Set
);
tag_predicate!(
    /// `FormData`
    is_form_data => FormData
);

kind_predicate!(
    /// `async function`
    is_async_function => AsyncFunction
);
kind_predicate!(
    /// `Promise`
    is_promise => Promise
);
kind_predicate!(
    /// `RegExp`
    is_reg_exp => RegExp
);
kind_predicate!(
    /// `WeakMap`
    is_weak_map => WeakMap
);
kind_predicate!(
    /// `WeakSet`
    is_weak_set => WeakSet
);
kind_predicate!(
    /// `WeakRef`
    is_weak_ref => WeakRef
);
kind_predicate!(
    /// `Blob`
    is_blob => Blob
);
kind_predicate!(
    /// `ArrayBuffer`
    is_array_buffer => ArrayBuffer
);
kind_predicate!(
    /// `SharedArrayBuffer`
    is_shared_array_buffer => SharedArrayBuffer
);
kind_predicate!(
    /// `DataView`
    is_data_view => DataView
);
kind_predicate!(
    /// Any error instance (`TypeError`, `RangeError`, ... included)
    is_error => Error
);
kind_predicate!(
    /// `URL`
    is_url => Url
);
kind_predicate!(
    /// `URLSearchParams`
    is_url_search_params => UrlSearchParams
);
kind_predicate!(
    /// `HTMLElement`
    is_html_element => HtmlElement
);
kind_predicate!(
    /// `Observable`
    is_observable => Observable
);
kind_predicate!(
    /// Generator object, the result of calling a generator function
    is_generator => Generator
);
kind_predicate!(
    /// `function*`
    is_generator_function => GeneratorFunction
);
kind_predicate!(
    /// Async generator object
    is_async_generator => AsyncGenerator
);
kind_predicate!(
    /// `async function*`
    is_async_generator_function => AsyncGeneratorFunction
);

kind_predicate!(
    /// `Int8Array`
    is_int8_array => Int8Array
);
kind_predicate!(
    /// `Int16Array`
    is_int16_array => Int16Array
);
kind_predicate!(
    /// `Int32Array`
    is_int32_array => Int32Array
);
kind_predicate!(
    /// `Uint8Array`; Buffers report this kind too
    is_uint8_array => Uint8Array
);
kind_predicate!(
    /// `Uint8ClampedArray`
    is_uint8_clamped_array => Uint8ClampedArray
);
kind_predicate!(
    /// `Uint16Array`
    is_uint16_array => Uint16Array
);
kind_predicate!(
    /// `Uint32Array`
    is_uint32_array => Uint32Array
);
kind_predicate!(
    /// `Float32Array`
    is_float32_array => Float32Array
);
kind_predicate!(
    /// `Float64Array`
    is_float64_array => Float64Array
);
kind_predicate!(
    /// `BigInt64Array`
    is_big_int64_array => BigInt64Array
);
kind_predicate!(
    /// `BigUint64Array`
    is_big_uint64_array => BigUint64Array
);

/// Any of the eleven typed-array kinds
pub fn is_typed_array(value: &JsValue) -> bool {
    resolve_object_kind(value).is_some_and(|kind| kind.is_typed_array())
}
