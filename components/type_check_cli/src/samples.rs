//! Named sample values
//!
//! One canonical instance per primitive category and vocabulary kind, plus
//! the boundary cases the predicates distinguish (boxed primitives, empty
//! collections, NaN, null-prototype objects).

use core_types::{
    ErrorKind, FunctionKind, HostKind, JsValue, NumberObject, PromiseState, Realm, TypedArrayKind,
};

use crate::error::{CliError, CliResult};

/// Sample names with a short description, in listing order
pub const SAMPLES: &[(&str, &str)] = &[
    ("undefined", "undefined"),
    ("null", "null"),
    ("true", "true"),
    ("false", "false"),
    ("zero", "0"),
    ("integer", "42"),
    ("negative", "-7"),
    ("float", "1.5"),
    ("nan", "NaN"),
    ("infinity", "Infinity"),
    ("max-safe-integer", "Number.MAX_SAFE_INTEGER"),
    ("two-pow-53", "2 ** 53"),
    ("bigint", "10n"),
    ("negative-bigint", "-10n"),
    ("string", "'text'"),
    ("empty-string", "''"),
    ("whitespace", "' \\t\\n'"),
    ("index-string", "'3'"),
    ("symbol", "Symbol('id')"),
    ("boxed-string", "new String('abc')"),
    ("boxed-empty-string", "new String('')"),
    ("boxed-number", "new Number(42)"),
    ("boxed-nan", "new Number(NaN)"),
    ("boxed-boolean", "new Boolean(false)"),
    ("boxed-symbol", "Object(Symbol())"),
    ("boxed-bigint", "Object(1n)"),
    ("array", "[1, 2, 3]"),
    ("empty-array", "[]"),
    ("object", "{ a: 1 }"),
    ("empty-object", "{}"),
    ("null-prototype-object", "Object.create(null)"),
    ("derived-object", "Object.create({})"),
    ("tagged-object", "{ [Symbol.toStringTag]: 'Widget' }"),
    ("function", "function named() {}"),
    ("arrow-function", "() => {}"),
    ("class", "class Point {}"),
    ("async-function", "async function load() {}"),
    ("generator-function", "function* gen() {}"),
    ("async-generator-function", "async function* stream() {}"),
    ("generator", "gen()"),
    ("async-generator", "stream()"),
    ("date", "new Date(0)"),
    ("invalid-date", "new Date(NaN)"),
    ("error", "new Error('boom')"),
    ("type-error", "new TypeError('bad type')"),
    ("map", "new Map([['k', 1]])"),
    ("empty-map", "new Map()"),
    ("set", "new Set([1])"),
    ("empty-set", "new Set()"),
    ("weak-map", "new WeakMap()"),
    ("weak-set", "new WeakSet()"),
    ("weak-ref", "new WeakRef(Object.prototype)"),
    ("promise", "Promise.resolve(1)"),
    ("regexp", "/a+/g"),
    ("array-buffer", "new ArrayBuffer(8)"),
    ("shared-array-buffer", "new SharedArrayBuffer(8)"),
    ("data-view", "new DataView(new ArrayBuffer(8))"),
    ("buffer", "Buffer.from('abc')"),
    ("empty-buffer", "Buffer.alloc(0)"),
    ("int8-array", "new Int8Array(2)"),
    ("uint8-array", "new Uint8Array(2)"),
    ("uint8-clamped-array", "new Uint8ClampedArray(2)"),
    ("int16-array", "new Int16Array(2)"),
    ("uint16-array", "new Uint16Array(2)"),
    ("int32-array", "new Int32Array(2)"),
    ("uint32-array", "new Uint32Array(2)"),
    ("float32-array", "new Float32Array(2)"),
    ("float64-array", "new Float64Array(2)"),
    ("big-int64-array", "new BigInt64Array(2)"),
    ("big-uint64-array", "new BigUint64Array(2)"),
    ("url", "new URL('https://example.com/')"),
    ("url-search-params", "new URLSearchParams()"),
    ("blob", "new Blob()"),
    ("form-data", "new FormData()"),
    ("html-element", "document.createElement('div')"),
    ("observable", "new Observable()"),
];

/// Build the named sample in `realm`
///
/// ```
/// use core_types::Realm;
/// use type_check_cli::samples::sample;
///
/// let realm = Realm::new();
/// let value = sample(&realm, "empty-map").unwrap();
/// assert_eq!(value.object_to_string(), "[object Map]");
/// assert!(sample(&realm, "no-such-sample").is_err());
/// ```
pub fn sample(realm: &Realm, name: &str) -> CliResult<JsValue> {
    let boxed = |primitive: JsValue| realm.to_object(&primitive);
    let value = match name {
        "undefined" => JsValue::Undefined,
        "null" => JsValue::Null,
        "true" => JsValue::boolean(true),
        "false" => JsValue::boolean(false),
        "zero" => JsValue::number(0.0),
        "integer" => JsValue::number(42.0),
        "negative" => JsValue::number(-7.0),
        "float" => JsValue::number(1.5),
        "nan" => JsValue::number(f64::NAN),
        "infinity" => JsValue::number(f64::INFINITY),
        "max-safe-integer" => JsValue::number(NumberObject::MAX_SAFE_INTEGER),
        "two-pow-53" => JsValue::number(NumberObject::TWO_POW_53),
        "bigint" => JsValue::bigint(10),
        "negative-bigint" => JsValue::bigint(-10),
        "string" => JsValue::string("text"),
        "empty-string" => JsValue::string(""),
        "whitespace" => JsValue::string(" \t\n"),
        "index-string" => JsValue::string("3"),
        "symbol" => JsValue::symbol(Some("id")),
        "boxed-string" => boxed(JsValue::string("abc"))?,
        "boxed-empty-string" => boxed(JsValue::string(""))?,
        "boxed-number" => boxed(JsValue::number(42.0))?,
        "boxed-nan" => boxed(JsValue::number(f64::NAN))?,
        "boxed-boolean" => boxed(JsValue::boolean(false))?,
        "boxed-symbol" => boxed(JsValue::symbol(None))?,
        "boxed-bigint" => boxed(JsValue::bigint(1))?,
        "array" => realm.array(vec![
            JsValue::number(1.0),
            JsValue::number(2.0),
            JsValue::number(3.0),
        ]),
        "empty-array" => realm.array(vec![]),
        "object" => realm.object_from([("a", JsValue::number(1.0))]),
        "empty-object" => realm.object(),
        "null-prototype-object" => realm.object_with_prototype(None),
        "derived-object" => {
            let parent = realm.object();
            realm.object_with_prototype(parent.as_object())
        }
        "tagged-object" => {
            let tagged = realm.object();
            if let JsValue::Object(obj) = &tagged {
                obj.set(core_types::SymbolValue::to_string_tag(), JsValue::string("Widget"));
            }
            tagged
        }
        "function" => realm.function(FunctionKind::Normal, "named"),
        "arrow-function" => realm.function(FunctionKind::Arrow, ""),
        "class" => realm.function(FunctionKind::Class, "Point"),
        "async-function" => realm.function(FunctionKind::Async, "load"),
        "generator-function" => realm.function(FunctionKind::Generator, "gen"),
        "async-generator-function" => realm.function(FunctionKind::AsyncGenerator, "stream"),
        "generator" => realm.generator(),
        "async-generator" => realm.async_generator(),
        "date" => realm.date(0.0),
        "invalid-date" => realm.date(f64::NAN),
        "error" => realm.error(ErrorKind::Error, "boom"),
        "type-error" => realm.error(ErrorKind::TypeError, "bad type"),
        "map" => realm.map(vec![(JsValue::string("k"), JsValue::number(1.0))]),
        "empty-map" => realm.map(vec![]),
        "set" => realm.set(vec![JsValue::number(1.0)]),
        "empty-set" => realm.set(vec![]),
        "weak-map" => realm.weak_map(),
        "weak-set" => realm.weak_set(),
        "weak-ref" => realm.weak_ref(&realm.intrinsic(core_types::Intrinsic::ObjectPrototype)),
        "promise" => realm.promise(PromiseState::Fulfilled(JsValue::number(1.0))),
        "regexp" => realm.regexp("a+", "g"),
        "array-buffer" => realm.array_buffer(8),
        "shared-array-buffer" => realm.shared_array_buffer(8),
        "data-view" => realm.data_view(&realm.array_buffer(8))?,
        "buffer" => realm.buffer_from(b"abc"),
        "empty-buffer" => realm.buffer_alloc(0),
        "int8-array" => realm.typed_array(TypedArrayKind::Int8, 2),
        "uint8-array" => realm.typed_array(TypedArrayKind::Uint8, 2),
        "uint8-clamped-array" => realm.typed_array(TypedArrayKind::Uint8Clamped, 2),
        "int16-array" => realm.typed_array(TypedArrayKind::Int16, 2),
        "uint16-array" => realm.typed_array(TypedArrayKind::Uint16, 2),
        "int32-array" => realm.typed_array(TypedArrayKind::Int32, 2),
        "uint32-array" => realm.typed_array(TypedArrayKind::Uint32, 2),
        "float32-array" => realm.typed_array(TypedArrayKind::Float32, 2),
        "float64-array" => realm.typed_array(TypedArrayKind::Float64, 2),
        "big-int64-array" => realm.typed_array(TypedArrayKind::BigInt64, 2),
        "big-uint64-array" => realm.typed_array(TypedArrayKind::BigUint64, 2),
        "url" => realm.url("https://example.com/"),
        "url-search-params" => realm.host_object(HostKind::UrlSearchParams),
        "blob" => realm.host_object(HostKind::Blob),
        "form-data" => realm.host_object(HostKind::FormData),
        "html-element" => realm.host_object(HostKind::HtmlElement),
        "observable" => realm.host_object(HostKind::Observable),
        other => return Err(CliError::UnknownSample(other.to_string())),
    };
    Ok(value)
}
