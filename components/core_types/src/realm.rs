//! Realms and their intrinsics
//!
//! A realm owns one copy of every built-in prototype and constructor. Values
//! created through different realms never share prototypes, which is how
//! cross-realm values (iframes, `vm` contexts) are reproduced. Every value
//! factory in this module attaches the realm's own intrinsics.

use crate::error::{ErrorKind, JsError, JsResult};
use crate::function::{FunctionData, FunctionKind};
use crate::object::{JsObject, PropertyKey};
use crate::slots::{ErrorData, MapData, ObjectSlots, PromiseState, SetData};
use crate::symbol::SymbolValue;
use crate::typed_array::{TypedArrayData, TypedArrayKind};
use crate::value::JsValue;

/// Objects provided by the host environment rather than the language.
///
/// They have no internal slots; their prototypes carry a `Symbol.toStringTag`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostKind {
    /// WHATWG `URL`
    Url,
    /// WHATWG `URLSearchParams`
    UrlSearchParams,
    /// `Blob`
    Blob,
    /// `FormData`
    FormData,
    /// DOM `HTMLElement`
    HtmlElement,
    /// `Observable` from a reactive library
    Observable,
}

impl HostKind {
    /// Every host kind
    pub const ALL: [HostKind; 6] = [
        HostKind::Url,
        HostKind::UrlSearchParams,
        HostKind::Blob,
        HostKind::FormData,
        HostKind::HtmlElement,
        HostKind::Observable,
    ];

    /// Constructor name, also used as the `Symbol.toStringTag`
    pub fn tag(&self) -> &'static str {
        match self {
            HostKind::Url => "URL",
            HostKind::UrlSearchParams => "URLSearchParams",
            HostKind::Blob => "Blob",
            HostKind::FormData => "FormData",
            HostKind::HtmlElement => "HTMLElement",
            HostKind::Observable => "Observable",
        }
    }

    fn index(&self) -> usize {
        match self {
            HostKind::Url => 0,
            HostKind::UrlSearchParams => 1,
            HostKind::Blob => 2,
            HostKind::FormData => 3,
            HostKind::HtmlElement => 4,
            HostKind::Observable => 5,
        }
    }
}

fn typed_array_index(kind: TypedArrayKind) -> usize {
    match kind {
        TypedArrayKind::Int8 => 0,
        TypedArrayKind::Uint8 => 1,
        TypedArrayKind::Uint8Clamped => 2,
        TypedArrayKind::Int16 => 3,
        TypedArrayKind::Uint16 => 4,
        TypedArrayKind::Int32 => 5,
        TypedArrayKind::Uint32 => 6,
        TypedArrayKind::Float32 => 7,
        TypedArrayKind::Float64 => 8,
        TypedArrayKind::BigInt64 => 9,
        TypedArrayKind::BigUint64 => 10,
    }
}

/// Well-known intrinsic objects of a realm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intrinsic {
    /// `Object.prototype`
    ObjectPrototype,
    /// `Object`
    ObjectConstructor,
    /// `Function.prototype`
    FunctionPrototype,
    /// `Array.prototype`
    ArrayPrototype,
    /// `Boolean.prototype`
    BooleanPrototype,
    /// `Number.prototype`
    NumberPrototype,
    /// `String.prototype`
    StringPrototype,
    /// `BigInt.prototype`
    BigIntPrototype,
    /// `Symbol.prototype`
    SymbolPrototype,
    /// `Date.prototype`
    DatePrototype,
    /// `Error.prototype` and the native error prototypes
    ErrorPrototype,
    /// `Map.prototype`
    MapPrototype,
    /// `Set.prototype`
    SetPrototype,
    /// `WeakMap.prototype`
    WeakMapPrototype,
    /// `WeakSet.prototype`
    WeakSetPrototype,
    /// `WeakRef.prototype`
    WeakRefPrototype,
    /// `Promise.prototype`
    PromisePrototype,
    /// `RegExp.prototype`
    RegExpPrototype,
    /// `ArrayBuffer.prototype`
    ArrayBufferPrototype,
    /// `SharedArrayBuffer.prototype`
    SharedArrayBufferPrototype,
    /// `DataView.prototype`
    DataViewPrototype,
    /// `<Kind>Array.prototype`
    TypedArrayPrototype(TypedArrayKind),
    /// `%AsyncFunction.prototype%`
    AsyncFunctionPrototype,
    /// `%GeneratorFunction.prototype%`
    GeneratorFunctionPrototype,
    /// `%AsyncGeneratorFunction.prototype%`
    AsyncGeneratorFunctionPrototype,
    /// `%GeneratorPrototype%`
    GeneratorPrototype,
    /// `%AsyncGeneratorPrototype%`
    AsyncGeneratorPrototype,
    /// `Buffer.prototype` (inherits from `Uint8Array.prototype`)
    BufferPrototype,
    /// `Buffer`
    BufferConstructor,
    /// Prototype of a host object kind
    HostPrototype(HostKind),
}

#[derive(Debug)]
struct Intrinsics {
    object_prototype: JsObject,
    object_constructor: JsObject,
    function_prototype: JsObject,
    array_prototype: JsObject,
    boolean_prototype: JsObject,
    number_prototype: JsObject,
    string_prototype: JsObject,
    bigint_prototype: JsObject,
    symbol_prototype: JsObject,
    date_prototype: JsObject,
    error_prototype: JsObject,
    map_prototype: JsObject,
    set_prototype: JsObject,
    weak_map_prototype: JsObject,
    weak_set_prototype: JsObject,
    weak_ref_prototype: JsObject,
    promise_prototype: JsObject,
    regexp_prototype: JsObject,
    array_buffer_prototype: JsObject,
    shared_array_buffer_prototype: JsObject,
    data_view_prototype: JsObject,
    typed_array_prototypes: Vec<JsObject>,
    async_function_prototype: JsObject,
    generator_function_prototype: JsObject,
    async_generator_function_prototype: JsObject,
    generator_prototype: JsObject,
    async_generator_prototype: JsObject,
    buffer_prototype: JsObject,
    buffer_constructor: JsObject,
    host_prototypes: Vec<JsObject>,
}

/// Link `prototype` and a fresh constructor function to each other with
/// non-enumerable `constructor` / `prototype` properties
fn install_constructor(
    function_prototype: &JsObject,
    prototype: &JsObject,
    name: &str,
    intrinsic: Option<Intrinsic>,
) -> JsObject {
    let message = format!("Constructor {} requires 'new'", name);
    let slots = ObjectSlots::Function(FunctionData::native(name, move |_, _| {
        Err(JsError::type_error(message.clone()))
    }));
    let constructor = match intrinsic {
        Some(intrinsic) => {
            JsObject::new_intrinsic(slots, Some(function_prototype.clone()), intrinsic)
        }
        None => JsObject::new(slots, Some(function_prototype.clone())),
    };
    constructor.define_property("prototype", JsValue::Object(prototype.clone()), false);
    prototype.define_property("constructor", JsValue::Object(constructor.clone()), false);
    constructor
}

/// An isolated set of built-ins
///
/// Cloning a `Realm` is cheap and yields a handle to the same intrinsics.
///
/// # Examples
///
/// ```
/// use core_types::Realm;
///
/// let main = Realm::new();
/// let frame = Realm::new();
///
/// let local = main.array(vec![]);
/// let foreign = frame.array(vec![]);
/// assert_eq!(local.object_to_string(), foreign.object_to_string());
/// assert!(local.as_object().unwrap().prototype() != foreign.as_object().unwrap().prototype());
/// ```
#[derive(Debug, Clone)]
pub struct Realm {
    intrinsics: std::rc::Rc<Intrinsics>,
}

impl Realm {
    /// Create a realm with a fresh set of intrinsics
    pub fn new() -> Self {
        let object_prototype =
            JsObject::new_intrinsic(ObjectSlots::Ordinary, None, Intrinsic::ObjectPrototype);
        let function_prototype = JsObject::new_intrinsic(
            ObjectSlots::Function(FunctionData::native("", |_, _| Ok(JsValue::Undefined))),
            Some(object_prototype.clone()),
            Intrinsic::FunctionPrototype,
        );
        let object_constructor = install_constructor(
            &function_prototype,
            &object_prototype,
            "Object",
            Some(Intrinsic::ObjectConstructor),
        );

        let builtin = |intrinsic: Intrinsic, parent: &JsObject, constructor: Option<&str>| {
            let prototype =
                JsObject::new_intrinsic(ObjectSlots::Ordinary, Some(parent.clone()), intrinsic);
            if let Some(name) = constructor {
                install_constructor(&function_prototype, &prototype, name, None);
            }
            prototype
        };
        let std_proto =
            |intrinsic: Intrinsic, name: &str| builtin(intrinsic, &object_prototype, Some(name));

        let typed_array_prototypes: Vec<JsObject> = TypedArrayKind::ALL
            .iter()
            .map(|kind| std_proto(Intrinsic::TypedArrayPrototype(*kind), kind.name()))
            .collect();

        let buffer_prototype = builtin(
            Intrinsic::BufferPrototype,
            &typed_array_prototypes[typed_array_index(TypedArrayKind::Uint8)],
            None,
        );
        let buffer_constructor = install_constructor(
            &function_prototype,
            &buffer_prototype,
            "Buffer",
            Some(Intrinsic::BufferConstructor),
        );
        // Buffer.isBuffer(value) is `value instanceof Buffer`
        let buffer_target = buffer_prototype.downgrade();
        let is_buffer = JsObject::new(
            ObjectSlots::Function(FunctionData::native("isBuffer", move |_, args| {
                let is_instance = match (args.first(), buffer_target.upgrade()) {
                    (Some(JsValue::Object(candidate)), Some(prototype)) => {
                        candidate.has_in_prototype_chain(&prototype)
                    }
                    _ => false,
                };
                Ok(JsValue::Boolean(is_instance))
            })),
            Some(function_prototype.clone()),
        );
        buffer_constructor.define_property("isBuffer", JsValue::Object(is_buffer), false);

        let host_prototypes: Vec<JsObject> = HostKind::ALL
            .iter()
            .map(|kind| {
                let prototype = std_proto(Intrinsic::HostPrototype(*kind), kind.tag());
                prototype.define_property(
                    SymbolValue::to_string_tag(),
                    JsValue::string(kind.tag()),
                    false,
                );
                prototype
            })
            .collect();

        let intrinsics = Intrinsics {
            array_prototype: std_proto(Intrinsic::ArrayPrototype, "Array"),
            boolean_prototype: std_proto(Intrinsic::BooleanPrototype, "Boolean"),
            number_prototype: std_proto(Intrinsic::NumberPrototype, "Number"),
            string_prototype: std_proto(Intrinsic::StringPrototype, "String"),
            bigint_prototype: std_proto(Intrinsic::BigIntPrototype, "BigInt"),
            symbol_prototype: std_proto(Intrinsic::SymbolPrototype, "Symbol"),
            date_prototype: std_proto(Intrinsic::DatePrototype, "Date"),
            error_prototype: std_proto(Intrinsic::ErrorPrototype, "Error"),
            map_prototype: std_proto(Intrinsic::MapPrototype, "Map"),
            set_prototype: std_proto(Intrinsic::SetPrototype, "Set"),
            weak_map_prototype: std_proto(Intrinsic::WeakMapPrototype, "WeakMap"),
            weak_set_prototype: std_proto(Intrinsic::WeakSetPrototype, "WeakSet"),
            weak_ref_prototype: std_proto(Intrinsic::WeakRefPrototype, "WeakRef"),
            promise_prototype: std_proto(Intrinsic::PromisePrototype, "Promise"),
            regexp_prototype: std_proto(Intrinsic::RegExpPrototype, "RegExp"),
            array_buffer_prototype: std_proto(Intrinsic::ArrayBufferPrototype, "ArrayBuffer"),
            shared_array_buffer_prototype: std_proto(
                Intrinsic::SharedArrayBufferPrototype,
                "SharedArrayBuffer",
            ),
            data_view_prototype: std_proto(Intrinsic::DataViewPrototype, "DataView"),
            async_function_prototype: builtin(
                Intrinsic::AsyncFunctionPrototype,
                &function_prototype,
                Some("AsyncFunction"),
            ),
            generator_function_prototype: builtin(
                Intrinsic::GeneratorFunctionPrototype,
                &function_prototype,
                Some("GeneratorFunction"),
            ),
            async_generator_function_prototype: builtin(
                Intrinsic::AsyncGeneratorFunctionPrototype,
                &function_prototype,
                Some("AsyncGeneratorFunction"),
            ),
            generator_prototype: builtin(Intrinsic::GeneratorPrototype, &object_prototype, None),
            async_generator_prototype: builtin(
                Intrinsic::AsyncGeneratorPrototype,
                &object_prototype,
                None,
            ),
            typed_array_prototypes,
            buffer_prototype,
            buffer_constructor,
            host_prototypes,
            object_constructor,
            function_prototype,
            object_prototype,
        };

        Realm {
            intrinsics: std::rc::Rc::new(intrinsics),
        }
    }

    /// Whether both handles refer to the same realm
    pub fn same_realm(&self, other: &Realm) -> bool {
        std::rc::Rc::ptr_eq(&self.intrinsics, &other.intrinsics)
    }

    /// Look up an intrinsic object
    pub fn intrinsic(&self, intrinsic: Intrinsic) -> JsObject {
        let i = &self.intrinsics;
        let object = match intrinsic {
            Intrinsic::ObjectPrototype => &i.object_prototype,
            Intrinsic::ObjectConstructor => &i.object_constructor,
            Intrinsic::FunctionPrototype => &i.function_prototype,
            Intrinsic::ArrayPrototype => &i.array_prototype,
            Intrinsic::BooleanPrototype => &i.boolean_prototype,
            Intrinsic::NumberPrototype => &i.number_prototype,
            Intrinsic::StringPrototype => &i.string_prototype,
            Intrinsic::BigIntPrototype => &i.bigint_prototype,
            Intrinsic::SymbolPrototype => &i.symbol_prototype,
            Intrinsic::DatePrototype => &i.date_prototype,
            Intrinsic::ErrorPrototype => &i.error_prototype,
            Intrinsic::MapPrototype => &i.map_prototype,
            Intrinsic::SetPrototype => &i.set_prototype,
            Intrinsic::WeakMapPrototype => &i.weak_map_prototype,
            Intrinsic::WeakSetPrototype => &i.weak_set_prototype,
            Intrinsic::WeakRefPrototype => &i.weak_ref_prototype,
            Intrinsic::PromisePrototype => &i.promise_prototype,
            Intrinsic::RegExpPrototype => &i.regexp_prototype,
            Intrinsic::ArrayBufferPrototype => &i.array_buffer_prototype,
            Intrinsic::SharedArrayBufferPrototype => &i.shared_array_buffer_prototype,
            Intrinsic::DataViewPrototype => &i.data_view_prototype,
            Intrinsic::TypedArrayPrototype(kind) => {
                &i.typed_array_prototypes[typed_array_index(kind)]
            }
            Intrinsic::AsyncFunctionPrototype => &i.async_function_prototype,
            Intrinsic::GeneratorFunctionPrototype => &i.generator_function_prototype,
            Intrinsic::AsyncGeneratorFunctionPrototype => &i.async_generator_function_prototype,
            Intrinsic::GeneratorPrototype => &i.generator_prototype,
            Intrinsic::AsyncGeneratorPrototype => &i.async_generator_prototype,
            Intrinsic::BufferPrototype => &i.buffer_prototype,
            Intrinsic::BufferConstructor => &i.buffer_constructor,
            Intrinsic::HostPrototype(kind) => &i.host_prototypes[kind.index()],
        };
        object.clone()
    }

    /// The realm's `Buffer` constructor, as a value
    pub fn buffer_constructor(&self) -> JsValue {
        JsValue::Object(self.intrinsic(Intrinsic::BufferConstructor))
    }

    fn make(&self, slots: ObjectSlots, prototype: Intrinsic) -> JsValue {
        JsValue::Object(JsObject::new(slots, Some(self.intrinsic(prototype))))
    }

    /// `{}`
    pub fn object(&self) -> JsValue {
        self.make(ObjectSlots::Ordinary, Intrinsic::ObjectPrototype)
    }

    /// Object literal with enumerable properties in the given order
    pub fn object_from<K, I>(&self, entries: I) -> JsValue
    where
        K: Into<PropertyKey>,
        I: IntoIterator<Item = (K, JsValue)>,
    {
        let object = JsObject::new(
            ObjectSlots::Ordinary,
            Some(self.intrinsic(Intrinsic::ObjectPrototype)),
        );
        for (key, value) in entries {
            object.set(key, value);
        }
        JsValue::Object(object)
    }

    /// `Object.create(prototype)`; `None` gives a null-prototype object
    pub fn object_with_prototype(&self, prototype: Option<&JsObject>) -> JsValue {
        JsValue::Object(JsObject::new(ObjectSlots::Ordinary, prototype.cloned()))
    }

    /// Array literal
    pub fn array(&self, elements: Vec<JsValue>) -> JsValue {
        self.make(ObjectSlots::Array(elements), Intrinsic::ArrayPrototype)
    }

    /// `Object(value)`: wraps primitives, passes objects through
    pub fn to_object(&self, value: &JsValue) -> JsResult<JsValue> {
        let (slots, prototype) = match value {
            JsValue::Undefined | JsValue::Null => {
                return Err(JsError::type_error(format!(
                    "Cannot convert {} to object",
                    value.to_js_string()
                )))
            }
            JsValue::Object(_) => return Ok(value.clone()),
            JsValue::Boolean(b) => (ObjectSlots::Boolean(*b), Intrinsic::BooleanPrototype),
            JsValue::Number(n) => (ObjectSlots::Number(*n), Intrinsic::NumberPrototype),
            JsValue::String(s) => (ObjectSlots::String(s.clone()), Intrinsic::StringPrototype),
            JsValue::BigInt(b) => (ObjectSlots::BigInt(b.clone()), Intrinsic::BigIntPrototype),
            JsValue::Symbol(sym) => (ObjectSlots::Symbol(sym.clone()), Intrinsic::SymbolPrototype),
        };
        Ok(self.make(slots, prototype))
    }

    /// Script function of the given declaration kind
    pub fn function(&self, kind: FunctionKind, name: &str) -> JsValue {
        self.function_object(FunctionData::script(kind, name))
    }

    /// Script function with explicit source text
    pub fn function_with_source(&self, kind: FunctionKind, name: &str, source: &str) -> JsValue {
        let mut data = FunctionData::script(kind, name);
        data.source = source.to_string();
        self.function_object(data)
    }

    /// Function backed by a Rust closure
    pub fn native_function<F>(&self, name: &str, func: F) -> JsValue
    where
        F: Fn(&JsValue, &[JsValue]) -> JsResult<JsValue> + 'static,
    {
        self.function_object(FunctionData::native(name, func))
    }

    fn function_object(&self, data: FunctionData) -> JsValue {
        let prototype = match data.kind {
            FunctionKind::Async => Intrinsic::AsyncFunctionPrototype,
            FunctionKind::Generator => Intrinsic::GeneratorFunctionPrototype,
            FunctionKind::AsyncGenerator => Intrinsic::AsyncGeneratorFunctionPrototype,
            _ => Intrinsic::FunctionPrototype,
        };
        self.make(ObjectSlots::Function(data), prototype)
    }

    /// Result of calling a generator function
    pub fn generator(&self) -> JsValue {
        self.make(ObjectSlots::Generator, Intrinsic::GeneratorPrototype)
    }

    /// Result of calling an async generator function
    pub fn async_generator(&self) -> JsValue {
        self.make(ObjectSlots::AsyncGenerator, Intrinsic::AsyncGeneratorPrototype)
    }

    /// `new Date(time_value)`; NaN gives an invalid date
    pub fn date(&self, time_value: f64) -> JsValue {
        self.make(ObjectSlots::Date(time_value), Intrinsic::DatePrototype)
    }

    /// `new <Kind>Error(message)`
    pub fn error(&self, kind: ErrorKind, message: &str) -> JsValue {
        let error = self.make(
            ObjectSlots::Error(ErrorData {
                kind,
                message: message.to_string(),
            }),
            Intrinsic::ErrorPrototype,
        );
        if let JsValue::Object(object) = &error {
            object.define_property("message", JsValue::string(message), false);
        }
        error
    }

    /// `new Map(entries)`; later duplicate keys overwrite earlier values
    pub fn map(&self, entries: Vec<(JsValue, JsValue)>) -> JsValue {
        let mut data = MapData::default();
        for (key, value) in entries {
            match data.entries.iter_mut().find(|(k, _)| k.same_value_zero(&key)) {
                Some(existing) => existing.1 = value,
                None => data.entries.push((key, value)),
            }
        }
        self.make(ObjectSlots::Map(data), Intrinsic::MapPrototype)
    }

    /// `new Set(values)`; duplicates are dropped
    pub fn set(&self, values: Vec<JsValue>) -> JsValue {
        let mut data = SetData::default();
        for value in values {
            if !data.values.iter().any(|v| v.same_value_zero(&value)) {
                data.values.push(value);
            }
        }
        self.make(ObjectSlots::Set(data), Intrinsic::SetPrototype)
    }

    /// `new WeakMap()`
    pub fn weak_map(&self) -> JsValue {
        self.make(ObjectSlots::WeakMap, Intrinsic::WeakMapPrototype)
    }

    /// `new WeakSet()`
    pub fn weak_set(&self) -> JsValue {
        self.make(ObjectSlots::WeakSet, Intrinsic::WeakSetPrototype)
    }

    /// `new WeakRef(target)`
    pub fn weak_ref(&self, target: &JsObject) -> JsValue {
        self.make(ObjectSlots::WeakRef(target.downgrade()), Intrinsic::WeakRefPrototype)
    }

    /// Promise in the given state
    pub fn promise(&self, state: PromiseState) -> JsValue {
        self.make(ObjectSlots::Promise(state), Intrinsic::PromisePrototype)
    }

    /// `/source/flags`
    pub fn regexp(&self, source: &str, flags: &str) -> JsValue {
        self.make(
            ObjectSlots::RegExp {
                source: source.to_string(),
                flags: flags.to_string(),
            },
            Intrinsic::RegExpPrototype,
        )
    }

    /// `new ArrayBuffer(byte_length)`
    pub fn array_buffer(&self, byte_length: usize) -> JsValue {
        self.make(ObjectSlots::ArrayBuffer(vec![0; byte_length]), Intrinsic::ArrayBufferPrototype)
    }

    /// `new SharedArrayBuffer(byte_length)`
    pub fn shared_array_buffer(&self, byte_length: usize) -> JsValue {
        self.make(
            ObjectSlots::SharedArrayBuffer(vec![0; byte_length]),
            Intrinsic::SharedArrayBufferPrototype,
        )
    }

    /// `new DataView(buffer)` over an ArrayBuffer or SharedArrayBuffer
    pub fn data_view(&self, buffer: &JsValue) -> JsResult<JsValue> {
        let target = buffer.as_object().ok_or_else(|| {
            JsError::type_error("First argument to DataView constructor must be an ArrayBuffer")
        })?;
        let byte_length = match &*target.slots() {
            ObjectSlots::ArrayBuffer(bytes) | ObjectSlots::SharedArrayBuffer(bytes) => bytes.len(),
            _ => {
                return Err(JsError::type_error(
                    "First argument to DataView constructor must be an ArrayBuffer",
                ))
            }
        };
        Ok(self.make(
            ObjectSlots::DataView {
                buffer: target.clone(),
                byte_length,
            },
            Intrinsic::DataViewPrototype,
        ))
    }

    /// `new <Kind>Array(length)`, zero-filled
    pub fn typed_array(&self, kind: TypedArrayKind, length: usize) -> JsValue {
        self.make(
            ObjectSlots::TypedArray(TypedArrayData::new(kind, length)),
            Intrinsic::TypedArrayPrototype(kind),
        )
    }

    /// Typed array over little-endian element bytes
    pub fn typed_array_from_bytes(
        &self,
        kind: TypedArrayKind,
        bytes: Vec<u8>,
    ) -> JsResult<JsValue> {
        let data = TypedArrayData::from_bytes(kind, bytes)?;
        Ok(self.make(ObjectSlots::TypedArray(data), Intrinsic::TypedArrayPrototype(kind)))
    }

    /// `Buffer.from(bytes)`: a Uint8Array whose prototype is `Buffer.prototype`
    pub fn buffer_from(&self, bytes: &[u8]) -> JsValue {
        self.make(
            ObjectSlots::TypedArray(TypedArrayData::from_octets(bytes.to_vec())),
            Intrinsic::BufferPrototype,
        )
    }

    /// `Buffer.alloc(length)`
    pub fn buffer_alloc(&self, length: usize) -> JsValue {
        self.buffer_from(&vec![0; length])
    }

    /// Instance of a host object kind
    pub fn host_object(&self, kind: HostKind) -> JsValue {
        self.make(ObjectSlots::Ordinary, Intrinsic::HostPrototype(kind))
    }

    /// `new URL(href)`; the href is stored verbatim
    pub fn url(&self, href: &str) -> JsValue {
        let url = self.host_object(HostKind::Url);
        if let JsValue::Object(object) = &url {
            object.define_property("href", JsValue::string(href), false);
        }
        url
    }
}

impl Default for Realm {
    fn default() -> Self {
        Realm::new()
    }
}
