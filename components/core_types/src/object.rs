//! Heap objects: properties, prototype chain and reflection
//!
//! An object is a shared, interior-mutable record of internal slots, an
//! ordered own-property list and an optional prototype. Identity is pointer
//! identity.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::{JsError, JsResult};
use crate::realm::Intrinsic;
use crate::slots::ObjectSlots;
use crate::symbol::SymbolValue;
use crate::value::JsValue;

/// Property key: a string or a symbol
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyKey {
    /// String-keyed property
    String(String),
    /// Symbol-keyed property
    Symbol(SymbolValue),
}

impl From<&str> for PropertyKey {
    fn from(key: &str) -> Self {
        PropertyKey::String(key.to_string())
    }
}

impl From<String> for PropertyKey {
    fn from(key: String) -> Self {
        PropertyKey::String(key)
    }
}

impl From<SymbolValue> for PropertyKey {
    fn from(key: SymbolValue) -> Self {
        PropertyKey::Symbol(key)
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyKey::String(s) => write!(f, "{}", s),
            PropertyKey::Symbol(sym) => write!(f, "[{}]", sym),
        }
    }
}

/// An own data property
#[derive(Debug, Clone)]
pub struct Property {
    /// Property key
    pub key: PropertyKey,
    /// Property value
    pub value: JsValue,
    /// Whether `for-in` and `Object.keys` see it
    pub enumerable: bool,
}

#[derive(Debug)]
pub(crate) struct ObjectData {
    slots: ObjectSlots,
    properties: Vec<Property>,
    prototype: Option<JsObject>,
    intrinsic: Option<Intrinsic>,
}

/// Reference to a heap object
#[derive(Clone)]
pub struct JsObject(Rc<RefCell<ObjectData>>);

/// Non-owning reference to a heap object (WeakRef targets)
#[derive(Debug, Clone)]
pub struct WeakObject(Weak<RefCell<ObjectData>>);

impl WeakObject {
    /// The target, if it is still alive
    pub fn upgrade(&self) -> Option<JsObject> {
        self.0.upgrade().map(JsObject)
    }
}

impl JsObject {
    /// Create an object with the given slots and prototype
    pub fn new(slots: ObjectSlots, prototype: Option<JsObject>) -> Self {
        JsObject(Rc::new(RefCell::new(ObjectData {
            slots,
            properties: Vec::new(),
            prototype,
            intrinsic: None,
        })))
    }

    pub(crate) fn new_intrinsic(
        slots: ObjectSlots,
        prototype: Option<JsObject>,
        intrinsic: Intrinsic,
    ) -> Self {
        let object = JsObject::new(slots, prototype);
        object.0.borrow_mut().intrinsic = Some(intrinsic);
        object
    }

    /// Whether both references point to the same object
    pub fn ptr_eq(&self, other: &JsObject) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Weak reference to this object
    pub fn downgrade(&self) -> WeakObject {
        WeakObject(Rc::downgrade(&self.0))
    }

    /// Internal slots
    pub fn slots(&self) -> Ref<'_, ObjectSlots> {
        Ref::map(self.0.borrow(), |data| &data.slots)
    }

    /// Mutable internal slots (collection updates)
    pub fn slots_mut(&self) -> RefMut<'_, ObjectSlots> {
        RefMut::map(self.0.borrow_mut(), |data| &mut data.slots)
    }

    /// Realm intrinsic this object is, if any
    pub fn intrinsic(&self) -> Option<Intrinsic> {
        self.0.borrow().intrinsic
    }

    /// Whether this object is the given intrinsic of some realm
    pub fn is_intrinsic(&self, intrinsic: Intrinsic) -> bool {
        self.intrinsic() == Some(intrinsic)
    }

    /// `Object.getPrototypeOf`
    pub fn prototype(&self) -> Option<JsObject> {
        self.0.borrow().prototype.clone()
    }

    /// `Reflect.setPrototypeOf`: refuses (returns false) when the new
    /// prototype chain would contain this object
    pub fn set_prototype(&self, prototype: Option<JsObject>) -> bool {
        if let Some(proto) = &prototype {
            if proto.ptr_eq(self) || proto.has_in_prototype_chain(self) {
                return false;
            }
        }
        self.0.borrow_mut().prototype = prototype;
        true
    }

    /// Whether `target` appears anywhere on this object's prototype chain
    pub fn has_in_prototype_chain(&self, target: &JsObject) -> bool {
        let mut current = self.prototype();
        while let Some(object) = current {
            if object.ptr_eq(target) {
                return true;
            }
            current = object.prototype();
        }
        false
    }

    /// Create or replace an own data property
    pub fn define_property(&self, key: impl Into<PropertyKey>, value: JsValue, enumerable: bool) {
        let key = key.into();
        let mut data = self.0.borrow_mut();
        match data.properties.iter_mut().find(|p| p.key == key) {
            Some(existing) => {
                existing.value = value;
                existing.enumerable = enumerable;
            }
            None => data.properties.push(Property {
                key,
                value,
                enumerable,
            }),
        }
    }

    /// Ordinary assignment: keeps the enumerability of an existing own
    /// property, otherwise creates an enumerable one
    pub fn set(&self, key: impl Into<PropertyKey>, value: JsValue) {
        let key = key.into();
        let mut data = self.0.borrow_mut();
        match data.properties.iter_mut().find(|p| p.key == key) {
            Some(existing) => existing.value = value,
            None => data.properties.push(Property {
                key,
                value,
                enumerable: true,
            }),
        }
    }

    /// Own property value
    pub fn get_own(&self, key: &PropertyKey) -> Option<JsValue> {
        self.0
            .borrow()
            .properties
            .iter()
            .find(|p| &p.key == key)
            .map(|p| p.value.clone())
    }

    /// Whether the object has the own property
    pub fn has_own(&self, key: &PropertyKey) -> bool {
        self.0.borrow().properties.iter().any(|p| &p.key == key)
    }

    /// `[[Get]]`: own property, then up the prototype chain; `undefined` when
    /// nothing is found
    pub fn get(&self, key: impl Into<PropertyKey>) -> JsValue {
        let key = key.into();
        let mut current = Some(self.clone());
        while let Some(object) = current {
            if let Some(value) = object.get_own(&key) {
                return value;
            }
            current = object.prototype();
        }
        JsValue::Undefined
    }

    /// `Object.keys`: integer indices of array-like slots, then enumerable
    /// string-keyed own properties in insertion order
    pub fn own_enumerable_keys(&self) -> Vec<String> {
        let indexed = match &*self.slots() {
            ObjectSlots::Array(elements) => elements.len(),
            ObjectSlots::TypedArray(data) => data.length(),
            ObjectSlots::String(s) => s.encode_utf16().count(),
            _ => 0,
        };
        let mut keys: Vec<String> = (0..indexed).map(|i| i.to_string()).collect();
        keys.extend(self.0.borrow().properties.iter().filter_map(|p| match &p.key {
            PropertyKey::String(s) if p.enumerable => Some(s.clone()),
            _ => None,
        }));
        keys
    }

    /// Whether the object has a `[[Call]]` internal method
    pub fn is_callable(&self) -> bool {
        matches!(&*self.slots(), ObjectSlots::Function(_))
    }

    /// `Array.isArray` (proxies are not modelled)
    pub fn is_array(&self) -> bool {
        matches!(&*self.slots(), ObjectSlots::Array(_))
    }

    /// Tag derived from internal slots alone
    pub fn builtin_tag(&self) -> &'static str {
        self.slots().builtin_tag()
    }

    /// Tag used by `Object.prototype.toString`: a string-valued
    /// `Symbol.toStringTag` (own or inherited) wins over the built-in tag
    pub fn class_tag(&self) -> String {
        match self.get(SymbolValue::to_string_tag()) {
            JsValue::String(tag) => tag,
            _ => self.builtin_tag().to_string(),
        }
    }

    /// `Function.prototype.toString` for callables
    pub fn function_source(&self) -> Option<String> {
        match &*self.slots() {
            ObjectSlots::Function(data) => Some(data.source.clone()),
            _ => None,
        }
    }

    /// `[[Call]]`. Only native functions have a body in this host.
    pub fn call(&self, this: &JsValue, args: &[JsValue]) -> JsResult<JsValue> {
        let native = match &*self.slots() {
            ObjectSlots::Function(data) => data.native.clone().ok_or_else(|| {
                JsError::type_error(format!("{} is not a native function", data.name))
            })?,
            other => {
                return Err(JsError::type_error(format!(
                    "[object {}] is not a function",
                    other.builtin_tag()
                )))
            }
        };
        native(this, args)
    }

    /// `length` of arrays, typed arrays (including buffers) and string wrappers
    pub fn element_count(&self) -> Option<usize> {
        match &*self.slots() {
            ObjectSlots::Array(elements) => Some(elements.len()),
            ObjectSlots::TypedArray(data) => Some(data.length()),
            ObjectSlots::String(s) => Some(s.encode_utf16().count()),
            _ => None,
        }
    }

    /// `size` of Map and Set collections
    pub fn collection_size(&self) -> Option<usize> {
        match &*self.slots() {
            ObjectSlots::Map(map) => Some(map.entries.len()),
            ObjectSlots::Set(set) => Some(set.values.len()),
            _ => None,
        }
    }
}

impl PartialEq for JsObject {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for JsObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Prototype chains and constructors are cyclic; print the tag only
        write!(f, "JsObject({} @ {:p})", self.builtin_tag(), Rc::as_ptr(&self.0))
    }
}
