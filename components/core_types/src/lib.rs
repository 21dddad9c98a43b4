//! Core JavaScript value model for reflection.
//!
//! This crate provides the values a type classifier inspects: primitives,
//! heap objects with internal slots and prototype chains, and the realms
//! those objects are created in.
//!
//! # Overview
//!
//! - [`JsValue`] - Any JavaScript value
//! - [`JsObject`] - Shared reference to a heap object
//! - [`ObjectSlots`] - Internal slots that identify built-in objects
//! - [`Realm`] - Isolated set of intrinsics and value factories
//! - [`JsError`] - JavaScript errors raised by native functions
//!
//! # Examples
//!
//! ```
//! use core_types::{JsValue, Realm, TypeOf};
//!
//! let realm = Realm::new();
//!
//! let list = realm.array(vec![JsValue::number(1.0), JsValue::number(2.0)]);
//! assert_eq!(list.type_of(), TypeOf::Object);
//! assert_eq!(list.object_to_string(), "[object Array]");
//! assert_eq!(list.to_js_string(), "1,2");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod function;
mod json;
mod number;
mod object;
mod realm;
mod slots;
mod symbol;
mod typed_array;
mod value;

pub use error::{ErrorKind, JsError, JsResult};
pub use function::{FunctionData, FunctionKind, NativeFn};
pub use number::{is_js_whitespace, number_to_string, string_to_number, NumberObject};
pub use object::{JsObject, Property, PropertyKey, WeakObject};
pub use realm::{HostKind, Intrinsic, Realm};
pub use slots::{ErrorData, MapData, ObjectSlots, PromiseState, SetData};
pub use symbol::SymbolValue;
pub use typed_array::{TypedArrayData, TypedArrayKind};
pub use value::{BigIntValue, JsValue, Numeric, TypeOf};
