//! Runtime type classification for JavaScript values.
//!
//! Built in three layers, each depending only on the ones before it:
//!
//! - [`resolve_object_kind`] - names the built-in kind of an object from its
//!   class tag, restricted to the [`OBJECT_TYPE_NAMES`] vocabulary
//! - [`classify`] - the single source of truth mapping any value to a
//!   [`TypeTag`]
//! - predicates - `is_*` functions derived from the two above, listed by
//!   name in [`PREDICATES`]
//!
//! Every function is total: no input panics or errors, and an unknown kind is
//! reported as `None` rather than an error.
//!
//! # Examples
//!
//! ```
//! use core_types::{JsValue, Realm};
//! use type_check::{classify, is_empty, is_number, TypeTag};
//!
//! let realm = Realm::new();
//! let boxed = realm.to_object(&JsValue::number(42.0)).unwrap();
//!
//! assert_eq!(classify(&boxed), Some(TypeTag::Number));
//! assert!(is_number(&boxed));
//! assert!(is_empty(&realm.array(vec![])));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod classify;
mod object_kind;
mod predicates;
mod vocabulary;

pub use classify::{classify, TypeTag};
pub use object_kind::resolve_object_kind;
pub use predicates::*;
pub use vocabulary::{ObjectTypeName, OBJECT_TYPE_NAMES};
