//! Object-kind resolution from the canonical class tag

use core_types::JsValue;

use crate::vocabulary::ObjectTypeName;

/// Resolve the named built-in kind of a value
///
/// Reads the tag from `Object.prototype.toString`, so `Symbol.toStringTag`
/// overrides are honored. Tags outside the vocabulary resolve to `None`;
/// this includes every primitive (`Number`, `Undefined`, ...) and plain
/// functions (`Function`).
///
/// ```
/// use core_types::{JsValue, Realm};
/// use type_check::{resolve_object_kind, ObjectTypeName};
///
/// let realm = Realm::new();
/// assert_eq!(resolve_object_kind(&realm.map(vec![])), Some(ObjectTypeName::Map));
/// assert_eq!(resolve_object_kind(&JsValue::number(1.0)), None);
/// ```
pub fn resolve_object_kind(value: &JsValue) -> Option<ObjectTypeName> {
    let rendered = value.object_to_string();
    let tag = rendered
        .strip_prefix("[object ")
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(&rendered);

    let kind = ObjectTypeName::from_name(tag);
    if kind.is_none() {
        tracing::trace!(tag, "class tag outside the object-kind vocabulary");
    }
    kind
}
