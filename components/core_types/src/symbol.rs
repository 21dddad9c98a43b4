//! JavaScript Symbol primitive values.
//!
//! Symbols are unique, immutable primitive values that can be used as property
//! keys. Only `Symbol.toStringTag` is needed from the well-known set: it
//! overrides the tag reported by the canonical object stringification.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::LazyLock;

/// Global counter for generating unique symbol IDs
static SYMBOL_COUNTER: AtomicU64 = AtomicU64::new(1);

/// `Symbol.toStringTag`, shared by every realm
static TO_STRING_TAG: LazyLock<SymbolValue> =
    LazyLock::new(|| SymbolValue::new(Some("Symbol.toStringTag")));

/// A JavaScript Symbol value
///
/// Each symbol has a unique internal ID and an optional description for
/// debugging. Two symbols are equal only when they share an ID.
#[derive(Debug, Clone)]
pub struct SymbolValue {
    id: u64,
    description: Option<String>,
}

impl SymbolValue {
    /// Create a new unique symbol with optional description
    ///
    /// # Example
    /// ```
    /// use core_types::SymbolValue;
    ///
    /// let a = SymbolValue::new(Some("key"));
    /// let b = SymbolValue::new(Some("key"));
    /// assert_ne!(a, b);
    /// ```
    pub fn new(description: Option<&str>) -> Self {
        let id = SYMBOL_COUNTER.fetch_add(1, Ordering::SeqCst);
        SymbolValue {
            id,
            description: description.map(str::to_string),
        }
    }

    /// The well-known `Symbol.toStringTag`
    pub fn to_string_tag() -> SymbolValue {
        TO_STRING_TAG.clone()
    }

    /// Get the unique ID of this symbol
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Get the description of this symbol
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

/// `String(symbol)`: "Symbol(description)" or "Symbol()"
impl fmt::Display for SymbolValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(desc) => write!(f, "Symbol({})", desc),
            None => write!(f, "Symbol()"),
        }
    }
}

impl PartialEq for SymbolValue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for SymbolValue {}

impl Hash for SymbolValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
