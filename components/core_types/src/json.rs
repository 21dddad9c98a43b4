//! Building values from JSON text
//!
//! JSON documents map onto plain objects and arrays of the realm; numbers are
//! always Number values.

use serde_json::Value as Json;

use crate::error::{JsError, JsResult};
use crate::realm::Realm;
use crate::value::JsValue;

impl Realm {
    /// `JSON.parse(text)`; malformed input is a SyntaxError
    ///
    /// ```
    /// use core_types::Realm;
    ///
    /// let realm = Realm::new();
    /// let value = realm.parse_json(r#"{"a": [1, 2]}"#).unwrap();
    /// assert_eq!(value.object_to_string(), "[object Object]");
    /// assert!(realm.parse_json("{").is_err());
    /// ```
    pub fn parse_json(&self, text: &str) -> JsResult<JsValue> {
        let json: Json = serde_json::from_str(text)
            .map_err(|e| JsError::syntax_error(format!("Unexpected token in JSON: {}", e)))?;
        Ok(self.from_json(&json))
    }

    /// Convert an already parsed JSON document
    pub fn from_json(&self, json: &Json) -> JsValue {
        match json {
            Json::Null => JsValue::Null,
            Json::Bool(b) => JsValue::Boolean(*b),
            Json::Number(n) => JsValue::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => JsValue::String(s.clone()),
            Json::Array(items) => {
                self.array(items.iter().map(|item| self.from_json(item)).collect())
            }
            Json::Object(map) => {
                let entries = map
                    .iter()
                    .map(|(key, value)| (key.as_str(), self.from_json(value)));
                self.object_from(entries)
            }
        }
    }
}
