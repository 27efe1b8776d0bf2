//! Reading values out of a validated form body.

use serde_json::{Map, Value};

use crate::schema::value::{display_string, is_truthy};

/// String form of a field, or `""` if it is absent or null
pub fn field_text(body: &Map<String, Value>, key: &str) -> String {
    match body.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(v) => display_string(v),
    }
}

/// String form of a field if it is truthy
pub fn truthy_text(body: &Map<String, Value>, key: &str) -> Option<String> {
    let value = body.get(key);
    if is_truthy(value) {
        value.map(display_string)
    } else {
        None
    }
}

/// A field exactly as submitted, if it is truthy.
///
/// Untyped fields such as weight are stored without coercion.
pub fn truthy_value(body: &Map<String, Value>, key: &str) -> Option<Value> {
    body.get(key).filter(|v| is_truthy(Some(v))).cloned()
}
