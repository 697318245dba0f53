//! Loose-typing helpers over `serde_json::Value`
//!
//! Entity documents are authored by hand, so rule checks read fields the way a
//! document author thinks about them: absent, `null`, `false`, `0` and `""` are
//! all "not set", while any object or array (even an empty one) is set.

use serde_json::{Map, Value};

/// Whether a field counts as set.
pub fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// The value itself when it counts as set.
pub fn truthy(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| is_truthy(Some(*v)))
}

/// Returns the object if the value is a non-empty JSON object.
pub fn non_empty_object(value: Option<&Value>) -> Option<&Map<String, Value>> {
    value
        .and_then(Value::as_object)
        .filter(|map| !map.is_empty())
}

/// Short type name used in finding messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Renders a value for a message: strings unquoted, everything else as JSON.
pub fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Length of a string in Unicode scalar values.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
