//! JSON value model and key-path helpers
//!
//! The in-memory tree is `serde_json::Value`. Objects use serde_json's default
//! sorted map, so anything built from them serializes deterministically.

use std::fmt;

/// A JSON value: null, bool, number, string, array or object
pub type JsonValue = serde_json::Value;

/// A JSON object keyed by string
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Delimiter used to address nested objects from a single key (`"owner.login"`)
pub const DEFAULT_KEY_PATH_DELIMITER: char = '.';

/// The variant of a [`JsonValue`], used in diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    /// Classify a value
    pub fn of(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => JsonKind::Null,
            JsonValue::Bool(_) => JsonKind::Bool,
            JsonValue::Number(_) => JsonKind::Number,
            JsonValue::String(_) => JsonKind::String,
            JsonValue::Array(_) => JsonKind::Array,
            JsonValue::Object(_) => JsonKind::Object,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "bool",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse JSON text into a value
pub fn parse(bytes: &[u8]) -> Result<JsonValue, serde_json::Error> {
    serde_json::from_slice(bytes)
}

/// Render a value as compact JSON text
pub fn to_string(value: &JsonValue) -> String {
    // Display on Value is infallible and compact.
    value.to_string()
}

/// Look up `key` in `object`, walking nested objects when the key contains
/// `delimiter`.
///
/// The literal key wins when present, so keys that legitimately contain the
/// delimiter still resolve. Returns `None` when any intermediate segment is
/// missing or is not an object.
pub fn value_for_key_path<'a>(
    object: &'a JsonObject,
    key: &str,
    delimiter: char,
) -> Option<&'a JsonValue> {
    if let Some(value) = object.get(key) {
        return Some(value);
    }
    if !key.contains(delimiter) {
        return None;
    }

    let mut segments = key.split(delimiter);
    let first = segments.next()?;
    let mut current = object.get(first)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Store `value` under `key`, creating intermediate objects for key paths.
///
/// Writing an object where an object already exists merges the two, so a
/// nested model and a key path into that model can share one subtree.
/// Any other collision replaces the existing value.
pub fn set_value_for_key_path(
    object: &mut JsonObject,
    key: &str,
    delimiter: char,
    value: JsonValue,
) {
    let mut segments: Vec<&str> = key.split(delimiter).collect();
    let last = match segments.pop() {
        Some(last) => last,
        None => return,
    };

    let mut current = object;
    for segment in segments {
        let slot = current
            .entry(segment.to_string())
            .or_insert_with(|| JsonValue::Object(JsonObject::new()));
        if !slot.is_object() {
            *slot = JsonValue::Object(JsonObject::new());
        }
        current = match slot {
            JsonValue::Object(inner) => inner,
            _ => return,
        };
    }

    match current.get_mut(last) {
        Some(existing) => merge(existing, value),
        None => {
            current.insert(last.to_string(), value);
        }
    }
}

/// Deep-merge `incoming` into `target`; non-object values replace
pub fn merge(target: &mut JsonValue, incoming: JsonValue) {
    match (target, incoming) {
        (JsonValue::Object(existing), JsonValue::Object(incoming)) => {
            for (key, value) in incoming {
                match existing.get_mut(&key) {
                    Some(slot) => merge(slot, value),
                    None => {
                        existing.insert(key, value);
                    }
                }
            }
        }
        (target, incoming) => *target = incoming,
    }
}
