//! The Encodable contract and the object builder
//!
//! Encoding is total: every method on [`Encoder`] accepts its input and the
//! finished object never fails to build. Optional fields that are `None` are
//! left out entirely.

use crate::collection;
use crate::json::{self, DEFAULT_KEY_PATH_DELIMITER, JsonObject, JsonValue};
use std::collections::BTreeMap;
use std::fmt::Display;

/// A type that can be rendered as a JSON object
pub trait Encodable {
    /// Produce the JSON object for this value
    fn to_json(&self) -> JsonObject;

    /// Produce the JSON object wrapped as a [`JsonValue`]
    fn encode(&self) -> JsonValue {
        JsonValue::Object(self.to_json())
    }

    /// Encode a slice of values into a JSON array
    fn to_json_array(items: &[Self]) -> JsonValue
    where
        Self: Sized,
    {
        collection::encode_array(items)
    }

    /// Render the value as compact JSON text
    fn to_json_string(&self) -> String {
        json::to_string(&self.encode())
    }
}

/// Conversion from a field type into a single JSON value
pub trait ToJsonValue {
    fn to_json_value(&self) -> JsonValue;
}

macro_rules! to_json_via_from {
    ($($ty:ty),*) => {
        $(
            impl ToJsonValue for $ty {
                fn to_json_value(&self) -> JsonValue {
                    JsonValue::from(*self)
                }
            }
        )*
    };
}

// Non-finite floats become null, which keeps encoding total.
to_json_via_from!(bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl ToJsonValue for String {
    fn to_json_value(&self) -> JsonValue {
        JsonValue::String(self.clone())
    }
}

impl ToJsonValue for str {
    fn to_json_value(&self) -> JsonValue {
        JsonValue::String(self.to_owned())
    }
}

impl ToJsonValue for JsonValue {
    fn to_json_value(&self) -> JsonValue {
        self.clone()
    }
}

impl ToJsonValue for JsonObject {
    fn to_json_value(&self) -> JsonValue {
        JsonValue::Object(self.clone())
    }
}

impl ToJsonValue for url::Url {
    fn to_json_value(&self) -> JsonValue {
        JsonValue::String(self.as_str().to_owned())
    }
}

impl<T: ToJsonValue> ToJsonValue for Vec<T> {
    fn to_json_value(&self) -> JsonValue {
        JsonValue::Array(self.iter().map(ToJsonValue::to_json_value).collect())
    }
}

impl<T: ToJsonValue + ?Sized> ToJsonValue for &T {
    fn to_json_value(&self) -> JsonValue {
        (**self).to_json_value()
    }
}

/// Builder for a JSON object
///
/// Keys containing the delimiter are written into nested objects, merging
/// with whatever is already there.
#[derive(Debug, Clone)]
pub struct Encoder {
    object: JsonObject,
    delimiter: char,
}

impl Encoder {
    /// Create an empty builder using the default `.` key-path delimiter
    pub fn new() -> Self {
        Self {
            object: JsonObject::new(),
            delimiter: DEFAULT_KEY_PATH_DELIMITER,
        }
    }

    /// Use a different key-path delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Write a raw JSON value
    pub fn value(mut self, key: &str, value: JsonValue) -> Self {
        json::set_value_for_key_path(&mut self.object, key, self.delimiter, value);
        self
    }

    /// Write a plain value
    pub fn field<T: ToJsonValue + ?Sized>(self, key: &str, value: &T) -> Self {
        let value = value.to_json_value();
        self.value(key, value)
    }

    /// Write a plain value when present
    pub fn optional<T: ToJsonValue>(self, key: &str, value: &Option<T>) -> Self {
        match value {
            Some(value) => self.field(key, value),
            None => self,
        }
    }

    /// Write a nested encodable object
    pub fn nested<T: Encodable>(self, key: &str, value: &T) -> Self {
        let value = value.encode();
        self.value(key, value)
    }

    /// Write a nested encodable object when present
    pub fn optional_nested<T: Encodable>(self, key: &str, value: &Option<T>) -> Self {
        match value {
            Some(value) => self.nested(key, value),
            None => self,
        }
    }

    /// Write an array of nested objects
    pub fn nested_array<T: Encodable>(self, key: &str, values: &[T]) -> Self {
        let value = collection::encode_array(values);
        self.value(key, value)
    }

    /// Write an array of nested objects when present
    pub fn optional_nested_array<T: Encodable>(self, key: &str, values: &Option<Vec<T>>) -> Self {
        match values {
            Some(values) => self.nested_array(key, values),
            None => self,
        }
    }

    /// Write a map of nested objects
    pub fn nested_map<T: Encodable>(self, key: &str, values: &BTreeMap<String, T>) -> Self {
        let object: JsonObject = values
            .iter()
            .map(|(name, value)| (name.clone(), value.encode()))
            .collect();
        self.value(key, JsonValue::Object(object))
    }

    /// Write a value as its [`Display`] string, typically a string-backed enum
    pub fn display<T: Display>(self, key: &str, value: &T) -> Self {
        self.value(key, JsonValue::String(value.to_string()))
    }

    /// Write a [`Display`] string when present
    pub fn optional_display<T: Display>(self, key: &str, value: &Option<T>) -> Self {
        match value {
            Some(value) => self.display(key, value),
            None => self,
        }
    }

    /// Finish the object
    pub fn build(self) -> JsonObject {
        self.object
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new()
    }
}
