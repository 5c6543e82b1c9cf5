//! The Decodable contract and field extraction
//!
//! A type participates by implementing [`Decodable::from_json`], usually with a
//! [`Decoder`]. Every extractor returns `Option<T>`; the `?` operator marks a
//! field as required:
//!
//! ```
//! use sheen_core::{Decodable, Decoder, JsonObject};
//!
//! struct Owner {
//!     id: u64,
//!     login: String,
//!     homepage: Option<String>,
//! }
//!
//! impl Decodable for Owner {
//!     fn from_json(json: &JsonObject) -> Option<Self> {
//!         let decoder = Decoder::new(json);
//!         Some(Self {
//!             id: decoder.field("id")?,
//!             login: decoder.field("login")?,
//!             homepage: decoder.field("homepage"),
//!         })
//!     }
//! }
//!
//! let json = serde_json::json!({"id": 2, "login": "a"});
//! let owner = Owner::decode(&json).unwrap();
//! assert_eq!(owner.login, "a");
//! assert!(owner.homepage.is_none());
//! ```
//!
//! A missing or mistyped required field aborts the whole object; a missing or
//! mistyped optional field only leaves that field as `None`. JSON `null` is
//! treated as absent.

use crate::collection;
use crate::error::{DecodeError, DecodeResult};
use crate::json::{self, DEFAULT_KEY_PATH_DELIMITER, JsonKind, JsonObject, JsonValue};
use std::collections::BTreeMap;
use std::str::FromStr;

/// A type that can be built from a JSON object
pub trait Decodable: Sized {
    /// Build a value from `json`, or `None` when a required field is missing
    /// or has the wrong type
    fn from_json(json: &JsonObject) -> Option<Self>;

    /// Decode any JSON value; non-objects yield `None`
    fn decode(json: &JsonValue) -> Option<Self> {
        Self::from_json(json.as_object()?)
    }

    /// Tolerantly decode every element of `items`, dropping failures
    fn from_json_array(items: &[JsonValue]) -> Vec<Self> {
        collection::from_json_array(items)
    }

    /// Decode a JSON array, failing only when `json` is not an array
    fn decode_array(json: &JsonValue) -> DecodeResult<Vec<Self>> {
        collection::decode_array(json)
    }

    /// Parse JSON text and decode it
    fn from_slice(bytes: &[u8]) -> DecodeResult<Self> {
        let value = json::parse(bytes)?;
        match value.as_object() {
            Some(object) => {
                Self::from_json(object).ok_or_else(|| DecodeError::rejected::<Self>(value.clone()))
            }
            None => Err(DecodeError::NotAnObject {
                found: JsonKind::of(&value),
            }),
        }
    }
}

/// Conversion from a single JSON value into a field type
pub trait FromJsonValue: Sized {
    fn from_json_value(value: &JsonValue) -> Option<Self>;
}

impl FromJsonValue for bool {
    fn from_json_value(value: &JsonValue) -> Option<Self> {
        value.as_bool()
    }
}

macro_rules! signed_from_json {
    ($($ty:ty),*) => {
        $(
            impl FromJsonValue for $ty {
                fn from_json_value(value: &JsonValue) -> Option<Self> {
                    value.as_i64().and_then(|n| <$ty>::try_from(n).ok())
                }
            }
        )*
    };
}

macro_rules! unsigned_from_json {
    ($($ty:ty),*) => {
        $(
            impl FromJsonValue for $ty {
                fn from_json_value(value: &JsonValue) -> Option<Self> {
                    value.as_u64().and_then(|n| <$ty>::try_from(n).ok())
                }
            }
        )*
    };
}

signed_from_json!(i8, i16, i32, i64, isize);
unsigned_from_json!(u8, u16, u32, u64, usize);

impl FromJsonValue for f64 {
    fn from_json_value(value: &JsonValue) -> Option<Self> {
        value.as_f64()
    }
}

impl FromJsonValue for f32 {
    /// Numbers beyond `f32::MAX` are rejected rather than saturated to infinity
    fn from_json_value(value: &JsonValue) -> Option<Self> {
        let n = value.as_f64()? as f32;
        n.is_finite().then_some(n)
    }
}

impl FromJsonValue for String {
    fn from_json_value(value: &JsonValue) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromJsonValue for JsonValue {
    fn from_json_value(value: &JsonValue) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromJsonValue for JsonObject {
    fn from_json_value(value: &JsonValue) -> Option<Self> {
        value.as_object().cloned()
    }
}

impl FromJsonValue for url::Url {
    fn from_json_value(value: &JsonValue) -> Option<Self> {
        url::Url::parse(value.as_str()?).ok()
    }
}

/// Arrays of plain values are strict: one bad element fails the field.
impl<T: FromJsonValue> FromJsonValue for Vec<T> {
    fn from_json_value(value: &JsonValue) -> Option<Self> {
        value.as_array()?.iter().map(T::from_json_value).collect()
    }
}

/// Field extractor over one JSON object
#[derive(Debug, Clone, Copy)]
pub struct Decoder<'a> {
    json: &'a JsonObject,
    delimiter: char,
}

impl<'a> Decoder<'a> {
    /// Create a decoder using the default `.` key-path delimiter
    pub fn new(json: &'a JsonObject) -> Self {
        Self {
            json,
            delimiter: DEFAULT_KEY_PATH_DELIMITER,
        }
    }

    /// Use a different key-path delimiter
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// The object being decoded
    pub fn json(&self) -> &'a JsonObject {
        self.json
    }

    /// The raw value at `key`; `null` counts as absent
    pub fn raw(&self, key: &str) -> Option<&'a JsonValue> {
        json::value_for_key_path(self.json, key, self.delimiter).filter(|value| !value.is_null())
    }

    /// Whether a non-null value exists at `key`
    pub fn contains(&self, key: &str) -> bool {
        self.raw(key).is_some()
    }

    /// A plain value (number, string, bool, URL, or an array of those)
    pub fn field<T: FromJsonValue>(&self, key: &str) -> Option<T> {
        let value = self.raw(key)?;
        let decoded = T::from_json_value(value);
        if decoded.is_none() {
            tracing::trace!(key, found = %JsonKind::of(value), "field has unexpected type");
        }
        decoded
    }

    /// A nested decodable object
    pub fn nested<T: Decodable>(&self, key: &str) -> Option<T> {
        T::decode(self.raw(key)?)
    }

    /// An array of nested objects; undecodable elements are dropped and only a
    /// non-array value fails
    pub fn nested_array<T: Decodable>(&self, key: &str) -> Option<Vec<T>> {
        let items = self.raw(key)?.as_array()?;
        Some(collection::from_json_array(items))
    }

    /// An object whose values are all decodable; one bad value fails the field
    pub fn nested_map<T: Decodable>(&self, key: &str) -> Option<BTreeMap<String, T>> {
        self.raw(key)?
            .as_object()?
            .iter()
            .map(|(name, value)| T::decode(value).map(|decoded| (name.clone(), decoded)))
            .collect()
    }

    /// A string parsed with [`FromStr`], typically a string-backed enum
    pub fn parsed<T: FromStr>(&self, key: &str) -> Option<T> {
        self.raw(key)?.as_str()?.parse().ok()
    }

    /// A value converted by a custom function
    pub fn with<T, F>(&self, key: &str, convert: F) -> Option<T>
    where
        F: FnOnce(&'a JsonValue) -> Option<T>,
    {
        convert(self.raw(key)?)
    }
}

#[cfg(test)]
#[path = "decode/decode_tests.rs"]
mod decode_tests;
