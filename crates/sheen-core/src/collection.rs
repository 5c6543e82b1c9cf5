//! Batch conversion between JSON arrays and sequences of typed values
//!
//! Array decoding is tolerant: elements that fail to decode are dropped and
//! the survivors keep their original order. Callers get no aggregate error for
//! the dropped elements; the count is only reported through `tracing`.

use crate::decode::Decodable;
use crate::encode::Encodable;
use crate::error::{DecodeError, DecodeResult};
use crate::json::{JsonKind, JsonValue};

/// Decode each element of `items`, keeping only the ones that succeed
pub fn from_json_array<T: Decodable>(items: &[JsonValue]) -> Vec<T> {
    let decoded: Vec<T> = items.iter().filter_map(T::decode).collect();

    let dropped = items.len() - decoded.len();
    if dropped > 0 {
        tracing::debug!(
            total = items.len(),
            dropped,
            target_type = std::any::type_name::<T>(),
            "dropped undecodable array elements"
        );
    }

    decoded
}

/// Decode a JSON array tolerantly
///
/// Fails only when `json` is not an array. An empty array, or one in which
/// every element fails, yields an empty `Vec`.
pub fn decode_array<T: Decodable>(json: &JsonValue) -> DecodeResult<Vec<T>> {
    match json.as_array() {
        Some(items) => Ok(from_json_array(items)),
        None => Err(DecodeError::NotAnArray {
            found: JsonKind::of(json),
        }),
    }
}

/// Encode every value into a JSON array
pub fn encode_array<T: Encodable>(values: &[T]) -> JsonValue {
    JsonValue::Array(values.iter().map(Encodable::encode).collect())
}
