//! sheen-core - JSON value model and the Decodable/Encodable contract
//!
//! This crate provides the foundational types for mapping JSON onto domain types:
//! - [`JsonValue`] / [`JsonObject`] and key-path helpers in [`json`]
//! - [`Decodable`] and the [`Decoder`] field extractor
//! - [`Encodable`] and the [`Encoder`] builder
//! - Tolerant collection helpers ([`decode_array`], [`encode_array`])
//! - [`DecodeError`] for error handling

pub mod collection;
pub mod decode;
pub mod encode;
mod error;
pub mod json;

pub use collection::{decode_array, encode_array, from_json_array};
pub use decode::{Decodable, Decoder, FromJsonValue};
pub use encode::{Encodable, Encoder, ToJsonValue};
pub use error::{DecodeError, DecodeResult};
pub use json::{DEFAULT_KEY_PATH_DELIMITER, JsonKind, JsonObject, JsonValue};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        DecodeError, DecodeResult, Decodable, Decoder, Encodable, Encoder, FromJsonValue,
        JsonKind, JsonObject, JsonValue, ToJsonValue,
    };
}

#[cfg(test)]
mod test_fixtures;
