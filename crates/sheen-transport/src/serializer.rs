//! Turns a transport response into a typed result
//!
//! The order of checks is fixed: transport error, then (optionally) status,
//! then JSON parsing, then decoding. A later stage never runs when an earlier
//! one failed.

use crate::error::{NetworkError, NetworkResult};
use crate::response::TransportResponse;
use sheen_core::{Decodable, JsonValue, from_json_array, json};

/// Bridges [`TransportResponse`] into decoded values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseSerializer {
    validate_status: bool,
}

impl ResponseSerializer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject non-2xx responses with [`NetworkError::Status`] before parsing
    pub fn with_status_validation(mut self, enabled: bool) -> Self {
        self.validate_status = enabled;
        self
    }

    pub fn validates_status(&self) -> bool {
        self.validate_status
    }

    /// Succeed unless the transport (or status validation) failed; the body is
    /// never parsed
    pub fn serialize_unit(&self, response: &TransportResponse) -> NetworkResult<()> {
        if let Some(error) = &response.error {
            tracing::debug!(kind = %error.kind, "transport reported an error");
            return Err(NetworkError::Transport(error.clone()));
        }

        if self.validate_status && !response.is_success() {
            tracing::debug!(status = response.status, "status rejected");
            return Err(NetworkError::Status {
                status: response.status,
                payload: response.body_text(),
            });
        }

        Ok(())
    }

    /// Parse the body into a JSON value
    pub fn serialize_json(&self, response: &TransportResponse) -> NetworkResult<JsonValue> {
        self.serialize_unit(response)?;

        let bytes = response.body_bytes();
        if bytes.is_empty() {
            return Err(NetworkError::Parse {
                message: "response body is empty".to_string(),
                payload: String::new(),
            });
        }

        json::parse(bytes).map_err(|e| NetworkError::Parse {
            message: e.to_string(),
            payload: response.body_text(),
        })
    }

    /// Decode the body into a single `T`
    pub fn serialize_object<T: Decodable>(&self, response: &TransportResponse) -> NetworkResult<T> {
        let value = self.serialize_json(response)?;

        match value.as_object().and_then(T::from_json) {
            Some(decoded) => Ok(decoded),
            None => {
                tracing::warn!(
                    target_type = std::any::type_name::<T>(),
                    "response JSON rejected by decoder"
                );
                Err(NetworkError::decode(value))
            }
        }
    }

    /// Decode the body into a `Vec<T>`, dropping elements that fail to decode
    pub fn serialize_array<T: Decodable>(
        &self,
        response: &TransportResponse,
    ) -> NetworkResult<Vec<T>> {
        match self.serialize_json(response)? {
            JsonValue::Array(items) => Ok(from_json_array(&items)),
            other => {
                tracing::warn!(
                    target_type = std::any::type_name::<T>(),
                    "expected a JSON array in response"
                );
                Err(NetworkError::decode(other))
            }
        }
    }
}

#[cfg(test)]
#[path = "serializer/serializer_tests.rs"]
mod serializer_tests;
