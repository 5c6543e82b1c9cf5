//! Error types for JSON decoding

use crate::json::{JsonKind, JsonValue};
use thiserror::Error;

/// Result type alias for decode operations that report why they failed
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Error type for decode operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The input was not well-formed JSON text
    #[error("malformed JSON: {0}")]
    Syntax(String),

    /// An object was required but another kind of value was found
    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: JsonKind },

    /// An array was required but another kind of value was found
    #[error("expected a JSON array, found {found}")]
    NotAnArray { found: JsonKind },

    /// Well-formed JSON that does not satisfy the target type's required fields
    #[error("JSON could not be decoded into {type_name}: {value}")]
    Rejected {
        type_name: &'static str,
        value: JsonValue,
    },
}

impl DecodeError {
    /// Build a [`DecodeError::Rejected`] for target type `T`
    pub fn rejected<T>(value: JsonValue) -> Self {
        DecodeError::Rejected {
            type_name: short_type_name::<T>(),
            value,
        }
    }

    /// The JSON fragment that caused the failure, when one is available
    pub fn value(&self) -> Option<&JsonValue> {
        match self {
            DecodeError::Rejected { value, .. } => Some(value),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Syntax(err.to_string())
    }
}

/// Last path segment of a type name (`my_app::model::Repo` -> `Repo`)
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
