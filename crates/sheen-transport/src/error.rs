//! Error types for network requests

use sheen_core::{DecodeError, JsonValue};
use std::fmt;
use thiserror::Error;

/// Result type alias for network operations
pub type NetworkResult<T> = Result<T, NetworkError>;

/// Broad category of a transport failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportErrorKind {
    /// Could not connect (DNS, refused, TLS handshake)
    Connect,
    /// The request did not finish in time
    Timeout,
    /// The request could not be built or sent
    Request,
    /// The response body could not be read
    Body,
    /// Anything else reported by the HTTP library
    Other,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransportErrorKind::Connect => "connect",
            TransportErrorKind::Timeout => "timeout",
            TransportErrorKind::Request => "request",
            TransportErrorKind::Body => "body",
            TransportErrorKind::Other => "other",
        };
        f.write_str(name)
    }
}

/// A failure reported by the transport client, passed through untouched
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} error: {message}")]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn connect(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Connect, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(TransportErrorKind::Timeout, message)
    }
}

/// Error type for network requests
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NetworkError {
    /// The transport failed before a response was available
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response body was not valid JSON
    #[error("JSON could not be parsed: {message}")]
    Parse { message: String, payload: String },

    /// Valid JSON that does not satisfy the target type
    #[error("{reason}: {value}")]
    Decode { reason: String, value: JsonValue },

    /// The status code was rejected by status validation
    #[error("unacceptable status code {status}")]
    Status { status: u16, payload: String },

    /// The request could not be prepared (bad URL, unencodable parameters)
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// The request task ended without producing a result
    #[error("request cancelled")]
    Cancelled,
}

/// Reason attached to every decode failure of a response
pub const DECODE_FAILURE_REASON: &str = "JSON could not be serialized into response object";

impl NetworkError {
    /// Returns a stable numeric code per variant, handy for logs and metrics
    pub fn error_code(&self) -> u32 {
        match self {
            NetworkError::Transport(_) => 1,
            NetworkError::Parse { .. } => 2,
            NetworkError::Decode { .. } => 3,
            NetworkError::Status { .. } => 4,
            NetworkError::InvalidRequest(_) => 5,
            NetworkError::Config(_) => 6,
            NetworkError::Cancelled => 7,
        }
    }

    /// A decode failure carrying the offending JSON
    pub fn decode(value: JsonValue) -> Self {
        NetworkError::Decode {
            reason: DECODE_FAILURE_REASON.to_string(),
            value,
        }
    }

    /// Whether the failure happened in the transport rather than in JSON handling
    pub fn is_transport(&self) -> bool {
        matches!(self, NetworkError::Transport(_))
    }
}

impl From<DecodeError> for NetworkError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Syntax(message) => NetworkError::Parse {
                message,
                payload: String::new(),
            },
            DecodeError::Rejected { value, .. } => NetworkError::decode(value),
            other @ (DecodeError::NotAnObject { .. } | DecodeError::NotAnArray { .. }) => {
                NetworkError::Decode {
                    reason: other.to_string(),
                    value: JsonValue::Null,
                }
            }
        }
    }
}
