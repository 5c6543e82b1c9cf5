//! # sheen
//!
//! Declarative JSON decoding for typed models, bridged to any HTTP client.
//!
//! sheen maps loosely-typed JSON onto strongly-typed structs and back, and
//! plugs that mapping into HTTP responses:
//! - Required and optional fields, dotted key paths, nested models
//! - Tolerant array decoding that drops undecodable elements
//! - A [`TransportClient`] seam so any HTTP library can be used
//! - Async and completion-callback request entry points
//!
//! ## Defining a model
//!
//! ```
//! use sheen::prelude::*;
//!
//! #[derive(Debug, Decodable, Encodable)]
//! struct Owner {
//!     id: u64,
//!     login: String,
//! }
//!
//! #[derive(Debug, Decodable, Encodable)]
//! struct Repo {
//!     id: u64,
//!     name: String,
//!     description: Option<String>,
//!     #[sheen(nested)]
//!     owner: Owner,
//!     #[sheen(key = "owner.login")]
//!     owner_login: String,
//! }
//!
//! let json = sheen::serde_json::json!({
//!     "id": 1,
//!     "name": "sheen",
//!     "owner": {"id": 2, "login": "a"}
//! });
//!
//! let repo = Repo::decode(&json).unwrap();
//! assert_eq!(repo.owner_login, "a");
//! assert!(repo.description.is_none());
//! ```
//!
//! ## Making requests
//!
//! ```ignore
//! use sheen::prelude::*;
//!
//! let repos: Vec<Repo> = sheen::request_array(
//!     HttpMethod::Get,
//!     "https://api.github.com/users/octocat/repos",
//!     None,
//!     None,
//! )
//! .await?;
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`sheen_core`] - JSON model and the Decodable/Encodable contract
//! - [`sheen_macros`] - `#[derive(Decodable, Encodable)]`
//! - [`sheen_transport`] - Transport seam, response serializer, request manager
//! - [`sheen_logging`] - Subscriber setup

mod request;

// Re-export core types (the derive macros expand to these paths)
pub use sheen_core::{
    DEFAULT_KEY_PATH_DELIMITER, DecodeError, DecodeResult, Decodable, Decoder, Encodable, Encoder,
    FromJsonValue, JsonKind, JsonObject, JsonValue, ToJsonValue, decode_array,
    encode_array, from_json_array, json,
};

// Re-export derive macros
pub use sheen_macros::{Decodable, Encodable};

// Re-export transport types
pub use sheen_transport::{
    ClientConfig, Headers, HttpMethod, NetworkError, NetworkRequestManager, NetworkResult,
    ParameterEncoding, PreparedRequest, RequestHandle, RequestSpec, ResponseSerializer,
    StubTransport, TransportClient, TransportError, TransportErrorKind, TransportResponse,
    default_manager, reset_default_manager, set_default_manager,
};

#[cfg(feature = "reqwest")]
pub use sheen_transport::ReqwestTransport;

pub use sheen_logging::{LogLevel, ReloadHandle, init_logging};

pub use request::{
    request, request_array, request_array_with, request_object, request_object_with, request_with,
};

// Re-export common dependencies that model authors need
pub use async_trait::async_trait;
pub use serde_json;
pub use tokio;
pub use tracing;
pub use url;

/// Prelude module for convenient imports.
///
/// Use `use sheen::prelude::*;` to import commonly used types.
///
/// This includes:
/// - Contract traits and derives: `Decodable`, `Encodable`
/// - Field helpers: `Decoder`, `Encoder`, `JsonObject`, `JsonValue`
/// - Networking: `HttpMethod`, `RequestSpec`, `NetworkError`, `NetworkResult`,
///   `NetworkRequestManager`, `TransportClient`, `TransportResponse`
pub mod prelude {
    pub use crate::{
        Decodable, Decoder, Encodable, Encoder, HttpMethod, JsonObject, JsonValue, NetworkError,
        NetworkRequestManager, NetworkResult, RequestSpec, TransportClient, TransportError,
        TransportResponse, async_trait,
    };
}
