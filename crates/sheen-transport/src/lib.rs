//! sheen-transport - HTTP transport seam and typed response serialization
//!
//! This crate provides:
//! - [`TransportClient`] trait any HTTP library can implement
//! - [`RequestSpec`] / [`TransportResponse`] describing one call
//! - [`ResponseSerializer`] turning responses into decoded values
//! - [`NetworkRequestManager`] façade with async and completion entry points
//! - [`ReqwestTransport`] (feature `reqwest`) and [`StubTransport`]

mod client;
mod config;
mod default;
pub mod dispatch;
mod error;
mod manager;
mod method;
mod request;
mod response;
mod serializer;
mod stub;

#[cfg(feature = "reqwest")]
mod reqwest_client;

pub use client::TransportClient;
pub use config::ClientConfig;
pub use default::{default_manager, reset_default_manager, set_default_manager};
pub use dispatch::RequestHandle;
pub use error::{
    DECODE_FAILURE_REASON, NetworkError, NetworkResult, TransportError, TransportErrorKind,
};
pub use manager::NetworkRequestManager;
pub use method::{HttpMethod, UnknownMethod};
pub use request::{Headers, ParameterEncoding, PreparedRequest, RequestSpec, query_pairs};
pub use response::TransportResponse;
pub use serializer::ResponseSerializer;
pub use stub::StubTransport;

#[cfg(feature = "reqwest")]
pub use reqwest_client::ReqwestTransport;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ClientConfig, Headers, HttpMethod, NetworkError, NetworkRequestManager, NetworkResult,
        ParameterEncoding, RequestHandle, RequestSpec, ResponseSerializer, TransportClient,
        TransportError, TransportResponse,
    };
}
