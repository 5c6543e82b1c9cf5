//! The transport client seam

use crate::request::RequestSpec;
use crate::response::TransportResponse;
use async_trait::async_trait;
use std::sync::Arc;

/// Capability any HTTP library adapts to
///
/// `perform` never fails as a Rust error: transport-level failures travel in
/// [`TransportResponse::error`] so the serializer can decide what to do with
/// them.
///
/// # Example
///
/// ```ignore
/// use sheen_transport::prelude::*;
///
/// struct Offline;
///
/// #[async_trait::async_trait]
/// impl TransportClient for Offline {
///     async fn perform(&self, _spec: &RequestSpec) -> TransportResponse {
///         TransportResponse::failed(TransportError::connect("offline"))
///     }
/// }
/// ```
#[async_trait]
pub trait TransportClient: Send + Sync {
    /// Perform one request
    async fn perform(&self, spec: &RequestSpec) -> TransportResponse;

    /// Short name used in logs
    fn name(&self) -> &'static str {
        "custom"
    }
}

#[async_trait]
impl<T: TransportClient + ?Sized> TransportClient for Arc<T> {
    async fn perform(&self, spec: &RequestSpec) -> TransportResponse {
        (**self).perform(spec).await
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
