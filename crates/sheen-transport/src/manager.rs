//! Request façade composing transport and serializer

use crate::client::TransportClient;
use crate::config::ClientConfig;
use crate::dispatch::{self, RequestHandle};
use crate::error::NetworkResult;
use crate::method::HttpMethod;
use crate::request::{Headers, ParameterEncoding, RequestSpec, set_default_header};
use crate::response::TransportResponse;
use crate::serializer::ResponseSerializer;
use sheen_core::{Decodable, JsonObject};
use std::fmt;
use std::sync::Arc;
use tracing::Instrument;

/// Sends requests through a [`TransportClient`] and decodes the responses
///
/// Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct NetworkRequestManager {
    transport: Arc<dyn TransportClient>,
    serializer: ResponseSerializer,
    default_headers: Headers,
    encoding: ParameterEncoding,
}

impl fmt::Debug for NetworkRequestManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkRequestManager")
            .field("transport", &self.transport.name())
            .field("serializer", &self.serializer)
            .field("default_headers", &self.default_headers)
            .field("encoding", &self.encoding)
            .finish()
    }
}

impl NetworkRequestManager {
    /// Create a manager with default serializer settings
    pub fn new(transport: Arc<dyn TransportClient>) -> Self {
        Self {
            transport,
            serializer: ResponseSerializer::new(),
            default_headers: Headers::new(),
            encoding: ParameterEncoding::default(),
        }
    }

    /// Create a manager using the headers, encoding and status policy in `config`
    pub fn from_config(transport: Arc<dyn TransportClient>, config: &ClientConfig) -> Self {
        Self {
            transport,
            serializer: config.serializer(),
            default_headers: config.default_headers.clone(),
            encoding: config.parameter_encoding,
        }
    }

    /// Create a manager backed by [`ReqwestTransport`](crate::ReqwestTransport)
    #[cfg(feature = "reqwest")]
    pub fn with_config(config: &ClientConfig) -> NetworkResult<Self> {
        let transport = crate::reqwest_client::ReqwestTransport::new(config)?;
        Ok(Self::from_config(Arc::new(transport), config))
    }

    pub fn with_serializer(mut self, serializer: ResponseSerializer) -> Self {
        self.serializer = serializer;
        self
    }

    /// Add a header sent with every request that does not set it itself
    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    pub fn transport(&self) -> &Arc<dyn TransportClient> {
        &self.transport
    }

    pub fn serializer(&self) -> ResponseSerializer {
        self.serializer
    }

    /// Compose a request from its parts using this manager's encoding
    pub fn build_request(
        &self,
        method: HttpMethod,
        url: &str,
        parameters: Option<JsonObject>,
        headers: Option<Headers>,
    ) -> RequestSpec {
        RequestSpec {
            method,
            url: url.to_string(),
            parameters,
            headers,
            encoding: self.encoding,
        }
    }

    async fn perform(&self, mut spec: RequestSpec) -> NetworkResult<TransportResponse> {
        // reject malformed requests before reaching the transport
        spec.prepare()?;

        if !self.default_headers.is_empty() {
            let headers = spec.headers.get_or_insert_with(Headers::new);
            for (name, value) in &self.default_headers {
                set_default_header(headers, name, value);
            }
        }

        let span = tracing::debug_span!(
            "request",
            method = %spec.method,
            url = %spec.url,
            transport = self.transport.name()
        );
        let response = async {
            let response = self.transport.perform(&spec).await;
            match &response.error {
                Some(error) => tracing::debug!(%error, "transport failed"),
                None => tracing::debug!(status = response.status, "response received"),
            }
            response
        }
        .instrument(span)
        .await;
        Ok(response)
    }

    /// Perform `spec` and ignore the body
    pub async fn send(&self, spec: RequestSpec) -> NetworkResult<()> {
        let response = self.perform(spec).await?;
        self.serializer.serialize_unit(&response)
    }

    /// Perform `spec` and decode the body into a `T`
    pub async fn send_object<T: Decodable>(&self, spec: RequestSpec) -> NetworkResult<T> {
        let response = self.perform(spec).await?;
        self.serializer.serialize_object(&response)
    }

    /// Perform `spec` and decode the body into a `Vec<T>`, dropping bad elements
    pub async fn send_array<T: Decodable>(&self, spec: RequestSpec) -> NetworkResult<Vec<T>> {
        let response = self.perform(spec).await?;
        self.serializer.serialize_array(&response)
    }

    pub async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        parameters: Option<JsonObject>,
        headers: Option<Headers>,
    ) -> NetworkResult<()> {
        self.send(self.build_request(method, url, parameters, headers))
            .await
    }

    pub async fn request_object<T: Decodable>(
        &self,
        method: HttpMethod,
        url: &str,
        parameters: Option<JsonObject>,
        headers: Option<Headers>,
    ) -> NetworkResult<T> {
        self.send_object(self.build_request(method, url, parameters, headers))
            .await
    }

    pub async fn request_array<T: Decodable>(
        &self,
        method: HttpMethod,
        url: &str,
        parameters: Option<JsonObject>,
        headers: Option<Headers>,
    ) -> NetworkResult<Vec<T>> {
        self.send_array(self.build_request(method, url, parameters, headers))
            .await
    }

    /// Perform `spec` in the background and pass the outcome to `completion`
    ///
    /// The completion fires exactly once, unless the returned handle is
    /// cancelled first.
    pub fn dispatch<C>(&self, spec: RequestSpec, completion: C) -> NetworkResult<RequestHandle>
    where
        C: FnOnce(NetworkResult<()>) + Send + 'static,
    {
        let manager = self.clone();
        dispatch::dispatch(async move { manager.send(spec).await }, completion)
    }

    pub fn dispatch_object<T, C>(&self, spec: RequestSpec, completion: C) -> NetworkResult<RequestHandle>
    where
        T: Decodable + Send + 'static,
        C: FnOnce(NetworkResult<T>) + Send + 'static,
    {
        let manager = self.clone();
        dispatch::dispatch(
            async move { manager.send_object::<T>(spec).await },
            completion,
        )
    }

    pub fn dispatch_array<T, C>(&self, spec: RequestSpec, completion: C) -> NetworkResult<RequestHandle>
    where
        T: Decodable + Send + 'static,
        C: FnOnce(NetworkResult<Vec<T>>) + Send + 'static,
    {
        let manager = self.clone();
        dispatch::dispatch(
            async move { manager.send_array::<T>(spec).await },
            completion,
        )
    }
}
