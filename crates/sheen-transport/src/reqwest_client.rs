//! Transport backed by `reqwest`

use crate::client::TransportClient;
use crate::config::ClientConfig;
use crate::error::{NetworkError, NetworkResult, TransportError, TransportErrorKind};
use crate::request::RequestSpec;
use crate::response::TransportResponse;
use async_trait::async_trait;
use std::collections::BTreeMap;

/// The canonical [`TransportClient`], wrapping a shared `reqwest::Client`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Build a client with the timeouts and user agent from `config`
    pub fn new(config: &ClientConfig) -> NetworkResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .connect_timeout(config.connect_timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| NetworkError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an already configured client
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TransportClient for ReqwestTransport {
    async fn perform(&self, spec: &RequestSpec) -> TransportResponse {
        let prepared = match spec.prepare() {
            Ok(prepared) => prepared,
            Err(e) => {
                return TransportResponse::failed(TransportError::new(
                    TransportErrorKind::Request,
                    e.to_string(),
                ));
            }
        };

        let mut builder = self.client.request(prepared.method.into(), prepared.url);
        for (name, value) in &prepared.headers {
            builder = builder.header(name, value);
        }
        if let Some(body) = prepared.body {
            builder = builder.body(body);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => return TransportResponse::failed(transport_error(&e)),
        };

        let status = response.status().as_u16();
        let headers = collect_headers(response.headers());

        match response.bytes().await {
            Ok(bytes) => TransportResponse {
                status,
                headers,
                body: Some(bytes.to_vec()),
                error: None,
            },
            Err(e) => TransportResponse {
                status,
                headers,
                body: None,
                error: Some(transport_error(&e)),
            },
        }
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

/// Lower-cased header map; repeated names are joined with `", "` and values
/// that are not visible ASCII are skipped
fn collect_headers(map: &reqwest::header::HeaderMap) -> BTreeMap<String, String> {
    let mut folded = TransportResponse::default();
    for (name, value) in map {
        if let Ok(value) = value.to_str() {
            folded.append_header(name.as_str(), value);
        }
    }
    folded.headers
}

fn transport_error(err: &reqwest::Error) -> TransportError {
    let kind = if err.is_timeout() {
        TransportErrorKind::Timeout
    } else if err.is_connect() {
        TransportErrorKind::Connect
    } else if err.is_body() || err.is_decode() {
        TransportErrorKind::Body
    } else if err.is_builder() || err.is_request() {
        TransportErrorKind::Request
    } else {
        TransportErrorKind::Other
    };
    TransportError::new(kind, err.to_string())
}
