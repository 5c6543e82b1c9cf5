//! In-memory transport answering with canned responses

use crate::client::TransportClient;
use crate::request::RequestSpec;
use crate::response::TransportResponse;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::Duration;

/// A [`TransportClient`] that never touches the network
///
/// Queued responses are returned in order; once the queue is empty every
/// call gets the fallback response. Every request is recorded.
#[derive(Debug)]
pub struct StubTransport {
    queued: Mutex<VecDeque<TransportResponse>>,
    fallback: TransportResponse,
    requests: Mutex<Vec<RequestSpec>>,
    delay: Option<Duration>,
}

impl StubTransport {
    /// Answer every request with `response`
    pub fn new(response: TransportResponse) -> Self {
        Self {
            queued: Mutex::new(VecDeque::new()),
            fallback: response,
            requests: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    /// Answer every request with a 200 carrying `body`
    pub fn with_body(body: impl Into<Vec<u8>>) -> Self {
        Self::new(TransportResponse::ok(body))
    }

    /// Queue a response for the next unanswered request
    pub fn push_response(&self, response: TransportResponse) {
        self.queued.lock().push_back(response);
    }

    /// Wait this long before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Requests seen so far, oldest first
    pub fn requests(&self) -> Vec<RequestSpec> {
        self.requests.lock().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }
}

impl Default for StubTransport {
    fn default() -> Self {
        Self::new(TransportResponse::new(404, None))
    }
}

#[async_trait]
impl TransportClient for StubTransport {
    async fn perform(&self, spec: &RequestSpec) -> TransportResponse {
        self.requests.lock().push(spec.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let queued = self.queued.lock().pop_front();
        queued.unwrap_or_else(|| self.fallback.clone())
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
