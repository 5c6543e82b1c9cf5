//! Raw transport response

use crate::error::TransportError;
use std::collections::BTreeMap;

/// Raw result of one transport call
///
/// Header names are stored lower-cased so lookups are case-insensitive.
/// Repeated headers are folded into one comma-separated value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
    pub error: Option<TransportError>,
}

impl TransportResponse {
    /// Create a response with a status and optional body
    pub fn new(status: u16, body: Option<Vec<u8>>) -> Self {
        Self {
            status,
            headers: BTreeMap::new(),
            body,
            error: None,
        }
    }

    /// A 200 response carrying `body`
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(200, Some(body.into()))
    }

    /// A response that never reached the server
    pub fn failed(error: TransportError) -> Self {
        Self {
            status: 0,
            headers: BTreeMap::new(),
            body: None,
            error: Some(error),
        }
    }

    /// Add a header
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    /// Add a header, joining it to an existing value of the same name with `", "`
    pub fn append_header(&mut self, name: impl AsRef<str>, value: &str) {
        self.headers
            .entry(name.as_ref().to_ascii_lowercase())
            .and_modify(|existing| {
                existing.push_str(", ");
                existing.push_str(value);
            })
            .or_insert_with(|| value.to_string());
    }

    /// Look up a header by name, ignoring case
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body bytes, or an empty slice when absent
    pub fn body_bytes(&self) -> &[u8] {
        self.body.as_deref().unwrap_or_default()
    }

    /// Body as text for diagnostics, with invalid UTF-8 replaced
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(self.body_bytes()).into_owned()
    }
}
