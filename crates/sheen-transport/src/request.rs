//! Request description and parameter encoding

use crate::error::{NetworkError, NetworkResult};
use crate::method::HttpMethod;
use serde::{Deserialize, Serialize};
use sheen_core::{JsonObject, JsonValue};
use std::collections::BTreeMap;
use url::Url;

/// Header map, keyed by header name
pub type Headers = BTreeMap<String, String>;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// How request parameters are placed into the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterEncoding {
    /// Query string for GET/HEAD/DELETE, form body for everything else
    #[default]
    Url,
    /// JSON body
    Json,
}

/// Everything needed to perform one request
///
/// Built per call and never mutated once handed to a transport.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestSpec {
    pub method: HttpMethod,
    pub url: String,
    pub parameters: Option<JsonObject>,
    pub headers: Option<Headers>,
    pub encoding: ParameterEncoding,
}

impl RequestSpec {
    /// Create a request with no parameters or headers
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            parameters: None,
            headers: None,
            encoding: ParameterEncoding::default(),
        }
    }

    /// Shorthand for a GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    /// Replace the parameters
    pub fn with_parameters(mut self, parameters: JsonObject) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Add one parameter
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.parameters
            .get_or_insert_with(JsonObject::new)
            .insert(key.into(), value.into());
        self
    }

    /// Replace the headers
    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Add one header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(name.into(), value.into());
        self
    }

    /// Choose how parameters are encoded
    pub fn with_encoding(mut self, encoding: ParameterEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Resolve the URL and encode parameters into a sendable request
    pub fn prepare(&self) -> NetworkResult<PreparedRequest> {
        let mut url = Url::parse(&self.url).map_err(|e| {
            NetworkError::InvalidRequest(format!("invalid URL {:?}: {}", self.url, e))
        })?;
        let mut headers = self.headers.clone().unwrap_or_default();
        let mut body = None;

        let parameters = self.parameters.as_ref().filter(|p| !p.is_empty());
        if let Some(parameters) = parameters {
            match self.encoding {
                ParameterEncoding::Url if !self.method.allows_body() => {
                    let pairs = query_pairs(parameters);
                    url.query_pairs_mut().extend_pairs(pairs.iter());
                }
                ParameterEncoding::Url => {
                    let pairs = query_pairs(parameters);
                    let encoded = url::form_urlencoded::Serializer::new(String::new())
                        .extend_pairs(pairs.iter())
                        .finish();
                    body = Some(encoded.into_bytes());
                    set_default_header(&mut headers, CONTENT_TYPE, FORM_CONTENT_TYPE);
                }
                ParameterEncoding::Json => {
                    let encoded = serde_json::to_vec(parameters).map_err(|e| {
                        NetworkError::InvalidRequest(format!("parameters are not encodable: {}", e))
                    })?;
                    body = Some(encoded);
                    set_default_header(&mut headers, CONTENT_TYPE, JSON_CONTENT_TYPE);
                }
            }
        }

        Ok(PreparedRequest {
            method: self.method,
            url,
            headers,
            body,
        })
    }
}

/// A request with its URL resolved and parameters encoded
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Headers,
    pub body: Option<Vec<u8>>,
}

/// Flatten parameters into `key=value` pairs; arrays become `key[]`, objects
/// become `key[sub]`
pub fn query_pairs(parameters: &JsonObject) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in parameters {
        push_components(key, value, &mut pairs);
    }
    pairs
}

fn push_components(key: &str, value: &JsonValue, pairs: &mut Vec<(String, String)>) {
    match value {
        JsonValue::Object(object) => {
            for (nested_key, nested) in object {
                push_components(&format!("{}[{}]", key, nested_key), nested, pairs);
            }
        }
        JsonValue::Array(items) => {
            let array_key = format!("{}[]", key);
            for item in items {
                push_components(&array_key, item, pairs);
            }
        }
        JsonValue::Null => pairs.push((key.to_string(), String::new())),
        JsonValue::Bool(flag) => pairs.push((key.to_string(), flag.to_string())),
        JsonValue::Number(number) => pairs.push((key.to_string(), number.to_string())),
        JsonValue::String(text) => pairs.push((key.to_string(), text.clone())),
    }
}

/// Set a header unless one with the same name (any case) is already present
pub fn set_default_header(headers: &mut Headers, name: &str, value: &str) {
    let present = headers.keys().any(|existing| existing.eq_ignore_ascii_case(name));
    if !present {
        headers.insert(name.to_string(), value.to_string());
    }
}
