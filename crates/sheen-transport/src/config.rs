//! Client configuration

use crate::request::{Headers, ParameterEncoding};
use crate::serializer::ResponseSerializer;
use serde::{Deserialize, Serialize};
use sheen_logging::LogLevel;
use std::time::Duration;

/// Settings for building a transport and request manager
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Whole-request timeout in milliseconds
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,

    /// Connection timeout in milliseconds
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_ms: u64,

    /// Value of the `User-Agent` header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Headers added to every request unless the request sets them itself
    #[serde(default)]
    pub default_headers: Headers,

    /// Encoding used by requests built from `(method, url, parameters, headers)`
    #[serde(default)]
    pub parameter_encoding: ParameterEncoding,

    /// Reject non-2xx responses before parsing
    #[serde(default)]
    pub validate_status: bool,

    /// Level installed by [`ClientConfig::init_logging`]
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_timeout() -> u64 {
    30_000
}

fn default_connect_timeout() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    format!("sheen/{}", env!("CARGO_PKG_VERSION"))
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout(),
            connect_timeout_ms: default_connect_timeout(),
            user_agent: default_user_agent(),
            default_headers: Headers::new(),
            parameter_encoding: ParameterEncoding::default(),
            validate_status: false,
            log_level: default_log_level(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes; empty input yields the defaults
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    /// Parsed log level, falling back to `Info` for unknown names
    pub fn level(&self) -> LogLevel {
        LogLevel::from_name(&self.log_level).unwrap_or(LogLevel::Info)
    }

    /// Install the global subscriber at [`ClientConfig::level`]
    ///
    /// Returns `false` when a subscriber was already installed; its level is
    /// then switched to this config's level when it came from sheen.
    pub fn init_logging(&self) -> bool {
        let level = self.level();
        if sheen_logging::init_logging(level) {
            return true;
        }
        if let Err(e) = sheen_logging::ReloadHandle::global().set_level(level) {
            tracing::debug!(error = %e, "log level left unchanged");
        }
        false
    }

    /// Serializer matching these settings
    pub fn serializer(&self) -> ResponseSerializer {
        ResponseSerializer::new().with_status_validation(self.validate_status)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    pub fn with_status_validation(mut self, enabled: bool) -> Self {
        self.validate_status = enabled;
        self
    }
}
