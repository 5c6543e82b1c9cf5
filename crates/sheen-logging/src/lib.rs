//! sheen-logging - tracing subscriber setup
//!
//! This crate provides:
//! - [`init_logging`] installing a fmt subscriber with a reloadable level
//! - [`ReloadHandle`] for changing the level at runtime
//! - [`LogLevel`] names accepted in configuration
//! - `SHEEN_LOG` environment override using `EnvFilter` directives

mod init;
mod level;
mod reload;

pub use init::{LOG_ENV_VAR, init_logging, parse_env_filter};
pub use reload::{ReloadError, ReloadHandle, level_filter};
pub use level::{LogLevel, UnknownLevel};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_logging};
}
