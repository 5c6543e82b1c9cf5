//! Subscriber installation

use crate::reload::{ReloadHandle, level_filter};
use crate::level::LogLevel;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::reload;

/// Environment variable holding `EnvFilter` directives that override the level
pub const LOG_ENV_VAR: &str = "SHEEN_LOG";

/// Parse `EnvFilter` directives; blank or invalid input yields `None`
pub fn parse_env_filter(directives: &str) -> Option<EnvFilter> {
    if directives.trim().is_empty() {
        return None;
    }
    EnvFilter::try_new(directives).ok()
}

/// Install the global subscriber: a reloadable level filter, the optional
/// `SHEEN_LOG` filter and a fmt layer writing to stderr
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging(level: LogLevel) -> bool {
    let env_filter = std::env::var(LOG_ENV_VAR)
        .ok()
        .as_deref()
        .and_then(parse_env_filter);

    // SHEEN_LOG decides what gets through until the level is reloaded
    let initial = match &env_filter {
        Some(_) => LevelFilter::TRACE,
        None => level_filter(level),
    };
    let (filter, handle) = reload::Layer::new(initial);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .is_ok();

    if installed {
        ReloadHandle::global().attach(handle);
        tracing::debug!(%level, "logging initialized");
    }
    installed
}

#[cfg(test)]
#[path = "init/init_tests.rs"]
mod init_tests;
