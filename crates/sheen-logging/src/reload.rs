//! Runtime level changes for an installed subscriber

use crate::level::LogLevel;
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{Registry, reload};

type LevelHandle = reload::Handle<LevelFilter, Registry>;

/// Why a level change did not take effect
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReloadError {
    /// No subscriber was installed through this handle
    #[error("logging is not initialized")]
    NotInitialized,

    /// The subscriber holding the filter is gone
    #[error("failed to reload level filter: {0}")]
    Reload(String),
}

/// Shared access to the reloadable level filter
#[derive(Default)]
pub struct ReloadHandle {
    inner: Mutex<Option<LevelHandle>>,
}

impl ReloadHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// The handle [`init_logging`](crate::init_logging) attaches to
    pub fn global() -> &'static ReloadHandle {
        static GLOBAL: OnceCell<ReloadHandle> = OnceCell::new();
        GLOBAL.get_or_init(ReloadHandle::new)
    }

    pub(crate) fn attach(&self, handle: LevelHandle) {
        *self.inner.lock() = Some(handle);
    }

    pub fn is_initialized(&self) -> bool {
        self.inner.lock().is_some()
    }

    /// Switch the installed subscriber to `level`
    pub fn set_level(&self, level: LogLevel) -> Result<(), ReloadError> {
        let inner = self.inner.lock();
        let handle = inner.as_ref().ok_or(ReloadError::NotInitialized)?;
        handle
            .reload(level_filter(level))
            .map_err(|e| ReloadError::Reload(e.to_string()))?;
        tracing::debug!(%level, "log level changed");
        Ok(())
    }

    /// The filter currently in effect
    pub fn level(&self) -> Option<LevelFilter> {
        self.inner.lock().as_ref()?.clone_current()
    }
}

pub fn level_filter(level: LogLevel) -> LevelFilter {
    match level {
        LogLevel::Trace => LevelFilter::TRACE,
        LogLevel::Debug => LevelFilter::DEBUG,
        LogLevel::Info => LevelFilter::INFO,
        LogLevel::Warn => LevelFilter::WARN,
        LogLevel::Error => LevelFilter::ERROR,
        LogLevel::Off => LevelFilter::OFF,
    }
}
