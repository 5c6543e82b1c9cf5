//! Process-wide default request manager

use crate::error::NetworkResult;
use crate::manager::NetworkRequestManager;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;

fn slot() -> &'static RwLock<Option<NetworkRequestManager>> {
    static INSTANCE: OnceCell<RwLock<Option<NetworkRequestManager>>> = OnceCell::new();
    INSTANCE.get_or_init(|| RwLock::new(None))
}

/// The process-wide manager, built on first use
///
/// With the `reqwest` feature the manager is built from
/// [`ClientConfig::default`](crate::ClientConfig). Without it a manager must
/// be installed with [`set_default_manager`] first.
pub fn default_manager() -> NetworkResult<NetworkRequestManager> {
    if let Some(manager) = slot().read().as_ref() {
        return Ok(manager.clone());
    }

    let mut guard = slot().write();
    if let Some(manager) = guard.as_ref() {
        return Ok(manager.clone());
    }
    let manager = build_default()?;
    *guard = Some(manager.clone());
    Ok(manager)
}

/// Install `manager` as the default, returning the previous one
pub fn set_default_manager(manager: NetworkRequestManager) -> Option<NetworkRequestManager> {
    tracing::debug!(transport = manager.transport().name(), "default manager replaced");
    slot().write().replace(manager)
}

/// Clear the default so the next lookup builds a fresh one
pub fn reset_default_manager() -> Option<NetworkRequestManager> {
    slot().write().take()
}

#[cfg(feature = "reqwest")]
fn build_default() -> NetworkResult<NetworkRequestManager> {
    NetworkRequestManager::with_config(&crate::ClientConfig::default())
}

#[cfg(not(feature = "reqwest"))]
fn build_default() -> NetworkResult<NetworkRequestManager> {
    Err(crate::NetworkError::Config(
        "no default transport available; install one with set_default_manager".to_string(),
    ))
}

#[cfg(test)]
#[path = "default/default_tests.rs"]
mod default_tests;
