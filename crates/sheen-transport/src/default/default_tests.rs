#![allow(non_snake_case)]

use super::*;
use crate::stub::StubTransport;
use parking_lot::Mutex;
use std::sync::Arc;

// the default slot is global; serialize tests that touch it
static SLOT_LOCK: Mutex<()> = Mutex::new(());

fn stub_manager(body: &str) -> NetworkRequestManager {
    NetworkRequestManager::new(Arc::new(StubTransport::with_body(body.to_string())))
}

#[test]
fn default_manager___installed___returns_installed_transport() {
    let _lock = SLOT_LOCK.lock();
    set_default_manager(stub_manager("{}"));

    let manager = default_manager().unwrap();

    assert_eq!(manager.transport().name(), "stub");
    reset_default_manager();
}

#[test]
fn set_default_manager___replaces___returns_previous() {
    let _lock = SLOT_LOCK.lock();
    reset_default_manager();

    assert!(set_default_manager(stub_manager("1")).is_none());
    let previous = set_default_manager(stub_manager("2"));

    assert!(previous.is_some());
    reset_default_manager();
}

#[test]
fn reset_default_manager___clears_slot() {
    let _lock = SLOT_LOCK.lock();
    set_default_manager(stub_manager("{}"));

    assert!(reset_default_manager().is_some());
    assert!(reset_default_manager().is_none());
}

#[cfg(feature = "reqwest")]
#[test]
fn default_manager___empty_slot___builds_reqwest_manager() {
    let _lock = SLOT_LOCK.lock();
    reset_default_manager();

    let manager = default_manager().unwrap();

    assert_eq!(manager.transport().name(), "reqwest");
    reset_default_manager();
}

#[cfg(not(feature = "reqwest"))]
#[test]
fn default_manager___empty_slot___fails_with_config() {
    let _lock = SLOT_LOCK.lock();
    reset_default_manager();

    let result = default_manager();

    assert!(matches!(result, Err(crate::NetworkError::Config(_))));
}
