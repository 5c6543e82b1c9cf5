#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

#[test_case("")]
#[test_case("   ")]
#[test_case("sheen=notalevel")]
fn parse_env_filter___blank_or_invalid___returns_none(directives: &str) {
    assert!(parse_env_filter(directives).is_none());
}

#[test_case("debug")]
#[test_case("sheen_transport=trace,warn")]
fn parse_env_filter___valid___returns_filter(directives: &str) {
    assert!(parse_env_filter(directives).is_some());
}

#[test]
fn init_logging___second_call___reports_already_installed() {
    init_logging(LogLevel::Info);

    let again = init_logging(LogLevel::Debug);

    assert!(!again);
    assert!(ReloadHandle::global().is_initialized());
    ReloadHandle::global().set_level(LogLevel::Warn).unwrap();
}
