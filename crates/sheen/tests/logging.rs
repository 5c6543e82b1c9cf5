#![allow(non_snake_case)]

use sheen::tracing::level_filters::LevelFilter;
use sheen::{ClientConfig, LogLevel, ReloadHandle};

// One test per binary: the subscriber is process-global.
#[test]
fn ClientConfig___init_logging___installs_and_then_follows_configured_level() {
    let warn: ClientConfig = ClientConfig::from_json(br#"{"log_level": "warn"}"#).unwrap();
    assert_eq!(warn.level(), LogLevel::Warn);

    let installed = warn.init_logging();

    assert!(installed);
    if std::env::var_os(sheen_logging::LOG_ENV_VAR).is_none() {
        assert_eq!(ReloadHandle::global().level(), Some(LevelFilter::WARN));
    }

    let debug = ClientConfig {
        log_level: "debug".to_string(),
        ..ClientConfig::default()
    };
    assert!(!debug.init_logging());
    assert_eq!(ReloadHandle::global().level(), Some(LevelFilter::DEBUG));
}
