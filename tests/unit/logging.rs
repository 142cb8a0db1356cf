//! Unit tests for log format selection

use momentum_screener::logging::{init_logging, LogFormat};

#[test]
fn test_format_follows_environment() {
    assert_eq!(LogFormat::for_environment("production"), LogFormat::Json);
    assert_eq!(LogFormat::for_environment("prod"), LogFormat::Json);
    assert_eq!(LogFormat::for_environment("development"), LogFormat::Pretty);
    assert_eq!(LogFormat::for_environment("staging"), LogFormat::Pretty);
}

#[test]
fn test_init_twice_is_harmless() {
    init_logging();
    init_logging();
}
