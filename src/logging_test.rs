#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn init_is_callable_repeatedly() {
    init();
    init();
}

#[test]
fn console_level_keeps_warnings_and_errors() {
    assert!(log::Level::Warn <= CONSOLE_LEVEL);
    assert!(log::Level::Error <= CONSOLE_LEVEL);
    assert!(log::Level::Debug > CONSOLE_LEVEL);
}
