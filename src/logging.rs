//! Browser console logging setup.
//!
//! Library code logs through the `log` facade. In the browser `init` routes
//! records to the devtools console and installs the panic hook; native builds
//! stay silent unless the host installs its own logger.

#[cfg(test)]
#[path = "logging_test.rs"]
mod logging_test;

/// Level used for the console logger.
pub const CONSOLE_LEVEL: log::Level = log::Level::Info;

/// Install the console logger and panic hook. Safe to call more than once.
pub fn init() {
    #[cfg(feature = "hydrate")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(CONSOLE_LEVEL);
    }
}
