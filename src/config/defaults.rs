//! Default values for configuration options.

use std::time::Duration;

/// Default output path for `ding-robot init`.
pub const CONFIG_FILE: &str = "ding-robot.toml";

/// Default HTTP request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 10;

/// Default HTTP request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
