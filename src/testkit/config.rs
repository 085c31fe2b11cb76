//! Canonical test configurations.

use std::time::Duration;

use crate::infrastructure::config::watch::WatchConfig;

/// Default watch settings with the inter-message pause removed.
#[must_use]
pub fn watch_config() -> WatchConfig {
    WatchConfig {
        send_delay: Duration::ZERO,
        ..WatchConfig::default()
    }
}
