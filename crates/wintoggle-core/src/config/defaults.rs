//! Default implementations for configuration types.

use crate::config::types::{NotificationConfig, TimingConfig};

/// Startup grace in seconds.
pub const DEFAULT_STARTUP_GRACE_SECS: u64 = 5;

/// Post-launch wait in seconds.
pub const DEFAULT_POST_LAUNCH_WAIT_SECS: u64 = 3;

pub fn default_startup_grace_secs() -> u64 {
    DEFAULT_STARTUP_GRACE_SECS
}

pub fn default_post_launch_wait_secs() -> u64 {
    DEFAULT_POST_LAUNCH_WAIT_SECS
}

pub fn default_profile() -> String {
    "Default".to_string()
}

pub fn default_true() -> bool {
    true
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            startup_grace_secs: DEFAULT_STARTUP_GRACE_SECS,
            post_launch_wait_secs: DEFAULT_POST_LAUNCH_WAIT_SECS,
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
