//! Configuration type definitions.
//!
//! These types are deserialized from the TOML config file. Everything the
//! orchestrator needs at runtime is derived from them once, in
//! [`crate::toggle::TargetDescriptor::from_config`].

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from the TOML config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ToggleConfig {
    /// Emit debug-level logs for every backend call.
    #[serde(default)]
    pub debug: bool,

    /// The application being toggled.
    #[serde(default)]
    pub target: TargetConfig,

    /// Startup grace and post-launch wait.
    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,

    #[serde(default)]
    pub tray: TrayConfig,
}

/// Description of the toggle target.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TargetConfig {
    /// Display name, used as the notification title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Command line used to launch the application.
    /// Ignored when `web_app` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,

    /// Regex matched against full process command lines.
    /// Defaults to `--app-id=<id>` for web apps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_pattern: Option<String>,

    /// Window class to search for. Defaults to `crx_<id>` for web apps.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_class: Option<String>,

    /// Application identifier. Defaults to the web app id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,

    /// Icon file or theme icon name for notifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<PathBuf>,

    /// Browser web-app launch settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web_app: Option<WebAppConfig>,
}

/// Launch a browser-installed web application by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebAppConfig {
    /// Browser executable, e.g. `/opt/google/chrome/google-chrome`.
    pub browser: String,

    /// Browser profile directory name.
    #[serde(default = "super::defaults::default_profile")]
    pub profile: String,

    /// Web app id as shown in `chrome://apps`.
    pub app_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// A matching process younger than this is considered still starting.
    /// Default: 5 seconds.
    #[serde(default = "super::defaults::default_startup_grace_secs")]
    pub startup_grace_secs: u64,

    /// How long to wait for a window after launching.
    /// Default: 3 seconds.
    #[serde(default = "super::defaults::default_post_launch_wait_secs")]
    pub post_launch_wait_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "super::defaults::default_true")]
    pub enabled: bool,
}

/// Tray indicator process kept alive alongside the toggle.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TrayConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Command that starts the indicator. Required when `enabled`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}
