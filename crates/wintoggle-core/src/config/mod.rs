//! # Configuration System
//!
//! TOML configuration for the single toggle target.
//!
//! ## Configuration Hierarchy
//!
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **Config file** - `--config <path>`, else `$WINTOGGLE_CONFIG`, else
//!    `~/.config/wintoggle/config.toml`
//!
//! An explicitly named file must exist; the default user file is optional.
//!
//! ## Usage Example
//!
//! ```toml
//! debug = false
//!
//! [target]
//! name = "Claude"
//! window_class = "crx_fmpnliohjhemenmnlpbfagaolkdacoja"
//!
//! [target.web_app]
//! browser = "/opt/google/chrome/google-chrome"
//! profile = "Default"
//! app_id = "fmpnliohjhemenmnlpbfagaolkdacoja"
//!
//! [timing]
//! startup_grace_secs = 5
//! post_launch_wait_secs = 3
//!
//! [tray]
//! enabled = true
//! command = "wintoggle-tray"
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{NotificationConfig, TargetConfig, TimingConfig, ToggleConfig, TrayConfig, WebAppConfig};
pub use validation::validate_config;

impl ToggleConfig {
    /// Load configuration, honouring an explicit path override.
    ///
    /// See [`loading::load_config`] for details.
    pub fn load(
        explicit_path: Option<&std::path::Path>,
    ) -> Result<Self, crate::errors::ConfigError> {
        loading::load_config(explicit_path)
    }
}
