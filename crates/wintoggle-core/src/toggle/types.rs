use regex::Regex;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{ToggleConfig, validate_config};
use crate::errors::ConfigError;
use crate::process::{LaunchSpec, ProcessState};
use crate::windows::{Visibility, WindowHandle};

/// Notification texts, one per toggle step.
pub mod messages {
    pub const LAUNCHING: &str = "Launching application...";
    pub const ACTIVE: &str = "Application is now active";
    pub const MINIMIZED: &str = "Application minimized";
    pub const RESTORING: &str = "Restoring application";
    pub const STARTING: &str = "App is starting...";
    pub const WINDOW_NOT_FOUND: &str = "Warning: Application window not found";
    pub const LAUNCH_FAILED: &str = "Error: Failed to launch application";
}

const DEFAULT_NAME: &str = "Application";

/// Everything the orchestrator knows about the application it toggles.
#[derive(Debug, Clone)]
pub struct TargetDescriptor {
    /// Notification title.
    pub name: String,
    pub app_id: Option<String>,
    pub launch: LaunchSpec,
    pub process_pattern: Regex,
    pub window_class: String,
    pub icon: Option<PathBuf>,
    pub startup_grace: Duration,
    pub post_launch_wait: Duration,
}

impl TargetDescriptor {
    /// Validate `config` and derive the runtime target from it.
    ///
    /// Web apps fill in the process pattern (`--app-id=<id>`), window class
    /// (`crx_<id>`) and app id when those are not set explicitly.
    pub fn from_config(config: &ToggleConfig) -> Result<Self, ConfigError> {
        validate_config(config)?;

        let target = &config.target;
        let web_app = target.web_app.as_ref();

        let launch = match (web_app, &target.command) {
            (Some(web), _) => LaunchSpec::WebApp {
                browser: web.browser.clone(),
                profile: web.profile.clone(),
                app_id: web.app_id.clone(),
            },
            (None, Some(command)) => LaunchSpec::Command(command.clone()),
            (None, None) => return Err(ConfigError::MissingLaunchMethod),
        };

        let pattern = match (&target.process_pattern, web_app) {
            (Some(pattern), _) => pattern.clone(),
            (None, Some(web)) => regex::escape(&format!("--app-id={}", web.app_id)),
            (None, None) => {
                return Err(ConfigError::InvalidConfiguration {
                    message: "target.process_pattern is required".to_string(),
                });
            }
        };
        let process_pattern =
            Regex::new(&pattern).map_err(|e| ConfigError::InvalidProcessPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })?;

        let explicit_class = target
            .window_class
            .as_deref()
            .filter(|class| !class.trim().is_empty());
        let window_class = match (explicit_class, web_app) {
            (Some(class), _) => class.to_string(),
            (None, Some(web)) => format!("crx_{}", web.app_id),
            (None, None) => {
                return Err(ConfigError::InvalidConfiguration {
                    message: "target.window_class is required".to_string(),
                });
            }
        };

        let app_id = target
            .app_id
            .clone()
            .or_else(|| web_app.map(|web| web.app_id.clone()));

        let name = target
            .name
            .clone()
            .unwrap_or_else(|| default_name(&launch, &window_class));

        Ok(Self {
            name,
            app_id,
            launch,
            process_pattern,
            window_class,
            icon: target.icon.clone(),
            startup_grace: Duration::from_secs(config.timing.startup_grace_secs),
            post_launch_wait: Duration::from_secs(config.timing.post_launch_wait_secs),
        })
    }

    /// `(profile, app_id)` for the web app icon lookup.
    ///
    /// Uses the target's app id, which may differ from the launch id.
    pub fn icon_lookup(&self) -> Option<(&str, &str)> {
        match (&self.launch, self.app_id.as_deref()) {
            (LaunchSpec::WebApp { profile, .. }, Some(app_id)) => {
                Some((profile.as_str(), app_id))
            }
            _ => None,
        }
    }
}

/// Program name for plain commands, window class for web apps.
fn default_name(launch: &LaunchSpec, window_class: &str) -> String {
    let name = match launch {
        LaunchSpec::Command(command) => shell_words::split(command)
            .ok()
            .and_then(|argv| argv.into_iter().next())
            .and_then(|program| {
                std::path::Path::new(&program)
                    .file_name()
                    .map(|f| f.to_string_lossy().to_string())
            }),
        LaunchSpec::WebApp { .. } => Some(window_class.to_string()),
    };
    name.filter(|n| !n.is_empty())
        .unwrap_or_else(|| DEFAULT_NAME.to_string())
}

/// State observed at the start of a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToggleState {
    NotRunning,
    Starting,
    RunningNoWindow,
    RunningVisible,
    RunningMinimized,
}

impl std::fmt::Display for ToggleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ToggleState::NotRunning => "not_running",
            ToggleState::Starting => "starting",
            ToggleState::RunningNoWindow => "running_no_window",
            ToggleState::RunningVisible => "running_visible",
            ToggleState::RunningMinimized => "running_minimized",
        };
        write!(f, "{}", s)
    }
}

/// What the toggle did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "window", rename_all = "snake_case")]
pub enum ToggleOutcome {
    /// A window was brought to the front after a launch or startup wait.
    Activated(WindowHandle),
    /// A minimized window was restored.
    Restored(WindowHandle),
    Minimized(WindowHandle),
    /// No window appeared in time. Not an error.
    WindowNotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleReport {
    pub state: ToggleState,
    pub outcome: ToggleOutcome,
    /// PID of the launched process, when this toggle launched one.
    pub launched_pid: Option<u32>,
}

/// A matching process as shown by `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessSummary {
    pub pid: u32,
    pub age_secs: u64,
    pub cmd_line: String,
}

/// Read-only snapshot of the target, produced without touching any window.
#[derive(Debug, Clone, Serialize)]
pub struct StatusReport {
    pub name: String,
    pub app_id: Option<String>,
    pub window_class: String,
    pub process_state: ProcessState,
    pub processes: Vec<ProcessSummary>,
    pub backends: Vec<&'static str>,
    pub windows: Vec<WindowHandle>,
    /// Visibility of the window that would be canonical.
    pub visibility: Option<Visibility>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{TargetConfig, WebAppConfig};

    fn command_config(command: &str) -> ToggleConfig {
        ToggleConfig {
            target: TargetConfig {
                command: Some(command.to_string()),
                process_pattern: Some("obsidian".to_string()),
                window_class: Some("obsidian".to_string()),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn web_app_config() -> ToggleConfig {
        ToggleConfig {
            target: TargetConfig {
                web_app: Some(WebAppConfig {
                    browser: "/opt/google/chrome/google-chrome".to_string(),
                    profile: "Profile 1".to_string(),
                    app_id: "fmpnliohjhemenmnlpbfagaolkdacoja".to_string(),
                }),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_from_config_command_target() {
        let target = TargetDescriptor::from_config(&command_config("/usr/bin/obsidian --no-sandbox"))
            .unwrap();

        assert_eq!(
            target.launch,
            LaunchSpec::Command("/usr/bin/obsidian --no-sandbox".to_string())
        );
        assert_eq!(target.window_class, "obsidian");
        assert_eq!(target.name, "obsidian");
        assert_eq!(target.app_id, None);
        assert_eq!(target.startup_grace, Duration::from_secs(5));
        assert_eq!(target.post_launch_wait, Duration::from_secs(3));
        assert!(target.icon_lookup().is_none());
    }

    #[test]
    fn test_from_config_web_app_defaults() {
        let target = TargetDescriptor::from_config(&web_app_config()).unwrap();

        assert_eq!(target.window_class, "crx_fmpnliohjhemenmnlpbfagaolkdacoja");
        assert_eq!(
            target.app_id.as_deref(),
            Some("fmpnliohjhemenmnlpbfagaolkdacoja")
        );
        assert!(
            target
                .process_pattern
                .is_match("chrome --profile-directory=Profile 1 --app-id=fmpnliohjhemenmnlpbfagaolkdacoja")
        );
        assert!(!target.process_pattern.is_match("chrome --app-id=other"));
        assert_eq!(
            target.icon_lookup(),
            Some(("Profile 1", "fmpnliohjhemenmnlpbfagaolkdacoja"))
        );
    }

    #[test]
    fn test_from_config_explicit_values_win() {
        let mut config = web_app_config();
        config.target.name = Some("Claude".to_string());
        config.target.window_class = Some("claude-window".to_string());
        config.target.process_pattern = Some("claude-desktop".to_string());
        config.timing.startup_grace_secs = 10;

        let target = TargetDescriptor::from_config(&config).unwrap();
        assert_eq!(target.name, "Claude");
        assert_eq!(target.window_class, "claude-window");
        assert!(target.process_pattern.is_match("/usr/bin/claude-desktop"));
        assert_eq!(target.startup_grace, Duration::from_secs(10));
    }

    #[test]
    fn test_explicit_app_id_drives_icon_lookup() {
        let mut config = web_app_config();
        config.target.app_id = Some("iconid".to_string());

        let target = TargetDescriptor::from_config(&config).unwrap();
        assert_eq!(target.icon_lookup(), Some(("Profile 1", "iconid")));
        assert_eq!(
            target.launch,
            LaunchSpec::WebApp {
                browser: "/opt/google/chrome/google-chrome".to_string(),
                profile: "Profile 1".to_string(),
                app_id: "fmpnliohjhemenmnlpbfagaolkdacoja".to_string(),
            }
        );
    }

    #[test]
    fn test_from_config_rejects_empty_target() {
        let result = TargetDescriptor::from_config(&ToggleConfig::default());
        assert!(matches!(result, Err(ConfigError::MissingLaunchMethod)));
    }

    #[test]
    fn test_default_name_falls_back() {
        assert_eq!(
            default_name(&LaunchSpec::Command("''".to_string()), "cls"),
            DEFAULT_NAME
        );
    }

    #[test]
    fn test_toggle_state_display() {
        assert_eq!(ToggleState::RunningNoWindow.to_string(), "running_no_window");
        assert_eq!(ToggleState::NotRunning.to_string(), "not_running");
    }
}
