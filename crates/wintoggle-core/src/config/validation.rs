//! Configuration validation.

use crate::config::types::ToggleConfig;
use crate::errors::ConfigError;

/// Upper bound for both timing values.
const MAX_WAIT_SECS: u64 = 60;

/// Validate the configuration.
///
/// Checks that a launch method exists, that a process pattern and window
/// class can be derived, that the pattern compiles, and that the timing
/// values are within range.
pub fn validate_config(config: &ToggleConfig) -> Result<(), ConfigError> {
    let target = &config.target;

    let has_command = target
        .command
        .as_deref()
        .is_some_and(|c| !c.trim().is_empty());
    if !has_command && target.web_app.is_none() {
        return Err(ConfigError::MissingLaunchMethod);
    }

    if let Some(web_app) = &target.web_app {
        if web_app.browser.trim().is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                message: "target.web_app.browser must not be empty".to_string(),
            });
        }
        if web_app.app_id.trim().is_empty() {
            return Err(ConfigError::InvalidConfiguration {
                message: "target.web_app.app_id must not be empty".to_string(),
            });
        }
    }

    match target.process_pattern.as_deref() {
        Some(pattern) if pattern.trim().is_empty() => {
            return Err(ConfigError::InvalidProcessPattern {
                pattern: pattern.to_string(),
                message: "pattern is empty".to_string(),
            });
        }
        Some(pattern) => {
            regex::Regex::new(pattern).map_err(|e| ConfigError::InvalidProcessPattern {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })?;
        }
        None if target.web_app.is_none() => {
            return Err(ConfigError::InvalidConfiguration {
                message: "target.process_pattern is required when launching a command"
                    .to_string(),
            });
        }
        None => {}
    }

    let has_class = target
        .window_class
        .as_deref()
        .is_some_and(|c| !c.trim().is_empty());
    if !has_class && target.web_app.is_none() {
        return Err(ConfigError::InvalidConfiguration {
            message: "target.window_class is required when launching a command".to_string(),
        });
    }

    let timing = &config.timing;
    if timing.startup_grace_secs == 0 || timing.startup_grace_secs > MAX_WAIT_SECS {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "timing.startup_grace_secs must be between 1 and {} (got {})",
                MAX_WAIT_SECS, timing.startup_grace_secs
            ),
        });
    }
    if timing.post_launch_wait_secs > MAX_WAIT_SECS {
        return Err(ConfigError::InvalidConfiguration {
            message: format!(
                "timing.post_launch_wait_secs must be at most {} (got {})",
                MAX_WAIT_SECS, timing.post_launch_wait_secs
            ),
        });
    }

    if config.tray.enabled
        && config
            .tray
            .command
            .as_deref()
            .is_none_or(|c| c.trim().is_empty())
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "tray.command is required when tray.enabled is true".to_string(),
        });
    }

    Ok(())
}
