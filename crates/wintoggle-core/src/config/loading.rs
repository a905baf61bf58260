//! Configuration loading.
//!
//! Resolution order for the config file:
//! 1. Explicit path (the `--config` flag)
//! 2. `$WINTOGGLE_CONFIG`
//! 3. `~/.config/wintoggle/config.toml`
//!
//! The first two must exist. A missing user file falls back to defaults,
//! which then fail validation with a message naming the expected path.

use crate::config::types::ToggleConfig;
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "WINTOGGLE_CONFIG";

/// Path of the per-user config file, if a config directory is known.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wintoggle").join("config.toml"))
}

/// Load and validate the configuration.
///
/// # Errors
///
/// Returns an error if an explicitly named file is missing, any file fails
/// to parse, or the resulting configuration is invalid.
pub fn load_config(explicit_path: Option<&Path>) -> Result<ToggleConfig, ConfigError> {
    let env_path = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
    load_config_from(
        explicit_path,
        env_path.as_deref(),
        user_config_path().as_deref(),
    )
}

fn load_config_from(
    explicit_path: Option<&Path>,
    env_path: Option<&Path>,
    user_path: Option<&Path>,
) -> Result<ToggleConfig, ConfigError> {
    let config = match (explicit_path.or(env_path), user_path) {
        (Some(path), _) => load_config_file(path)?,
        (None, Some(path)) => match load_config_file(path) {
            Ok(config) => config,
            Err(ConfigError::ConfigNotFound { path }) => {
                debug!(event = "core.config.user_file_missing", path = %path);
                ToggleConfig::default()
            }
            Err(e) => return Err(e),
        },
        (None, None) => ToggleConfig::default(),
    };

    validate_config(&config).map_err(|e| match (e, user_path) {
        (ConfigError::MissingLaunchMethod, Some(path))
            if explicit_path.or(env_path).is_none() && !path.exists() =>
        {
            ConfigError::InvalidConfiguration {
                message: format!(
                    "no toggle target configured; create {} with a [target] section",
                    path.display()
                ),
            }
        }
        (e, _) => e,
    })?;

    Ok(config)
}

/// Load a configuration file from the given path.
fn load_config_file(path: &Path) -> Result<ToggleConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ConfigError::ConfigNotFound {
                path: path.display().to_string(),
            });
        }
        Err(e) => return Err(e.into()),
    };

    let config: ToggleConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })?;

    debug!(event = "core.config.loaded", path = %path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const VALID: &str = r#"
[target]
command = "firefox --kiosk"
process_pattern = "firefox"
window_class = "firefox"
"#;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_explicit_path_is_loaded() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "config.toml", VALID);

        let config = load_config_from(Some(&path), None, None).unwrap();
        assert_eq!(config.target.command.as_deref(), Some("firefox --kiosk"));
    }

    #[test]
    fn test_explicit_path_wins_over_env() {
        let dir = TempDir::new().unwrap();
        let explicit = write(&dir, "a.toml", VALID);
        let env = write(&dir, "b.toml", "not = [valid");

        assert!(load_config_from(Some(&explicit), Some(&env), None).is_ok());
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");

        let result = load_config_from(Some(&missing), None, None);
        assert!(matches!(result, Err(ConfigError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_missing_user_file_reports_expected_path() {
        let dir = TempDir::new().unwrap();
        let user = dir.path().join("wintoggle").join("config.toml");

        let err = load_config_from(None, None, Some(&user)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_parse_error_names_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "broken.toml", "[target\ncommand = 1");

        let err = load_config_from(Some(&path), None, None).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_user_file_is_validated() {
        let dir = TempDir::new().unwrap();
        let user = write(&dir, "config.toml", "[target]\ncommand = \"app\"\n");

        let err = load_config_from(None, None, Some(&user)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidConfiguration { .. }));
    }
}
