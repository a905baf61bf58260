use crate::errors::WintoggleError;
use crate::process::ProcessError;

#[derive(Debug, thiserror::Error)]
pub enum ToggleError {
    #[error("No window backend available (tried: {tried}). Install qdbus for KWin or xdotool for X11")]
    DependencyMissing { tried: String },

    #[error("Failed to launch application: {source}")]
    LaunchFailed {
        #[source]
        source: ProcessError,
    },
}

impl ToggleError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            ToggleError::DependencyMissing { .. } => 2,
            ToggleError::LaunchFailed { .. } => 3,
        }
    }
}

impl WintoggleError for ToggleError {
    fn error_code(&self) -> &'static str {
        match self {
            ToggleError::DependencyMissing { .. } => "TOGGLE_DEPENDENCY_MISSING",
            ToggleError::LaunchFailed { .. } => "TOGGLE_LAUNCH_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
