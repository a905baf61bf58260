use crate::errors::WintoggleError;

#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Launch command is empty")]
    EmptyCommand,

    #[error("Invalid launch command '{command}': {message}")]
    InvalidCommand { command: String, message: String },

    #[error("Failed to spawn '{program}': {message}")]
    SpawnFailed { program: String, message: String },

    #[error("PID file error at '{path}': {message}")]
    PidFileError {
        path: std::path::PathBuf,
        message: String,
    },
}

impl WintoggleError for ProcessError {
    fn error_code(&self) -> &'static str {
        match self {
            ProcessError::EmptyCommand => "PROCESS_EMPTY_COMMAND",
            ProcessError::InvalidCommand { .. } => "PROCESS_INVALID_COMMAND",
            ProcessError::SpawnFailed { .. } => "PROCESS_SPAWN_FAILED",
            ProcessError::PidFileError { .. } => "PROCESS_PID_FILE_ERROR",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(
            self,
            ProcessError::EmptyCommand
                | ProcessError::InvalidCommand { .. }
                | ProcessError::SpawnFailed { .. }
        )
    }
}
