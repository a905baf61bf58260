use crate::errors::WintoggleError;

/// Failure of a single window-manager call.
///
/// These never reach the user: [`crate::windows::BackendChain`] logs them
/// and moves on to the next backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("'{tool}' not found in PATH")]
    ToolNotFound { tool: String },

    #[error("{backend} call '{call}' failed: {message}")]
    CallFailed {
        backend: &'static str,
        call: String,
        message: String,
    },

    #[error("{backend} returned unexpected output for '{call}': {output}")]
    UnexpectedOutput {
        backend: &'static str,
        call: String,
        output: String,
    },

    #[error("{backend} does not support '{operation}'")]
    Unsupported {
        backend: &'static str,
        operation: &'static str,
    },

    #[error("Window '{id}' is not addressable by {backend}")]
    ForeignHandle { backend: &'static str, id: String },
}

impl WintoggleError for BackendError {
    fn error_code(&self) -> &'static str {
        match self {
            BackendError::ToolNotFound { .. } => "BACKEND_TOOL_NOT_FOUND",
            BackendError::CallFailed { .. } => "BACKEND_CALL_FAILED",
            BackendError::UnexpectedOutput { .. } => "BACKEND_UNEXPECTED_OUTPUT",
            BackendError::Unsupported { .. } => "BACKEND_UNSUPPORTED",
            BackendError::ForeignHandle { .. } => "BACKEND_FOREIGN_HANDLE",
        }
    }
}
