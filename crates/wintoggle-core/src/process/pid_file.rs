//! PID marker files.
//!
//! The only state kept between invocations is the tray indicator's PID,
//! written as a single decimal line.

use std::fs;
use std::path::Path;
use tracing::debug;

use crate::process::errors::ProcessError;

/// Read a PID file.
///
/// Missing or empty files are `Ok(None)`; unparsable contents are an error.
pub fn read_pid_file(pid_file: &Path) -> Result<Option<u32>, ProcessError> {
    let contents = match fs::read_to_string(pid_file) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ProcessError::PidFileError {
                path: pid_file.to_path_buf(),
                message: format!("Failed to read PID file: {}", e),
            });
        }
    };

    let pid_str = contents.trim();
    if pid_str.is_empty() {
        return Ok(None);
    }

    let pid = pid_str
        .parse::<u32>()
        .map_err(|e| ProcessError::PidFileError {
            path: pid_file.to_path_buf(),
            message: format!("Invalid PID '{}': {}", pid_str, e),
        })?;

    Ok(Some(pid))
}

/// Write `pid` to a PID file, creating the parent directory if needed.
pub fn write_pid_file(pid_file: &Path, pid: u32) -> Result<(), ProcessError> {
    if let Some(parent) = pid_file.parent() {
        fs::create_dir_all(parent).map_err(|e| ProcessError::PidFileError {
            path: parent.to_path_buf(),
            message: format!("Failed to create PID directory: {}", e),
        })?;
    }

    fs::write(pid_file, format!("{}\n", pid)).map_err(|e| ProcessError::PidFileError {
        path: pid_file.to_path_buf(),
        message: format!("Failed to write PID file: {}", e),
    })?;

    debug!(event = "core.pid_file.written", path = %pid_file.display(), pid = pid);
    Ok(())
}
