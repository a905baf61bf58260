//! Running the external tools that backends are built on.

use std::ffi::OsStr;
use std::process::Command;
use tracing::debug;

use crate::windows::errors::BackendError;

/// Run `program` with `args` and return its trimmed stdout.
///
/// A missing binary maps to [`BackendError::ToolNotFound`], a non-zero exit
/// to [`BackendError::CallFailed`] carrying stderr.
pub fn run_tool(
    backend: &'static str,
    program: &OsStr,
    args: &[&str],
) -> Result<String, BackendError> {
    let call = args.iter().take(4).copied().collect::<Vec<_>>().join(" ");

    let output = Command::new(program).args(args).output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            BackendError::ToolNotFound {
                tool: program.to_string_lossy().to_string(),
            }
        } else {
            BackendError::CallFailed {
                backend,
                call: call.clone(),
                message: e.to_string(),
            }
        }
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        debug!(
            event = "core.window.tool_call_failed",
            backend = backend,
            call = %call,
            status = ?output.status.code(),
            stderr = %stderr
        );
        return Err(BackendError::CallFailed {
            backend,
            call,
            message: if stderr.is_empty() {
                format!("exit status {:?}", output.status.code())
            } else {
                stderr
            },
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tool_missing_binary() {
        let result = run_tool("test", OsStr::new("definitely-not-a-real-tool-xyz"), &[]);
        assert!(matches!(result, Err(BackendError::ToolNotFound { .. })));
    }

    #[test]
    fn test_run_tool_captures_stdout() {
        let out = run_tool("test", OsStr::new("echo"), &["  hello  "]).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn test_run_tool_nonzero_exit() {
        let result = run_tool("test", OsStr::new("false"), &[]);
        assert!(matches!(result, Err(BackendError::CallFailed { .. })));
    }
}
