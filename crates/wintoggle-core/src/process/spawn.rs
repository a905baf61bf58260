//! Detached spawning of the target application and the tray indicator.

use std::os::unix::process::CommandExt;
use std::process::{Command, Stdio};
use tracing::{debug, info, warn};

use crate::process::errors::ProcessError;
use crate::process::types::LaunchSpec;

/// Build the argument vector for a launch spec.
pub fn launch_argv(spec: &LaunchSpec) -> Result<Vec<String>, ProcessError> {
    match spec {
        LaunchSpec::Command(command) => {
            let argv = shell_words::split(command).map_err(|e| ProcessError::InvalidCommand {
                command: command.clone(),
                message: e.to_string(),
            })?;
            if argv.is_empty() {
                return Err(ProcessError::EmptyCommand);
            }
            Ok(argv)
        }
        LaunchSpec::WebApp {
            browser,
            profile,
            app_id,
        } => Ok(vec![
            browser.clone(),
            format!("--profile-directory={}", profile),
            format!("--app-id={}", app_id),
        ]),
    }
}

/// Spawn `argv` in its own process group with null stdio and return its PID.
///
/// The child is not waited on; it outlives this process.
pub fn spawn_detached(argv: &[String]) -> Result<u32, ProcessError> {
    let (program, args) = argv.split_first().ok_or(ProcessError::EmptyCommand)?;

    debug!(
        event = "core.process.spawn_started",
        program = %program,
        arg_count = args.len()
    );

    match Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .process_group(0)
        .spawn()
    {
        Ok(child) => {
            let pid = child.id();
            info!(event = "core.process.spawn_completed", program = %program, pid = pid);
            Ok(pid)
        }
        Err(e) => {
            warn!(event = "core.process.spawn_failed", program = %program, error = %e);
            Err(ProcessError::SpawnFailed {
                program: program.clone(),
                message: e.to_string(),
            })
        }
    }
}
