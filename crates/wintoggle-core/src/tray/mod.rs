//! Tray indicator presence.
//!
//! The indicator is an external long-running process. Its PID is kept in
//! `<cache>/tray.pid` so repeated toggles reuse one indicator.

use std::path::Path;
use tracing::{info, warn};

use crate::process::{
    LaunchSpec, ProcessError, is_process_running, launch_argv, read_pid_file, spawn_detached,
    write_pid_file,
};

pub const TRAY_PID_FILE: &str = "tray.pid";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrayStatus {
    AlreadyRunning(u32),
    Spawned(u32),
}

impl TrayStatus {
    pub fn pid(&self) -> u32 {
        match self {
            TrayStatus::AlreadyRunning(pid) | TrayStatus::Spawned(pid) => *pid,
        }
    }
}

/// Make sure one tray indicator is running, spawning `command` if not.
///
/// A stale or unreadable PID file is replaced.
pub fn ensure_tray(cache_dir: &Path, command: &str) -> Result<TrayStatus, ProcessError> {
    let pid_file = cache_dir.join(TRAY_PID_FILE);

    match read_pid_file(&pid_file) {
        Ok(Some(pid)) => match is_process_running(pid) {
            Ok(true) => {
                info!(event = "core.tray.already_running", pid = pid);
                return Ok(TrayStatus::AlreadyRunning(pid));
            }
            Ok(false) => info!(event = "core.tray.stale_pid", pid = pid),
            Err(e) => warn!(event = "core.tray.check_failed", pid = pid, error = %e),
        },
        Ok(None) => {}
        Err(e) => warn!(event = "core.tray.pid_file_invalid", error = %e),
    }

    info!(event = "core.tray.spawn_started", command = command);

    let argv = launch_argv(&LaunchSpec::Command(command.to_string()))?;
    let pid = spawn_detached(&argv)?;
    write_pid_file(&pid_file, pid)?;

    info!(event = "core.tray.spawn_completed", pid = pid);
    Ok(TrayStatus::Spawned(pid))
}
