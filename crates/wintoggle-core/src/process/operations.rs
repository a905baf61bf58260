use regex::Regex;
use std::time::Duration;
use sysinfo::{Pid as SysinfoPid, ProcessRefreshKind, ProcessesToUpdate, System, UpdateKind};
use tracing::debug;

use crate::process::errors::ProcessError;
use crate::process::types::MatchedProcess;

/// Check if a process with the given PID is currently running
pub fn is_process_running(pid: u32) -> Result<bool, ProcessError> {
    if pid == 0 {
        return Ok(false);
    }
    let mut system = System::new();
    let pid_obj = SysinfoPid::from_u32(pid);
    system.refresh_processes(ProcessesToUpdate::Some(&[pid_obj]), true);
    Ok(system.process(pid_obj).is_some())
}

/// Join a process's argv into one line, falling back to its name when the
/// command line is unreadable (kernel threads, other users' processes).
fn command_line(process: &sysinfo::Process) -> String {
    let cmd = process
        .cmd()
        .iter()
        .map(|s| s.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ");
    if cmd.is_empty() {
        process.name().to_string_lossy().to_string()
    } else {
        cmd
    }
}

/// Find every process whose command line matches `pattern`.
///
/// Same semantics as `pgrep -f`: the regex is searched anywhere in the full
/// command line and the calling process is never reported. Threads share
/// their process's command line but have their own start time, so they are
/// skipped; otherwise any fresh thread would make the target look like it
/// is still starting.
pub fn find_matching_processes(pattern: &Regex) -> Vec<MatchedProcess> {
    let mut system = System::new();
    system.refresh_processes_specifics(
        ProcessesToUpdate::All,
        true,
        ProcessRefreshKind::nothing()
            .with_cmd(UpdateKind::OnlyIfNotSet)
            .without_tasks(),
    );

    let own_pid = sysinfo::get_current_pid().ok();

    let mut matches: Vec<MatchedProcess> = system
        .processes()
        .iter()
        .filter(|(pid, _)| Some(**pid) != own_pid)
        .filter(|(_, process)| process.thread_kind().is_none())
        .filter_map(|(pid, process)| {
            let cmd_line = command_line(process);
            pattern.is_match(&cmd_line).then(|| MatchedProcess {
                pid: pid.as_u32(),
                age: Duration::from_secs(process.run_time()),
                cmd_line,
            })
        })
        .collect();
    matches.sort_by_key(|m| m.pid);

    debug!(
        event = "core.process.scan_completed",
        pattern = pattern.as_str(),
        match_count = matches.len()
    );

    matches
}
