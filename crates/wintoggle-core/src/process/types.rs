use serde::Serialize;
use std::time::Duration;

/// Coarse lifecycle state of the target application.
///
/// `Starting` is derived from process age on every scan; nothing ever sets
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    NotRunning,
    Starting,
    Running,
}

impl ProcessState {
    pub fn is_running(&self) -> bool {
        !matches!(self, ProcessState::NotRunning)
    }
}

impl std::fmt::Display for ProcessState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ProcessState::NotRunning => "not running",
            ProcessState::Starting => "starting",
            ProcessState::Running => "running",
        };
        write!(f, "{}", s)
    }
}

/// A process whose command line matched the target's signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedProcess {
    pub pid: u32,
    /// Wall-clock time since the process started.
    pub age: Duration,
    pub cmd_line: String,
}

/// How the target application is started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchSpec {
    /// A command line, split with POSIX shell word rules.
    Command(String),
    /// A browser-installed web app.
    WebApp {
        browser: String,
        profile: String,
        app_id: String,
    },
}
