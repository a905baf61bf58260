//! Running/starting detection for the target application.
//!
//! "Starting" is a heuristic: a matching process younger than the startup
//! grace is assumed not to have mapped its window yet. It can be wrong in
//! both directions and callers must cope with either.

use regex::Regex;
use std::time::Duration;
use tracing::debug;

use crate::process::operations::find_matching_processes;
use crate::process::types::{MatchedProcess, ProcessState};

/// Classify a process scan against the startup grace.
pub fn classify(matches: &[MatchedProcess], startup_grace: Duration) -> ProcessState {
    if matches.is_empty() {
        ProcessState::NotRunning
    } else if matches.iter().any(|m| m.age < startup_grace) {
        ProcessState::Starting
    } else {
        ProcessState::Running
    }
}

/// Source of process information for the toggle.
pub trait ProcessMonitor {
    /// All processes currently matching the target's signature.
    fn matching_processes(&self) -> Vec<MatchedProcess>;

    /// Age below which a matching process counts as still starting.
    fn startup_grace(&self) -> Duration;

    fn is_running(&self) -> bool {
        !self.matching_processes().is_empty()
    }

    fn is_starting_up(&self) -> bool {
        self.state() == ProcessState::Starting
    }

    /// Scan once and classify.
    fn state(&self) -> ProcessState {
        let matches = self.matching_processes();
        let state = classify(&matches, self.startup_grace());
        debug!(
            event = "core.process.state_detected",
            state = %state,
            match_count = matches.len()
        );
        state
    }
}

/// Process monitor backed by the live process table.
#[derive(Debug, Clone)]
pub struct SysinfoMonitor {
    pattern: Regex,
    startup_grace: Duration,
}

impl SysinfoMonitor {
    pub fn new(pattern: Regex, startup_grace: Duration) -> Self {
        Self {
            pattern,
            startup_grace,
        }
    }
}

impl ProcessMonitor for SysinfoMonitor {
    fn matching_processes(&self) -> Vec<MatchedProcess> {
        find_matching_processes(&self.pattern)
    }

    fn startup_grace(&self) -> Duration {
        self.startup_grace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn process(pid: u32, age_secs: u64) -> MatchedProcess {
        MatchedProcess {
            pid,
            age: Duration::from_secs(age_secs),
            cmd_line: format!("app --pid {}", pid),
        }
    }

    struct FixedMonitor(Vec<MatchedProcess>);

    impl ProcessMonitor for FixedMonitor {
        fn matching_processes(&self) -> Vec<MatchedProcess> {
            self.0.clone()
        }

        fn startup_grace(&self) -> Duration {
            Duration::from_secs(5)
        }
    }

    #[test]
    fn test_classify_empty_is_not_running() {
        assert_eq!(
            classify(&[], Duration::from_secs(5)),
            ProcessState::NotRunning
        );
    }

    #[test]
    fn test_classify_young_process_is_starting() {
        let matches = [process(10, 120), process(11, 2)];
        assert_eq!(
            classify(&matches, Duration::from_secs(5)),
            ProcessState::Starting
        );
    }

    #[test]
    fn test_classify_grace_boundary_is_running() {
        let matches = [process(10, 5)];
        assert_eq!(
            classify(&matches, Duration::from_secs(5)),
            ProcessState::Running
        );
    }

    #[test]
    fn test_monitor_predicates() {
        let idle = FixedMonitor(vec![]);
        assert!(!idle.is_running());
        assert!(!idle.is_starting_up());

        let fresh = FixedMonitor(vec![process(1, 0)]);
        assert!(fresh.is_running());
        assert!(fresh.is_starting_up());

        let settled = FixedMonitor(vec![process(1, 600)]);
        assert!(settled.is_running());
        assert!(!settled.is_starting_up());
        assert_eq!(settled.state(), ProcessState::Running);
    }

    #[test]
    fn test_sysinfo_monitor_reports_grace() {
        let monitor = SysinfoMonitor::new(
            Regex::new("nonexistent-process-xyz-[0-9]{12}").unwrap(),
            Duration::from_secs(5),
        );
        assert_eq!(monitor.startup_grace(), Duration::from_secs(5));
        assert_eq!(monitor.state(), ProcessState::NotRunning);
    }
}
