use std::thread;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::notify::{DesktopNotifier, FALLBACK_ICON, Notifier};
use crate::process::{
    LaunchSpec, ProcessError, ProcessMonitor, ProcessState, SysinfoMonitor, classify, launch_argv,
    spawn_detached,
};
use crate::toggle::errors::ToggleError;
use crate::toggle::types::*;
use crate::windows::{BackendChain, Visibility, WindowHandle, enumerate, resolve};

/// Backends listed in the dependency error when none was usable.
const BACKENDS_TRIED: &str = "kwin (qdbus), x11 (xdotool)";

/// Starts the target application.
pub trait Launcher {
    fn launch(&self, spec: &LaunchSpec) -> Result<u32, ProcessError>;
}

/// Launches detached from the toggle process.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedLauncher;

impl Launcher for DetachedLauncher {
    fn launch(&self, spec: &LaunchSpec) -> Result<u32, ProcessError> {
        let argv = launch_argv(spec)?;
        spawn_detached(&argv)
    }
}

/// Blocking wait used for the post-launch and startup-grace pauses.
pub trait Sleeper {
    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Runs one toggle decision against a single target.
pub struct ToggleOrchestrator {
    target: TargetDescriptor,
    backends: BackendChain,
    monitor: Box<dyn ProcessMonitor>,
    launcher: Box<dyn Launcher>,
    notifier: Box<dyn Notifier>,
    sleeper: Box<dyn Sleeper>,
}

impl ToggleOrchestrator {
    /// Orchestrator with live process scanning, detached launching, real
    /// sleeps and desktop notifications using the fallback icon.
    pub fn new(target: TargetDescriptor, backends: BackendChain) -> Self {
        let monitor = SysinfoMonitor::new(target.process_pattern.clone(), target.startup_grace);
        let notifier = DesktopNotifier::new(target.name.clone(), FALLBACK_ICON, true);
        Self {
            target,
            backends,
            monitor: Box::new(monitor),
            launcher: Box::new(DetachedLauncher),
            notifier: Box::new(notifier),
            sleeper: Box::new(ThreadSleeper),
        }
    }

    pub fn with_monitor(mut self, monitor: impl ProcessMonitor + 'static) -> Self {
        self.monitor = Box::new(monitor);
        self
    }

    pub fn with_launcher(mut self, launcher: impl Launcher + 'static) -> Self {
        self.launcher = Box::new(launcher);
        self
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn with_sleeper(mut self, sleeper: impl Sleeper + 'static) -> Self {
        self.sleeper = Box::new(sleeper);
        self
    }

    /// Observe the target and take exactly one action.
    ///
    /// Duplicate windows are closed before any visibility decision.
    pub fn toggle(&self) -> Result<ToggleReport, ToggleError> {
        info!(
            event = "core.toggle.toggle_started",
            target = %self.target.name,
            window_class = %self.target.window_class,
            backends = ?self.backends.names()
        );

        if self.backends.is_empty() {
            error!(event = "core.toggle.toggle_failed", reason = "no window backend");
            return Err(ToggleError::DependencyMissing {
                tried: BACKENDS_TRIED.to_string(),
            });
        }

        // 1. Process state, then the canonical window if anything runs
        let process_state = self.monitor.state();
        let window = if process_state.is_running() {
            resolve(&self.backends, &self.target.window_class)
        } else {
            None
        };

        // 2. One action per observed state
        let report = match (process_state, window) {
            (ProcessState::NotRunning, _) => {
                self.launch_and_show(ToggleState::NotRunning)?
            }
            (ProcessState::Starting, _) => self.wait_for_startup(),
            (ProcessState::Running, None) => {
                self.launch_and_show(ToggleState::RunningNoWindow)?
            }
            (ProcessState::Running, Some(window)) => {
                match self.backends.visibility(&window) {
                    Visibility::Visible => self.hide(window),
                    Visibility::Minimized => self.restore(window),
                }
            }
        };

        info!(
            event = "core.toggle.toggle_completed",
            state = %report.state,
            outcome = ?report.outcome
        );
        Ok(report)
    }

    /// Read-only view of the target for `status`.
    pub fn status(&self) -> StatusReport {
        let matches = self.monitor.matching_processes();
        let process_state = classify(&matches, self.monitor.startup_grace());
        let windows = enumerate(&self.backends, &self.target.window_class);
        let visibility = windows.first().map(|w| self.backends.visibility(w));

        StatusReport {
            name: self.target.name.clone(),
            app_id: self.target.app_id.clone(),
            window_class: self.target.window_class.clone(),
            process_state,
            processes: matches
                .into_iter()
                .map(|m| ProcessSummary {
                    pid: m.pid,
                    age_secs: m.age.as_secs(),
                    cmd_line: m.cmd_line,
                })
                .collect(),
            backends: self.backends.names(),
            windows,
            visibility,
        }
    }

    fn launch_and_show(&self, state: ToggleState) -> Result<ToggleReport, ToggleError> {
        info!(event = "core.toggle.launch_started", state = %state);
        self.notifier.notify(messages::LAUNCHING);

        let pid = match self.launcher.launch(&self.target.launch) {
            Ok(pid) => pid,
            Err(source) => {
                error!(event = "core.toggle.launch_failed", error = %source);
                self.notifier.notify(messages::LAUNCH_FAILED);
                return Err(ToggleError::LaunchFailed { source });
            }
        };
        info!(event = "core.toggle.launch_completed", pid = pid);

        self.sleeper.sleep(self.target.post_launch_wait);

        let outcome = self.show_if_found();
        Ok(ToggleReport {
            state,
            outcome,
            launched_pid: Some(pid),
        })
    }

    /// The process exists but may not have mapped a window yet: wait once
    /// and take whatever shows up.
    fn wait_for_startup(&self) -> ToggleReport {
        info!(
            event = "core.toggle.startup_wait_started",
            grace_secs = self.target.startup_grace.as_secs()
        );
        self.notifier.notify(messages::STARTING);
        self.sleeper.sleep(self.target.startup_grace);

        ToggleReport {
            state: ToggleState::Starting,
            outcome: self.show_if_found(),
            launched_pid: None,
        }
    }

    fn show_if_found(&self) -> ToggleOutcome {
        match resolve(&self.backends, &self.target.window_class) {
            Some(window) => {
                self.show(&window);
                ToggleOutcome::Activated(window)
            }
            None => {
                warn!(
                    event = "core.toggle.window_not_found",
                    window_class = %self.target.window_class
                );
                self.notifier.notify(messages::WINDOW_NOT_FOUND);
                ToggleOutcome::WindowNotFound
            }
        }
    }

    fn hide(&self, window: WindowHandle) -> ToggleReport {
        if !self.backends.minimize(&window) {
            warn!(event = "core.toggle.minimize_failed", window = %window);
        }
        self.notifier.notify(messages::MINIMIZED);

        ToggleReport {
            state: ToggleState::RunningVisible,
            outcome: ToggleOutcome::Minimized(window),
            launched_pid: None,
        }
    }

    fn restore(&self, window: WindowHandle) -> ToggleReport {
        self.notifier.notify(messages::RESTORING);
        self.show(&window);

        ToggleReport {
            state: ToggleState::RunningMinimized,
            outcome: ToggleOutcome::Restored(window),
            launched_pid: None,
        }
    }

    fn show(&self, window: &WindowHandle) {
        if !self.backends.activate(window) {
            warn!(event = "core.toggle.activate_failed", window = %window);
        }
        self.backends.apply_window_properties(window);
        self.notifier.notify(messages::ACTIVE);
    }
}
