//! Desktop notification dispatch.
//!
//! Best-effort: `notify-send`, then a `kdialog` passive popup, then plain
//! stdout. Failures are logged but never propagate.

pub mod icon;

use std::process::Command;
use tracing::{debug, info, warn};

use crate::process::spawn_detached;

pub use icon::{FALLBACK_ICON, find_web_app_icon, resolve_icon};

/// Seconds a `kdialog` passive popup stays on screen.
const POPUP_TIMEOUT_SECS: &str = "2";

/// Sink for user-facing status messages.
pub trait Notifier {
    /// Show `message`. Must never fail or block for long.
    fn notify(&self, message: &str);
}

/// Notifier that shows desktop notifications.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    title: String,
    icon: String,
    enabled: bool,
}

impl DesktopNotifier {
    pub fn new(title: impl Into<String>, icon: impl Into<String>, enabled: bool) -> Self {
        Self {
            title: title.into(),
            icon: icon.into(),
            enabled,
        }
    }

    fn try_notify_send(&self, message: &str) -> bool {
        if which::which("notify-send").is_err() {
            debug!(
                event = "core.notify.send_skipped",
                reason = "notify-send not found"
            );
            return false;
        }

        match Command::new("notify-send")
            .args(["-i", self.icon.as_str(), self.title.as_str(), message])
            .output()
        {
            Ok(output) if output.status.success() => {
                info!(event = "core.notify.send_completed", method = "notify-send");
                true
            }
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr);
                warn!(
                    event = "core.notify.send_failed",
                    method = "notify-send",
                    stderr = %stderr,
                );
                false
            }
            Err(e) => {
                warn!(
                    event = "core.notify.send_failed",
                    method = "notify-send",
                    error = %e,
                );
                false
            }
        }
    }

    /// The popup blocks for its whole timeout, so it is spawned detached.
    fn try_kdialog(&self, message: &str) -> bool {
        if which::which("kdialog").is_err() {
            debug!(event = "core.notify.send_skipped", reason = "kdialog not found");
            return false;
        }

        let argv: Vec<String> = [
            "kdialog",
            "--passivepopup",
            message,
            POPUP_TIMEOUT_SECS,
            "--title",
            self.title.as_str(),
            "--icon",
            self.icon.as_str(),
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();

        match spawn_detached(&argv) {
            Ok(_) => {
                info!(event = "core.notify.send_completed", method = "kdialog");
                true
            }
            Err(e) => {
                warn!(event = "core.notify.send_failed", method = "kdialog", error = %e);
                false
            }
        }
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, message: &str) {
        if !self.enabled {
            debug!(event = "core.notify.disabled", message = message);
            return;
        }

        info!(
            event = "core.notify.send_started",
            title = %self.title,
            message = message,
        );

        if self.try_notify_send(message) || self.try_kdialog(message) {
            return;
        }
        println!("{}", message);
    }
}
