//! wintoggle-core: Core library for the single-window toggle
//!
//! Launches, minimizes or restores one configured application window,
//! driving KWin over D-Bus or X11 through `xdotool`.
//!
//! # Main Entry Points
//!
//! - [`toggle`] - The toggle state machine and read-only status
//! - [`windows`] - Backend probing, fallback chain and window resolution
//! - [`process`] - Process matching, launching and PID files
//! - [`notify`] - Desktop notifications and icon lookup
//! - [`tray`] - Tray indicator presence
//! - [`config`] - Configuration management

use std::path::PathBuf;

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod notify;
pub mod process;
pub mod toggle;
pub mod tray;
pub mod windows;

// Re-export commonly used types at crate root for convenience
pub use config::ToggleConfig;
pub use errors::{ConfigError, WintoggleError};
pub use notify::{DesktopNotifier, Notifier};
pub use process::{ProcessError, ProcessState};
pub use toggle::{
    StatusReport, TargetDescriptor, ToggleError, ToggleOrchestrator, ToggleOutcome, ToggleReport,
    ToggleState,
};
pub use windows::{BackendChain, Visibility, WindowHandle, detect_backends};

// Re-export logging initialization
pub use logging::init_logging;

/// Per-user cache directory holding the icon cache and `tray.pid`.
pub fn cache_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("wintoggle"))
}
