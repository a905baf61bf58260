//! Window backend trait definition.

use crate::windows::{errors::BackendError, types::WindowHandle};

/// Interface every window-manager backend implements.
///
/// Backends report failures honestly; swallowing them and falling back is
/// the job of [`crate::windows::BackendChain`].
pub trait WindowBackend: Send + Sync {
    /// The canonical name of this backend (e.g., "kwin", "x11").
    fn name(&self) -> &'static str;

    /// Check if the backend's tools are installed and answering.
    fn is_available(&self) -> bool;

    /// Windows whose class equals `window_class`, in enumeration order.
    fn list_windows(&self, window_class: &str) -> Result<Vec<WindowHandle>, BackendError>;

    /// Degraded search: every window whose class contains `class_fragment`,
    /// case-insensitively.
    fn scan_windows(&self, class_fragment: &str) -> Result<Vec<WindowHandle>, BackendError>;

    fn is_minimized(&self, window: &WindowHandle) -> Result<bool, BackendError>;

    /// Un-minimize and focus the window.
    fn activate(&self, window: &WindowHandle) -> Result<(), BackendError>;

    fn minimize(&self, window: &WindowHandle) -> Result<(), BackendError>;

    fn close(&self, window: &WindowHandle) -> Result<(), BackendError>;

    /// Backend-specific properties applied whenever the window is shown.
    fn apply_window_properties(&self, window: &WindowHandle) -> Result<(), BackendError>;
}
