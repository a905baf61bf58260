//! Canonical window selection.
//!
//! The first window in enumeration order is canonical. Every other match is
//! treated as a duplicate and closed before any visibility decision. Closing
//! is best-effort: a close that every backend rejects is logged and ignored.

use tracing::{debug, info, warn};

use crate::windows::{chain::BackendChain, types::WindowHandle};

/// Current window set for `window_class`, without side effects.
pub fn enumerate(chain: &BackendChain, window_class: &str) -> Vec<WindowHandle> {
    chain.list_windows(window_class)
}

/// Pick the canonical window and close the rest.
pub fn resolve(chain: &BackendChain, window_class: &str) -> Option<WindowHandle> {
    let mut windows = enumerate(chain, window_class).into_iter();

    let Some(canonical) = windows.next() else {
        debug!(event = "core.window.resolve_empty", window_class = window_class);
        return None;
    };

    for duplicate in windows {
        if chain.close(&duplicate) {
            info!(
                event = "core.window.duplicate_closed",
                canonical = %canonical,
                duplicate = %duplicate
            );
        } else {
            warn!(
                event = "core.window.duplicate_close_failed",
                canonical = %canonical,
                duplicate = %duplicate
            );
        }
    }

    debug!(event = "core.window.resolve_completed", canonical = %canonical);
    Some(canonical)
}
