//! Legacy X11 backend built on `xdotool` and `xprop`.

use std::ffi::OsStr;
use tracing::debug;

use crate::windows::{
    errors::BackendError, tool::run_tool, traits::WindowBackend, types::WindowHandle,
};

const NAME: &str = "x11";
const XDOTOOL: &str = "xdotool";
const XPROP: &str = "xprop";

/// X11 window ids are plain integers, decimal or `0x` hex.
pub fn is_x11_window_id(id: &str) -> bool {
    match id.strip_prefix("0x") {
        Some(hex) => !hex.is_empty() && u64::from_str_radix(hex, 16).is_ok(),
        None => !id.is_empty() && id.parse::<u64>().is_ok(),
    }
}

/// Extract both class strings from `xprop WM_CLASS` output, e.g.
/// `WM_CLASS(STRING) = "crx_abc", "Google-chrome"`.
pub fn parse_wm_class(output: &str) -> Vec<String> {
    let Some((_, values)) = output.split_once('=') else {
        return Vec::new();
    };
    values
        .split(',')
        .map(|v| v.trim().trim_matches('"').to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

/// Whether full `xprop -id` output marks the window iconic or hidden.
pub fn xprop_reports_hidden(output: &str) -> bool {
    output.contains("window state: Iconic") || output.contains("_NET_WM_STATE_HIDDEN")
}

fn parse_ids(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| is_x11_window_id(line))
        .map(str::to_string)
        .collect()
}

/// Backend implementation for X11 sessions.
pub struct X11Backend;

impl X11Backend {
    fn xdotool(&self, args: &[&str]) -> Result<String, BackendError> {
        run_tool(NAME, OsStr::new(XDOTOOL), args)
    }

    fn xprop(&self, args: &[&str]) -> Result<String, BackendError> {
        run_tool(NAME, OsStr::new(XPROP), args)
    }

    /// Reject handles that did not come from X11 before shelling out.
    fn x11_id<'a>(&self, window: &'a WindowHandle) -> Result<&'a str, BackendError> {
        if is_x11_window_id(window.id()) {
            Ok(window.id())
        } else {
            Err(BackendError::ForeignHandle {
                backend: NAME,
                id: window.id().to_string(),
            })
        }
    }

    /// `xdotool search` exits non-zero when nothing matches.
    fn search(&self, args: &[&str]) -> Result<Vec<String>, BackendError> {
        match self.xdotool(args) {
            Ok(output) => Ok(parse_ids(&output)),
            Err(BackendError::CallFailed { message, .. }) => {
                debug!(event = "core.window.x11_search_empty", message = %message);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }
}

impl WindowBackend for X11Backend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn is_available(&self) -> bool {
        std::env::var_os("DISPLAY").is_some() && which::which(XDOTOOL).is_ok()
    }

    fn list_windows(&self, window_class: &str) -> Result<Vec<WindowHandle>, BackendError> {
        Ok(self
            .search(&["search", "--class", window_class])?
            .into_iter()
            .map(|id| WindowHandle::new(id, NAME))
            .collect())
    }

    fn scan_windows(&self, class_fragment: &str) -> Result<Vec<WindowHandle>, BackendError> {
        let fragment = class_fragment.to_lowercase();
        let mut found = Vec::new();
        for id in self.search(&["search", "--name", ".*"])? {
            let classes = match self.xprop(&["-id", &id, "WM_CLASS"]) {
                Ok(output) => parse_wm_class(&output),
                Err(e @ BackendError::ToolNotFound { .. }) => return Err(e),
                Err(_) => continue,
            };
            if classes
                .iter()
                .any(|class| class.to_lowercase().contains(&fragment))
            {
                found.push(WindowHandle::new(id, NAME));
            }
        }
        Ok(found)
    }

    fn is_minimized(&self, window: &WindowHandle) -> Result<bool, BackendError> {
        let id = self.x11_id(window)?;
        let output = self.xprop(&["-id", id])?;
        Ok(xprop_reports_hidden(&output))
    }

    fn activate(&self, window: &WindowHandle) -> Result<(), BackendError> {
        let id = self.x11_id(window)?;
        if let Err(e) = self.xdotool(&["windowmap", id]) {
            debug!(event = "core.window.x11_map_failed", window_id = id, error = %e);
        }
        self.xdotool(&["windowactivate", id]).map(|_| ())
    }

    fn minimize(&self, window: &WindowHandle) -> Result<(), BackendError> {
        let id = self.x11_id(window)?;
        self.xdotool(&["windowminimize", id]).map(|_| ())
    }

    fn close(&self, window: &WindowHandle) -> Result<(), BackendError> {
        let id = self.x11_id(window)?;
        self.xdotool(&["windowclose", id]).map(|_| ())
    }

    fn apply_window_properties(&self, window: &WindowHandle) -> Result<(), BackendError> {
        let id = self.x11_id(window)?;
        self.xprop(&[
            "-id",
            id,
            "-f",
            "_NET_WM_STATE",
            "32a",
            "-set",
            "_NET_WM_STATE",
            "_NET_WM_STATE_SKIP_TASKBAR",
        ])
        .map(|_| ())
    }
}
