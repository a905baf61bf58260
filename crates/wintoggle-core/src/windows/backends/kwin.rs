//! KWin backend, talking to the compositor over D-Bus through `qdbus`.

use std::path::PathBuf;
use tracing::debug;

use crate::windows::{
    errors::BackendError, tool::run_tool, traits::WindowBackend, types::WindowHandle,
};

const NAME: &str = "kwin";
const SERVICE: &str = "org.kde.KWin";
const PATH: &str = "/KWin";

/// `qdbus` ships under different names depending on the Qt major version.
const QDBUS_CANDIDATES: [&str; 3] = ["qdbus", "qdbus6", "qdbus-qt5"];

/// Split `getWindowList` output into window ids.
pub fn parse_window_list(output: &str) -> Vec<String> {
    output.split_whitespace().map(str::to_string).collect()
}

/// Extract `resourceClass` from `getWindowInfo` output.
///
/// `qdbus` prints maps as `key: value` lines; some versions quote the key
/// or the value.
pub fn parse_resource_class(info: &str) -> Option<String> {
    info.lines().find_map(|line| {
        let line = line.trim().trim_start_matches('"');
        let rest = line.strip_prefix("resourceClass")?;
        let rest = rest.trim_start_matches('"').trim_start();
        let value = rest.strip_prefix(':').or_else(|| rest.strip_prefix('='))?;
        let value = value.trim().trim_end_matches(',').trim_matches('"');
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Backend implementation for KWin.
pub struct KwinBackend {
    qdbus: Option<PathBuf>,
}

impl KwinBackend {
    /// Locate a `qdbus` binary on `PATH`.
    pub fn detect() -> Self {
        let qdbus = QDBUS_CANDIDATES
            .iter()
            .find_map(|candidate| which::which(candidate).ok());
        debug!(
            event = "core.window.kwin_qdbus_lookup",
            found = ?qdbus
        );
        Self { qdbus }
    }

    pub fn with_qdbus(qdbus: PathBuf) -> Self {
        Self { qdbus: Some(qdbus) }
    }

    fn call(&self, method: &str, args: &[&str]) -> Result<String, BackendError> {
        let qdbus = self.qdbus.as_ref().ok_or_else(|| BackendError::ToolNotFound {
            tool: "qdbus".to_string(),
        })?;
        let method = format!("org.kde.KWin.{}", method);
        let mut full_args = vec![SERVICE, PATH, method.as_str()];
        full_args.extend_from_slice(args);
        run_tool(NAME, qdbus.as_os_str(), &full_args)
    }

    /// KWin ids are only valid for handles KWin itself enumerated.
    fn kwin_id<'a>(&self, window: &'a WindowHandle) -> Result<&'a str, BackendError> {
        if window.backend() == NAME {
            Ok(window.id())
        } else {
            Err(BackendError::ForeignHandle {
                backend: NAME,
                id: window.id().to_string(),
            })
        }
    }

    fn window_class(&self, id: &str) -> Option<String> {
        match self.call("getWindowInfo", &[id]) {
            Ok(info) => parse_resource_class(&info),
            Err(e) => {
                debug!(event = "core.window.kwin_info_failed", window_id = id, error = %e);
                None
            }
        }
    }

    fn windows_where(
        &self,
        matches: impl Fn(&str) -> bool,
    ) -> Result<Vec<WindowHandle>, BackendError> {
        let list = self.call("getWindowList", &[])?;
        Ok(parse_window_list(&list)
            .into_iter()
            .filter(|id| self.window_class(id).is_some_and(|class| matches(&class)))
            .map(|id| WindowHandle::new(id, NAME))
            .collect())
    }
}

impl WindowBackend for KwinBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn is_available(&self) -> bool {
        let Some(qdbus) = &self.qdbus else {
            return false;
        };
        run_tool(NAME, qdbus.as_os_str(), &[SERVICE, PATH]).is_ok()
    }

    fn list_windows(&self, window_class: &str) -> Result<Vec<WindowHandle>, BackendError> {
        self.windows_where(|class| class == window_class)
    }

    fn scan_windows(&self, class_fragment: &str) -> Result<Vec<WindowHandle>, BackendError> {
        let fragment = class_fragment.to_lowercase();
        self.windows_where(|class| class.to_lowercase().contains(&fragment))
    }

    fn is_minimized(&self, window: &WindowHandle) -> Result<bool, BackendError> {
        let id = self.kwin_id(window)?;
        let output = self.call("isMinimized", &[id])?;
        match output.as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            _ => Err(BackendError::UnexpectedOutput {
                backend: NAME,
                call: "isMinimized".to_string(),
                output,
            }),
        }
    }

    fn activate(&self, window: &WindowHandle) -> Result<(), BackendError> {
        let id = self.kwin_id(window)?;
        self.call("unminimizeWindow", &[id])?;
        self.call("forceActiveWindow", &[id])?;
        Ok(())
    }

    fn minimize(&self, window: &WindowHandle) -> Result<(), BackendError> {
        let id = self.kwin_id(window)?;
        self.call("minimizeWindow", &[id]).map(|_| ())
    }

    fn close(&self, _window: &WindowHandle) -> Result<(), BackendError> {
        Err(BackendError::Unsupported {
            backend: NAME,
            operation: "close",
        })
    }

    fn apply_window_properties(&self, window: &WindowHandle) -> Result<(), BackendError> {
        let id = self.kwin_id(window)?;
        self.call("setMaximize", &[id, "true", "true"])?;
        self.call("reconfigure", &[])?;
        Ok(())
    }
}
