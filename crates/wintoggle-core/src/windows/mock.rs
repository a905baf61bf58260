//! In-memory backend for exercising the chain, resolver and orchestrator.

use std::collections::HashSet;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::windows::{errors::BackendError, traits::WindowBackend, types::WindowHandle};

/// Shared record of `(backend, operation, window id)` calls.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<(String, String, String)>>>);

impl CallLog {
    fn record(&self, backend: &str, operation: &str, id: &str) {
        self.0
            .lock()
            .unwrap()
            .push((backend.to_string(), operation.to_string(), id.to_string()));
    }

    /// Calls of `operation` on `backend`.
    pub fn count(&self, backend: &str, operation: &str) -> usize {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|(b, o, _)| b == backend && o == operation)
            .count()
    }

    /// Window ids passed to `operation` on any backend, in call order.
    pub fn targets(&self, operation: &str) -> Vec<String> {
        self.0
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, o, _)| o == operation)
            .map(|(_, _, id)| id.clone())
            .collect()
    }
}

/// Write a fake `qdbus` into `dir` that prints `output` for every call.
pub fn fake_qdbus(dir: &Path, output: &str) -> PathBuf {
    let path = dir.join("qdbus");
    std::fs::write(&path, format!("#!/bin/sh\necho '{}'\n", output)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Shared list of window ids a mock backend reports.
pub type WindowTable = Arc<Mutex<Vec<String>>>;

pub struct MockBackend {
    name: &'static str,
    windows: WindowTable,
    scan: Vec<String>,
    minimized: Mutex<HashSet<String>>,
    failing: bool,
    log: CallLog,
}

impl MockBackend {
    pub fn new(name: &'static str, log: &CallLog) -> Self {
        Self {
            name,
            windows: WindowTable::default(),
            scan: Vec::new(),
            minimized: Mutex::new(HashSet::new()),
            failing: false,
            log: log.clone(),
        }
    }

    pub fn with_windows(self, ids: &[&str]) -> Self {
        *self.windows.lock().unwrap() = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Windows only found by the substring scan.
    pub fn with_scan(mut self, ids: &[&str]) -> Self {
        self.scan = ids.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_minimized(self, ids: &[&str]) -> Self {
        self.minimized
            .lock()
            .unwrap()
            .extend(ids.iter().map(|s| s.to_string()));
        self
    }

    /// Every call fails after being logged.
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Handle for adding windows after the backend is boxed, e.g. from a
    /// launcher mock.
    pub fn window_table(&self) -> WindowTable {
        Arc::clone(&self.windows)
    }

    fn call(&self, operation: &str, id: &str) -> Result<(), BackendError> {
        self.log.record(self.name, operation, id);
        if self.failing {
            return Err(BackendError::CallFailed {
                backend: self.name,
                call: operation.to_string(),
                message: "mock failure".to_string(),
            });
        }
        Ok(())
    }

    /// Like the real backends, refuse handles another backend produced.
    fn call_on(&self, operation: &str, window: &WindowHandle) -> Result<(), BackendError> {
        self.call(operation, window.id())?;
        if window.backend() != self.name {
            return Err(BackendError::ForeignHandle {
                backend: self.name,
                id: window.id().to_string(),
            });
        }
        Ok(())
    }

    fn handles(&self, ids: &[String]) -> Vec<WindowHandle> {
        ids.iter()
            .map(|id| WindowHandle::new(id.clone(), self.name))
            .collect()
    }
}

impl WindowBackend for MockBackend {
    fn name(&self) -> &'static str {
        self.name
    }

    fn is_available(&self) -> bool {
        true
    }

    fn list_windows(&self, _window_class: &str) -> Result<Vec<WindowHandle>, BackendError> {
        self.call("list_windows", "")?;
        Ok(self.handles(&self.windows.lock().unwrap()))
    }

    fn scan_windows(&self, _class_fragment: &str) -> Result<Vec<WindowHandle>, BackendError> {
        self.call("scan_windows", "")?;
        Ok(self.handles(&self.scan))
    }

    fn is_minimized(&self, window: &WindowHandle) -> Result<bool, BackendError> {
        self.call_on("is_minimized", window)?;
        Ok(self.minimized.lock().unwrap().contains(window.id()))
    }

    fn activate(&self, window: &WindowHandle) -> Result<(), BackendError> {
        self.call_on("activate", window)?;
        self.minimized.lock().unwrap().remove(window.id());
        Ok(())
    }

    fn minimize(&self, window: &WindowHandle) -> Result<(), BackendError> {
        self.call_on("minimize", window)?;
        self.minimized
            .lock()
            .unwrap()
            .insert(window.id().to_string());
        Ok(())
    }

    fn close(&self, window: &WindowHandle) -> Result<(), BackendError> {
        self.call_on("close", window)?;
        self.windows.lock().unwrap().retain(|id| id != window.id());
        Ok(())
    }

    fn apply_window_properties(&self, window: &WindowHandle) -> Result<(), BackendError> {
        self.call_on("apply_window_properties", window)
    }
}
