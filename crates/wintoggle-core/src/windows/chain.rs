//! Priority-ordered fallback across window backends.

use tracing::{debug, info};

use crate::windows::{
    errors::BackendError,
    traits::WindowBackend,
    types::{Visibility, WindowHandle},
};

/// Ordered set of usable backends, primary first.
///
/// Every operation swallows backend errors: a failing call is logged at
/// debug level and the next backend is tried. Callers see empty lists,
/// `false` or `None`, never an error.
pub struct BackendChain {
    backends: Vec<Box<dyn WindowBackend>>,
}

impl BackendChain {
    pub fn new(backends: Vec<Box<dyn WindowBackend>>) -> Self {
        Self { backends }
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    /// Run `op` on each backend in order until one succeeds.
    fn first_success<T>(
        &self,
        operation: &'static str,
        window: &WindowHandle,
        op: impl Fn(&dyn WindowBackend) -> Result<T, BackendError>,
    ) -> Option<T> {
        for backend in &self.backends {
            match op(backend.as_ref()) {
                Ok(value) => {
                    debug!(
                        event = "core.window.operation_completed",
                        operation = operation,
                        backend = backend.name(),
                        window = %window
                    );
                    return Some(value);
                }
                Err(e) => {
                    debug!(
                        event = "core.window.operation_fallback",
                        operation = operation,
                        backend = backend.name(),
                        window = %window,
                        error = %e
                    );
                }
            }
        }
        debug!(
            event = "core.window.operation_exhausted",
            operation = operation,
            window = %window
        );
        None
    }

    /// Windows of `window_class`, in enumeration order.
    ///
    /// Exact class matches are tried on every backend first; only if none
    /// of them finds anything is the substring scan attempted.
    pub fn list_windows(&self, window_class: &str) -> Vec<WindowHandle> {
        let exact = self.list_with("exact", window_class, |b| b.list_windows(window_class));
        if !exact.is_empty() {
            return exact;
        }
        self.list_with("substring", window_class, |b| {
            b.scan_windows(window_class)
        })
    }

    fn list_with(
        &self,
        strategy: &'static str,
        window_class: &str,
        list: impl Fn(&dyn WindowBackend) -> Result<Vec<WindowHandle>, BackendError>,
    ) -> Vec<WindowHandle> {
        for backend in &self.backends {
            match list(backend.as_ref()) {
                Ok(windows) if !windows.is_empty() => {
                    info!(
                        event = "core.window.list_completed",
                        backend = backend.name(),
                        strategy = strategy,
                        window_class = window_class,
                        count = windows.len()
                    );
                    return windows;
                }
                Ok(_) => {
                    debug!(
                        event = "core.window.list_empty",
                        backend = backend.name(),
                        strategy = strategy,
                        window_class = window_class
                    );
                }
                Err(e) => {
                    debug!(
                        event = "core.window.list_failed",
                        backend = backend.name(),
                        strategy = strategy,
                        error = %e
                    );
                }
            }
        }
        Vec::new()
    }

    /// Minimized state, or `None` if no backend could tell.
    pub fn is_minimized(&self, window: &WindowHandle) -> Option<bool> {
        self.first_success("is_minimized", window, |b| b.is_minimized(window))
    }

    /// Live visibility. An undeterminable state counts as visible.
    pub fn visibility(&self, window: &WindowHandle) -> Visibility {
        match self.is_minimized(window) {
            Some(true) => Visibility::Minimized,
            Some(false) | None => Visibility::Visible,
        }
    }

    pub fn activate(&self, window: &WindowHandle) -> bool {
        self.first_success("activate", window, |b| b.activate(window))
            .is_some()
    }

    pub fn minimize(&self, window: &WindowHandle) -> bool {
        self.first_success("minimize", window, |b| b.minimize(window))
            .is_some()
    }

    pub fn close(&self, window: &WindowHandle) -> bool {
        self.first_success("close", window, |b| b.close(window))
            .is_some()
    }

    /// Apply every backend's window properties; failures are ignored.
    ///
    /// Unlike the other operations this does not stop at the first success:
    /// the compositor maximizes, X11 sets the skip-taskbar hint.
    pub fn apply_window_properties(&self, window: &WindowHandle) {
        for backend in &self.backends {
            if let Err(e) = backend.apply_window_properties(window) {
                debug!(
                    event = "core.window.properties_skipped",
                    backend = backend.name(),
                    window = %window,
                    error = %e
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::windows::backends::KwinBackend;
    use crate::windows::mock::{CallLog, MockBackend, fake_qdbus};
    use tempfile::TempDir;

    #[test]
    fn test_empty_chain() {
        let chain = BackendChain::new(vec![]);
        let window = WindowHandle::new("1", "mock");
        assert!(chain.is_empty());
        assert!(chain.list_windows("app").is_empty());
        assert_eq!(chain.is_minimized(&window), None);
        assert_eq!(chain.visibility(&window), Visibility::Visible);
        assert!(!chain.activate(&window));
    }

    #[test]
    fn test_list_falls_through_to_secondary() {
        let log = CallLog::default();
        let chain = BackendChain::new(vec![
            Box::new(MockBackend::new("primary", &log)),
            Box::new(MockBackend::new("secondary", &log).with_windows(&["77"])),
        ]);

        let windows = chain.list_windows("app");
        assert_eq!(windows, vec![WindowHandle::new("77", "secondary")]);
    }

    #[test]
    fn test_failing_primary_is_skipped() {
        let log = CallLog::default();
        let chain = BackendChain::new(vec![
            Box::new(MockBackend::new("primary", &log).failing()),
            Box::new(MockBackend::new("secondary", &log).with_windows(&["5"])),
        ]);

        let window = WindowHandle::new("5", "secondary");
        assert_eq!(chain.list_windows("app"), vec![window.clone()]);
        assert!(chain.minimize(&window));
        assert_eq!(log.count("secondary", "minimize"), 1);
        assert_eq!(log.count("primary", "minimize"), 1);
    }

    #[test]
    fn test_exact_match_preferred_over_substring_scan() {
        let log = CallLog::default();
        let chain = BackendChain::new(vec![
            Box::new(MockBackend::new("primary", &log).with_scan(&["s1"])),
            Box::new(MockBackend::new("secondary", &log).with_windows(&["e1"])),
        ]);

        assert_eq!(
            chain.list_windows("app"),
            vec![WindowHandle::new("e1", "secondary")]
        );
        assert_eq!(log.count("primary", "scan_windows"), 0);
    }

    #[test]
    fn test_substring_scan_used_when_exact_finds_nothing() {
        let log = CallLog::default();
        let chain = BackendChain::new(vec![
            Box::new(MockBackend::new("primary", &log)),
            Box::new(MockBackend::new("secondary", &log).with_scan(&["s9"])),
        ]);

        assert_eq!(
            chain.list_windows("app"),
            vec![WindowHandle::new("s9", "secondary")]
        );
    }

    #[test]
    fn test_primary_success_stops_chain() {
        let log = CallLog::default();
        let chain = BackendChain::new(vec![
            Box::new(MockBackend::new("primary", &log)),
            Box::new(MockBackend::new("secondary", &log)),
        ]);

        let window = WindowHandle::new("1", "primary");
        assert!(chain.activate(&window));
        assert_eq!(log.count("primary", "activate"), 1);
        assert_eq!(log.count("secondary", "activate"), 0);
    }

    #[test]
    fn test_properties_applied_on_every_backend() {
        let log = CallLog::default();
        let chain = BackendChain::new(vec![
            Box::new(MockBackend::new("primary", &log).failing()),
            Box::new(MockBackend::new("secondary", &log)),
        ]);

        chain.apply_window_properties(&WindowHandle::new("1", "primary"));
        assert_eq!(log.count("primary", "apply_window_properties"), 1);
        assert_eq!(log.count("secondary", "apply_window_properties"), 1);
    }

    #[test]
    fn test_visibility_reflects_backend_state() {
        let log = CallLog::default();
        let chain = BackendChain::new(vec![Box::new(
            MockBackend::new("primary", &log)
                .with_windows(&["1"])
                .with_minimized(&["1"]),
        )]);

        let window = WindowHandle::new("1", "primary");
        assert_eq!(chain.visibility(&window), Visibility::Minimized);
        assert!(chain.activate(&window));
        assert_eq!(chain.visibility(&window), Visibility::Visible);
    }

    #[test]
    fn test_minimized_query_falls_through_failing_primary() {
        let log = CallLog::default();
        let chain = BackendChain::new(vec![
            Box::new(MockBackend::new("primary", &log).failing()),
            Box::new(
                MockBackend::new("secondary", &log)
                    .with_windows(&["5"])
                    .with_minimized(&["5"]),
            ),
        ]);

        let window = WindowHandle::new("5", "secondary");
        assert_eq!(chain.is_minimized(&window), Some(true));
        assert_eq!(chain.visibility(&window), Visibility::Minimized);
        assert_eq!(log.count("primary", "is_minimized"), 2);
        assert_eq!(log.count("secondary", "is_minimized"), 2);
    }

    #[test]
    fn test_kwin_does_not_answer_for_x11_windows() {
        let dir = TempDir::new().unwrap();
        let log = CallLog::default();
        // A qdbus that claims every window is visible
        let kwin = KwinBackend::with_qdbus(fake_qdbus(dir.path(), "false"));
        let x11 = MockBackend::new("x11", &log)
            .with_windows(&["62914567"])
            .with_minimized(&["62914567"]);
        let chain = BackendChain::new(vec![Box::new(kwin), Box::new(x11)]);

        let window = WindowHandle::new("62914567", "x11");
        assert_eq!(chain.visibility(&window), Visibility::Minimized);
        assert_eq!(log.count("x11", "is_minimized"), 1);

        assert!(chain.activate(&window));
        assert_eq!(log.count("x11", "activate"), 1);
        assert_eq!(chain.visibility(&window), Visibility::Visible);
    }

    #[test]
    fn test_names_in_priority_order() {
        let log = CallLog::default();
        let chain = BackendChain::new(vec![
            Box::new(MockBackend::new("kwin", &log)),
            Box::new(MockBackend::new("x11", &log)),
        ]);
        assert_eq!(chain.names(), vec!["kwin", "x11"]);
    }
}
