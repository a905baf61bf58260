//! One-shot detection of usable window backends.

use tracing::{debug, info, warn};

use crate::windows::{
    backends::{KwinBackend, X11Backend},
    chain::BackendChain,
    traits::WindowBackend,
};

/// Every known backend, in priority order (compositor first).
fn candidate_backends() -> Vec<Box<dyn WindowBackend>> {
    vec![Box::new(KwinBackend::detect()), Box::new(X11Backend)]
}

/// Check all known backends and keep the usable ones, primary first.
///
/// Runs once per invocation. The result may be empty; deciding whether
/// that is fatal is up to the caller.
pub fn detect_backends() -> BackendChain {
    debug!(event = "core.window.detect_started");

    let available: Vec<Box<dyn WindowBackend>> = candidate_backends()
        .into_iter()
        .filter(|backend| {
            let ok = backend.is_available();
            debug!(
                event = "core.window.detect_checked",
                backend = backend.name(),
                available = ok
            );
            ok
        })
        .collect();

    let chain = BackendChain::new(available);
    if chain.is_empty() {
        warn!(event = "core.window.detect_none_found", checked = "kwin,x11");
    } else {
        info!(event = "core.window.detect_completed", backends = ?chain.names());
    }
    chain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidates_in_priority_order() {
        let names: Vec<&str> = candidate_backends().iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["kwin", "x11"]);
    }

    #[test]
    fn test_detected_backends_keep_priority_order() {
        // Which backends are usable depends on the session running the tests.
        let chain = detect_backends();
        let names = chain.names();
        let order = ["kwin", "x11"];

        let positions: Vec<usize> = names
            .iter()
            .map(|name| {
                order
                    .iter()
                    .position(|known| known == name)
                    .unwrap_or_else(|| panic!("unexpected backend {name}"))
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(chain.is_empty(), names.is_empty());
    }
}
