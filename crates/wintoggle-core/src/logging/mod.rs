use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Pick the filter directive for the requested verbosity.
///
/// Hotkey invocations stay silent unless something goes wrong, so the
/// default only lets errors through.
fn log_directive(verbose: bool, debug: bool) -> &'static str {
    match (verbose, debug) {
        (_, true) => "wintoggle=debug,wintoggle_core=debug",
        (true, false) => "wintoggle=info,wintoggle_core=info",
        (false, false) => "wintoggle=error,wintoggle_core=error",
    }
}

/// Initialize logging.
///
/// When `verbose` is false only error-level events are emitted. `debug`
/// (from the `debug = true` config switch) raises everything to debug.
/// `RUST_LOG` is still honoured on top of these directives.
pub fn init_logging(verbose: bool, debug: bool) {
    let directive = log_directive(verbose, debug);

    let mut filter = EnvFilter::from_default_env();
    for part in directive.split(',') {
        match part.parse() {
            Ok(d) => filter = filter.add_directive(d),
            Err(e) => eprintln!("Invalid log directive '{}': {}", part, e),
        }
    }

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_directive_levels() {
        assert_eq!(
            log_directive(false, false),
            "wintoggle=error,wintoggle_core=error"
        );
        assert_eq!(
            log_directive(true, false),
            "wintoggle=info,wintoggle_core=info"
        );
        assert_eq!(
            log_directive(false, true),
            "wintoggle=debug,wintoggle_core=debug"
        );
    }

    #[test]
    fn test_init_logging_twice_does_not_panic() {
        init_logging(false, false);
        init_logging(true, false);
    }
}
