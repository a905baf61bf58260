use clap::ArgMatches;
use std::path::PathBuf;
use tracing::{error, warn};

use wintoggle_core::{TargetDescriptor, ToggleConfig, WintoggleError, events, init_logging};

/// Load and validate the config, then start logging at the level it asks
/// for.
///
/// Config errors are reported on stderr directly since logging is not up
/// yet at that point.
pub fn load_target(
    matches: &ArgMatches,
) -> Result<(ToggleConfig, TargetDescriptor), Box<dyn std::error::Error>> {
    let verbose = matches.get_flag("verbose");
    let config_path = matches.get_one::<PathBuf>("config");

    let loaded =
        ToggleConfig::load(config_path.map(PathBuf::as_path)).and_then(|config| {
            TargetDescriptor::from_config(&config).map(|target| (config, target))
        });

    match loaded {
        Ok((config, target)) => {
            init_logging(verbose, config.debug);
            events::log_app_startup();
            Ok((config, target))
        }
        Err(e) => {
            init_logging(verbose, false);
            eprintln!("❌ Configuration error: {}", e);
            error!(
                event = "cli.config_load_failed",
                error = %e,
                error_code = e.error_code()
            );
            Err(e.into())
        }
    }
}

/// Cache directory for the icon copy and `tray.pid`, created if missing.
pub fn cache_dir() -> PathBuf {
    let dir = wintoggle_core::cache_dir()
        .unwrap_or_else(|| std::env::temp_dir().join("wintoggle"));
    if let Err(e) = std::fs::create_dir_all(&dir) {
        warn!(
            event = "cli.cache_dir_create_failed",
            path = %dir.display(),
            error = %e
        );
    }
    dir
}
