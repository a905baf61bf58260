use clap::ArgMatches;
use tracing::{error, info, warn};

use wintoggle_core::notify::resolve_icon;
use wintoggle_core::tray::{TrayStatus, ensure_tray};
use wintoggle_core::{
    DesktopNotifier, ToggleOrchestrator, WintoggleError, events, detect_backends,
};

use super::helpers::{cache_dir, load_target};

pub(crate) fn handle_toggle_command(
    matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    let (config, target) = load_target(matches)?;

    info!(
        event = "cli.toggle_started",
        target = %target.name,
        window_class = %target.window_class
    );

    let cache_dir = cache_dir();

    // Tray failures never block the toggle itself
    if let Some(command) = config.tray.command.as_deref().filter(|_| config.tray.enabled) {
        match ensure_tray(&cache_dir, command) {
            Ok(TrayStatus::Spawned(pid)) => info!(event = "cli.tray_spawned", pid = pid),
            Ok(TrayStatus::AlreadyRunning(pid)) => {
                info!(event = "cli.tray_already_running", pid = pid)
            }
            Err(e) => warn!(event = "cli.tray_failed", error = %e),
        }
    }

    let icon = resolve_icon(target.icon.as_deref(), target.icon_lookup(), &cache_dir);
    let notifier = DesktopNotifier::new(target.name.clone(), icon, config.notifications.enabled);

    let orchestrator = ToggleOrchestrator::new(target, detect_backends()).with_notifier(notifier);

    match orchestrator.toggle() {
        Ok(report) => {
            info!(
                event = "cli.toggle_completed",
                state = %report.state,
                outcome = ?report.outcome,
                launched_pid = ?report.launched_pid
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ {}", e);
            error!(
                event = "cli.toggle_failed",
                error = %e,
                error_code = e.error_code()
            );
            events::log_app_error(&e);
            Err(e.into())
        }
    }
}
