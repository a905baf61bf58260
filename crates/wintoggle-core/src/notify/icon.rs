//! Notification icon lookup.
//!
//! Web apps installed through a Chromium-based browser keep their icons in
//! `<profile>/Web Applications/`. The newest-sorting PNG whose path contains
//! the app id is copied into the cache directory so the notification daemon
//! can read it without access to the browser profile.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Theme icon used when nothing better is found.
pub const FALLBACK_ICON: &str = "internet-web-browser";

/// Browser config directories searched for web app icons, relative to
/// `~/.config`.
const BROWSER_CONFIG_DIRS: [&str; 2] = ["google-chrome", "chromium"];

/// Find the icon PNG for `app_id` under a `Web Applications` directory.
pub fn find_web_app_icon(web_apps_dir: &Path, app_id: &str) -> Option<PathBuf> {
    if app_id.is_empty() || !web_apps_dir.is_dir() {
        return None;
    }

    let mut candidates: Vec<PathBuf> = WalkDir::new(web_apps_dir)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension().is_some_and(|ext| ext == "png")
                && path.to_string_lossy().contains(app_id)
        })
        .collect();

    candidates.sort();
    candidates.pop()
}

/// Copy `icon` into `cache_dir`, returning the cached path.
fn cache_icon(icon: &Path, cache_dir: &Path) -> Option<PathBuf> {
    let file_name = icon.file_name()?;
    let cached = cache_dir.join(file_name);
    if let Err(e) = fs::create_dir_all(cache_dir).and_then(|_| fs::copy(icon, &cached)) {
        warn!(
            event = "core.notify.icon_cache_failed",
            icon = %icon.display(),
            error = %e
        );
        return None;
    }
    Some(cached)
}

/// Work out the icon to show with notifications.
///
/// Order: configured icon, web app icon (cached), [`FALLBACK_ICON`].
pub fn resolve_icon(
    configured: Option<&Path>,
    web_app: Option<(&str, &str)>,
    cache_dir: &Path,
) -> String {
    if let Some(icon) = configured {
        return icon.to_string_lossy().to_string();
    }

    let (Some((profile, app_id)), Some(config_dir)) = (web_app, dirs::config_dir()) else {
        return FALLBACK_ICON.to_string();
    };

    for browser in BROWSER_CONFIG_DIRS {
        let web_apps_dir = config_dir
            .join(browser)
            .join(profile)
            .join("Web Applications");
        let Some(found) = find_web_app_icon(&web_apps_dir, app_id) else {
            continue;
        };
        if let Some(cached) = cache_icon(&found, cache_dir) {
            debug!(event = "core.notify.icon_resolved", icon = %cached.display());
            return cached.to_string_lossy().to_string();
        }
    }

    FALLBACK_ICON.to_string()
}
