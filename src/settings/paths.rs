use std::env;
use std::path::{Path, PathBuf};

/// Directory name used under the config base directories.
const APP_DIR: &str = "recent-picker";

/// Determine the configuration file path for the SETTINGS, searching in priority order.
///
/// Prefers `$HOME/.config/recent-picker/settings.conf`, then
/// `$XDG_CONFIG_HOME/recent-picker/settings.conf`. Only existing files are returned.
pub fn resolve_settings_config_path() -> Option<PathBuf> {
    let home = env::var("HOME").ok();
    let xdg_config = env::var("XDG_CONFIG_HOME").ok();
    let mut candidates: Vec<PathBuf> = Vec::new();
    if let Some(h) = home.as_deref() {
        candidates.push(Path::new(h).join(".config").join(APP_DIR).join("settings.conf"));
    }
    if let Some(xdg) = xdg_config.as_deref() {
        candidates.push(Path::new(xdg).join(APP_DIR).join("settings.conf"));
    }
    candidates.into_iter().find(|p| p.is_file())
}

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    let mut base = PathBuf::from(home);
    for seg in home_default {
        base = base.join(seg);
    }
    base
}

/// XDG config directory for the picker: `$XDG_CONFIG_HOME/recent-picker`
/// (default `~/.config/recent-picker`). Not created here.
#[must_use]
pub fn config_dir() -> PathBuf {
    xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join(APP_DIR)
}

/// Default location of `settings.conf` when none exists yet.
#[must_use]
pub fn default_settings_path() -> PathBuf {
    config_dir().join("settings.conf")
}

/// Logs directory: `$XDG_STATE_HOME/recent-picker/logs` (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = xdg_base_dir("XDG_STATE_HOME", &[".local", "state"])
        .join(APP_DIR)
        .join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}
