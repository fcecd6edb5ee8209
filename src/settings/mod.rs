//! Picker settings loaded from `settings.conf`.

mod paths;
mod skeleton;

use std::fs;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

pub use paths::{config_dir, default_settings_path, logs_dir, resolve_settings_config_path};
pub use skeleton::SETTINGS_SKELETON_CONTENT;

use crate::label::DEFAULT_SEPARATOR;
use crate::util::config::{parse_key_value, skip_comment_or_empty, unquote};

/// Number of recent files offered when `recent_length` is not configured.
pub const DEFAULT_RECENT_LENGTH: usize = 3;

/// User-configurable picker settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Number of recent files offered by the picker.
    pub recent_length: usize,
    /// Token between a folder name and a relative path in labels.
    pub label_separator: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            recent_length: DEFAULT_RECENT_LENGTH,
            label_separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl Settings {
    /// What: Capacity of the recency tracker backing the picker.
    ///
    /// Output:
    /// - `recent_length + 1`: one extra slot holds the currently active file,
    ///   which is tracked but never offered.
    #[must_use]
    pub const fn tracker_capacity(&self) -> usize {
        self.recent_length.saturating_add(1)
    }

    /// `recent_length` as a validated non-zero value, if it is one.
    #[must_use]
    pub const fn recent_length(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.recent_length)
    }
}

/// What: Parse settings from `settings.conf` content on top of `settings`.
///
/// Inputs:
/// - `content`: File content.
/// - `settings`: Settings to update in place.
///
/// Details:
/// - Invalid values keep the current value and log a warning.
/// - Unknown keys are ignored.
pub fn parse_settings(content: &str, settings: &mut Settings) {
    for (lineno, line) in content.lines().enumerate() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            continue;
        };
        match key.as_str() {
            "recent_length" | "recent_count" => match val.parse::<usize>() {
                Ok(v) if v > 0 => settings.recent_length = v,
                _ => tracing::warn!(
                    line = lineno + 1,
                    value = %val,
                    "[Settings] recent_length must be a positive integer; keeping {}",
                    settings.recent_length
                ),
            },
            "label_separator" | "separator" => {
                let sep = unquote(&val);
                if sep.is_empty() {
                    tracing::warn!(
                        line = lineno + 1,
                        "[Settings] label_separator must not be empty; keeping default"
                    );
                } else {
                    settings.label_separator = sep.to_string();
                }
            }
            other => {
                tracing::debug!(line = lineno + 1, key = other, "[Settings] Unknown key ignored");
            }
        }
    }
}

/// What: Load settings from an explicit path or the default locations.
///
/// Inputs:
/// - `explicit`: Path given on the command line, if any.
///
/// Output:
/// - Parsed settings; defaults when no file is found or it cannot be read.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let mut settings = Settings::default();
    let path: Option<PathBuf> = explicit
        .map(Path::to_path_buf)
        .or_else(resolve_settings_config_path);
    let Some(path) = path else {
        tracing::debug!("[Settings] No settings.conf found; using defaults");
        return settings;
    };
    match fs::read_to_string(&path) {
        Ok(content) => {
            parse_settings(&content, &mut settings);
            tracing::info!(
                path = %path.display(),
                recent_length = settings.recent_length,
                "[Settings] Loaded settings"
            );
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "[Settings] Failed to read settings; using defaults"
            );
        }
    }
    settings
}

/// What: Write the commented default `settings.conf` if none exists at `path`.
///
/// Output:
/// - `Ok(true)` when a file was written, `Ok(false)` when one already existed.
///
/// # Errors
/// - Returns `Err` when the directory cannot be created or the file cannot be written.
pub fn write_default_settings(path: &Path) -> std::io::Result<bool> {
    if path.is_file() {
        tracing::info!(path = %path.display(), "[Settings] settings.conf already present");
        return Ok(false);
    }
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(path, SETTINGS_SKELETON_CONTENT)?;
    tracing::info!(path = %path.display(), "[Settings] Wrote default settings.conf");
    Ok(true)
}
