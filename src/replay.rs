//! Scripted editor session driving a [`RecentPicker`].
//!
//! A script is JSON lines. Each line is either an [`EditorEvent`]
//! (`{"event": "active_editor_changed", "path": "/w/a.rs"}`) or a picker
//! command (`{"command": "open", "choose": 0}`, `{"command": "list"}`).
//! Blank lines and lines starting with `#` are skipped.

use std::io::{BufRead, Write};
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{HostError, ReplayError};
use crate::events::EditorEvent;
use crate::host::Host;
use crate::picker::{PickOutcome, RecentPicker};
use crate::settings::Settings;
use crate::workspace::WorkspaceFolder;

/// Picker commands accepted in a script.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Show the picker and choose the item at `choose` (dismiss when absent).
    Open {
        /// Zero-based index into the shown items.
        #[serde(default)]
        choose: Option<usize>,
    },
    /// Print the current picker items without choosing.
    List,
}

/// One decoded script line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptLine {
    /// Editor notification.
    Event(EditorEvent),
    /// Picker command.
    Command(Command),
}

impl ScriptLine {
    /// What: Decode one script line.
    ///
    /// Details:
    /// - Dispatches on the `event` or `command` key before decoding the concrete
    ///   type, so a malformed line reports the real cause (e.g. a missing field).
    ///
    /// # Errors
    /// - Returns `Err` for invalid JSON, a line with neither key, or an invalid payload.
    pub fn parse(line: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(line)?;
        if value.get("event").is_some() {
            serde_json::from_value(value).map(Self::Event)
        } else if value.get("command").is_some() {
            serde_json::from_value(value).map(Self::Command)
        } else {
            Err(serde::de::Error::custom(
                "expected an object with an \"event\" or \"command\" key",
            ))
        }
    }
}

/// What: [`Host`] backed by script state.
///
/// Details:
/// - Tracks the active file from `active_editor_changed` events.
/// - Picks the pre-selected index when the picker is shown.
/// - Optionally checks that opened files exist on disk.
#[derive(Debug, Default)]
pub struct ScriptHost {
    /// Currently focused file.
    active: Option<String>,
    /// Roots reported at activation.
    initial_folders: Vec<WorkspaceFolder>,
    /// Index chosen by the next `show_quick_pick`.
    choice: Option<usize>,
    /// Items shown by the last `show_quick_pick`.
    shown: Vec<String>,
    /// Error messages shown to the user.
    errors: Vec<String>,
    /// Verify opened paths exist.
    check_files: bool,
}

impl ScriptHost {
    /// Create a host; `check_files` makes `open_document` fail for missing files.
    #[must_use]
    pub fn new(check_files: bool) -> Self {
        Self {
            check_files,
            ..Self::default()
        }
    }

    /// Roots reported to the picker on activation.
    #[must_use]
    pub fn with_folders(mut self, folders: Vec<WorkspaceFolder>) -> Self {
        self.initial_folders = folders;
        self
    }

    /// Error messages shown so far.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}

impl Host for ScriptHost {
    fn active_file(&self) -> Option<String> {
        self.active.clone()
    }

    fn workspace_folders(&self) -> Vec<WorkspaceFolder> {
        self.initial_folders.clone()
    }

    fn show_quick_pick(&mut self, items: &[String]) -> Option<String> {
        self.shown = items.to_vec();
        self.choice.take().and_then(|i| items.get(i).cloned())
    }

    fn open_document(&mut self, path: &str) -> Result<(), HostError> {
        if self.check_files && !Path::new(path).is_file() {
            return Err(HostError::NotFound {
                path: path.to_string(),
            });
        }
        Ok(())
    }

    fn show_error(&mut self, message: &str) {
        self.errors.push(message.to_string());
    }
}

/// Counters and results of a replayed script.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Editor events applied.
    pub events: usize,
    /// Paths opened through the picker, in order.
    pub opened: Vec<String>,
    /// Picker invocations that failed to open a file.
    pub failures: usize,
}

/// What: Replay a script through a fresh picker.
///
/// Inputs:
/// - `settings`: Picker settings.
/// - `host`: Host state (initial roots, file checking).
/// - `script`: JSON-lines reader.
/// - `out`: Receives picker items and outcomes.
///
/// Output:
/// - Summary of the session.
///
/// # Errors
/// - Returns `Err` on invalid settings, unreadable input, undecodable lines or
///   output write failures.
pub fn run_script<R: BufRead, W: Write>(
    settings: &Settings,
    host: &mut ScriptHost,
    script: R,
    out: &mut W,
) -> Result<ReplaySummary, ReplayError> {
    let mut picker = RecentPicker::new(settings)?;
    picker.activate(&*host);
    let mut summary = ReplaySummary::default();

    for (idx, line) in script.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let parsed = ScriptLine::parse(trimmed).map_err(|source| ReplayError::Decode {
            line: idx + 1,
            source,
        })?;
        match parsed {
            ScriptLine::Event(event) => {
                if let EditorEvent::ActiveEditorChanged { path } = &event {
                    host.active.clone_from(path);
                }
                picker.handle(&event);
                summary.events += 1;
            }
            ScriptLine::Command(Command::List) => {
                let items = picker.items(host.active.as_deref());
                write_items(out, &items)?;
            }
            ScriptLine::Command(Command::Open { choose }) => {
                host.choice = choose;
                let outcome = picker.open(host);
                write_items(out, &host.shown)?;
                match outcome {
                    PickOutcome::Opened(path) => {
                        writeln!(out, "opened {path}")?;
                        summary.opened.push(path);
                    }
                    PickOutcome::Dismissed => writeln!(out, "dismissed")?,
                    PickOutcome::Failed(message) => {
                        writeln!(out, "error {message}")?;
                        summary.failures += 1;
                    }
                }
            }
        }
    }

    picker.deactivate();
    tracing::info!(
        events = summary.events,
        opened = summary.opened.len(),
        failures = summary.failures,
        "[Replay] Script finished"
    );
    Ok(summary)
}

/// Write picker items as `<index> <label>` lines.
fn write_items<W: Write>(out: &mut W, items: &[String]) -> std::io::Result<()> {
    if items.is_empty() {
        return writeln!(out, "(no recent files)");
    }
    for (i, item) in items.iter().enumerate() {
        writeln!(out, "{i} {item}")?;
    }
    Ok(())
}
