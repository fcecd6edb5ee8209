//! Orchestration of the recency tracker and the folder registry.
//!
//! One [`RecentPicker`] exists per editor session. It owns both components,
//! translates editor events into updates and builds/resolves the picker labels.

use crate::error::ConfigError;
use crate::events::{EditorEvent, FileRename, Uri};
use crate::host::Host;
use crate::label::{format_label, resolve_label};
use crate::recent::RecencyTracker;
use crate::settings::Settings;
use crate::workspace::{FolderIndex, WorkspaceFolder};

/// Outcome of [`RecentPicker::open`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// The chosen file was opened.
    Opened(String),
    /// The user dismissed the picker (or there was nothing to pick).
    Dismissed,
    /// Opening the chosen file failed; the error was shown to the user.
    Failed(String),
}

/// What: Session-scoped owner of the recent-files state.
///
/// Details:
/// - Holds exactly one [`RecencyTracker`] and one [`FolderIndex`]; nothing else
///   gets a reference to them.
/// - Both are cleared by [`RecentPicker::deactivate`] and on drop.
#[derive(Debug)]
pub struct RecentPicker {
    /// Recently focused files, oldest first.
    recent: RecencyTracker,
    /// Registered workspace roots.
    folders: FolderIndex,
    /// Label separator from settings.
    separator: String,
}

impl RecentPicker {
    /// What: Build a picker from settings.
    ///
    /// Output:
    /// - Picker whose tracker keeps `recent_length + 1` files.
    ///
    /// # Errors
    /// - Returns `ConfigError::InvalidCapacity` when `recent_length` is zero.
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        if settings.recent_length().is_none() {
            return Err(ConfigError::InvalidCapacity {
                value: settings.recent_length,
            });
        }
        let recent = RecencyTracker::new(settings.tracker_capacity())?;
        Ok(Self {
            recent,
            folders: FolderIndex::new(),
            separator: settings.label_separator.clone(),
        })
    }

    /// What: Seed the picker from the host's current state.
    ///
    /// Details:
    /// - Registers the open workspace roots and records the active file.
    pub fn activate(&mut self, host: &impl Host) {
        let folders = host.workspace_folders();
        self.folders.add_folders(&folders);
        if let Some(active) = host.active_file() {
            self.recent.push(active);
        }
        tracing::info!(
            folders = self.folders.total_count(),
            capacity = self.recent.capacity().get(),
            "[Picker] Activated"
        );
    }

    /// Clear all tracked state.
    pub fn deactivate(&mut self) {
        self.recent.clear();
        self.folders.clear();
        tracing::info!("[Picker] Deactivated");
    }

    /// Dispatch one editor event.
    pub fn handle(&mut self, event: &EditorEvent) {
        match event {
            EditorEvent::ActiveEditorChanged { path } => {
                if let Some(path) = path {
                    self.file_activated(path);
                }
            }
            EditorEvent::FilesDeleted { files } => self.files_deleted(files),
            EditorEvent::FilesRenamed { files } => self.files_renamed(files),
            EditorEvent::WorkspaceFoldersChanged { added, removed } => {
                self.folders_changed(added, removed);
            }
        }
    }

    /// Record `path` as the most recently used file.
    pub fn file_activated(&mut self, path: &str) {
        tracing::trace!(path, "[Picker] File activated");
        self.recent.push(path);
    }

    /// Forget deleted on-disk files; other schemes are ignored.
    pub fn files_deleted(&mut self, files: &[Uri]) {
        for uri in files.iter().filter(|uri| uri.is_file()) {
            if self.recent.delete(&uri.path) {
                tracing::debug!(path = %uri.path, "[Picker] Dropped deleted file");
            }
        }
    }

    /// Follow renames of on-disk files, keeping their recency position.
    pub fn files_renamed(&mut self, files: &[FileRename]) {
        for rename in files.iter().filter(|rename| rename.old.is_file()) {
            if self.recent.replace(&rename.old.path, rename.new.path.as_str()) {
                tracing::debug!(
                    from = %rename.old.path,
                    to = %rename.new.path,
                    "[Picker] Followed rename"
                );
            }
        }
    }

    /// What: Apply a workspace roots change.
    ///
    /// Details:
    /// - Files owned by a removed root are dropped from the recent list. Owners are
    ///   looked up before the roots are unregistered.
    /// - Removals are applied before additions so a root that is re-added in the
    ///   same batch stays registered.
    pub fn folders_changed(&mut self, added: &[WorkspaceFolder], removed: &[WorkspaceFolder]) {
        if !removed.is_empty() {
            let stale: Vec<String> = self
                .recent
                .snapshot()
                .into_iter()
                .filter(|path| {
                    self.folders
                        .find_owning_folder(path)
                        .is_some_and(|owner| removed.iter().any(|r| r.path == owner.path))
                })
                .collect();
            for path in &stale {
                self.recent.delete(path);
            }
            self.folders.remove_folders(removed);
            tracing::debug!(
                removed = removed.len(),
                dropped_files = stale.len(),
                "[Picker] Workspace folders removed"
            );
        }
        if !added.is_empty() {
            self.folders.add_folders(added);
            tracing::debug!(added = added.len(), "[Picker] Workspace folders added");
        }
    }

    /// What: Picker labels, most recent first.
    ///
    /// Inputs:
    /// - `active`: File currently focused in the editor, if any.
    ///
    /// Output:
    /// - Labels for the tracked files, newest first, without the active file.
    ///
    /// Details:
    /// - The tracker keeps one extra slot for the active file. When nothing is
    ///   active (or the active document is not tracked) the oldest entries are
    ///   left out so the list never exceeds `recent_length`.
    pub fn items(&mut self, active: Option<&str>) -> Vec<String> {
        let list = self.recent.snapshot();
        let shown = self.recent.capacity().get() - 1;
        list.iter()
            .rev()
            .filter(|path| Some(path.as_str()) != active)
            .take(shown)
            .map(|path| format_label(&self.folders, path, &self.separator))
            .collect()
    }

    /// Absolute path for a label produced by [`RecentPicker::items`].
    #[must_use]
    pub fn resolve(&self, label: &str) -> String {
        resolve_label(&self.folders, label, &self.separator)
    }

    /// What: Run the picker against `host`.
    ///
    /// Output:
    /// - What happened; failures to open are reported through `host.show_error`
    ///   and never propagated.
    pub fn open(&mut self, host: &mut impl Host) -> PickOutcome {
        let active = host.active_file();
        let items = self.items(active.as_deref());
        tracing::debug!(count = items.len(), "[Picker] Showing recent files");
        let Some(label) = host.show_quick_pick(&items) else {
            return PickOutcome::Dismissed;
        };
        let path = self.resolve(&label);
        match host.open_document(&path) {
            Ok(()) => {
                tracing::info!(path = %path, "[Picker] Opened recent file");
                PickOutcome::Opened(path)
            }
            Err(e) => {
                let message = e.to_string();
                tracing::warn!(path = %path, error = %message, "[Picker] Failed to open file");
                host.show_error(&message);
                PickOutcome::Failed(message)
            }
        }
    }

    /// Current tracked files, oldest first (trims the tracker).
    pub fn recent_files(&mut self) -> Vec<String> {
        self.recent.snapshot()
    }

    /// Registered workspace roots.
    #[must_use]
    pub const fn folders(&self) -> &FolderIndex {
        &self.folders
    }
}

impl Drop for RecentPicker {
    fn drop(&mut self) {
        self.recent.clear();
        self.folders.clear();
    }
}
