//! Registry of workspace root folders used to build short file labels.
//!
//! Several roots may share the same display name (e.g. two checkouts both
//! called `proj`). The registry keeps a live count per name so label
//! formatting can tell unique names from colliding ones.

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A workspace root folder as reported by the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceFolder {
    /// Position of the folder in the editor's workspace.
    #[serde(default)]
    pub index: usize,
    /// Display name.
    pub name: String,
    /// Absolute root path.
    pub path: String,
}

impl WorkspaceFolder {
    /// Convenience constructor.
    #[must_use]
    pub fn new(index: usize, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            index,
            name: name.into(),
            path: path.into(),
        }
    }
}

/// What: Folders keyed by root path, plus a per-name live count.
///
/// Details:
/// - Insertion order is preserved; re-adding a known path overwrites the entry
///   in place without moving it.
/// - `name_counts[name]` always equals the number of registered folders with
///   that name; names with no folders are absent, never stored as zero.
#[derive(Debug, Default, Clone)]
pub struct FolderIndex {
    /// Folders by root path, in insertion order.
    folders: IndexMap<String, WorkspaceFolder>,
    /// Live count of folders per display name.
    name_counts: HashMap<String, usize>,
}

impl FolderIndex {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Register (or overwrite) folders.
    ///
    /// Inputs:
    /// - `folders`: Folders to upsert, keyed by `path`.
    ///
    /// Details:
    /// - Idempotent per path: when a path is already registered, the previous
    ///   entry's name is released before the new one is counted, so re-adding a
    ///   folder never inflates its name count.
    pub fn add_folders<'a, I>(&mut self, folders: I)
    where
        I: IntoIterator<Item = &'a WorkspaceFolder>,
    {
        for folder in folders {
            if let Some(previous) = self.folders.insert(folder.path.clone(), folder.clone()) {
                self.release_name(&previous.name);
            }
            *self.name_counts.entry(folder.name.clone()).or_insert(0) += 1;
        }
    }

    /// What: Unregister folders by path.
    ///
    /// Details:
    /// - Unknown paths are ignored and leave the name counts untouched.
    /// - The name released is the one stored for the path, not the one passed in.
    pub fn remove_folders<'a, I>(&mut self, folders: I)
    where
        I: IntoIterator<Item = &'a WorkspaceFolder>,
    {
        for folder in folders {
            if let Some(previous) = self.folders.shift_remove(folder.path.as_str()) {
                self.release_name(&previous.name);
            }
        }
    }

    /// What: Find the folder that contains `file_path`.
    ///
    /// Output:
    /// - The first folder, in insertion order, whose root path is a string prefix of `file_path`.
    ///
    /// Details:
    /// - Plain string prefix, not path-segment aware: `/a/b` also owns `/a/bc/d`.
    #[must_use]
    pub fn find_owning_folder(&self, file_path: &str) -> Option<&WorkspaceFolder> {
        self.folders
            .values()
            .find(|folder| file_path.starts_with(folder.path.as_str()))
    }

    /// First registered folder with the given name.
    #[must_use]
    pub fn find_folder_by_name(&self, name: &str) -> Option<&WorkspaceFolder> {
        self.folders.values().find(|folder| folder.name == name)
    }

    /// Number of registered folders named `name` (0 when none).
    #[must_use]
    pub fn count_by_name(&self, name: &str) -> usize {
        self.name_counts.get(name).copied().unwrap_or(0)
    }

    /// Number of registered folders.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.folders.len()
    }

    /// All folders in insertion order.
    pub fn list_all(&self) -> impl Iterator<Item = &WorkspaceFolder> {
        self.folders.values()
    }

    /// Remove every folder and name count.
    pub fn clear(&mut self) {
        self.folders.clear();
        self.name_counts.clear();
    }

    /// Decrement the count for `name`, dropping the key when it reaches zero.
    fn release_name(&mut self, name: &str) {
        if let Some(count) = self.name_counts.get_mut(name) {
            if *count > 1 {
                *count -= 1;
            } else {
                self.name_counts.remove(name);
            }
        }
    }
}
