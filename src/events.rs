//! Editor lifecycle events consumed by [`crate::picker::RecentPicker`].

use serde::{Deserialize, Serialize};

use crate::workspace::WorkspaceFolder;

/// Scheme of on-disk files; other schemes (untitled, git, ...) are not tracked.
pub const FILE_SCHEME: &str = "file";

/// A resource location as reported by the editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uri {
    /// URI scheme, e.g. `file`.
    #[serde(default = "default_scheme")]
    pub scheme: String,
    /// Absolute path component.
    pub path: String,
}

impl Uri {
    /// A `file` URI for `path`.
    #[must_use]
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            scheme: FILE_SCHEME.to_string(),
            path: path.into(),
        }
    }

    /// Whether this URI points at an on-disk file.
    #[must_use]
    pub fn is_file(&self) -> bool {
        self.scheme == FILE_SCHEME
    }
}

/// Serde default for [`Uri::scheme`].
fn default_scheme() -> String {
    FILE_SCHEME.to_string()
}

/// One entry of a rename batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRename {
    /// Location before the rename.
    pub old: Uri,
    /// Location after the rename.
    pub new: Uri,
}

/// What: Editor notifications translated into tracker and registry updates.
///
/// Details:
/// - Serialized as internally tagged JSON (`{"event": "files_deleted", ...}`) so
///   event scripts can be written by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EditorEvent {
    /// The active editor changed; `None` when no editor has focus.
    ActiveEditorChanged {
        /// Path of the newly focused document.
        #[serde(default)]
        path: Option<String>,
    },
    /// Files were deleted.
    FilesDeleted {
        /// Deleted resources.
        files: Vec<Uri>,
    },
    /// Files were renamed or moved.
    FilesRenamed {
        /// Rename pairs.
        files: Vec<FileRename>,
    },
    /// Workspace roots were added and/or removed.
    WorkspaceFoldersChanged {
        /// Newly opened roots.
        #[serde(default)]
        added: Vec<WorkspaceFolder>,
        /// Closed roots.
        #[serde(default)]
        removed: Vec<WorkspaceFolder>,
    },
}
