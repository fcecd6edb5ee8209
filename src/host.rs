//! Boundary to the editor hosting the picker.

use crate::error::HostError;
use crate::workspace::WorkspaceFolder;

/// What: Editor capabilities the picker relies on.
///
/// Details:
/// - Implemented by the embedding editor integration; [`crate::replay::ScriptHost`]
///   is the in-crate implementation used by the CLI and tests.
pub trait Host {
    /// Path of the document in the focused editor, if any.
    fn active_file(&self) -> Option<String>;

    /// Workspace roots open at activation time.
    fn workspace_folders(&self) -> Vec<WorkspaceFolder>;

    /// What: Present `items` to the user and return the chosen one.
    ///
    /// Output:
    /// - `None` when the user dismisses the picker.
    fn show_quick_pick(&mut self, items: &[String]) -> Option<String>;

    /// What: Open the document at the absolute `path`.
    ///
    /// # Errors
    /// - Returns `Err` when the document cannot be opened.
    fn open_document(&mut self, path: &str) -> Result<(), HostError>;

    /// Display an error message to the user.
    fn show_error(&mut self, message: &str);
}
