//! Library entry for recent-picker: a bounded recent-files list with
//! workspace-aware short labels, plus the session glue used by the binary.

pub mod args;
pub mod error;
pub mod events;
pub mod host;
pub mod label;
pub mod picker;
pub mod recent;
pub mod replay;
pub mod settings;
pub mod util;
pub mod workspace;

pub use error::{ConfigError, HostError, ReplayError};
pub use picker::{PickOutcome, RecentPicker};
pub use recent::RecencyTracker;
pub use workspace::{FolderIndex, WorkspaceFolder};
