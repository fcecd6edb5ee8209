//! Error types shared by the tracker, the picker and the replay driver.

use std::fmt;

/// What: Invalid configuration supplied at construction time.
///
/// Details:
/// - The only failure the core data structures can report; every other
///   misuse (deleting or renaming unknown paths) is a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Recency capacity must be at least one.
    InvalidCapacity {
        /// Rejected value.
        value: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCapacity { value } => {
                write!(f, "recent capacity must be at least 1 (got {value})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// What: Failure reported by a [`crate::host::Host`] when opening a document.
#[derive(Debug)]
pub enum HostError {
    /// The resolved path does not exist.
    NotFound {
        /// Absolute path that was requested.
        path: String,
    },
    /// Underlying I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { path } => write!(f, "cannot open {path}: file not found"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for HostError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<std::io::Error> for HostError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// What: Error type for replaying an event script.
///
/// Details:
/// - Decode errors keep the 1-based line number of the offending script line.
#[derive(Debug)]
pub enum ReplayError {
    /// Invalid picker configuration.
    Config(ConfigError),
    /// Reading the script or writing output failed.
    Io(std::io::Error),
    /// A script line was not a valid event.
    Decode {
        /// 1-based line number.
        line: usize,
        /// JSON decoding error.
        source: serde_json::Error,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "configuration error: {err}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::Decode { line, source } => write!(f, "line {line}: invalid event: {source}"),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::Decode { source, .. } => Some(source),
        }
    }
}

impl From<ConfigError> for ReplayError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<std::io::Error> for ReplayError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
