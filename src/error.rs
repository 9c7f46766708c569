//! Crate error type
//!
//! The simulation itself cannot fail; errors only come from loading and
//! validating configuration.

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ReefError {
    /// A settings file could not be read
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Settings JSON was malformed or had the wrong shape
    Parse(serde_json::Error),
    /// Settings parsed but describe a game that cannot run
    InvalidSettings {
        /// Offending field, dotted for nested settings
        field: &'static str,
        reason: String,
    },
}

impl fmt::Display for ReefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReefError::Io { path, source } => {
                write!(f, "failed to read settings from {}: {}", path.display(), source)
            }
            ReefError::Parse(e) => write!(f, "invalid settings JSON: {}", e),
            ReefError::InvalidSettings { field, reason } => {
                write!(f, "invalid setting '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for ReefError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReefError::Io { source, .. } => Some(source),
            ReefError::Parse(e) => Some(e),
            ReefError::InvalidSettings { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ReefError {
    fn from(e: serde_json::Error) -> Self {
        ReefError::Parse(e)
    }
}
