//! Preference storage errors.

use std::path::PathBuf;
use thiserror::Error;

/// Failure reading or writing the preference file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// No platform configuration directory could be determined.
    #[error("could not determine a configuration directory")]
    NoConfigDirectory,

    /// Filesystem failure.
    #[error("failed to {operation} '{}': {source}", path.display())]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but is not a JSON object of strings.
    #[error("malformed preference file '{}': {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StorageError {
    pub fn io(operation: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            operation,
            path: path.into(),
            source,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            StorageError::NoConfigDirectory => {
                "Preferences will not be saved: no configuration directory".to_string()
            }
            StorageError::Io { operation, path, .. } => {
                format!("Could not {} preferences at '{}'", operation, path.display())
            }
            StorageError::Malformed { path, .. } => {
                format!("Ignoring unreadable preferences at '{}'", path.display())
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            StorageError::NoConfigDirectory => "STORE_NO_DIR",
            StorageError::Io { .. } => "STORE_IO",
            StorageError::Malformed { .. } => "STORE_MALFORMED",
        }
    }
}
