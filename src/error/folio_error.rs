//! Unified error type for codefolio.
//!
//! `FolioError` consolidates the domain errors so callers can categorize,
//! log and present them consistently.

use std::fmt;

use super::category::ErrorCategory;
use super::config::ConfigError;
use super::content::ContentError;
use super::highlight::HighlightError;
use super::storage::StorageError;

#[derive(Debug)]
pub enum FolioError {
    /// Content lookup failures.
    Content(ContentError),

    /// Syntax highlighting failures.
    Highlight(HighlightError),

    /// Preference storage failures.
    Storage(StorageError),

    /// Argument and environment failures.
    Config(ConfigError),

    /// Terminal and other I/O failures.
    Io(std::io::Error),
}

impl FolioError {
    /// Get the category of this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            FolioError::Content(_) => ErrorCategory::Content,
            FolioError::Highlight(_) => ErrorCategory::Highlight,
            FolioError::Storage(_) => ErrorCategory::Storage,
            FolioError::Config(_) => ErrorCategory::Configuration,
            FolioError::Io(_) => ErrorCategory::System,
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            FolioError::Content(err) => err.user_message(),
            FolioError::Highlight(err) => err.to_string(),
            FolioError::Storage(err) => err.user_message(),
            FolioError::Config(err) => err.user_message(),
            FolioError::Io(err) => format!("I/O error: {}", err),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FolioError::Content(err) => err.error_code(),
            FolioError::Highlight(err) => err.error_code(),
            FolioError::Storage(err) => err.error_code(),
            FolioError::Config(err) => err.error_code(),
            FolioError::Io(_) => "IO",
        }
    }
}

impl fmt::Display for FolioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolioError::Content(err) => write!(f, "{}", err),
            FolioError::Highlight(err) => write!(f, "{}", err),
            FolioError::Storage(err) => write!(f, "{}", err),
            FolioError::Config(err) => write!(f, "{}", err),
            FolioError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for FolioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FolioError::Content(err) => Some(err),
            FolioError::Highlight(err) => Some(err),
            FolioError::Storage(err) => Some(err),
            FolioError::Config(err) => Some(err),
            FolioError::Io(err) => Some(err),
        }
    }
}

// ============================================================================
// From implementations for automatic error conversion
// ============================================================================

impl From<ContentError> for FolioError {
    fn from(err: ContentError) -> Self {
        FolioError::Content(err)
    }
}

impl From<HighlightError> for FolioError {
    fn from(err: HighlightError) -> Self {
        FolioError::Highlight(err)
    }
}

impl From<StorageError> for FolioError {
    fn from(err: StorageError) -> Self {
        FolioError::Storage(err)
    }
}

impl From<ConfigError> for FolioError {
    fn from(err: ConfigError) -> Self {
        FolioError::Config(err)
    }
}

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        FolioError::Io(err)
    }
}
