//! Content lookup errors.

use thiserror::Error;

/// Failure to resolve a path in the content tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    /// No node exists at the path.
    #[error("no content at '{path}'")]
    NotFound { path: String },

    /// The path names a folder where a file was required.
    #[error("'{path}' is a folder")]
    NotAFile { path: String },
}

impl ContentError {
    pub fn user_message(&self) -> String {
        match self {
            ContentError::NotFound { path } => format!("File not found: {}", path),
            ContentError::NotAFile { path } => format!("{} is a folder, not a file", path),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ContentError::NotFound { .. } => "CONTENT_NOT_FOUND",
            ContentError::NotAFile { .. } => "CONTENT_NOT_A_FILE",
        }
    }
}
