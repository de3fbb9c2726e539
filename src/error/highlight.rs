//! Syntax highlighter errors.

use thiserror::Error;

/// Failure reported by a [`Highlighter`](crate::highlight::Highlighter).
///
/// Cloneable so it can travel inside an `AppMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HighlightError {
    /// The highlighter ran but produced no usable output.
    #[error("highlighting failed: {message}")]
    Failed { message: String },

    /// The highlighting task was dropped before it finished.
    #[error("highlighting task cancelled")]
    Cancelled,
}

impl HighlightError {
    pub fn error_code(&self) -> &'static str {
        match self {
            HighlightError::Failed { .. } => "HL_FAILED",
            HighlightError::Cancelled => "HL_CANCELLED",
        }
    }
}
