//! Error category classification.
//!
//! Categories drive how a failure is absorbed: most of them degrade the UI
//! to a fallback rendering instead of reaching the user.

use std::fmt;

/// High-level categorization of errors for handling decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// A content path that is not in the store.
    Content,

    /// The syntax highlighter could not produce output.
    Highlight,

    /// Preference storage could not be read or written.
    Storage,

    /// Invalid command-line arguments or environment.
    Configuration,

    /// Terminal or OS level failure.
    System,
}

impl ErrorCategory {
    /// Returns true if the UI can keep running with a degraded rendering.
    pub fn is_absorbable(&self) -> bool {
        matches!(
            self,
            ErrorCategory::Content | ErrorCategory::Highlight | ErrorCategory::Storage
        )
    }

    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Content => "content",
            ErrorCategory::Highlight => "highlight",
            ErrorCategory::Storage => "storage",
            ErrorCategory::Configuration => "configuration",
            ErrorCategory::System => "system",
        }
    }

    /// Returns a user-friendly description of the category.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Content => "Content not available",
            ErrorCategory::Highlight => "Syntax highlighting unavailable",
            ErrorCategory::Storage => "Preferences unavailable",
            ErrorCategory::Configuration => "Configuration problem",
            ErrorCategory::System => "System error",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absorbable_categories() {
        assert!(ErrorCategory::Content.is_absorbable());
        assert!(ErrorCategory::Highlight.is_absorbable());
        assert!(ErrorCategory::Storage.is_absorbable());
        assert!(!ErrorCategory::Configuration.is_absorbable());
        assert!(!ErrorCategory::System.is_absorbable());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(ErrorCategory::Storage.to_string(), "storage");
        assert_eq!(format!("{}", ErrorCategory::System), "system");
    }
}
