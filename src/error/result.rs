//! Result type alias and helpers for absorbing failures.

use super::folio_error::FolioError;

/// Type alias for Results using FolioError.
pub type FolioResult<T> = Result<T, FolioError>;

/// Extension trait for turning a failure into a logged, degraded outcome.
///
/// The UI never surfaces these errors; it logs them and carries on with a
/// fallback. This keeps that pattern in one place.
pub trait ResultExt<T> {
    /// Log the error at `warn` level and return `None`.
    fn absorb(self, operation: &str) -> Option<T>;

    /// Log the error at `warn` level and return `fallback`.
    fn absorb_or(self, operation: &str, fallback: T) -> T;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<FolioError>,
{
    fn absorb(self, operation: &str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                let err: FolioError = err.into();
                tracing::warn!(
                    code = err.error_code(),
                    category = %err.category(),
                    "{} failed: {}",
                    operation,
                    err
                );
                None
            }
        }
    }

    fn absorb_or(self, operation: &str, fallback: T) -> T {
        self.absorb(operation).unwrap_or(fallback)
    }
}
