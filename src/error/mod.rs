//! Unified error handling for codefolio.
//!
//! - **Error Categories**: classification used to decide how a failure is absorbed
//! - **Domain-specific Errors**: content, highlight, storage and configuration
//! - **Unified Error Type**: `FolioError` consolidates all error types
//! - **Result Type Alias**: `FolioResult<T>`
//!
//! | Category | Description | Absorbed |
//! |----------|-------------|----------|
//! | Content | Unknown content path | Yes, "File not found" placeholder |
//! | Highlight | Highlighter failed | Yes, raw text |
//! | Storage | Preferences unreadable | Yes, first-run defaults |
//! | Configuration | Bad CLI flags | No |
//! | System | Terminal I/O | No |

mod category;
mod config;
mod content;
mod folio_error;
mod highlight;
mod result;
mod storage;

pub use category::ErrorCategory;
pub use config::ConfigError;
pub use content::ContentError;
pub use folio_error::FolioError;
pub use highlight::HighlightError;
pub use result::{FolioResult, ResultExt};
pub use storage::StorageError;
