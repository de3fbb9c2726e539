//! Content store: the read-only tree of portfolio files.
//!
//! Lookups are pure. An unknown path is reported as `None` (or a
//! [`ContentError`](crate::error::ContentError) from `resolve_text`), never a panic.

mod language;
mod portfolio;
mod translations;
mod tree;

pub use language::Language;
pub use portfolio::{portfolio_tree, DEFAULT_FILE_PATH, GIT_HISTORY_PATH};
pub use translations::TranslationTable;
pub use tree::{flatten_files, ContentNode, ContentStore, NodeKind, COMPONENT_PREFIX};
