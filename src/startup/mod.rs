//! Startup wiring.
//!
//! - [`config`] - environment and flag driven configuration
//! - [`logging`] - file-backed `tracing` subscriber
//!
//! Also builds the preference store the configuration asks for.

pub mod config;
pub mod logging;

pub use config::StartupConfig;
pub use logging::{default_log_path, init_logging};

use crate::error::ResultExt;
use crate::preferences::Preferences;
use crate::storage::{default_prefs_path, FileStore, MemoryStore};

/// Open preferences as configured. Falls back to memory when persistence is
/// off or no config directory exists.
pub fn open_preferences(config: &StartupConfig) -> Preferences {
    if !config.persist {
        tracing::info!("preferences kept in memory");
        return Preferences::new(Box::new(MemoryStore::new()));
    }
    let path = match &config.prefs_path {
        Some(path) => Some(path.clone()),
        None => default_prefs_path().absorb("locate preference file"),
    };
    match path {
        Some(path) => Preferences::new(Box::new(FileStore::open(path))),
        None => Preferences::new(Box::new(MemoryStore::new())),
    }
}
