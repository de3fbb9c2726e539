//! File logging.
//!
//! The terminal belongs to the UI, so log output goes to
//! `<data dir>/codefolio/codefolio.log`.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use super::config::DEFAULT_LOG_FILTER;

const LOG_DIR: &str = "codefolio";
const LOG_FILE: &str = "codefolio.log";

pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(LOG_DIR).join(LOG_FILE))
}

/// Parse `filter`, falling back to the default directive if it is invalid.
pub fn build_filter(filter: &str) -> EnvFilter {
    EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the global subscriber writing to `path`.
///
/// A second call in the same process is ignored.
pub fn init_logging(path: &Path, filter: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();
    tracing::info!("codefolio v{} starting", env!("CARGO_PKG_VERSION"));
    Ok(())
}
