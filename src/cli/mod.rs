//! CLI module for codefolio.
//!
//! The dispatcher runs early in `main()`, before the terminal is touched:
//!
//! ```ignore
//! use codefolio::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args())?;
//! if let Some(result) = run_cli_command(&command, &config) {
//!     return result;
//! }
//! // No CLI command, continue to TUI
//! ```

pub mod args;
pub mod version;

pub use args::{parse_args, CliCommand, ExportArgs, TuiArgs};
pub use version::{version_line, USAGE, VERSION};

use color_eyre::Result;

use crate::content::ContentStore;
use crate::export::run_export;
use crate::startup::{open_preferences, StartupConfig};

/// Run a CLI command if applicable.
///
/// # Returns
///
/// * `None` - If the command is `RunTui` (no CLI action needed)
/// * `Some(Ok(()))` - If a CLI command executed successfully
/// * `Some(Err(e))` - If a CLI command failed
pub fn run_cli_command(command: &CliCommand, config: &StartupConfig) -> Option<Result<()>> {
    match command {
        CliCommand::Version => {
            println!("{}", version_line());
            Some(Ok(()))
        }
        CliCommand::Help => {
            print!("{}", USAGE);
            Some(Ok(()))
        }
        CliCommand::Reset { .. } => {
            let mut prefs = open_preferences(config);
            prefs.reset();
            println!("Preferences reset.");
            Some(Ok(()))
        }
        CliCommand::Export(args) => {
            let store = ContentStore::portfolio();
            Some(run_export(args, &store).map_err(|err| color_eyre::eyre::eyre!(err.user_message())))
        }
        CliCommand::RunTui(_) => None,
    }
}
