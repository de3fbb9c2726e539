//! Startup configuration.
//!
//! Environment first, then command-line flags on top.

use std::path::{Path, PathBuf};

use crate::cli::args::{CliCommand, TuiArgs};
use crate::content::{Language, DEFAULT_FILE_PATH};
use crate::theme::Theme;

pub const ENV_PREFS: &str = "CODEFOLIO_PREFS";
pub const ENV_NO_PERSIST: &str = "CODEFOLIO_NO_PERSIST";
pub const ENV_LOG: &str = "CODEFOLIO_LOG";

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuration for an interactive run.
///
/// # Example
///
/// ```ignore
/// use codefolio::startup::StartupConfig;
///
/// let config = StartupConfig::default()
///     .with_persist(false)
///     .with_initial_file("/portfolio/skills.ts");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// Preference file; `None` means the platform default.
    pub prefs_path: Option<PathBuf>,
    /// Read and write the preference file at all.
    pub persist: bool,
    /// `tracing` filter directive.
    pub log_filter: String,
    /// Content path opened first.
    pub initial_file: String,
    /// Theme forced for this run, overriding the stored one.
    pub theme: Option<Theme>,
    pub language: Language,
    /// Show the welcome screen even if `welcomed` is set.
    pub force_welcome: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            prefs_path: None,
            persist: true,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            initial_file: DEFAULT_FILE_PATH.to_string(),
            theme: None,
            language: Language::default(),
            force_welcome: false,
        }
    }
}

fn env_flag(value: &str) -> bool {
    !matches!(value.trim().to_ascii_lowercase().as_str(), "" | "0" | "false" | "no")
}

impl StartupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefs_path(mut self, path: impl AsRef<Path>) -> Self {
        self.prefs_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_initial_file(mut self, path: impl Into<String>) -> Self {
        self.initial_file = path.into();
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn with_force_welcome(mut self, force: bool) -> Self {
        self.force_welcome = force;
        self
    }

    /// Create config from the `CODEFOLIO_*` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(path) = std::env::var(ENV_PREFS) {
            if !path.trim().is_empty() {
                config = config.with_prefs_path(path.trim());
            }
        }
        if let Ok(value) = std::env::var(ENV_NO_PERSIST) {
            config = config.with_persist(!env_flag(&value));
        }
        if let Ok(filter) = std::env::var(ENV_LOG) {
            if !filter.trim().is_empty() {
                config = config.with_log_filter(filter.trim());
            }
        }
        config
    }

    /// Layer interactive-run flags over this config.
    pub fn apply_args(mut self, args: &TuiArgs) -> Self {
        if let Some(path) = &args.prefs {
            self = self.with_prefs_path(path);
        }
        if args.no_persist {
            self = self.with_persist(false);
        }
        if let Some(filter) = &args.log {
            self = self.with_log_filter(filter.clone());
        }
        if let Some(file) = &args.file {
            self = self.with_initial_file(file.clone());
        }
        if let Some(theme) = args.theme {
            self = self.with_theme(theme);
        }
        if let Some(language) = args.language {
            self = self.with_language(language);
        }
        if args.welcome {
            self = self.with_force_welcome(true);
        }
        self
    }

    /// Layer whatever part of `command` affects startup.
    pub fn for_command(self, command: &CliCommand) -> Self {
        match command {
            CliCommand::RunTui(args) => self.apply_args(args),
            CliCommand::Reset { prefs: Some(path) } => self.with_prefs_path(path),
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [ENV_PREFS, ENV_NO_PERSIST, ENV_LOG] {
            std::env::remove_var(key);
        }
    }

    #[test]
    fn test_startup_config_default() {
        let config = StartupConfig::default();
        assert!(config.persist);
        assert_eq!(config.initial_file, DEFAULT_FILE_PATH);
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.theme, None);
        assert!(!config.force_welcome);
    }

    #[test]
    fn test_startup_config_builder() {
        let config = StartupConfig::default()
            .with_persist(false)
            .with_theme(Theme::Light)
            .with_language(Language::Cpp);
        assert!(!config.persist);
        assert_eq!(config.theme, Some(Theme::Light));
        assert_eq!(config.language, Language::Cpp);
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variables() {
        clear_env();
        std::env::set_var(ENV_PREFS, "/tmp/codefolio-test.json");
        std::env::set_var(ENV_NO_PERSIST, "1");
        std::env::set_var(ENV_LOG, "debug");
        let config = StartupConfig::from_env();
        clear_env();

        assert_eq!(config.prefs_path, Some(PathBuf::from("/tmp/codefolio-test.json")));
        assert!(!config.persist);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    #[serial]
    fn test_from_env_false_values_keep_persistence() {
        clear_env();
        std::env::set_var(ENV_NO_PERSIST, "false");
        let config = StartupConfig::from_env();
        clear_env();
        assert!(config.persist);
    }

    #[test]
    fn test_args_override_env() {
        let base = StartupConfig::default().with_log_filter("warn");
        let args = TuiArgs {
            log: Some("trace".to_string()),
            welcome: true,
            file: Some("/portfolio/values.ts".to_string()),
            ..TuiArgs::default()
        };
        let config = base.apply_args(&args);
        assert_eq!(config.log_filter, "trace");
        assert!(config.force_welcome);
        assert_eq!(config.initial_file, "/portfolio/values.ts");
    }
}
