//! Command-line and environment configuration errors.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("option '{flag}' requires a value")]
    MissingValue { flag: String },

    #[error("invalid value '{value}' for '{flag}' (expected {expected})")]
    InvalidValue {
        flag: String,
        value: String,
        expected: &'static str,
    },

    #[error("unexpected argument '{0}'")]
    UnexpectedArgument(String),

    #[error("'export' needs a content path, e.g. /portfolio/about.ts")]
    MissingExportPath,
}

impl ConfigError {
    pub fn user_message(&self) -> String {
        format!("{}\nRun 'codefolio --help' for usage.", self)
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::UnknownOption(_) => "CFG_UNKNOWN_OPTION",
            ConfigError::MissingValue { .. } => "CFG_MISSING_VALUE",
            ConfigError::InvalidValue { .. } => "CFG_INVALID_VALUE",
            ConfigError::UnexpectedArgument(_) => "CFG_UNEXPECTED_ARG",
            ConfigError::MissingExportPath => "CFG_MISSING_EXPORT_PATH",
        }
    }
}
