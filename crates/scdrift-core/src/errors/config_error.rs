//! Configuration errors.

use super::error_code::{self, ScDriftErrorCode};

/// Errors that can occur during configuration loading, validation, and
/// trainer assembly.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No base classifier has been set")]
    MissingBaseModel,

    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl ScDriftErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingBaseModel => error_code::MISSING_BASE_MODEL,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
