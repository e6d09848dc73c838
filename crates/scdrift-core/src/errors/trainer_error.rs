//! Trainer errors: aggregates subsystem errors via `From` conversions.

use super::error_code::ScDriftErrorCode;
use super::{ConfigError, ModelError, ValidationError};

/// Errors that abort a stream-processing call.
#[derive(Debug, thiserror::Error)]
pub enum TrainerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl ScDriftErrorCode for TrainerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Model(e) => e.error_code(),
            Self::Validation(e) => e.error_code(),
        }
    }
}
