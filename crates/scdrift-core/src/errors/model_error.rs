//! Errors propagated from the wrapped classifier.

use super::error_code::{self, ScDriftErrorCode};

/// Failures of the opaque base model. The trainer never interprets the cause.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Training failed: {reason}")]
    TrainingFailed { reason: String },

    #[error("Prediction failed: {reason}")]
    PredictionFailed { reason: String },

    #[error("Incremental update failed: {reason}")]
    UpdateFailed { reason: String },

    #[error("Classifier {model} does not support incremental updates")]
    UpdateUnsupported { model: String },

    #[error("No model built yet")]
    NotTrained,
}

impl ScDriftErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotTrained => error_code::MODEL_NOT_TRAINED,
            _ => error_code::MODEL_ERROR,
        }
    }
}
