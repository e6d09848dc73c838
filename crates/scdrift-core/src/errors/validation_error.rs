//! Input validation errors.

use super::error_code::{self, ScDriftErrorCode};

/// Malformed observations or instances that violate the stream schema.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Confidence {value} is outside [0, 1]")]
    InvalidConfidence { value: f64 },

    #[error("Instance has {actual} features, schema expects {expected}")]
    FeatureCountMismatch { expected: usize, actual: usize },

    #[error("Label {label} is out of range for {num_classes} classes")]
    LabelOutOfRange { label: usize, num_classes: usize },
}

impl ScDriftErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        error_code::VALIDATION_ERROR
    }
}

/// Reject NaN and anything outside the closed unit interval.
pub fn check_confidence(value: f64) -> Result<(), ValidationError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidConfidence { value })
    }
}
