//! ScDriftErrorCode trait for stable, machine-readable error codes.

/// Every error enum provides a structured code string so telemetry
/// consumers can group failures without parsing messages.
pub trait ScDriftErrorCode {
    /// Returns the error code string (e.g., "MODEL_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const MISSING_BASE_MODEL: &str = "MISSING_BASE_MODEL";
pub const MODEL_ERROR: &str = "MODEL_ERROR";
pub const MODEL_NOT_TRAINED: &str = "MODEL_NOT_TRAINED";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
