//! Error handling for scdrift.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod model_error;
pub mod trainer_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use error_code::ScDriftErrorCode;
pub use model_error::ModelError;
pub use trainer_error::TrainerError;
pub use validation_error::ValidationError;
