//! # scdrift-core
//!
//! Foundation crate for drift-aware stream training.
//! Defines the stream data model, the detector and classifier traits,
//! errors, config, events, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::ScDriftConfig;
pub use errors::{ConfigError, ModelError, TrainerError, ValidationError};
pub use traits::{Classifier, ClassifierFactory, DriftStatistic};
pub use types::{ClassDistribution, Dataset, DatasetSchema, Instance, Label, Level};
