//! Configuration system for scdrift.
//! TOML-based, layered resolution: env > project > user > defaults.

pub mod detector_config;
pub mod scdrift_config;
pub mod telemetry_config;
pub mod trainer_config;

pub use detector_config::{DetectorConfig, DetectorKind};
pub use scdrift_config::ScDriftConfig;
pub use telemetry_config::TelemetryConfig;
pub use trainer_config::TrainerConfig;
