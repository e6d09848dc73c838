//! # scdrift-trainer
//!
//! Drives an opaque classifier over a labeled stream, watches its
//! per-sample correctness with a [`DriftStatistic`](scdrift_core::DriftStatistic),
//! and rebuilds the model from the next regime's instances when drift fires.

pub mod adapter;
pub mod prequential;
pub mod trainer;
pub mod window;

pub use adapter::StreamingClassifierAdapter;
pub use prequential::PrequentialAccuracy;
pub use trainer::{DriftAwareTrainer, TrainerStats};
pub use window::RegimeWindows;
