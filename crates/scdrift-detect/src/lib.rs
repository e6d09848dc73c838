//! # scdrift-detect
//!
//! Streaming drift statistics over a per-sample correctness signal.
//! Each detector implements [`DriftStatistic`] and is selected once, at
//! trainer construction, by [`DetectorKind`].

pub mod distance;
pub mod error_rate;
pub mod noop;

pub use distance::{DistanceBetweenErrorsDetector, DistanceState};
pub use error_rate::{ErrorRateDetector, ErrorRateState};
pub use noop::NoOpDetector;

use scdrift_core::config::DetectorKind;
use scdrift_core::errors::ConfigError;
use scdrift_core::traits::DriftStatistic;

/// Construct a fresh detector of the given kind.
pub fn build(kind: DetectorKind) -> Box<dyn DriftStatistic> {
    match kind {
        DetectorKind::None => Box::new(NoOpDetector),
        DetectorKind::ErrorRate => Box::new(ErrorRateDetector::new()),
        DetectorKind::DistanceBetweenErrors => Box::new(DistanceBetweenErrorsDetector::new()),
    }
}

/// Construct a fresh detector from a method name or alias (`ddm`, `eddm`, `none`, ...).
pub fn for_name(name: &str) -> Result<Box<dyn DriftStatistic>, ConfigError> {
    Ok(build(name.parse()?))
}
