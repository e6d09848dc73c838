//! Detector used when drift detection is disabled.

use scdrift_core::errors::validation_error::check_confidence;
use scdrift_core::errors::ValidationError;
use scdrift_core::traits::DriftStatistic;
use scdrift_core::types::Level;

/// Always in control. Holds no state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpDetector;

impl DriftStatistic for NoOpDetector {
    fn name(&self) -> &'static str {
        "none"
    }

    fn initialize(&mut self) {}

    fn update(&mut self, _correct: bool, confidence: f64) -> Result<Level, ValidationError> {
        check_confidence(confidence)?;
        Ok(Level::InControl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_in_control() {
        let mut detector = NoOpDetector;
        for i in 0..200 {
            let level = detector.update(i % 3 == 0, 0.5).unwrap();
            assert_eq!(level, Level::InControl);
        }
    }

    #[test]
    fn still_validates_confidence() {
        assert!(NoOpDetector.update(true, 2.0).is_err());
    }
}
