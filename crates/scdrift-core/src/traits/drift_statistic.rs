use std::fmt::Debug;

use crate::errors::ValidationError;
use crate::types::Level;

/// Stateful, resettable streaming estimator over prediction outcomes.
///
/// `update` must be called exactly once per stream instance, in stream
/// order, with no observation skipped or replayed.
pub trait DriftStatistic: Send + Debug {
    /// Short identifier used in logs and events.
    fn name(&self) -> &'static str;

    /// Reset all internal state to the construction-time values.
    fn initialize(&mut self);

    /// Consume one `(correct, confidence)` observation and return the level.
    ///
    /// A confidence that is NaN or outside `[0, 1]` is rejected before any
    /// state changes.
    fn update(&mut self, correct: bool, confidence: f64) -> Result<Level, ValidationError>;
}

impl<T: DriftStatistic + ?Sized> DriftStatistic for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn initialize(&mut self) {
        (**self).initialize()
    }

    fn update(&mut self, correct: bool, confidence: f64) -> Result<Level, ValidationError> {
        (**self).update(correct, confidence)
    }
}
