//! Prequential (test-then-train) accuracy.

use serde::Serialize;

/// Running accuracy over interleaved predict/learn steps.
///
/// Starts at `1.0` with a count of one. Each observation first increments
/// the count, then moves the value toward 1 on a correct prediction or
/// toward 0 on an error by `1/count` of the remaining distance.
///
/// This is the inverse of the error-rate form (`acc - acc/n` on success),
/// so a stream of correct predictions stays at `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrequentialAccuracy {
    value: f64,
    count: u64,
}

impl PrequentialAccuracy {
    pub const INITIAL: PrequentialAccuracy = PrequentialAccuracy {
        value: 1.0,
        count: 1,
    };

    pub fn new() -> Self {
        Self::INITIAL
    }

    pub fn record(&mut self, correct: bool) {
        self.count += 1;
        let n = self.count as f64;
        if correct {
            self.value += (1.0 - self.value) / n;
        } else {
            self.value -= self.value / n;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::INITIAL;
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

impl Default for PrequentialAccuracy {
    fn default() -> Self {
        Self::INITIAL
    }
}
