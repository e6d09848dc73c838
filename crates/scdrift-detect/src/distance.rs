//! Distance-between-errors drift statistic (EDDM).
//!
//! Models the spacing between consecutive prediction errors. While the
//! learner improves, errors spread out and `mean + 2·std` of the distance
//! grows; the largest value seen is kept as the reference. Drift shows up as
//! errors bunching together, i.e. the current `mean + 2·std` shrinking below
//! 95% (warning) or 90% (drift) of that reference.

use serde::Serialize;
use tracing::trace;

use scdrift_core::constants::{
    DISTANCE_DRIFT_RATIO, DISTANCE_WARNING_RATIO, MIN_NUM_ERRORS, MIN_NUM_INSTANCES,
};
use scdrift_core::errors::validation_error::check_confidence;
use scdrift_core::errors::ValidationError;
use scdrift_core::traits::DriftStatistic;
use scdrift_core::types::Level;

/// Snapshot of the detector's internal counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DistanceState {
    /// Observations seen, starting at 1.
    pub n: u64,
    pub num_errors: u64,
    /// Stream position of the error before the most recent one.
    pub last_d: u64,
    /// Stream position of the most recent error.
    pub d: u64,
    /// Running mean of inter-error distances.
    pub mean: f64,
    /// Welford sum of squared deviations of inter-error distances.
    pub sum_sq: f64,
    /// Largest `mean + 2·std` recorded after warm-up.
    pub m2s_max: f64,
    pub last_level: Level,
}

impl DistanceState {
    /// Construction-time values.
    pub const INITIAL: DistanceState = DistanceState {
        n: 1,
        num_errors: 0,
        last_d: 0,
        d: 0,
        mean: 0.0,
        sum_sq: 0.0,
        m2s_max: 0.0,
        last_level: Level::InControl,
    };

    /// Standard deviation of inter-error distances; zero before the first error.
    pub fn std_dev(&self) -> f64 {
        if self.num_errors == 0 {
            return 0.0;
        }
        (self.sum_sq / self.num_errors as f64).sqrt()
    }

    /// Current `mean + 2·std` of inter-error distances.
    pub fn m2s(&self) -> f64 {
        self.mean + 2.0 * self.std_dev()
    }
}

impl Default for DistanceState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// EDDM-style detector over distances between consecutive errors.
#[derive(Debug, Clone, Default)]
pub struct DistanceBetweenErrorsDetector {
    state: DistanceState,
}

impl DistanceBetweenErrorsDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DistanceState {
        self.state
    }

    fn record_error(&mut self) -> Level {
        let st = &mut self.state;
        st.num_errors += 1;
        st.last_d = st.d;
        st.d = st.n - 1;
        let distance = (st.d - st.last_d) as f64;

        let old_mean = st.mean;
        st.mean += (distance - st.mean) / st.num_errors as f64;
        st.sum_sq += (distance - st.mean) * (distance - old_mean);
        let m2s = st.m2s();

        trace!(
            n = st.n,
            num_errors = st.num_errors,
            distance,
            mean = st.mean,
            m2s,
            m2s_max = st.m2s_max,
            "error distance update"
        );

        if m2s > st.m2s_max {
            // The two guards are independent: the reference only moves after
            // warm-up, but the level is in control either way.
            if st.n > MIN_NUM_INSTANCES {
                st.m2s_max = m2s;
            }
            st.last_level = Level::InControl;
            return Level::InControl;
        }

        let ratio = m2s / st.m2s_max;
        let enough = st.n > MIN_NUM_INSTANCES && st.num_errors > MIN_NUM_ERRORS;
        if enough && ratio < DISTANCE_DRIFT_RATIO {
            self.initialize();
            Level::OutOfControl
        } else if enough && ratio < DISTANCE_WARNING_RATIO {
            st.last_level = Level::Warning;
            Level::Warning
        } else {
            st.last_level = Level::InControl;
            Level::InControl
        }
    }
}

impl DriftStatistic for DistanceBetweenErrorsDetector {
    fn name(&self) -> &'static str {
        "distance_between_errors"
    }

    fn initialize(&mut self) {
        self.state = DistanceState::INITIAL;
    }

    fn update(&mut self, correct: bool, confidence: f64) -> Result<Level, ValidationError> {
        check_confidence(confidence)?;

        self.state.n += 1;
        if correct {
            // No new distance sample; the previous verdict stands.
            return Ok(self.state.last_level);
        }
        Ok(self.record_error())
    }
}
