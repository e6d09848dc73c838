//! Error-rate drift statistic (DDM).
//!
//! Tracks the running error rate `p` and its standard deviation
//! `s = sqrt(p(1-p)/n)`. `p + s` is an upper bound on the error rate; once it
//! climbs 2 or 3 standard deviations above its best-ever value the detector
//! signals warning or drift. A process-control chart over prediction errors.

use serde::Serialize;
use tracing::trace;

use scdrift_core::constants::{ERROR_RATE_DRIFT_SIGMAS, ERROR_RATE_WARNING_SIGMAS, MIN_NUM_INSTANCES};
use scdrift_core::errors::validation_error::check_confidence;
use scdrift_core::errors::ValidationError;
use scdrift_core::traits::DriftStatistic;
use scdrift_core::types::Level;

/// Snapshot of the detector's internal counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorRateState {
    pub n: u64,
    pub p: f64,
    pub s: f64,
    pub p_min: f64,
    pub s_min: f64,
    pub ps_min: f64,
}

impl ErrorRateState {
    /// Construction-time values.
    pub const INITIAL: ErrorRateState = ErrorRateState {
        n: 1,
        p: 1.0,
        s: 0.0,
        p_min: f64::INFINITY,
        s_min: f64::INFINITY,
        ps_min: f64::INFINITY,
    };
}

impl Default for ErrorRateState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// DDM-style detector over the running error rate.
#[derive(Debug, Clone, Default)]
pub struct ErrorRateDetector {
    state: ErrorRateState,
}

impl ErrorRateDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ErrorRateState {
        self.state
    }

    /// Current running error-rate estimate.
    pub fn error_rate(&self) -> f64 {
        self.state.p
    }
}

impl DriftStatistic for ErrorRateDetector {
    fn name(&self) -> &'static str {
        "error_rate"
    }

    fn initialize(&mut self) {
        self.state = ErrorRateState::INITIAL;
    }

    fn update(&mut self, correct: bool, confidence: f64) -> Result<Level, ValidationError> {
        check_confidence(confidence)?;

        let st = &mut self.state;
        let n = st.n as f64;
        if correct {
            st.p -= st.p / n;
        } else {
            st.p += (1.0 - st.p) / n;
        }
        st.s = (st.p * (1.0 - st.p) / n).sqrt();
        st.n += 1;

        if st.n < MIN_NUM_INSTANCES {
            return Ok(Level::InControl);
        }

        let ps = st.p + st.s;
        if ps <= st.ps_min {
            st.p_min = st.p;
            st.s_min = st.s;
            st.ps_min = ps;
        }

        trace!(n = st.n, p = st.p, s = st.s, p_min = st.p_min, s_min = st.s_min, "error rate update");

        if st.n > MIN_NUM_INSTANCES && ps > st.p_min + ERROR_RATE_DRIFT_SIGMAS * st.s_min {
            self.initialize();
            Ok(Level::OutOfControl)
        } else if ps > st.p_min + ERROR_RATE_WARNING_SIGMAS * st.s_min {
            Ok(Level::Warning)
        } else {
            Ok(Level::InControl)
        }
    }
}
