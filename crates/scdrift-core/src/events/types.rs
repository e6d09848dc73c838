//! Event payload types for trainer lifecycle events.

use serde::Serialize;

use crate::types::Level;

/// Payload for `on_stream_started`.
#[derive(Debug, Clone, Serialize)]
pub struct StreamStartedEvent {
    pub detector: &'static str,
    pub incremental: bool,
}

/// One record per processed instance, for an external reporting layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticRecord {
    /// Position in the stream. The seed is 0 and is never scored, so the
    /// first record has index 1.
    pub index: u64,
    pub correct: bool,
    /// Probability the model assigned to the true class.
    pub confidence: f64,
    pub global_accuracy: f64,
    pub local_accuracy: f64,
    pub level: Level,
    pub retained_len: usize,
    pub buffered_len: usize,
}

/// Payload for `on_warning`.
#[derive(Debug, Clone, Serialize)]
pub struct WarningEvent {
    pub index: u64,
    pub buffered_len: usize,
}

/// Payload for `on_drift_detected`.
#[derive(Debug, Clone, Serialize)]
pub struct DriftDetectedEvent {
    pub index: u64,
    /// Size of the retained window promoted from the candidate buffer.
    pub retained_len: usize,
    pub drift_count: u64,
}

/// Why a model was fitted from scratch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RetrainReason {
    /// The first instance of a stream.
    Seed,
    /// Drift replaced the retained window.
    Drift,
    /// Non-incremental model refitted after growing the window.
    WindowGrowth,
}

/// Payload for `on_model_retrained`.
#[derive(Debug, Clone, Serialize)]
pub struct ModelRetrainedEvent {
    pub index: u64,
    pub window_len: usize,
    pub reason: RetrainReason,
}

/// Payload for `on_stream_complete`.
#[derive(Debug, Clone, Serialize)]
pub struct StreamCompleteEvent {
    pub instances: u64,
    pub warnings: u64,
    pub drifts: u64,
    pub models_trained: u64,
    pub global_accuracy: f64,
    pub duration_ms: u64,
}

/// Payload for `on_error`.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorEvent {
    pub index: u64,
    pub code: &'static str,
    pub message: String,
}
