//! TrainerEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing a trainer.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about.
pub trait TrainerEventHandler: Send + Sync {
    // ---- Stream Lifecycle ----
    fn on_stream_started(&self, _event: &StreamStartedEvent) {}
    fn on_instance_processed(&self, _record: &DiagnosticRecord) {}
    fn on_stream_complete(&self, _event: &StreamCompleteEvent) {}

    // ---- Detector ----
    fn on_warning(&self, _event: &WarningEvent) {}
    fn on_drift_detected(&self, _event: &DriftDetectedEvent) {}

    // ---- Model ----
    fn on_model_retrained(&self, _event: &ModelRetrainedEvent) {}

    // ---- Errors ----
    fn on_error(&self, _event: &ErrorEvent) {}
}
