//! Synchronous event dispatch; a no-op when no handler is registered.

use std::sync::Arc;

use super::handler::TrainerEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn TrainerEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn TrainerEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and does not prevent later handlers
    /// from receiving the event.
    fn emit<F: Fn(&dyn TrainerEventHandler)>(&self, event: &'static str, f: F) {
        for (position, handler) in self.handlers.iter().enumerate() {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!(event, handler = position, "event handler panicked");
            }
        }
    }

    // ---- Stream Lifecycle ----
    pub fn emit_stream_started(&self, event: &StreamStartedEvent) {
        self.emit("stream_started", |h| h.on_stream_started(event));
    }

    pub fn emit_instance_processed(&self, record: &DiagnosticRecord) {
        self.emit("instance_processed", |h| h.on_instance_processed(record));
    }

    pub fn emit_stream_complete(&self, event: &StreamCompleteEvent) {
        self.emit("stream_complete", |h| h.on_stream_complete(event));
    }

    // ---- Detector ----
    pub fn emit_warning(&self, event: &WarningEvent) {
        self.emit("warning", |h| h.on_warning(event));
    }

    pub fn emit_drift_detected(&self, event: &DriftDetectedEvent) {
        self.emit("drift_detected", |h| h.on_drift_detected(event));
    }

    // ---- Model ----
    pub fn emit_model_retrained(&self, event: &ModelRetrainedEvent) {
        self.emit("model_retrained", |h| h.on_model_retrained(event));
    }

    // ---- Errors ----
    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit("error", |h| h.on_error(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
