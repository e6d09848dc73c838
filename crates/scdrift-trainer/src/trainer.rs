//! Drift-aware stream trainer.
//!
//! Test-then-train over a labeled stream: every instance after the first is
//! predicted, scored, fed to the detector, and only then learned from. The
//! detector level decides what happens to the instance windows:
//!
//! - `Warning`: the instance is also buffered as a candidate for the next regime.
//! - `OutOfControl`: the buffer replaces the retained window, local accuracy
//!   resets, and an incremental model is rebuilt from the new window.
//! - `InControl`: the buffer is discarded.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, trace, warn};

use scdrift_core::config::ScDriftConfig;
use scdrift_core::errors::validation_error::check_confidence;
use scdrift_core::errors::{ConfigError, ModelError, ScDriftErrorCode, TrainerError};
use scdrift_core::events::{
    DiagnosticRecord, DriftDetectedEvent, ErrorEvent, EventDispatcher, ModelRetrainedEvent,
    RetrainReason, StreamCompleteEvent, StreamStartedEvent, TrainerEventHandler, WarningEvent,
};
use scdrift_core::traits::{ClassifierFactory, DriftStatistic};
use scdrift_core::types::{ClassDistribution, Dataset, DatasetSchema, Instance, Label, Level};

use crate::adapter::StreamingClassifierAdapter;
use crate::prequential::PrequentialAccuracy;
use crate::window::RegimeWindows;

/// Counters for the most recent stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TrainerStats {
    pub instances: u64,
    pub warnings: u64,
    pub drifts: u64,
    pub models_trained: u64,
    pub incremental_updates: u64,
}

pub struct DriftAwareTrainer {
    factory: Option<Arc<dyn ClassifierFactory>>,
    detector: Box<dyn DriftStatistic>,
    model: Option<StreamingClassifierAdapter>,
    windows: RegimeWindows,
    global: PrequentialAccuracy,
    local: PrequentialAccuracy,
    level: Level,
    stats: TrainerStats,
    record_diagnostics: bool,
    diagnostics: Vec<DiagnosticRecord>,
    events: EventDispatcher,
}

impl DriftAwareTrainer {
    /// Trainer without a base model; set one before calling [`train`](Self::train).
    pub fn new(detector: Box<dyn DriftStatistic>) -> Self {
        Self {
            factory: None,
            detector,
            model: None,
            windows: RegimeWindows::default(),
            global: PrequentialAccuracy::new(),
            local: PrequentialAccuracy::new(),
            level: Level::InControl,
            stats: TrainerStats::default(),
            record_diagnostics: false,
            diagnostics: Vec::new(),
            events: EventDispatcher::new(),
        }
    }

    /// Build from configuration: detector kind and diagnostics recording.
    pub fn from_config(
        config: &ScDriftConfig,
        factory: impl ClassifierFactory + 'static,
    ) -> Result<Self, ConfigError> {
        let kind = config.detector.effective_kind()?;
        let mut trainer = Self::new(scdrift_detect::build(kind)).with_base_model(factory);
        trainer.record_diagnostics = config.trainer.effective_record_diagnostics();
        Ok(trainer)
    }

    pub fn with_base_model(mut self, factory: impl ClassifierFactory + 'static) -> Self {
        self.set_base_model(factory);
        self
    }

    pub fn set_base_model(&mut self, factory: impl ClassifierFactory + 'static) {
        self.factory = Some(Arc::new(factory));
    }

    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.record_diagnostics = enabled;
        self
    }

    pub fn register_handler(&mut self, handler: Arc<dyn TrainerEventHandler>) {
        self.events.register(handler);
    }

    /// Process `stream` in order, starting a fresh model from its first
    /// instance. An empty stream leaves the trainer untouched.
    ///
    /// The detector carries its state across calls; accumulators, windows,
    /// stats and diagnostics start over with each non-empty stream.
    pub fn train<I>(&mut self, schema: Arc<DatasetSchema>, stream: I) -> Result<(), TrainerError>
    where
        I: IntoIterator<Item = Instance>,
    {
        let factory = self
            .factory
            .clone()
            .ok_or(ConfigError::MissingBaseModel)?;

        let mut stream = stream.into_iter();
        let Some(first) = stream.next() else {
            debug!("empty stream, nothing to train");
            return Ok(());
        };

        let started = Instant::now();
        self.reset_stream_state(schema);

        if let Err(err) = self.seed(factory.as_ref(), first) {
            return Err(self.abort(0, err));
        }
        self.events.emit_stream_started(&StreamStartedEvent {
            detector: self.detector.name(),
            incremental: self.model.as_ref().is_some_and(|m| m.is_incremental()),
        });

        for (offset, instance) in stream.enumerate() {
            let index = offset as u64 + 1;
            if let Err(err) = self.step(factory.as_ref(), index, instance) {
                return Err(self.abort(index, err));
            }
        }

        let event = StreamCompleteEvent {
            instances: self.stats.instances,
            warnings: self.stats.warnings,
            drifts: self.stats.drifts,
            models_trained: self.stats.models_trained,
            global_accuracy: self.global.value(),
            duration_ms: started.elapsed().as_millis() as u64,
        };
        info!(
            instances = event.instances,
            warnings = event.warnings,
            drifts = event.drifts,
            models_trained = event.models_trained,
            global_accuracy = event.global_accuracy,
            duration_ms = event.duration_ms,
            "stream complete"
        );
        self.events.emit_stream_complete(&event);
        Ok(())
    }

    /// Process every instance of `data` as a stream.
    pub fn train_dataset(&mut self, data: &Dataset) -> Result<(), TrainerError> {
        self.train(Arc::clone(data.schema()), data.iter().cloned())
    }

    pub fn predict_label(&self, instance: &Instance) -> Result<Label, ModelError> {
        self.model
            .as_ref()
            .ok_or(ModelError::NotTrained)?
            .predict_label(instance)
    }

    pub fn predict_distribution(&self, instance: &Instance) -> Result<ClassDistribution, ModelError> {
        self.model
            .as_ref()
            .ok_or(ModelError::NotTrained)?
            .predict_distribution(instance)
    }

    pub fn global_accuracy(&self) -> f64 {
        self.global.value()
    }

    pub fn local_accuracy(&self) -> f64 {
        self.local.value()
    }

    pub fn level(&self) -> Level {
        self.level
    }

    /// Prequential count since stream start (`n`).
    pub fn instances_seen(&self) -> u64 {
        self.global.count()
    }

    /// Prequential count since the last drift (`localn`).
    pub fn local_count(&self) -> u64 {
        self.local.count()
    }

    pub fn retained_window(&self) -> &Dataset {
        self.windows.retained()
    }

    pub fn candidate_buffer(&self) -> &Dataset {
        self.windows.candidate()
    }

    pub fn model(&self) -> Option<&StreamingClassifierAdapter> {
        self.model.as_ref()
    }

    pub fn detector(&self) -> &dyn DriftStatistic {
        self.detector.as_ref()
    }

    pub fn stats(&self) -> TrainerStats {
        self.stats
    }

    /// Per-instance records; empty unless diagnostics recording is enabled.
    pub fn diagnostics(&self) -> &[DiagnosticRecord] {
        &self.diagnostics
    }

    fn reset_stream_state(&mut self, schema: Arc<DatasetSchema>) {
        self.windows = RegimeWindows::new(schema);
        self.global.reset();
        self.local.reset();
        self.level = Level::InControl;
        self.stats = TrainerStats::default();
        self.diagnostics.clear();
    }

    fn seed(&mut self, factory: &dyn ClassifierFactory, first: Instance) -> Result<(), TrainerError> {
        self.windows.schema().validate(&first)?;
        self.windows.seed(first);
        self.stats.instances += 1;
        self.retrain(factory, 0, RetrainReason::Seed)?;
        Ok(())
    }

    fn step(
        &mut self,
        factory: &dyn ClassifierFactory,
        index: u64,
        instance: Instance,
    ) -> Result<(), TrainerError> {
        self.windows.schema().validate(&instance)?;

        let model = self.model.as_ref().ok_or(ModelError::NotTrained)?;
        let incremental = model.is_incremental();
        let predicted = model.predict_label(&instance)?;
        let confidence = model
            .predict_distribution(&instance)?
            .probability(instance.label());
        check_confidence(confidence)?;
        let correct = predicted == instance.label();

        self.stats.instances += 1;
        self.global.record(correct);
        self.local.record(correct);

        let level = self.detector.update(correct, confidence)?;
        self.level = level;
        trace!(index, correct, confidence, level = %level, "instance scored");

        match level {
            Level::Warning => {
                self.windows.buffer(instance.clone());
                self.stats.warnings += 1;
                let buffered_len = self.windows.candidate().len();
                debug!(index, buffered_len, "detector warning, buffering instance");
                self.events
                    .emit_warning(&WarningEvent { index, buffered_len });
            }
            Level::OutOfControl => {
                self.local.reset();
                self.windows.promote_candidate();
                self.stats.drifts += 1;
                let retained_len = self.windows.retained().len();
                info!(
                    index,
                    retained_len,
                    drift_count = self.stats.drifts,
                    "drift detected, switching to buffered window"
                );
                self.events.emit_drift_detected(&DriftDetectedEvent {
                    index,
                    retained_len,
                    drift_count: self.stats.drifts,
                });
                if incremental {
                    self.retrain(factory, index, RetrainReason::Drift)?;
                }
            }
            Level::InControl => self.windows.discard_candidate(),
        }

        if incremental {
            let model = self.model.as_mut().ok_or(ModelError::NotTrained)?;
            model.update(&instance)?;
            self.stats.incremental_updates += 1;
        } else {
            self.windows.retain(instance);
            self.retrain(factory, index, RetrainReason::WindowGrowth)?;
        }

        let record = DiagnosticRecord {
            index,
            correct,
            confidence,
            global_accuracy: self.global.value(),
            local_accuracy: self.local.value(),
            level,
            retained_len: self.windows.retained().len(),
            buffered_len: self.windows.candidate().len(),
        };
        self.events.emit_instance_processed(&record);
        if self.record_diagnostics {
            self.diagnostics.push(record);
        }
        Ok(())
    }

    /// Fit a fresh copy on the retained window and make it current. The
    /// previous model stays in place if fitting fails.
    fn retrain(
        &mut self,
        factory: &dyn ClassifierFactory,
        index: u64,
        reason: RetrainReason,
    ) -> Result<(), ModelError> {
        let retained = self.windows.retained();
        let model = StreamingClassifierAdapter::fit(factory, retained)?;
        let window_len = retained.len();
        self.model = Some(model);
        self.stats.models_trained += 1;
        self.events.emit_model_retrained(&ModelRetrainedEvent {
            index,
            window_len,
            reason,
        });
        Ok(())
    }

    fn abort(&self, index: u64, err: TrainerError) -> TrainerError {
        warn!(
            index,
            code = err.error_code(),
            error = %err,
            "stream aborted"
        );
        self.events.emit_error(&ErrorEvent {
            index,
            code: err.error_code(),
            message: err.to_string(),
        });
        err
    }
}

impl fmt::Debug for DriftAwareTrainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DriftAwareTrainer")
            .field("detector", &self.detector)
            .field("model", &self.model)
            .field("level", &self.level)
            .field("stats", &self.stats)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for DriftAwareTrainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.model {
            None => f.write_str("no model built yet"),
            Some(model) => write!(
                f,
                "{} trained on {} instances (detector: {}, level: {}, global accuracy: {:.4})",
                model.name(),
                self.windows.retained().len(),
                self.detector.name(),
                self.level,
                self.global.value()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scdrift_detect::{ErrorRateDetector, NoOpDetector};
    use test_fixtures::{echo_instance, factory, EchoClassifier};

    fn schema() -> Arc<DatasetSchema> {
        Arc::new(DatasetSchema::with_dimensions(1, 2))
    }

    #[test]
    fn missing_base_model_fails_before_consuming() {
        let mut trainer = DriftAwareTrainer::new(Box::new(NoOpDetector));
        let mut pulled = 0;
        let stream = (0..3).map(|i| {
            pulled += 1;
            echo_instance(true, i)
        });
        let err = trainer.train(schema(), stream).unwrap_err();
        assert!(matches!(err, TrainerError::Config(ConfigError::MissingBaseModel)));
        assert_eq!(pulled, 0);
    }

    #[test]
    fn display_before_and_after_training() {
        let mut trainer = DriftAwareTrainer::new(Box::new(ErrorRateDetector::new()))
            .with_base_model(factory(EchoClassifier::batch()));
        assert_eq!(trainer.to_string(), "no model built yet");
        trainer
            .train(schema(), (0..3).map(|i| echo_instance(true, i)))
            .unwrap();
        let text = trainer.to_string();
        assert!(text.starts_with("echo trained on 3 instances"));
        assert!(text.contains("error_rate"));
    }

    #[test]
    fn predict_before_training_is_not_trained() {
        let trainer = DriftAwareTrainer::new(Box::new(NoOpDetector));
        let err = trainer.predict_label(&echo_instance(true, 0)).unwrap_err();
        assert!(matches!(err, ModelError::NotTrained));
    }
}
