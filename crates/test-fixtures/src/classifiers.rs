//! Scripted classifiers with fully predictable behavior.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use scdrift_core::errors::ModelError;
use scdrift_core::traits::Classifier;
use scdrift_core::types::{ClassDistribution, Dataset, Instance, Label};

const NUM_CLASSES: usize = 2;

/// Build a one-feature binary instance that an [`EchoClassifier`] predicts
/// correctly iff `correct`.
pub fn echo_instance(correct: bool, label: usize) -> Instance {
    let label = label % NUM_CLASSES;
    let echoed = if correct { label } else { 1 - label };
    Instance::new(vec![echoed as f64], label)
}

/// Wrap an untrained template into a factory producing clones of it.
pub fn factory<C>(template: C) -> impl Fn() -> Box<dyn Classifier> + Send + Sync
where
    C: Classifier + Clone + Sync + 'static,
{
    move || Box::new(template.clone()) as Box<dyn Classifier>
}

fn echo_label(instance: &Instance) -> Result<Label, ModelError> {
    match instance.features().first() {
        Some(v) if *v >= 0.0 => Ok(Label(*v as usize)),
        _ => Err(ModelError::PredictionFailed {
            reason: "echo feature missing or negative".to_string(),
        }),
    }
}

/// Predicts the label stored in the first feature.
#[derive(Debug, Clone, Default)]
pub struct EchoClassifier {
    incremental: bool,
}

impl EchoClassifier {
    pub fn batch() -> Self {
        Self { incremental: false }
    }

    pub fn incremental() -> Self {
        Self { incremental: true }
    }
}

impl Classifier for EchoClassifier {
    fn name(&self) -> &str {
        "echo"
    }

    fn train(&mut self, _data: &Dataset) -> Result<(), ModelError> {
        Ok(())
    }

    fn predict_label(&self, instance: &Instance) -> Result<Label, ModelError> {
        echo_label(instance)
    }

    fn predict_distribution(&self, instance: &Instance) -> Result<ClassDistribution, ModelError> {
        Ok(ClassDistribution::one_hot(echo_label(instance)?, NUM_CLASSES))
    }

    fn supports_incremental(&self) -> bool {
        self.incremental
    }

    fn update(&mut self, _instance: &Instance) -> Result<(), ModelError> {
        if self.incremental {
            Ok(())
        } else {
            Err(ModelError::UpdateUnsupported {
                model: self.name().to_string(),
            })
        }
    }
}

/// Always predicts the same label with full confidence.
#[derive(Debug, Clone)]
pub struct ConstantClassifier {
    label: Label,
}

impl ConstantClassifier {
    pub fn new(label: impl Into<Label>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Classifier for ConstantClassifier {
    fn name(&self) -> &str {
        "constant"
    }

    fn train(&mut self, _data: &Dataset) -> Result<(), ModelError> {
        Ok(())
    }

    fn predict_label(&self, _instance: &Instance) -> Result<Label, ModelError> {
        Ok(self.label)
    }

    fn predict_distribution(&self, _instance: &Instance) -> Result<ClassDistribution, ModelError> {
        Ok(ClassDistribution::one_hot(self.label, NUM_CLASSES))
    }
}

/// Call counters shared by every copy made from the same template.
#[derive(Debug, Default)]
pub struct CallCounts {
    pub trains: AtomicUsize,
    pub updates: AtomicUsize,
    pub predictions: AtomicUsize,
    /// Size of the dataset passed to the most recent `train`.
    pub last_train_len: AtomicUsize,
}

impl CallCounts {
    pub fn trains(&self) -> usize {
        self.trains.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }

    pub fn predictions(&self) -> usize {
        self.predictions.load(Ordering::SeqCst)
    }

    pub fn last_train_len(&self) -> usize {
        self.last_train_len.load(Ordering::SeqCst)
    }
}

/// Echo classifier that records how it is driven.
#[derive(Debug, Clone)]
pub struct CountingClassifier {
    inner: EchoClassifier,
    counts: Arc<CallCounts>,
}

impl CountingClassifier {
    pub fn new(incremental: bool) -> (Self, Arc<CallCounts>) {
        let counts = Arc::new(CallCounts::default());
        let classifier = Self {
            inner: EchoClassifier { incremental },
            counts: Arc::clone(&counts),
        };
        (classifier, counts)
    }
}

impl Classifier for CountingClassifier {
    fn name(&self) -> &str {
        "counting"
    }

    fn train(&mut self, data: &Dataset) -> Result<(), ModelError> {
        self.counts.trains.fetch_add(1, Ordering::SeqCst);
        self.counts.last_train_len.store(data.len(), Ordering::SeqCst);
        self.inner.train(data)
    }

    fn predict_label(&self, instance: &Instance) -> Result<Label, ModelError> {
        self.counts.predictions.fetch_add(1, Ordering::SeqCst);
        self.inner.predict_label(instance)
    }

    fn predict_distribution(&self, instance: &Instance) -> Result<ClassDistribution, ModelError> {
        self.inner.predict_distribution(instance)
    }

    fn supports_incremental(&self) -> bool {
        self.inner.supports_incremental()
    }

    fn update(&mut self, instance: &Instance) -> Result<(), ModelError> {
        self.counts.updates.fetch_add(1, Ordering::SeqCst);
        self.inner.update(instance)
    }
}

/// Which operation a [`FailingClassifier`] breaks, and after how many
/// successful calls across all copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePoint {
    Train { after: usize },
    Predict { after: usize },
    Update { after: usize },
}

/// Echo classifier that starts failing at a chosen call.
#[derive(Debug, Clone)]
pub struct FailingClassifier {
    inner: EchoClassifier,
    point: FailurePoint,
    calls: Arc<AtomicUsize>,
}

impl FailingClassifier {
    pub fn new(point: FailurePoint) -> Self {
        Self {
            inner: EchoClassifier {
                incremental: matches!(point, FailurePoint::Update { .. }),
            },
            point,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Returns true when this call must fail.
    fn tick(&self, after: usize) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst) >= after
    }
}

impl Classifier for FailingClassifier {
    fn name(&self) -> &str {
        "failing"
    }

    fn train(&mut self, data: &Dataset) -> Result<(), ModelError> {
        if let FailurePoint::Train { after } = self.point {
            if self.tick(after) {
                return Err(ModelError::TrainingFailed {
                    reason: format!("scripted failure on {} instances", data.len()),
                });
            }
        }
        self.inner.train(data)
    }

    fn predict_label(&self, instance: &Instance) -> Result<Label, ModelError> {
        if let FailurePoint::Predict { after } = self.point {
            if self.tick(after) {
                return Err(ModelError::PredictionFailed {
                    reason: "scripted failure".to_string(),
                });
            }
        }
        self.inner.predict_label(instance)
    }

    fn predict_distribution(&self, instance: &Instance) -> Result<ClassDistribution, ModelError> {
        self.inner.predict_distribution(instance)
    }

    fn supports_incremental(&self) -> bool {
        self.inner.supports_incremental()
    }

    fn update(&mut self, instance: &Instance) -> Result<(), ModelError> {
        if let FailurePoint::Update { after } = self.point {
            if self.tick(after) {
                return Err(ModelError::UpdateFailed {
                    reason: "scripted failure".to_string(),
                });
            }
        }
        self.inner.update(instance)
    }
}

/// Predicts the most frequent label seen so far. Incremental.
#[derive(Debug, Clone, Default)]
pub struct MajorityClassifier {
    counts: Vec<u64>,
}

impl MajorityClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn observe(&mut self, label: Label) {
        if self.counts.len() <= label.index() {
            self.counts.resize(label.index() + 1, 0);
        }
        self.counts[label.index()] += 1;
    }
}

impl Classifier for MajorityClassifier {
    fn name(&self) -> &str {
        "majority"
    }

    fn train(&mut self, data: &Dataset) -> Result<(), ModelError> {
        self.counts = vec![0; data.schema().num_classes()];
        for instance in data {
            self.observe(instance.label());
        }
        Ok(())
    }

    fn predict_label(&self, instance: &Instance) -> Result<Label, ModelError> {
        self.predict_distribution(instance)?
            .argmax()
            .ok_or(ModelError::NotTrained)
    }

    fn predict_distribution(&self, _instance: &Instance) -> Result<ClassDistribution, ModelError> {
        let total: u64 = self.counts.iter().sum();
        if self.counts.is_empty() {
            return Err(ModelError::NotTrained);
        }
        let probabilities = if total == 0 {
            vec![1.0 / self.counts.len() as f64; self.counts.len()]
        } else {
            self.counts
                .iter()
                .map(|c| *c as f64 / total as f64)
                .collect()
        };
        Ok(ClassDistribution::new(probabilities))
    }

    fn supports_incremental(&self) -> bool {
        true
    }

    fn update(&mut self, instance: &Instance) -> Result<(), ModelError> {
        self.observe(instance.label());
        Ok(())
    }
}
