//! Uniform wrapper around a boxed base model.

use std::fmt;

use scdrift_core::errors::ModelError;
use scdrift_core::traits::{Classifier, ClassifierFactory};
use scdrift_core::types::{ClassDistribution, Dataset, Instance, Label};

/// One fitted copy of the base model.
///
/// The incremental capability is queried once, when the adapter is built,
/// and never re-checked. Model failures pass through untouched.
pub struct StreamingClassifierAdapter {
    inner: Box<dyn Classifier>,
    incremental: bool,
    train_calls: u64,
    update_calls: u64,
}

impl StreamingClassifierAdapter {
    pub fn new(inner: Box<dyn Classifier>) -> Self {
        let incremental = inner.supports_incremental();
        Self {
            inner,
            incremental,
            train_calls: 0,
            update_calls: 0,
        }
    }

    /// Fresh copy from `factory`, trained from scratch on `data`.
    pub fn fit(factory: &dyn ClassifierFactory, data: &Dataset) -> Result<Self, ModelError> {
        let mut adapter = Self::new(factory.make_copy());
        adapter.train(data)?;
        Ok(adapter)
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    pub fn is_incremental(&self) -> bool {
        self.incremental
    }

    pub fn train(&mut self, data: &Dataset) -> Result<(), ModelError> {
        self.train_calls += 1;
        self.inner.train(data)
    }

    pub fn update(&mut self, instance: &Instance) -> Result<(), ModelError> {
        if !self.incremental {
            return Err(ModelError::UpdateUnsupported {
                model: self.name().to_string(),
            });
        }
        self.update_calls += 1;
        self.inner.update(instance)
    }

    pub fn predict_label(&self, instance: &Instance) -> Result<Label, ModelError> {
        self.inner.predict_label(instance)
    }

    pub fn predict_distribution(&self, instance: &Instance) -> Result<ClassDistribution, ModelError> {
        self.inner.predict_distribution(instance)
    }

    pub fn train_calls(&self) -> u64 {
        self.train_calls
    }

    pub fn update_calls(&self) -> u64 {
        self.update_calls
    }

    pub fn inner(&self) -> &dyn Classifier {
        self.inner.as_ref()
    }
}

impl fmt::Debug for StreamingClassifierAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamingClassifierAdapter")
            .field("model", &self.name())
            .field("incremental", &self.incremental)
            .field("train_calls", &self.train_calls)
            .field("update_calls", &self.update_calls)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use scdrift_core::types::DatasetSchema;
    use test_fixtures::{echo_instance, factory, CountingClassifier, EchoClassifier};

    fn empty() -> Dataset {
        Dataset::new(Arc::new(DatasetSchema::with_dimensions(1, 2)))
    }

    #[test]
    fn capability_is_read_at_construction() {
        let batch = StreamingClassifierAdapter::new(Box::new(EchoClassifier::batch()));
        let incremental = StreamingClassifierAdapter::new(Box::new(EchoClassifier::incremental()));
        assert!(!batch.is_incremental());
        assert!(incremental.is_incremental());
    }

    #[test]
    fn batch_model_update_is_refused_without_calling_it() {
        let (template, counts) = CountingClassifier::new(false);
        let mut adapter = StreamingClassifierAdapter::new(Box::new(template));
        let err = adapter.update(&echo_instance(true, 0)).unwrap_err();
        assert!(matches!(err, ModelError::UpdateUnsupported { .. }));
        assert_eq!(counts.updates(), 0);
        assert_eq!(adapter.update_calls(), 0);
    }

    #[test]
    fn fit_trains_a_fresh_copy() {
        let (template, counts) = CountingClassifier::new(true);
        let make = factory(template);
        let mut adapter = StreamingClassifierAdapter::fit(&make, &empty()).unwrap();
        adapter.update(&echo_instance(true, 1)).unwrap();
        assert_eq!(adapter.train_calls(), 1);
        assert_eq!(adapter.update_calls(), 1);
        assert_eq!(counts.trains(), 1);
        assert_eq!(adapter.name(), "counting");
    }
}
