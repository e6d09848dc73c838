use crate::errors::ModelError;
use crate::types::{ClassDistribution, Dataset, Instance, Label};

/// Opaque base model wrapped by the trainer.
pub trait Classifier: Send {
    /// Human-readable model name.
    fn name(&self) -> &str {
        "classifier"
    }

    /// Fit from scratch on `data`, replacing any prior fit state.
    fn train(&mut self, data: &Dataset) -> Result<(), ModelError>;

    /// Predict the most likely label.
    fn predict_label(&self, instance: &Instance) -> Result<Label, ModelError>;

    /// Predict a probability per class.
    fn predict_distribution(&self, instance: &Instance) -> Result<ClassDistribution, ModelError>;

    /// Whether [`update`](Self::update) is supported. Queried once per model.
    fn supports_incremental(&self) -> bool {
        false
    }

    /// Learn from one labeled instance without retraining from scratch.
    fn update(&mut self, _instance: &Instance) -> Result<(), ModelError> {
        Err(ModelError::UpdateUnsupported {
            model: self.name().to_string(),
        })
    }
}

/// Produces fresh, untrained copies of the configured base model.
pub trait ClassifierFactory: Send + Sync {
    fn make_copy(&self) -> Box<dyn Classifier>;
}

impl<F> ClassifierFactory for F
where
    F: Fn() -> Box<dyn Classifier> + Send + Sync,
{
    fn make_copy(&self) -> Box<dyn Classifier> {
        self()
    }
}
