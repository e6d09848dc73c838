//! Capabilities the trainer needs from its collaborators.

pub mod classifier;
pub mod drift_statistic;

pub use classifier::{Classifier, ClassifierFactory};
pub use drift_statistic::DriftStatistic;
