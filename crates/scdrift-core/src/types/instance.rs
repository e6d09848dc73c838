use std::fmt;

use serde::{Deserialize, Serialize};

/// Class index into [`DatasetSchema::class_names`](super::DatasetSchema).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(pub usize);

impl Label {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for Label {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

/// A feature vector plus its true label. Immutable once produced by the stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instance {
    features: Vec<f64>,
    label: Label,
}

impl Instance {
    pub fn new(features: Vec<f64>, label: impl Into<Label>) -> Self {
        Self {
            features,
            label: label.into(),
        }
    }

    pub fn features(&self) -> &[f64] {
        &self.features
    }

    pub fn label(&self) -> Label {
        self.label
    }

    pub fn num_features(&self) -> usize {
        self.features.len()
    }
}
