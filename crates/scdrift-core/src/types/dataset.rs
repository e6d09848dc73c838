use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::Instance;
use crate::errors::ValidationError;

/// Shape shared by every instance of a stream.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DatasetSchema {
    pub feature_names: Vec<String>,
    pub class_names: Vec<String>,
}

impl DatasetSchema {
    pub fn new(feature_names: Vec<String>, class_names: Vec<String>) -> Self {
        Self {
            feature_names,
            class_names,
        }
    }

    /// Schema with generated names (`f0..`, `c0..`).
    pub fn with_dimensions(num_features: usize, num_classes: usize) -> Self {
        Self {
            feature_names: (0..num_features).map(|i| format!("f{i}")).collect(),
            class_names: (0..num_classes).map(|i| format!("c{i}")).collect(),
        }
    }

    pub fn num_features(&self) -> usize {
        self.feature_names.len()
    }

    pub fn num_classes(&self) -> usize {
        self.class_names.len()
    }

    /// Check that `instance` fits this schema.
    pub fn validate(&self, instance: &Instance) -> Result<(), ValidationError> {
        if instance.num_features() != self.num_features() {
            return Err(ValidationError::FeatureCountMismatch {
                expected: self.num_features(),
                actual: instance.num_features(),
            });
        }
        if instance.label().index() >= self.num_classes() {
            return Err(ValidationError::LabelOutOfRange {
                label: instance.label().index(),
                num_classes: self.num_classes(),
            });
        }
        Ok(())
    }
}

/// Ordered, mutable collection of instances sharing one schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    schema: Arc<DatasetSchema>,
    instances: Vec<Instance>,
}

impl Dataset {
    pub fn new(schema: Arc<DatasetSchema>) -> Self {
        Self {
            schema,
            instances: Vec::new(),
        }
    }

    pub fn from_instances(schema: Arc<DatasetSchema>, instances: Vec<Instance>) -> Self {
        Self { schema, instances }
    }

    /// Empty dataset with the same schema.
    pub fn empty_like(&self) -> Self {
        Self::new(Arc::clone(&self.schema))
    }

    pub fn schema(&self) -> &Arc<DatasetSchema> {
        &self.schema
    }

    pub fn push(&mut self, instance: Instance) {
        self.instances.push(instance);
    }

    /// Truncate to empty, keeping the schema.
    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// Move the contents out, leaving this dataset empty with the same schema.
    pub fn take(&mut self) -> Dataset {
        Self {
            schema: Arc::clone(&self.schema),
            instances: std::mem::take(&mut self.instances),
        }
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Instance> {
        self.instances.iter()
    }

    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    pub fn last(&self) -> Option<&Instance> {
        self.instances.last()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Instance;
    type IntoIter = std::slice::Iter<'a, Instance>;

    fn into_iter(self) -> Self::IntoIter {
        self.instances.iter()
    }
}

impl IntoIterator for Dataset {
    type Item = Instance;
    type IntoIter = std::vec::IntoIter<Instance>;

    fn into_iter(self) -> Self::IntoIter {
        self.instances.into_iter()
    }
}
