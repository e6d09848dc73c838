//! Retained window and candidate buffer.

use std::sync::Arc;

use scdrift_core::types::{Dataset, DatasetSchema, Instance};

/// The two instance windows the trainer manages.
///
/// `retained` is what a non-incremental model is (re)built from. `candidate`
/// collects instances seen while the detector warns; on drift it becomes the
/// new retained window, otherwise it is discarded.
#[derive(Debug, Clone)]
pub struct RegimeWindows {
    retained: Dataset,
    candidate: Dataset,
}

impl RegimeWindows {
    pub fn new(schema: Arc<DatasetSchema>) -> Self {
        let retained = Dataset::new(schema);
        let candidate = retained.empty_like();
        Self {
            retained,
            candidate,
        }
    }

    pub fn schema(&self) -> &Arc<DatasetSchema> {
        self.retained.schema()
    }

    /// Start a stream: retained window holds only `first`.
    pub fn seed(&mut self, first: Instance) {
        self.retained.clear();
        self.candidate.clear();
        self.retained.push(first);
    }

    pub fn retain(&mut self, instance: Instance) {
        self.retained.push(instance);
    }

    pub fn buffer(&mut self, instance: Instance) {
        self.candidate.push(instance);
    }

    /// Replace the retained window with the buffered instances, leaving the
    /// buffer empty.
    pub fn promote_candidate(&mut self) {
        self.retained = self.candidate.take();
    }

    pub fn discard_candidate(&mut self) {
        self.candidate.clear();
    }

    pub fn retained(&self) -> &Dataset {
        &self.retained
    }

    pub fn candidate(&self) -> &Dataset {
        &self.candidate
    }
}

impl Default for RegimeWindows {
    fn default() -> Self {
        Self::new(Arc::new(DatasetSchema::default()))
    }
}
