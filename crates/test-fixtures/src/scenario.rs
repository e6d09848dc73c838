//! Prediction-outcome scenarios.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use scdrift_core::types::{DatasetSchema, Instance};

use crate::classifiers::echo_instance;

/// A run of predictions with a fixed error pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Segment {
    pub len: usize,
    /// 0: never wrong. k: position `i` is wrong when `i % k == k - 1`
    /// (so 1 means every prediction is wrong).
    pub error_period: usize,
}

impl Segment {
    pub fn outcome(&self, i: usize) -> bool {
        match self.error_period {
            0 => true,
            k => i % k != k - 1,
        }
    }
}

/// Named sequence of segments loaded from `fixtures/streams/*.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamScenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub segments: Vec<Segment>,
}

impl StreamScenario {
    /// Correctness of every instance, in stream order.
    pub fn outcomes(&self) -> Vec<bool> {
        self.segments
            .iter()
            .flat_map(|seg| (0..seg.len).map(move |i| seg.outcome(i)))
            .collect()
    }

    /// Outcomes a detector observes when the stream drives a trainer: the
    /// first instance seeds the model and is never predicted.
    pub fn observed_outcomes(&self) -> Vec<bool> {
        self.outcomes().into_iter().skip(1).collect()
    }

    pub fn len(&self) -> usize {
        self.segments.iter().map(|s| s.len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Binary-class schema with one feature, matching [`echo_instance`].
    pub fn schema() -> Arc<DatasetSchema> {
        Arc::new(DatasetSchema::with_dimensions(1, 2))
    }

    /// Instances an [`EchoClassifier`](crate::EchoClassifier) predicts
    /// exactly according to [`outcomes`](Self::outcomes).
    pub fn instances(&self) -> Vec<Instance> {
        self.outcomes()
            .into_iter()
            .enumerate()
            .map(|(i, correct)| echo_instance(correct, i % 2))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_period_semantics() {
        let seg = Segment {
            len: 10,
            error_period: 5,
        };
        let outcomes: Vec<bool> = (0..seg.len).map(|i| seg.outcome(i)).collect();
        assert_eq!(outcomes.iter().filter(|c| !**c).count(), 2);
        assert!(!outcomes[4]);
        assert!(!outcomes[9]);

        let all_wrong = Segment {
            len: 3,
            error_period: 1,
        };
        assert!((0..3).all(|i| !all_wrong.outcome(i)));
    }

    #[test]
    fn observed_outcomes_skip_the_seed() {
        let scenario = StreamScenario {
            name: "t".into(),
            description: String::new(),
            segments: vec![
                Segment {
                    len: 1,
                    error_period: 1,
                },
                Segment {
                    len: 2,
                    error_period: 0,
                },
            ],
        };
        assert_eq!(scenario.outcomes(), vec![false, true, true]);
        assert_eq!(scenario.observed_outcomes(), vec![true, true]);
        assert_eq!(scenario.instances().len(), 3);
    }
}
