use serde::{Deserialize, Serialize};

use super::Label;

/// Class-probability distribution predicted for one instance, indexed by class.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassDistribution {
    probabilities: Vec<f64>,
}

impl ClassDistribution {
    pub fn new(probabilities: Vec<f64>) -> Self {
        Self { probabilities }
    }

    /// All mass on `label`, over `num_classes` classes.
    pub fn one_hot(label: Label, num_classes: usize) -> Self {
        let mut probabilities = vec![0.0; num_classes.max(label.index() + 1)];
        probabilities[label.index()] = 1.0;
        Self { probabilities }
    }

    /// Probability assigned to `label`; classes the model never saw get `0.0`.
    pub fn probability(&self, label: Label) -> f64 {
        self.probabilities.get(label.index()).copied().unwrap_or(0.0)
    }

    /// Label with the highest probability. Ties resolve to the lowest index.
    pub fn argmax(&self) -> Option<Label> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &p) in self.probabilities.iter().enumerate() {
            match best {
                Some((_, bp)) if p <= bp => {}
                _ => best = Some((i, p)),
            }
        }
        best.map(|(i, _)| Label(i))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.probabilities
    }

    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probability_outside_range_is_zero() {
        let dist = ClassDistribution::new(vec![0.25, 0.75]);
        assert_eq!(dist.probability(Label(1)), 0.75);
        assert_eq!(dist.probability(Label(5)), 0.0);
    }

    #[test]
    fn argmax_prefers_lowest_index_on_ties() {
        let dist = ClassDistribution::new(vec![0.4, 0.4, 0.2]);
        assert_eq!(dist.argmax(), Some(Label(0)));
        assert_eq!(ClassDistribution::default().argmax(), None);
    }

    #[test]
    fn one_hot_grows_to_fit_label() {
        let dist = ClassDistribution::one_hot(Label(3), 2);
        assert_eq!(dist.len(), 4);
        assert_eq!(dist.probability(Label(3)), 1.0);
    }
}
