//! Trainer configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the drift-aware trainer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TrainerConfig {
    /// Keep every per-instance diagnostic record in memory. Default: false.
    pub record_diagnostics: Option<bool>,
}

impl TrainerConfig {
    pub fn effective_record_diagnostics(&self) -> bool {
        self.record_diagnostics.unwrap_or(false)
    }
}
