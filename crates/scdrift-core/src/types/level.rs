use std::fmt;

use serde::{Deserialize, Serialize};

/// Three-level output of one drift statistic evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    /// The error process looks stationary.
    #[default]
    InControl,
    /// Possible drift: instances are buffered as a candidate next regime.
    Warning,
    /// Drift confirmed: the current regime is abandoned.
    OutOfControl,
}

impl Level {
    pub fn is_warning(self) -> bool {
        matches!(self, Self::Warning)
    }

    pub fn is_drift(self) -> bool {
        matches!(self, Self::OutOfControl)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::InControl => "in_control",
            Self::Warning => "warning",
            Self::OutOfControl => "out_of_control",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
