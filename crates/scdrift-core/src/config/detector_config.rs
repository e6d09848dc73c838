//! Drift detector selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Closed set of drift statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectorKind {
    /// Detection disabled; every observation is in control.
    None,
    /// Running error rate against its best-ever `p + s` (DDM).
    #[default]
    ErrorRate,
    /// Distance between consecutive errors against its best-ever profile (EDDM).
    DistanceBetweenErrors,
}

impl DetectorKind {
    pub const ALL: [DetectorKind; 3] = [Self::None, Self::ErrorRate, Self::DistanceBetweenErrors];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::ErrorRate => "error_rate",
            Self::DistanceBetweenErrors => "distance_between_errors",
        }
    }
}

impl fmt::Display for DetectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DetectorKind {
    type Err = ConfigError;

    /// Accepts the canonical names plus the common short names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "none" | "noop" | "null" => Ok(Self::None),
            "error_rate" | "ddm" | "jgama" => Ok(Self::ErrorRate),
            "distance_between_errors" | "eddm" => Ok(Self::DistanceBetweenErrors),
            other => Err(ConfigError::InvalidValue {
                field: "detector.method".to_string(),
                message: format!("unknown drift detection method '{other}'"),
            }),
        }
    }
}

/// Configuration for the drift detector.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DetectorConfig {
    /// Detection method name. Default: "error_rate".
    pub method: Option<String>,
}

impl DetectorConfig {
    /// Returns the effective detector kind, defaulting to the error-rate detector.
    pub fn effective_kind(&self) -> Result<DetectorKind, ConfigError> {
        match &self.method {
            Some(name) => name.parse(),
            None => Ok(DetectorKind::default()),
        }
    }
}
