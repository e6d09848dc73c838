//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Configuration for tracing output.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive string. Default: "scdrift=info".
    pub log_filter: Option<String>,
}

impl TelemetryConfig {
    pub fn effective_log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or("scdrift=info")
    }
}
