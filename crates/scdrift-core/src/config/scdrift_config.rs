//! Top-level scdrift configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{DetectorConfig, TelemetryConfig, TrainerConfig};
use crate::constants::PROJECT_CONFIG_FILE;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`SCDRIFT_*`)
/// 2. Project config (`scdrift.toml` in the given root)
/// 3. User config (`~/.scdrift/config.toml`)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScDriftConfig {
    pub detector: DetectorConfig,
    pub trainer: TrainerConfig,
    pub telemetry: TelemetryConfig,
}

impl ScDriftConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                Self::merge_toml_file(&mut config, &user_config_path)?;
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ScDriftConfig) -> Result<(), ConfigError> {
        if let Err(ConfigError::InvalidValue { message, .. }) = config.detector.effective_kind() {
            return Err(ConfigError::ValidationFailed {
                field: "detector.method".to_string(),
                message,
            });
        }
        if let Some(filter) = &config.telemetry.log_filter {
            if filter.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "telemetry.log_filter".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.scdrift/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".scdrift").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut ScDriftConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ScDriftConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut ScDriftConfig, other: &ScDriftConfig) {
        if other.detector.method.is_some() {
            base.detector.method = other.detector.method.clone();
        }
        if other.trainer.record_diagnostics.is_some() {
            base.trainer.record_diagnostics = other.trainer.record_diagnostics;
        }
        if other.telemetry.log_filter.is_some() {
            base.telemetry.log_filter = other.telemetry.log_filter.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `SCDRIFT_DETECTOR`, `SCDRIFT_RECORD_DIAGNOSTICS`, `SCDRIFT_LOG_FILTER`.
    fn apply_env_overrides(config: &mut ScDriftConfig) {
        if let Ok(val) = std::env::var("SCDRIFT_DETECTOR") {
            config.detector.method = Some(val);
        }
        if let Ok(val) = std::env::var("SCDRIFT_RECORD_DIAGNOSTICS") {
            if let Ok(v) = val.parse::<bool>() {
                config.trainer.record_diagnostics = Some(v);
            }
        }
        if let Ok(val) = std::env::var("SCDRIFT_LOG_FILTER") {
            config.telemetry.log_filter = Some(val);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
