/// Observations a detector must see before it may leave `InControl`.
pub const MIN_NUM_INSTANCES: u64 = 30;

/// Errors the distance-between-errors detector needs before it may warn.
pub const MIN_NUM_ERRORS: u64 = 30;

/// Error-rate detector: warning at `p_min + 2·s_min`.
pub const ERROR_RATE_WARNING_SIGMAS: f64 = 2.0;

/// Error-rate detector: drift at `p_min + 3·s_min`.
pub const ERROR_RATE_DRIFT_SIGMAS: f64 = 3.0;

/// Distance detector: warning below this fraction of the best `mean + 2·std`.
pub const DISTANCE_WARNING_RATIO: f64 = 0.95;

/// Distance detector: drift below this fraction of the best `mean + 2·std`.
pub const DISTANCE_DRIFT_RATIO: f64 = 0.90;

/// Project-level config file name.
pub const PROJECT_CONFIG_FILE: &str = "scdrift.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "SCDRIFT_LOG";
