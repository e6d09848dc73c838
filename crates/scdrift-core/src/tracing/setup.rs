//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::LOG_ENV_VAR;

static INIT: Once = Once::new();

/// Initialize the scdrift tracing/logging system.
///
/// Reads the `SCDRIFT_LOG` environment variable for per-module log levels.
/// Format: `SCDRIFT_LOG=scdrift_trainer=debug,scdrift_detect=trace`
///
/// Falls back to `scdrift=info` if `SCDRIFT_LOG` is not set or is invalid.
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("scdrift=info"));
    install(filter);
}

/// Initialize tracing with an explicit filter string, e.g. from
/// [`TelemetryConfig::effective_log_filter`](crate::config::TelemetryConfig::effective_log_filter).
pub fn init_tracing_with_filter(filter: &str) {
    install(EnvFilter::new(filter));
}

fn install(filter: EnvFilter) {
    INIT.call_once(|| {
        // Another subscriber may already be installed by the host application.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
