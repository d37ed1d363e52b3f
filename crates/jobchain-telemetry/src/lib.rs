//! # Jobchain Telemetry
//!
//! Structured logging and Prometheus metrics for every Jobchain crate.
//!
//! ## Components
//!
//! - **Logs**: `tracing-subscriber` with an `EnvFilter`, pretty or JSON output
//! - **Metrics**: Prometheus counters, gauges and histograms for ledger activity
//!
//! ## Usage
//!
//! ```rust,ignore
//! use jobchain_telemetry::{init_telemetry, TelemetryConfig};
//!
//! fn main() {
//!     let config = TelemetryConfig::from_env();
//!     let _guard = init_telemetry(config).expect("Failed to init telemetry");
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `JC_SERVICE_NAME` | `jobchain` | Service name on every log line |
//! | `JC_LOG_LEVEL` | `info` | Log level filter (`RUST_LOG` also honored) |
//! | `JC_JSON_LOGS` | `false` | JSON formatted logs |
//! | `JC_CONSOLE_OUTPUT` | `true` | Write logs to stdout |
//! | `JC_NETWORK` | `devnet` | Network name |

mod config;
mod logging;
pub mod metrics;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use metrics::{
    encode_metrics, register_metrics, time_operation, MetricsHandle, CALLS_REJECTED,
    EVENTS_PUBLISHED, FEES_COLLECTED, LISTERS_AUTHORIZED, LISTINGS_CREATED, LISTINGS_DELETED,
    LISTINGS_LIVE, LISTINGS_UPDATED, OPERATION_DURATION, REVIEWS_LIVE, REVIEW_CHANGES,
    REVIEW_TEXTS_SET,
};
pub use tracing_setup::TracingGuard;

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    TracerInit(String),

    #[error("Failed to initialize Prometheus metrics: {0}")]
    MetricsInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Initialize logging and metrics.
///
/// Returns a guard that must be held for the lifetime of the application.
pub fn init_telemetry(config: TelemetryConfig) -> Result<TelemetryGuard, TelemetryError> {
    if config.service_name.is_empty() {
        return Err(TelemetryError::Config("service name is empty".to_string()));
    }

    // Metrics first so nothing is lost if tracing init fails
    let metrics_handle = register_metrics()?;
    let tracing_guard = tracing_setup::init_tracing(&config)?;

    Ok(TelemetryGuard {
        tracing: tracing_guard,
        metrics: metrics_handle,
    })
}

/// Guard that keeps telemetry active.
pub struct TelemetryGuard {
    tracing: TracingGuard,
    metrics: MetricsHandle,
}

impl TelemetryGuard {
    /// Current metrics in Prometheus text format.
    pub fn encode_metrics(&self) -> Result<String, TelemetryError> {
        self.metrics.encode()
    }
}

impl Drop for TelemetryGuard {
    fn drop(&mut self) {
        tracing::info!(service = self.tracing.service(), "Shutting down telemetry");
    }
}

/// Convenience macro for recording a metric increment.
#[macro_export]
macro_rules! metric_inc {
    ($metric:expr) => {
        $metric.inc()
    };
    ($metric:expr, $labels:expr) => {
        $metric.with_label_values($labels).inc()
    };
}
