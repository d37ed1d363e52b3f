//! Prometheus metrics for Jobchain subsystems.
//!
//! All metrics follow the naming convention: `jc_<subsystem>_<metric>_<unit>`
//!
//! ## Metric Types
//!
//! - **Counter**: Monotonically increasing value (e.g., listings_created_total)
//! - **Gauge**: Value that can go up or down (e.g., listings_live)
//! - **Histogram**: Distribution of values (e.g., operation_duration_seconds)

use lazy_static::lazy_static;
use prometheus::{
    exponential_buckets, Counter, CounterVec, Encoder, Gauge, Histogram, HistogramOpts,
    HistogramVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

use crate::TelemetryError;

lazy_static! {
    /// Global metrics registry
    pub static ref REGISTRY: Registry = Registry::new();

    // =========================================================================
    // AUTHORIZATION
    // =========================================================================

    /// Lister authorizations committed
    pub static ref LISTERS_AUTHORIZED: Counter = Counter::new(
        "jc_ledger_listers_authorized_total",
        "Total number of lister authorizations committed"
    ).expect("metric creation failed");

    // =========================================================================
    // LISTING STORE
    // =========================================================================

    /// Listings created
    pub static ref LISTINGS_CREATED: Counter = Counter::new(
        "jc_ledger_listings_created_total",
        "Total number of job listings created"
    ).expect("metric creation failed");

    /// Listings updated
    pub static ref LISTINGS_UPDATED: Counter = Counter::new(
        "jc_ledger_listings_updated_total",
        "Total number of job listings updated"
    ).expect("metric creation failed");

    /// Listings deleted
    pub static ref LISTINGS_DELETED: Counter = Counter::new(
        "jc_ledger_listings_deleted_total",
        "Total number of job listings deleted"
    ).expect("metric creation failed");

    /// Current listing count
    pub static ref LISTINGS_LIVE: Gauge = Gauge::new(
        "jc_ledger_listings_live",
        "Current number of job listings"
    ).expect("metric creation failed");

    // =========================================================================
    // REVIEW STORE
    // =========================================================================

    /// Reviews by outcome (submitted, updated, deleted, cascaded)
    pub static ref REVIEW_CHANGES: CounterVec = CounterVec::new(
        Opts::new("jc_ledger_review_changes_total", "Review store changes by kind"),
        &["change"]
    ).expect("metric creation failed");

    /// Current review count
    pub static ref REVIEWS_LIVE: Gauge = Gauge::new(
        "jc_ledger_reviews_live",
        "Current number of reviews"
    ).expect("metric creation failed");

    /// Text index writes outside review create/update
    pub static ref REVIEW_TEXTS_SET: Counter = Counter::new(
        "jc_ledger_review_texts_set_total",
        "Total number of setReviewText calls committed"
    ).expect("metric creation failed");

    // =========================================================================
    // FEE GATE
    // =========================================================================

    /// Posting fees collected
    pub static ref FEES_COLLECTED: Counter = Counter::new(
        "jc_ledger_fees_collected_total",
        "Total number of posting fees collected"
    ).expect("metric creation failed");

    // =========================================================================
    // CALLS
    // =========================================================================

    /// Rejected calls by operation and error kind
    pub static ref CALLS_REJECTED: CounterVec = CounterVec::new(
        Opts::new("jc_ledger_calls_rejected_total", "Rejected ledger calls"),
        &["operation", "error_kind"]
    ).expect("metric creation failed");

    /// Mutating call duration by operation
    pub static ref OPERATION_DURATION: HistogramVec = HistogramVec::new(
        HistogramOpts::new(
            "jc_ledger_operation_duration_seconds",
            "Time spent executing mutating ledger calls"
        ).buckets(exponential_buckets(0.00001, 2.0, 15).expect("valid buckets")),
        &["operation"]
    ).expect("metric creation failed");

    // =========================================================================
    // EVENT BUS
    // =========================================================================

    /// Events published to the bus
    pub static ref EVENTS_PUBLISHED: CounterVec = CounterVec::new(
        Opts::new("jc_bus_events_published_total", "Events published by name"),
        &["event"]
    ).expect("metric creation failed");
}

/// Handle for the metrics registry
pub struct MetricsHandle {
    registry: Arc<Registry>,
}

impl MetricsHandle {
    /// Encode the registry in Prometheus text format.
    pub fn encode(&self) -> Result<String, TelemetryError> {
        encode_registry(&self.registry)
    }
}

/// Register all metrics with the global registry.
///
/// Fails with `MetricsInit` when called twice.
pub fn register_metrics() -> Result<MetricsHandle, TelemetryError> {
    let metrics: Vec<Box<dyn prometheus::core::Collector>> = vec![
        // Authorization
        Box::new(LISTERS_AUTHORIZED.clone()),
        // Listings
        Box::new(LISTINGS_CREATED.clone()),
        Box::new(LISTINGS_UPDATED.clone()),
        Box::new(LISTINGS_DELETED.clone()),
        Box::new(LISTINGS_LIVE.clone()),
        // Reviews
        Box::new(REVIEW_CHANGES.clone()),
        Box::new(REVIEWS_LIVE.clone()),
        Box::new(REVIEW_TEXTS_SET.clone()),
        // Fees
        Box::new(FEES_COLLECTED.clone()),
        // Calls
        Box::new(CALLS_REJECTED.clone()),
        Box::new(OPERATION_DURATION.clone()),
        // Event Bus
        Box::new(EVENTS_PUBLISHED.clone()),
    ];

    for metric in metrics {
        REGISTRY
            .register(metric)
            .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    }

    Ok(MetricsHandle {
        registry: Arc::new(REGISTRY.clone()),
    })
}

/// Encode all metrics as Prometheus text format.
pub fn encode_metrics() -> Result<String, TelemetryError> {
    encode_registry(&REGISTRY)
}

fn encode_registry(registry: &Registry) -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let metric_families = registry.gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&metric_families, &mut buffer)
        .map_err(|e| TelemetryError::MetricsInit(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::MetricsInit(e.to_string()))
}

/// Timer guard for automatic histogram observation.
pub struct HistogramTimer {
    histogram: Histogram,
    start: std::time::Instant,
}

impl HistogramTimer {
    /// Start a new timer for the given histogram.
    pub fn new(histogram: &Histogram) -> Self {
        Self {
            histogram: histogram.clone(),
            start: std::time::Instant::now(),
        }
    }
}

impl Drop for HistogramTimer {
    fn drop(&mut self) {
        let duration = self.start.elapsed().as_secs_f64();
        self.histogram.observe(duration);
    }
}

/// Start timing a ledger operation. Observation happens on drop.
pub fn time_operation(operation: &str) -> HistogramTimer {
    HistogramTimer::new(&OPERATION_DURATION.with_label_values(&[operation]))
}
