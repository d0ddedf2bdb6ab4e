//! Prometheus metrics for upstream calls.
//!
//! Every outbound call records:
//! - a request counter
//! - a latency histogram
//! - a failure counter labelled by failure kind (status, transport, decode)

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, describe_counter, describe_histogram, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};
use tracing::{debug, info};

use crate::upstream::Upstream;

// === Metric Name Constants ===

/// Upstream request latency metric name.
pub const METRIC_UPSTREAM_LATENCY: &str = "upstream_request_latency_ms";
/// Upstream requests counter metric name.
pub const METRIC_UPSTREAM_REQUESTS: &str = "upstream_requests_total";
/// Upstream failures counter metric name.
pub const METRIC_UPSTREAM_FAILURES: &str = "upstream_failures_total";

/// Initialize all metric descriptions.
/// Call this once at startup to register metrics with descriptions.
pub fn init_metrics() {
    describe_histogram!(
        METRIC_UPSTREAM_LATENCY,
        "Upstream API request latency in milliseconds"
    );
    describe_counter!(
        METRIC_UPSTREAM_REQUESTS,
        "Total number of upstream API requests"
    );
    describe_counter!(
        METRIC_UPSTREAM_FAILURES,
        "Total number of failed upstream API requests"
    );

    debug!("Metrics initialized");
}

/// Install the Prometheus recorder and serve it on its own listener.
///
/// Must be called from inside a tokio runtime.
pub fn install_exporter(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    info!("Prometheus exporter listening on {}", addr);
    Ok(())
}

/// Record upstream request latency.
pub fn record_upstream_latency(start: Instant, upstream: Upstream) {
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    histogram!(METRIC_UPSTREAM_LATENCY, "upstream" => upstream.to_string()).record(latency_ms);
}

/// Increment upstream requests counter.
pub fn inc_upstream_requests(upstream: Upstream) {
    counter!(METRIC_UPSTREAM_REQUESTS, "upstream" => upstream.to_string()).increment(1);
}

/// Increment upstream failures counter.
pub fn inc_upstream_failures(upstream: Upstream, kind: &'static str) {
    counter!(
        METRIC_UPSTREAM_FAILURES,
        "upstream" => upstream.to_string(),
        "kind" => kind
    )
    .increment(1);
}
