//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): requests by route, status
//! - `gateway_upstream_duration_seconds` (histogram): forwarding latency by route
//! - `gateway_upstream_failures_total` (counter): failed forwarding calls by route
//! - `gateway_rejected_total` (counter): requests refused before any upstream call

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

/// Initialize the Prometheus exporter.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);

    match builder.install() {
        Ok(_) => {
            tracing::info!(address = %addr, "Metrics exporter started");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to start metrics exporter");
        }
    }
}

/// Record a completed request.
pub fn record_request(route: &'static str, status: u16, start_time: Instant) {
    counter!(
        "gateway_requests_total",
        "route" => route,
        "status" => status.to_string()
    )
    .increment(1);
    histogram!("gateway_upstream_duration_seconds", "route" => route)
        .record(start_time.elapsed().as_secs_f64());
}

/// Record a failed forwarding call.
pub fn record_upstream_failure(route: &'static str) {
    counter!("gateway_upstream_failures_total", "route" => route).increment(1);
}

/// Record a request refused locally.
pub fn record_rejected(route: &'static str) {
    counter!("gateway_rejected_total", "route" => route).increment(1);
}
