//! Metrics collection and exposition.
//!
//! # Metrics
//! - `docsite_requests_total` (counter): requests by method, status, locale
//! - `docsite_request_duration_seconds` (histogram): latency distribution
//!
//! # Design Decisions
//! - Prometheus-compatible endpoint on its own bind address
//! - Redirects are recorded with locale label "none"; no locale is resolved
//!   for them

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// Install the Prometheus exporter and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => {
            tracing::info!(address = %addr, "Metrics endpoint ready");
        }
        Err(error) => {
            tracing::error!(error = %error, "Failed to install metrics exporter");
        }
    }
}

/// Record one handled request.
pub fn record_request(method: &str, status: u16, locale: &str, start_time: Instant) {
    let labels = [
        ("method", method.to_string()),
        ("status", status.to_string()),
        ("locale", locale.to_string()),
    ];

    metrics::counter!("docsite_requests_total", &labels).increment(1);
    metrics::histogram!("docsite_request_duration_seconds", &labels)
        .record(start_time.elapsed().as_secs_f64());
}
