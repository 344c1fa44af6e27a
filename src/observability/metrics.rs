//! Metrics collection and exposition.
//!
//! # Metrics
//! - `locale_gateway_decisions_total` (counter): routing decisions by kind
//! - `locale_gateway_redirects_total` (counter): redirects by target locale
//! - `locale_gateway_invalid_preference_total` (counter): ignored preference cookies
//! - `locale_gateway_upstream_duration_seconds` (histogram): upstream latency by status

use std::net::SocketAddr;
use std::time::Instant;

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;

use crate::locale::LocaleCode;
use crate::routing::RoutingDecision;

/// Install the Prometheus recorder and its HTTP listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) {
    match PrometheusBuilder::new().with_http_listener(addr).install() {
        Ok(()) => tracing::info!(address = %addr, "Metrics exporter listening"),
        Err(e) => tracing::error!(address = %addr, error = %e, "Failed to install metrics exporter"),
    }
}

pub fn record_decision(decision: &RoutingDecision) {
    counter!("locale_gateway_decisions_total", "decision" => decision.label()).increment(1);
    if let RoutingDecision::Redirect { locale, .. } = decision {
        record_redirect(*locale);
    }
}

fn record_redirect(locale: LocaleCode) {
    counter!("locale_gateway_redirects_total", "locale" => locale.as_str()).increment(1);
}

pub fn record_invalid_preference() {
    counter!("locale_gateway_invalid_preference_total").increment(1);
}

/// Record an upstream round trip. `status` is 502 when the upstream was unreachable.
pub fn record_upstream(status: u16, start: Instant) {
    histogram!(
        "locale_gateway_upstream_duration_seconds",
        "status" => status.to_string()
    )
    .record(start.elapsed().as_secs_f64());
}
