//! Metrics collection for the calendar API
//!
//! Prometheus metrics registered in the default registry and exposed on
//! `/metrics`.

use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter_vec, register_int_gauge, register_int_gauge_vec,
    HistogramVec, IntCounterVec, IntGauge, IntGaugeVec,
};

lazy_static! {
    // HTTP Request Metrics

    /// Total HTTP requests by method, route, and status
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "pitwall_http_requests_total",
        "Total number of HTTP requests",
        &["method", "route", "status"]
    )
    .expect("Failed to register HTTP_REQUESTS_TOTAL");

    /// HTTP request duration in seconds
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "pitwall_http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "route"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");

    /// In-flight HTTP requests
    pub static ref HTTP_REQUESTS_IN_FLIGHT: IntGaugeVec = register_int_gauge_vec!(
        "pitwall_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
        &["method", "route"]
    )
    .expect("Failed to register HTTP_REQUESTS_IN_FLIGHT");

    // Calendar Metrics

    /// Next-event resolutions by outcome (found, none, error)
    pub static ref NEXT_EVENT_RESOLUTIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "pitwall_next_event_resolutions_total",
        "Total number of next-event resolutions",
        &["outcome"]
    )
    .expect("Failed to register NEXT_EVENT_RESOLUTIONS_TOTAL");

    // Database Metrics

    /// Database query duration
    pub static ref DB_QUERY_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "pitwall_db_query_duration_seconds",
        "Database query duration in seconds",
        &["query_type"],
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]
    )
    .expect("Failed to register DB_QUERY_DURATION_SECONDS");

    /// Database query errors
    pub static ref DB_QUERY_ERRORS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "pitwall_db_query_errors_total",
        "Total number of database query errors",
        &["query_type", "error_type"]
    )
    .expect("Failed to register DB_QUERY_ERRORS_TOTAL");

    /// Open database connections
    pub static ref DB_CONNECTIONS_OPEN: IntGauge = register_int_gauge!(
        "pitwall_db_connections_open",
        "Number of open database connections"
    )
    .expect("Failed to register DB_CONNECTIONS_OPEN");

    /// Idle database connections
    pub static ref DB_CONNECTIONS_IDLE: IntGauge = register_int_gauge!(
        "pitwall_db_connections_idle",
        "Number of idle database connections"
    )
    .expect("Failed to register DB_CONNECTIONS_IDLE");
}

/// Collapse a concrete path onto its route template (limits label cardinality).
///
/// Only used when the router did not record a matched route, e.g. for 404s.
pub fn sanitize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => "/".to_string(),
        [collection @ ("races" | "events")] => format!("/{collection}"),
        [collection @ ("races" | "events"), "next"] => format!("/{collection}/next"),
        ["races", _] => "/races/:key".to_string(),
        ["races", _, "events"] => "/races/:key/events".to_string(),
        ["races", _, _] => "/races/:key/:round".to_string(),
        ["events", _] => "/events/:id".to_string(),
        [known @ ("health" | "metrics")] => format!("/{known}"),
        _ => "unmatched".to_string(),
    }
}
