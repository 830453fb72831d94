//! Operations routes
//!
//! Health checks and validation counters for monitoring and observability.
//! These routes do not require authentication.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use sift_metrics::ValidationSnapshot;

use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Server status
    pub status: &'static str,
    /// Uptime in seconds
    pub uptime_secs: u64,
    /// Configuration summary
    pub config: ConfigSummary,
}

/// Snapshot of the startup configuration, proving the service was wired
/// with a usable policy and at least one API key
#[derive(Debug, Serialize)]
pub struct ConfigSummary {
    /// Whitelisted Prometheus metric names
    pub prometheus_whitelist_size: usize,
    /// Whether any API key is loaded
    pub api_keys_configured: bool,
    /// OTEL byte budget
    pub max_otel_batch_bytes: u64,
    /// Events count cap
    pub max_events_count: usize,
}

/// Validation counters response
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    /// Server uptime in seconds
    pub uptime_secs: u64,
    /// Validation outcome counters
    pub validation: ValidationSnapshot,
}

/// Operations routes (health, metrics)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
}

/// Health check endpoint
///
/// GET /health
///
/// Always returns 200 OK if the API is running - configuration is
/// validated before the server starts, so a running server is a healthy
/// one. The body summarizes the active policy for operators.
async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime_secs: state.uptime_secs(),
        config: ConfigSummary {
            prometheus_whitelist_size: state.policy.prometheus_whitelist.len(),
            api_keys_configured: !state.keys.is_empty(),
            max_otel_batch_bytes: state.policy.max_otel_batch_bytes,
            max_events_count: state.policy.max_events_count,
        },
    })
}

/// Validation counters endpoint
///
/// GET /metrics
async fn metrics_handler(State(state): State<AppState>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        uptime_secs: state.uptime_secs(),
        validation: state.metrics.snapshot(),
    })
}
