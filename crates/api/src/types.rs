//! API response types
//!
//! Field names are camelCase to match what deployed devices expect.

use serde::Serialize;

use sift_validate::ValidationOutcome;

/// Batch accepted with no violations
pub const STATUS_ACCEPTED: &str = "accepted";

/// Batch accepted, but sanitization changed it
pub const STATUS_ACCEPTED_WITH_WARNINGS: &str = "accepted_with_warnings";

/// Response to a telemetry submission
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryResponse {
    /// `accepted` or `accepted_with_warnings`
    pub status: &'static str,
    /// Total items retained across all three streams
    pub validated_metrics: usize,
    /// Whether the OTEL stream was truncated
    pub truncated_otel: bool,
    /// Whether the events stream was truncated
    pub truncated_events: bool,
    /// Prometheus metrics dropped by the whitelist filter
    pub dropped_prometheus_metrics: usize,
    /// Warning messages, omitted when there were none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}

impl TelemetryResponse {
    /// Derive the wire response from a validation outcome
    pub fn from_outcome(outcome: &ValidationOutcome) -> Self {
        let statistics = &outcome.statistics;
        let status = if outcome.has_warnings() {
            STATUS_ACCEPTED_WITH_WARNINGS
        } else {
            STATUS_ACCEPTED
        };
        let warnings = if outcome.has_warnings() {
            Some(outcome.warnings.iter().map(|w| w.message.clone()).collect())
        } else {
            None
        };

        Self {
            status,
            validated_metrics: statistics.validated_total(),
            truncated_otel: statistics.truncated_otel,
            truncated_events: statistics.truncated_events,
            dropped_prometheus_metrics: statistics.dropped_prometheus,
            warnings,
        }
    }
}
