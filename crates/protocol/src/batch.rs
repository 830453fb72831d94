//! Telemetry batch - the top-level request document

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::event::Event;
use crate::metric::{OtelMetric, PrometheusMetric};

/// One batch of telemetry submitted by a single device.
///
/// Each stream is optional: devices with no events to report simply omit
/// the field. Order within a stream is submission order, with the end of
/// the sequence treated as most recent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryBatch {
    /// Device identifier (non-empty, enforced at the transport layer)
    pub device_id: String,

    /// Submission time reported by the device
    pub timestamp: DateTime<Utc>,

    /// OTEL-style metrics stream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub otel: Option<Vec<OtelMetric>>,

    /// Free-form events stream
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,

    /// Prometheus-style metrics stream (wire name `metrics`)
    #[serde(
        rename = "metrics",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub prometheus: Option<Vec<PrometheusMetric>>,
}

impl TelemetryBatch {
    /// Number of OTEL metrics (0 when the stream is absent)
    #[inline]
    pub fn otel_len(&self) -> usize {
        self.otel.as_ref().map_or(0, Vec::len)
    }

    /// Number of events (0 when the stream is absent)
    #[inline]
    pub fn events_len(&self) -> usize {
        self.events.as_ref().map_or(0, Vec::len)
    }

    /// Number of Prometheus metrics (0 when the stream is absent)
    #[inline]
    pub fn prometheus_len(&self) -> usize {
        self.prometheus.as_ref().map_or(0, Vec::len)
    }
}
