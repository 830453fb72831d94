//! Metric types - OTEL-style and Prometheus-style

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// OTEL-style metric sample.
///
/// No identity beyond structural equality; immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtelMetric {
    /// Metric name
    pub name: String,

    /// Sample value
    pub value: f64,

    /// Label set
    pub labels: HashMap<String, String>,

    /// Sample time reported by the device
    pub timestamp: DateTime<Utc>,
}

/// Prometheus metric type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrometheusType {
    Counter,
    Gauge,
    Histogram,
    Summary,
}

/// Prometheus-style metric sample
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrometheusMetric {
    /// Metric name (checked against the whitelist during validation)
    pub name: String,

    /// Sample value
    pub value: f64,

    /// Label set
    pub labels: HashMap<String, String>,

    /// Optional help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,

    /// Optional type tag (wire name `type`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub metric_type: Option<PrometheusType>,
}
