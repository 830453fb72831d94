//! Device events

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event severity.
///
/// Closed set - an unknown severity string fails deserialization at the
/// transport layer rather than flowing through the pipeline as an open
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    /// Wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
            Self::Fatal => "FATAL",
        }
    }
}

/// One free-form device event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// Event type tag (wire name `type`)
    #[serde(rename = "type")]
    pub kind: String,

    /// Human-readable message
    pub message: String,

    /// Severity level
    pub severity: Severity,

    /// When the event occurred on the device
    pub timestamp: DateTime<Utc>,

    /// Optional metadata mapping (capped in count at the transport layer)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, Value>>,
}
