//! Outcome recorder collaborator
//!
//! The engine notifies an [`OutcomeRecorder`] once per violation so the
//! surrounding service can bump counters without the engine knowing about
//! metrics plumbing. The trait is infallible and fire-and-forget from the
//! engine's point of view: implementations must swallow their own failures,
//! and nothing they do can change the returned outcome.

use crate::outcome::WarningKind;

/// One violation observed during validation, with its contextual sizes.
///
/// Borrowed view - recorders copy out what they need.
#[derive(Debug, Clone, Copy)]
pub enum Violation<'a> {
    /// A Prometheus metric was dropped by the whitelist filter
    MetricNotWhitelisted {
        /// Name of the dropped metric
        name: &'a str,
    },
    /// The OTEL stream was truncated to fit the byte budget
    OtelBatchTruncated {
        /// Estimated size of the full stream in bytes
        estimated_bytes: u64,
        /// Metrics submitted
        original: usize,
        /// Metrics retained
        kept: usize,
    },
    /// The events stream was truncated to the count cap
    EventsTruncated {
        /// Events submitted
        original: usize,
        /// Events retained
        kept: usize,
    },
}

impl Violation<'_> {
    /// The warning kind this violation maps to
    pub fn kind(&self) -> WarningKind {
        match self {
            Self::MetricNotWhitelisted { .. } => WarningKind::MetricNotWhitelisted,
            Self::OtelBatchTruncated { .. } => WarningKind::OtelBatchSizeExceeded,
            Self::EventsTruncated { .. } => WarningKind::EventsArraySizeExceeded,
        }
    }
}

/// Receives one call per violation, synchronously, during validation.
///
/// Implementations must be cheap and safe for concurrent invocation (an
/// atomic counter increment is the intended shape).
pub trait OutcomeRecorder: Send + Sync {
    /// Record one violation observed for the given device
    fn record(&self, device_id: &str, violation: &Violation<'_>);
}

/// Recorder that does nothing. Used by [`validate`](crate::validate) when
/// the caller has no counters to wire in.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRecorder;

impl OutcomeRecorder for NoopRecorder {
    fn record(&self, _device_id: &str, _violation: &Violation<'_>) {}
}
