//! The validation engine
//!
//! Pure per-batch sanitization: whitelist filtering on the Prometheus
//! stream, byte-budget truncation on the OTEL stream, count-cap truncation
//! on the events stream. Each sub-algorithm touches only its own stream, so
//! they are applied independently before statistics are assembled.

use serde_json::Value;
use tracing::{info, warn};

use sift_protocol::{Event, OtelMetric, PrometheusMetric, TelemetryBatch};

use crate::outcome::{Statistics, ValidationOutcome, Warning, WarningKind};
use crate::policy::Policy;
use crate::recorder::{NoopRecorder, OutcomeRecorder, Violation};

/// Fixed width assumed for a serialized f64 value
const VALUE_WIDTH: u64 = 8;

/// Fixed width assumed for a serialized timestamp
const TIMESTAMP_WIDTH: u64 = 20;

/// Average per-metric cost assumed when the stream is empty, so the
/// truncation arithmetic never divides by zero
const FALLBACK_AVG_COST: u64 = 100;

/// Validate one batch against the policy.
///
/// Equivalent to [`validate_with_recorder`] with a no-op recorder.
pub fn validate(batch: TelemetryBatch, policy: &Policy) -> ValidationOutcome {
    validate_with_recorder(batch, policy, &NoopRecorder)
}

/// Validate one batch against the policy, notifying `recorder` once per
/// violation.
///
/// Never fails for content reasons: the worst case for any well-formed
/// batch is a sanitized result carrying warnings. Absent streams pass
/// through untouched. The recorder is called synchronously but cannot
/// influence the outcome.
pub fn validate_with_recorder(
    batch: TelemetryBatch,
    policy: &Policy,
    recorder: &dyn OutcomeRecorder,
) -> ValidationOutcome {
    let TelemetryBatch {
        device_id,
        timestamp,
        otel,
        events,
        prometheus,
    } = batch;

    let original_otel = otel.as_ref().map_or(0, Vec::len);
    let original_events = events.as_ref().map_or(0, Vec::len);
    let original_prometheus = prometheus.as_ref().map_or(0, Vec::len);

    let mut warnings = Vec::new();

    let (prometheus, dropped_prometheus) =
        filter_prometheus(prometheus, policy, &device_id, recorder, &mut warnings);
    let (otel, truncated_otel) = truncate_otel(otel, policy, &device_id, recorder, &mut warnings);
    let (events, truncated_events) =
        truncate_events(events, policy, &device_id, recorder, &mut warnings);

    let statistics = Statistics {
        original_otel,
        original_events,
        original_prometheus,
        validated_otel: otel.as_ref().map_or(0, Vec::len),
        validated_events: events.as_ref().map_or(0, Vec::len),
        validated_prometheus: prometheus.as_ref().map_or(0, Vec::len),
        dropped_prometheus,
        truncated_otel,
        truncated_events,
    };

    info!(
        device_id = %device_id,
        otel = statistics.validated_otel,
        otel_original = statistics.original_otel,
        events = statistics.validated_events,
        events_original = statistics.original_events,
        prometheus = statistics.validated_prometheus,
        prometheus_original = statistics.original_prometheus,
        dropped = dropped_prometheus,
        truncated_otel,
        truncated_events,
        warnings = warnings.len(),
        "validation completed"
    );

    ValidationOutcome {
        sanitized: TelemetryBatch {
            device_id,
            timestamp,
            otel,
            events,
            prometheus,
        },
        statistics,
        warnings,
    }
}

/// Estimate the serialized size of an OTEL stream in bytes.
///
/// Heuristic: per metric, name length + fixed value width + summed label
/// key/value lengths + fixed timestamp width. Intentionally approximate -
/// kept stable for compatibility with deployed devices and dashboards, even
/// though it may under- or over-estimate the true serialized size.
pub fn estimate_otel_size(metrics: &[OtelMetric]) -> u64 {
    metrics
        .iter()
        .map(|m| {
            let labels: u64 = m
                .labels
                .iter()
                .map(|(k, v)| (k.len() + v.len()) as u64)
                .sum();
            m.name.len() as u64 + VALUE_WIDTH + labels + TIMESTAMP_WIDTH
        })
        .sum()
}

/// Keep Prometheus metrics whose name is whitelisted, in submission order.
///
/// The only per-element filter: each dropped metric yields its own warning
/// and recorder call.
fn filter_prometheus(
    stream: Option<Vec<PrometheusMetric>>,
    policy: &Policy,
    device_id: &str,
    recorder: &dyn OutcomeRecorder,
    warnings: &mut Vec<Warning>,
) -> (Option<Vec<PrometheusMetric>>, usize) {
    let Some(metrics) = stream else {
        return (None, 0);
    };

    let mut kept = Vec::with_capacity(metrics.len());
    let mut dropped = 0;

    for metric in metrics {
        if policy.is_whitelisted(&metric.name) {
            kept.push(metric);
        } else {
            dropped += 1;
            recorder.record(device_id, &Violation::MetricNotWhitelisted { name: &metric.name });
            warn!(device_id = %device_id, metric = %metric.name, "dropped non-whitelisted Prometheus metric");
            warnings.push(Warning {
                kind: WarningKind::MetricNotWhitelisted,
                message: format!("Prometheus metric '{}' not in whitelist", metric.name),
                field: "metrics[].name",
                value: Value::String(metric.name),
            });
        }
    }

    (Some(kept), dropped)
}

/// Truncate the OTEL stream so its estimated size fits the byte budget.
///
/// Assumes uniform per-element cost: computes the average metric cost and
/// keeps the last `budget / avg` elements (most recent under the
/// submission-order assumption). The retained subset's true size may still
/// exceed the budget when individual metrics vary a lot in size.
fn truncate_otel(
    stream: Option<Vec<OtelMetric>>,
    policy: &Policy,
    device_id: &str,
    recorder: &dyn OutcomeRecorder,
    warnings: &mut Vec<Warning>,
) -> (Option<Vec<OtelMetric>>, bool) {
    let Some(mut metrics) = stream else {
        return (None, false);
    };

    let estimated = estimate_otel_size(&metrics);
    if estimated <= policy.max_otel_batch_bytes {
        return (Some(metrics), false);
    }

    let count = metrics.len();
    let avg_cost = if count == 0 {
        FALLBACK_AVG_COST
    } else {
        (estimated / count as u64).max(1)
    };
    let keep = ((policy.max_otel_batch_bytes / avg_cost) as usize).min(count);
    if keep == count {
        // Uneven per-metric costs can make the uniform-cost estimate keep
        // everything; the truncation flag only goes up when elements drop.
        return (Some(metrics), false);
    }

    let kept = if keep == 0 {
        Vec::new()
    } else {
        metrics.split_off(count - keep)
    };

    recorder.record(
        device_id,
        &Violation::OtelBatchTruncated {
            estimated_bytes: estimated,
            original: count,
            kept: kept.len(),
        },
    );
    warn!(
        device_id = %device_id,
        estimated_bytes = estimated,
        budget = policy.max_otel_batch_bytes,
        kept = kept.len(),
        "OTEL batch size exceeded, truncated"
    );
    warnings.push(Warning {
        kind: WarningKind::OtelBatchSizeExceeded,
        message: format!(
            "OTEL batch size exceeded limit ({} > {}), truncated to {} metrics",
            estimated,
            policy.max_otel_batch_bytes,
            kept.len()
        ),
        field: "otel",
        value: Value::from(estimated),
    });

    (Some(kept), true)
}

/// Truncate the events stream to the configured count cap, keeping the
/// most recent (last-submitted) events.
fn truncate_events(
    stream: Option<Vec<Event>>,
    policy: &Policy,
    device_id: &str,
    recorder: &dyn OutcomeRecorder,
    warnings: &mut Vec<Warning>,
) -> (Option<Vec<Event>>, bool) {
    let Some(mut events) = stream else {
        return (None, false);
    };

    let count = events.len();
    if count <= policy.max_events_count {
        return (Some(events), false);
    }

    let kept = events.split_off(count - policy.max_events_count);

    recorder.record(
        device_id,
        &Violation::EventsTruncated {
            original: count,
            kept: kept.len(),
        },
    );
    warn!(
        device_id = %device_id,
        original = count,
        cap = policy.max_events_count,
        "events array size exceeded, truncated"
    );
    warnings.push(Warning {
        kind: WarningKind::EventsArraySizeExceeded,
        message: format!(
            "Events array size exceeded limit ({} > {}), truncated to {} events",
            count,
            policy.max_events_count,
            kept.len()
        ),
        field: "events",
        value: Value::from(count),
    });

    (Some(kept), true)
}
