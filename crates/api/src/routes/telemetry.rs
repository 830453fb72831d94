//! Telemetry ingestion route
//!
//! `POST /api/v1/telemetry` - the single write path of the service. The
//! handler authenticates, parses, shape-checks, runs the validation engine,
//! and reports what the engine did. Content violations never produce an
//! error status: the response stays 200 and carries warnings instead.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::info;

use sift_protocol::TelemetryBatch;
use sift_validate::validate_with_recorder;

use crate::auth::ApiKeyAuth;
use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::types::TelemetryResponse;

/// Maximum device id length
const MAX_DEVICE_ID_LEN: usize = 50;

/// Maximum OTEL metrics per request
const MAX_REQUEST_OTEL: usize = 1000;

/// Maximum events per request
const MAX_REQUEST_EVENTS: usize = 100;

/// Maximum Prometheus metrics per request
const MAX_REQUEST_PROMETHEUS: usize = 100;

/// Maximum metadata entries per event
const MAX_EVENT_METADATA: usize = 20;

/// Telemetry routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/telemetry", post(ingest_handler))
}

/// Telemetry submission endpoint
///
/// POST /api/v1/telemetry
async fn ingest_handler(
    State(state): State<AppState>,
    _auth: ApiKeyAuth,
    payload: std::result::Result<Json<TelemetryBatch>, JsonRejection>,
) -> Result<Json<TelemetryResponse>> {
    let Json(batch) = payload.map_err(|rejection| ApiError::InvalidJson(rejection.body_text()))?;

    state.metrics.batches_received.inc();
    info!(device_id = %batch.device_id, "received telemetry batch");

    check_shape(&batch)?;

    let outcome = validate_with_recorder(batch, &state.policy, state.metrics.as_ref());
    if outcome.has_warnings() {
        state.metrics.batches_with_warnings.inc();
    }

    let response = TelemetryResponse::from_outcome(&outcome);
    info!(
        device_id = %outcome.sanitized.device_id,
        status = response.status,
        validated_metrics = response.validated_metrics,
        "processed telemetry batch"
    );

    Ok(Json(response))
}

/// Field-level shape constraints on the request document.
///
/// These mirror the limits devices are built against. They are transport
/// concerns: a shape violation is a malformed request (422), distinct from
/// the content violations the engine downgrades to warnings.
fn check_shape(batch: &TelemetryBatch) -> Result<()> {
    if batch.device_id.trim().is_empty() {
        return Err(ApiError::validation("deviceId", "must not be blank"));
    }
    if batch.device_id.len() > MAX_DEVICE_ID_LEN {
        return Err(ApiError::validation(
            "deviceId",
            format!("must be at most {MAX_DEVICE_ID_LEN} characters"),
        ));
    }
    if batch.otel_len() > MAX_REQUEST_OTEL {
        return Err(ApiError::validation(
            "otel",
            format!("at most {MAX_REQUEST_OTEL} OTEL metrics allowed per request"),
        ));
    }
    if batch.events_len() > MAX_REQUEST_EVENTS {
        return Err(ApiError::validation(
            "events",
            format!("at most {MAX_REQUEST_EVENTS} events allowed per request"),
        ));
    }
    if batch.prometheus_len() > MAX_REQUEST_PROMETHEUS {
        return Err(ApiError::validation(
            "metrics",
            format!("at most {MAX_REQUEST_PROMETHEUS} Prometheus metrics allowed per request"),
        ));
    }
    if let Some(events) = &batch.events {
        for event in events {
            let entries = event.metadata.as_ref().map_or(0, |m| m.len());
            if entries > MAX_EVENT_METADATA {
                return Err(ApiError::validation(
                    "events[].metadata",
                    format!("at most {MAX_EVENT_METADATA} metadata entries allowed per event"),
                ));
            }
        }
    }
    Ok(())
}
