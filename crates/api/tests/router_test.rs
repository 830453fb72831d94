//! End-to-end tests for the ingestion API
//!
//! Drives the full router through `tower::ServiceExt::oneshot` - no
//! sockets, but real routing, extraction, auth, and serialization.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use sift_api::{build_router, AppState};
use sift_auth::ApiKeyStore;
use sift_metrics::ValidationMetrics;
use sift_validate::Policy;

const TEST_KEY: &str = "test-key-000001";

fn test_router() -> (Router, Arc<ValidationMetrics>) {
    let policy = Arc::new(Policy::new(["cpu_usage", "memory_usage"], 200, 5));
    let keys = Arc::new(ApiKeyStore::from_keys([TEST_KEY]));
    let metrics = Arc::new(ValidationMetrics::new());
    let state = AppState::new(policy, keys, Arc::clone(&metrics));
    (build_router(state), metrics)
}

fn telemetry_request(key: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/v1/telemetry")
        .header("content-type", "application/json");
    if let Some(key) = key {
        builder = builder.header("x-api-key", key);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn minimal_batch() -> String {
    r#"{"deviceId": "d1", "timestamp": "2025-06-01T12:00:00Z"}"#.to_string()
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_missing_api_key_is_401() {
    let (router, _) = test_router();
    let response = router
        .oneshot(telemetry_request(None, &minimal_batch()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = body_json(response).await;
    assert_eq!(body["error"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_unknown_api_key_is_401() {
    let (router, _) = test_router();
    let response = router
        .oneshot(telemetry_request(Some("wrong-key-00001"), &minimal_batch()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_api_key_via_query_param() {
    let (router, _) = test_router();
    let request = Request::builder()
        .method("POST")
        .uri(format!("/api/v1/telemetry?apiKey={TEST_KEY}"))
        .header("content-type", "application/json")
        .body(Body::from(minimal_batch()))
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Request parsing and shape
// =============================================================================

#[tokio::test]
async fn test_malformed_json_is_400() {
    let (router, _) = test_router();
    let response = router
        .oneshot(telemetry_request(Some(TEST_KEY), "{not json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "BAD_REQUEST");
    assert!(body["details"].is_array());
}

#[tokio::test]
async fn test_blank_device_id_is_422() {
    let (router, _) = test_router();
    let body = r#"{"deviceId": "   ", "timestamp": "2025-06-01T12:00:00Z"}"#;
    let response = router
        .oneshot(telemetry_request(Some(TEST_KEY), body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(body["message"].as_str().unwrap().contains("deviceId"));
}

#[tokio::test]
async fn test_overlong_device_id_is_422() {
    let (router, _) = test_router();
    let device_id = "d".repeat(51);
    let body = format!(r#"{{"deviceId": "{device_id}", "timestamp": "2025-06-01T12:00:00Z"}}"#);
    let response = router
        .oneshot(telemetry_request(Some(TEST_KEY), &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

// =============================================================================
// Validation outcomes
// =============================================================================

#[tokio::test]
async fn test_compliant_batch_is_accepted() {
    let (router, metrics) = test_router();
    let body = r#"{
        "deviceId": "d1",
        "timestamp": "2025-06-01T12:00:00Z",
        "metrics": [{"name": "cpu_usage", "value": 1.0, "labels": {}}]
    }"#;
    let response = router
        .oneshot(telemetry_request(Some(TEST_KEY), body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "accepted");
    assert_eq!(json["validatedMetrics"], 1);
    assert_eq!(json["truncatedOtel"], false);
    assert_eq!(json["truncatedEvents"], false);
    assert_eq!(json["droppedPrometheusMetrics"], 0);
    assert!(json.get("warnings").is_none());

    let snap = metrics.snapshot();
    assert_eq!(snap.batches_received, 1);
    assert_eq!(snap.batches_with_warnings, 0);
}

#[tokio::test]
async fn test_violations_downgrade_to_warnings_not_errors() {
    let (router, metrics) = test_router();
    // non-whitelisted prometheus metric + 7 events against a cap of 5
    let events: Vec<String> = (1..=7)
        .map(|i| {
            format!(
                r#"{{"type": "event_{i}", "message": "m", "severity": "INFO", "timestamp": "2025-06-01T12:00:00Z"}}"#
            )
        })
        .collect();
    let body = format!(
        r#"{{
            "deviceId": "d1",
            "timestamp": "2025-06-01T12:00:00Z",
            "events": [{}],
            "metrics": [{{"name": "custom_metric", "value": 1.0, "labels": {{}}}}]
        }}"#,
        events.join(",")
    );

    let response = router
        .oneshot(telemetry_request(Some(TEST_KEY), &body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "accepted_with_warnings");
    assert_eq!(json["validatedMetrics"], 5);
    assert_eq!(json["truncatedEvents"], true);
    assert_eq!(json["droppedPrometheusMetrics"], 1);
    let warnings = json["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 2);
    assert!(warnings
        .iter()
        .any(|w| w.as_str().unwrap().contains("custom_metric")));

    let snap = metrics.snapshot();
    assert_eq!(snap.batches_with_warnings, 1);
    assert_eq!(snap.whitelist_drops, 1);
    assert_eq!(snap.events_truncations, 1);
}

// =============================================================================
// Operations endpoints
// =============================================================================

#[tokio::test]
async fn test_health_requires_no_auth() {
    let (router, _) = test_router();
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["config"]["prometheus_whitelist_size"], 2);
    assert_eq!(json["config"]["api_keys_configured"], true);
}

#[tokio::test]
async fn test_metrics_endpoint_reports_counters() {
    let (router, _) = test_router();

    let response = router
        .clone()
        .oneshot(telemetry_request(Some(TEST_KEY), &minimal_batch()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let request = Request::builder()
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["validation"]["batches_received"], 1);
}
