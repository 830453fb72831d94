//! Sift - API
//!
//! HTTP ingestion API for device telemetry.
//!
//! # Overview
//!
//! This crate provides the REST surface in front of the validation engine.
//! It is built on Axum and owns everything the engine's contract leaves to
//! the transport layer: API-key authentication, JSON parsing, request
//! shape checks, and turning a `ValidationOutcome` into a wire response.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use sift_api::{build_router, AppState};
//!
//! let state = AppState::new(policy, keys, metrics);
//! let app = build_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! ```
//!
//! # Endpoints
//!
//! - `POST /api/v1/telemetry` - submit a batch (API key required)
//! - `GET /health` - liveness and config summary (no auth)
//! - `GET /metrics` - validation counters (no auth)

pub mod auth;
pub mod error;
pub mod routes;
pub mod state;
pub mod types;

pub use auth::ApiKeyAuth;
pub use error::{ApiError, ErrorResponse, Result};
pub use routes::build_router;
pub use state::AppState;
pub use types::TelemetryResponse;
