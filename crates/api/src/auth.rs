//! API key extraction and validation
//!
//! Devices send their key in the `X-API-Key` header; the `apiKey` query
//! parameter is accepted as a fallback for constrained HTTP clients.
//! Authentication runs before the body is read, so an unauthorized request
//! never reaches the validation engine.

use axum::async_trait;
use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use serde::Deserialize;
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Query parameter fallback
#[derive(Debug, Deserialize)]
struct ApiKeyQuery {
    #[serde(rename = "apiKey")]
    api_key: Option<String>,
}

/// Extractor that rejects the request unless a configured API key is
/// presented.
///
/// Carries no data - authorization is all-or-nothing per key.
#[derive(Debug, Clone, Copy)]
pub struct ApiKeyAuth;

#[async_trait]
impl FromRequestParts<AppState> for ApiKeyAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(key) = extract_api_key(parts) else {
            warn!("request without API key rejected");
            return Err(ApiError::Unauthorized);
        };

        if !state.keys.validate(&key) {
            warn!("request with unknown API key rejected");
            return Err(ApiError::Unauthorized);
        }

        Ok(Self)
    }
}

/// Pull the API key from the header, falling back to the query parameter
fn extract_api_key(parts: &Parts) -> Option<String> {
    if let Some(value) = parts.headers.get(API_KEY_HEADER) {
        return value.to_str().ok().map(str::to_string);
    }

    Query::<ApiKeyQuery>::try_from_uri(&parts.uri)
        .ok()
        .and_then(|q| q.0.api_key)
}
