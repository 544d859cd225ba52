// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the gateway.
//!
//! Handles POST /api/honeypot, GET /history, GET /health.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use lurebox_core::{EngagementRequest, LureboxError, ScamEvent};

use crate::server::AppState;

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error description.
    pub error: String,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Seconds since the gateway started.
    pub uptime_secs: u64,
}

/// POST /api/honeypot
///
/// Runs the full engagement pipeline for one inbound scammer message and
/// returns the persona's reply. Validation failures map to 400; the
/// pipeline itself cannot fail once validation passes.
pub async fn post_honeypot(
    State(state): State<AppState>,
    Json(body): Json<EngagementRequest>,
) -> Response {
    match state.engagement.handle(body).await {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(LureboxError::InvalidRequest(message)) => {
            (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message })).into_response()
        }
        Err(e) => {
            error!(error = %e, "unexpected engagement failure");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "internal error".to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// GET /history
///
/// Returns the full ordered event log as a JSON array.
pub async fn get_history(State(state): State<AppState>) -> Json<Vec<ScamEvent>> {
    let events = state
        .engagement
        .log()
        .snapshot()
        .iter()
        .map(|event| event.as_ref().clone())
        .collect();
    Json(events)
}

/// GET /health
///
/// Public liveness probe.
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_serializes() {
        let resp = ErrorResponse {
            error: "sessionId is required".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("sessionId is required"));
    }

    #[test]
    fn health_response_serializes() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            uptime_secs: 42,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"uptime_secs\":42"));
    }
}
