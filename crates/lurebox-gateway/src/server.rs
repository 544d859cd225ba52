// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state. The engagement endpoint
//! is API-key guarded; history, the SSE stream, and the health probe are
//! public, matching the dashboard's unauthenticated reads.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

use lurebox_agent::Engagement;
use lurebox_core::LureboxError;

use crate::auth::{auth_middleware, AuthConfig};
use crate::handlers;
use crate::sse;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The engagement orchestrator (owns log and hub access).
    pub engagement: Arc<Engagement>,
    /// Authentication configuration.
    pub auth: AuthConfig,
    /// Process start time for uptime reporting.
    pub start_time: Instant,
}

/// Gateway server configuration (mirrors `GatewayConfig` from lurebox-config).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

/// Build the gateway router over the given state.
///
/// Exposed separately from [`start_server`] so tests can drive the
/// router with `tower::ServiceExt::oneshot`.
pub fn build_router(state: AppState) -> Router {
    let auth_state = state.auth.clone();

    // Public routes: dashboard reads and liveness.
    let public_routes = Router::new()
        .route("/health", get(handlers::get_health))
        .route("/history", get(handlers::get_history))
        .route("/events", get(sse::stream_events))
        .with_state(state.clone());

    // The engagement endpoint requires the API key.
    let api_routes = Router::new()
        .route("/api/honeypot", post(handlers::post_honeypot))
        .route_layer(axum_middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ))
        .with_state(state);

    Router::new()
        .merge(public_routes)
        .merge(api_routes)
        .layer(CorsLayer::permissive())
}

/// Start the gateway HTTP server and serve until the listener fails.
pub async fn start_server(config: &ServerConfig, state: AppState) -> Result<(), LureboxError> {
    let app = build_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener =
        tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| LureboxError::Channel {
                message: format!("failed to bind gateway to {addr}: {e}"),
                source: Some(Box::new(e)),
            })?;

    tracing::info!("gateway listening on {addr}");

    axum::serve(listener, app)
        .await
        .map_err(|e| LureboxError::Channel {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}
