// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! API-key authentication middleware for the engagement endpoint.
//!
//! Callers present their credential in the `x-api-key` header. When no
//! key is configured, all requests are rejected (fail-closed).

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::Response,
};

/// Authentication configuration for the gateway.
#[derive(Clone)]
pub struct AuthConfig {
    /// Expected API key. If `None`, every request is rejected.
    pub api_key: Option<String>,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .finish()
    }
}

/// Middleware validating the `x-api-key` header against the configured key.
pub async fn auth_middleware(
    State(auth): State<AuthConfig>,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let Some(ref expected_key) = auth.api_key else {
        tracing::error!("gateway has no api key configured -- rejecting request");
        return Err(StatusCode::UNAUTHORIZED);
    };

    let presented = request
        .headers()
        .get("x-api-key")
        .and_then(|v| v.to_str().ok());

    match presented {
        Some(key) if key == expected_key => Ok(next.run(request).await),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_config_debug_redacts_key() {
        let config = AuthConfig {
            api_key: Some("sk_test_secret".to_string()),
        };
        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("sk_test_secret"));
        assert!(debug_output.contains("[redacted]"));
    }

    #[test]
    fn auth_config_with_no_key() {
        let config = AuthConfig { api_key: None };
        assert!(config.api_key.is_none());
    }
}
