// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Gemini generateContent API.
//!
//! Provides [`GeminiClient`], the production [`ReplyEngine`] behind the
//! honeypot persona. All failures map to [`LureboxError::Provider`]; the
//! orchestrator recovers them with a fixed fallback reply, so nothing
//! here is caller-visible.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use lurebox_core::{LureboxError, ReplyEngine};

use crate::types::{
    ApiErrorResponse, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    Part,
};

/// Base URL for the Gemini API.
const API_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default cap on generated reply length.
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 200;

/// HTTP client for Gemini API communication.
///
/// Holds a pooled reqwest client with the API key installed as a default
/// header and a bounded request timeout.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    model: String,
    base_url: String,
    max_output_tokens: u32,
}

impl GeminiClient {
    /// Creates a new Gemini API client.
    ///
    /// # Arguments
    /// * `api_key` - Gemini API key
    /// * `model` - model identifier (e.g., "gemini-1.5-flash")
    /// * `timeout` - upper bound on a single generate call
    pub fn new(api_key: &str, model: String, timeout: Duration) -> Result<Self, LureboxError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key)
                .map_err(|e| LureboxError::Config(format!("invalid API key header value: {e}")))?,
        );
        headers.insert("content-type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| LureboxError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            model,
            base_url: API_BASE_URL.to_string(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        })
    }

    /// Overrides the base URL (self-hosted proxies, wiremock tests).
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Overrides the output token cap.
    pub fn with_max_output_tokens(mut self, max: u32) -> Self {
        self.max_output_tokens = max;
        self
    }

    /// Returns the configured model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Sends one generateContent request and extracts the reply text.
    async fn generate_content(&self, prompt: &str) -> Result<String, LureboxError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                max_output_tokens: self.max_output_tokens,
            }),
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| LureboxError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, model = %self.model, "generateContent response received");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if let Ok(api_err) = serde_json::from_str::<ApiErrorResponse>(&body) {
                format!(
                    "Gemini API error ({}): {}",
                    api_err.error.status, api_err.error.message
                )
            } else {
                format!("API returned {status}: {body}")
            };
            return Err(LureboxError::Provider {
                message,
                source: None,
            });
        }

        let body = response.text().await.map_err(|e| LureboxError::Provider {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| LureboxError::Provider {
                message: format!("failed to parse API response: {e}"),
                source: Some(Box::new(e)),
            })?;

        parsed
            .first_text()
            .map(|t| t.trim().to_string())
            .ok_or_else(|| LureboxError::Provider {
                message: "response contained no candidate text".into(),
                source: None,
            })
    }
}

#[async_trait]
impl ReplyEngine for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, LureboxError> {
        self.generate_content(prompt).await
    }
}
