// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Best-effort webhook sink for engagement summaries.
//!
//! One POST per handled message, short bounded timeout, no retries. The
//! failure-swallowing contract lives in the orchestrator: errors
//! returned here are logged at warn and discarded, never surfaced to
//! the caller.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use lurebox_core::{LureboxError, NotifySink, NotifySummary};

/// Default upper bound on one callback POST.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Reports summaries to an external callback URL as JSON POSTs.
#[derive(Debug, Clone)]
pub struct WebhookSink {
    client: reqwest::Client,
    callback_url: String,
}

impl WebhookSink {
    /// Creates a sink POSTing to `callback_url` with the default 5s timeout.
    pub fn new(callback_url: String) -> Result<Self, LureboxError> {
        Self::with_timeout(callback_url, DEFAULT_TIMEOUT)
    }

    /// Creates a sink with an explicit per-request timeout.
    pub fn with_timeout(callback_url: String, timeout: Duration) -> Result<Self, LureboxError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LureboxError::Notify {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;
        Ok(Self {
            client,
            callback_url,
        })
    }
}

#[async_trait]
impl NotifySink for WebhookSink {
    async fn notify(&self, summary: &NotifySummary) -> Result<(), LureboxError> {
        let response = self
            .client
            .post(&self.callback_url)
            .json(summary)
            .send()
            .await
            .map_err(|e| LureboxError::Notify {
                message: format!("callback POST failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LureboxError::Notify {
                message: format!("callback returned {status}"),
                source: None,
            });
        }

        debug!(session_id = %summary.session_id, "engagement summary delivered");
        Ok(())
    }
}

/// A sink that drops every summary. Used when no callback URL is
/// configured or reporting is disabled.
#[derive(Debug, Clone, Default)]
pub struct NoopSink;

#[async_trait]
impl NotifySink for NoopSink {
    async fn notify(&self, summary: &NotifySummary) -> Result<(), LureboxError> {
        debug!(session_id = %summary.session_id, "notify sink disabled, dropping summary");
        Ok(())
    }
}
