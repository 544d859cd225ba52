// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `lurebox serve` command implementation.
//!
//! Wires the engagement pipeline together -- event log, broadcast hub,
//! Gemini reply engine, webhook result sink -- and runs the HTTP gateway
//! until ctrl-c.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tracing::{info, warn};

use lurebox_agent::{persona, Engagement, EngagementOptions};
use lurebox_bus::BroadcastHub;
use lurebox_config::LureboxConfig;
use lurebox_core::{LureboxError, NotifySink, ReplyEngine};
use lurebox_gateway::{start_server, AppState, AuthConfig, ServerConfig};
use lurebox_gemini::GeminiClient;
use lurebox_notify::{NoopSink, WebhookSink};
use lurebox_store::EventLog;

/// Reply engine used when no Gemini API key is configured. Always
/// errors, so every reply becomes the orchestrator's fallback.
struct DisabledEngine;

#[async_trait]
impl ReplyEngine for DisabledEngine {
    async fn generate(&self, _prompt: &str) -> Result<String, LureboxError> {
        Err(LureboxError::Provider {
            message: "no reply engine configured".into(),
            source: None,
        })
    }
}

/// Runs the `lurebox serve` command.
pub async fn run_serve(config: LureboxConfig) -> Result<(), LureboxError> {
    init_tracing(&config.agent.log_level);

    info!(agent = %config.agent.name, "starting lurebox serve");

    let engine = build_engine(&config)?;
    let sink = build_sink(&config)?;

    let options = EngagementOptions {
        persona: config
            .agent
            .persona
            .clone()
            .unwrap_or_else(|| persona::DEFAULT_PERSONA.to_string()),
        fallback_reply: config
            .agent
            .fallback_reply
            .clone()
            .unwrap_or_else(|| persona::DEFAULT_FALLBACK_REPLY.to_string()),
        history_window: config.agent.history_window,
        reply_timeout: Duration::from_secs(config.gemini.timeout_secs),
    };

    let engagement = Engagement::new(
        Arc::new(EventLog::new()),
        Arc::new(BroadcastHub::new()),
        engine,
        sink,
        options,
    );

    if config.gateway.api_key.is_none() {
        warn!("no gateway api key configured -- the engagement endpoint will reject all requests");
    }

    let state = AppState {
        engagement: Arc::new(engagement),
        auth: AuthConfig {
            api_key: config.gateway.api_key.clone(),
        },
        start_time: Instant::now(),
    };

    let server_config = ServerConfig {
        host: config.gateway.host.clone(),
        port: config.gateway.port,
    };

    tokio::select! {
        result = start_server(&server_config, state) => result,
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received, stopping lurebox");
            Ok(())
        }
    }
}

/// Build the reply engine from config: Gemini when a key is present,
/// otherwise the fallback-only stub.
fn build_engine(config: &LureboxConfig) -> Result<Arc<dyn ReplyEngine>, LureboxError> {
    match &config.gemini.api_key {
        Some(api_key) => {
            let mut client = GeminiClient::new(
                api_key,
                config.gemini.model.clone(),
                Duration::from_secs(config.gemini.timeout_secs),
            )?
            .with_max_output_tokens(config.gemini.max_output_tokens);
            if let Some(base_url) = &config.gemini.base_url {
                client = client.with_base_url(base_url.clone());
            }
            info!(model = %config.gemini.model, "gemini reply engine configured");
            Ok(Arc::new(client))
        }
        None => {
            warn!("no gemini api key configured -- every reply will use the fallback");
            Ok(Arc::new(DisabledEngine))
        }
    }
}

/// Build the result sink from config: a webhook when enabled and a URL
/// is set, otherwise a no-op.
fn build_sink(config: &LureboxConfig) -> Result<Arc<dyn NotifySink>, LureboxError> {
    match &config.notify.callback_url {
        Some(url) if config.notify.enabled => {
            info!(callback_url = %url, "result sink configured");
            Ok(Arc::new(WebhookSink::with_timeout(
                url.clone(),
                Duration::from_secs(config.notify.timeout_secs),
            )?))
        }
        _ => {
            info!("result reporting disabled");
            Ok(Arc::new(NoopSink))
        }
    }
}

/// Initialize the tracing subscriber from the configured log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lurebox={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_defaults_to_disabled_without_api_key() {
        let config = LureboxConfig::default();
        // Just verify construction succeeds; the engine itself always
        // errors, which the orchestrator converts to the fallback.
        build_engine(&config).unwrap();
    }

    #[test]
    fn sink_defaults_to_noop_without_callback_url() {
        let config = LureboxConfig::default();
        build_sink(&config).unwrap();
    }

    #[test]
    fn sink_is_noop_when_reporting_disabled() {
        let mut config = LureboxConfig::default();
        config.notify.enabled = false;
        config.notify.callback_url = Some("https://example.com/cb".into());
        build_sink(&config).unwrap();
    }

    #[tokio::test]
    async fn disabled_engine_always_errors() {
        let err = DisabledEngine.generate("prompt").await.unwrap_err();
        assert!(matches!(err, LureboxError::Provider { .. }));
    }
}
