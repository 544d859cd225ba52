// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Lurebox honeypot agent.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject
//! unrecognized config keys at startup.

use serde::{Deserialize, Serialize};

/// Top-level Lurebox configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values; only `gemini.api_key` is needed for live replies (without it
/// the agent still runs, answering with the fallback reply).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LureboxConfig {
    /// Agent identity and persona settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// HTTP gateway settings.
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Gemini reply-engine settings.
    #[serde(default)]
    pub gemini: GeminiConfig,

    /// Result-reporting callback settings.
    #[serde(default)]
    pub notify: NotifyConfig,
}

/// Agent identity and persona configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Override for the built-in persona framing.
    #[serde(default)]
    pub persona: Option<String>,

    /// Override for the fixed fallback reply.
    #[serde(default)]
    pub fallback_reply: Option<String>,

    /// Trailing history turns included in the reply-engine prompt.
    #[serde(default = "default_history_window")]
    pub history_window: usize,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            persona: None,
            fallback_reply: None,
            history_window: default_history_window(),
        }
    }
}

/// HTTP gateway configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// API key required on the engagement endpoint. When unset, the
    /// endpoint rejects all requests (fail-closed).
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            api_key: None,
        }
    }
}

/// Gemini reply-engine configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeminiConfig {
    /// Gemini API key. When unset, every reply is the fallback.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Model identifier.
    #[serde(default = "default_gemini_model")]
    pub model: String,

    /// Base URL override (self-hosted proxies, tests).
    #[serde(default)]
    pub base_url: Option<String>,

    /// Upper bound in seconds on one generate call.
    #[serde(default = "default_gemini_timeout_secs")]
    pub timeout_secs: u64,

    /// Cap on generated reply length.
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_gemini_model(),
            base_url: None,
            timeout_secs: default_gemini_timeout_secs(),
            max_output_tokens: default_max_output_tokens(),
        }
    }
}

/// Result-reporting callback configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NotifyConfig {
    /// Whether summaries are reported at all.
    #[serde(default = "default_notify_enabled")]
    pub enabled: bool,

    /// Callback URL receiving one summary POST per handled message.
    #[serde(default)]
    pub callback_url: Option<String>,

    /// Upper bound in seconds on one callback POST.
    #[serde(default = "default_notify_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            enabled: default_notify_enabled(),
            callback_url: None,
            timeout_secs: default_notify_timeout_secs(),
        }
    }
}

fn default_agent_name() -> String {
    "lurebox".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_history_window() -> usize {
    10
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_gemini_model() -> String {
    "gemini-1.5-flash".to_string()
}

fn default_gemini_timeout_secs() -> u64 {
    10
}

fn default_max_output_tokens() -> u32 {
    200
}

fn default_notify_enabled() -> bool {
    true
}

fn default_notify_timeout_secs() -> u64 {
    5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = LureboxConfig::default();
        assert_eq!(config.agent.name, "lurebox");
        assert_eq!(config.agent.log_level, "info");
        assert_eq!(config.agent.history_window, 10);
        assert_eq!(config.gateway.host, "127.0.0.1");
        assert_eq!(config.gateway.port, 8080);
        assert!(config.gateway.api_key.is_none());
        assert_eq!(config.gemini.model, "gemini-1.5-flash");
        assert_eq!(config.gemini.timeout_secs, 10);
        assert!(config.notify.enabled);
        assert_eq!(config.notify.timeout_secs, 5);
    }
}
