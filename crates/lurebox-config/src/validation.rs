// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation of the configuration.

use thiserror::Error;

use crate::model::LureboxConfig;

/// A single actionable configuration problem.
#[derive(Debug, Error)]
#[error("config error at `{field}`: {message}")]
pub struct ConfigError {
    /// Dotted path of the offending field.
    pub field: String,
    /// What is wrong and how to fix it.
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized config, collecting every problem rather than
/// stopping at the first.
pub fn validate_config(config: &LureboxConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.agent.log_level.as_str()) {
        errors.push(ConfigError::new(
            "agent.log_level",
            format!(
                "unknown level `{}` (expected one of: {})",
                config.agent.log_level,
                LOG_LEVELS.join(", ")
            ),
        ));
    }

    if config.agent.history_window == 0 {
        errors.push(ConfigError::new(
            "agent.history_window",
            "must be at least 1",
        ));
    }

    if config.gateway.host.trim().is_empty() {
        errors.push(ConfigError::new("gateway.host", "must not be empty"));
    }

    if let Some(key) = &config.gateway.api_key
        && key.trim().is_empty()
    {
        errors.push(ConfigError::new(
            "gateway.api_key",
            "must not be blank; omit the key entirely to fail closed",
        ));
    }

    if config.gemini.model.trim().is_empty() {
        errors.push(ConfigError::new("gemini.model", "must not be empty"));
    }

    if config.gemini.timeout_secs == 0 {
        errors.push(ConfigError::new(
            "gemini.timeout_secs",
            "must be at least 1",
        ));
    }

    if config.notify.timeout_secs == 0 {
        errors.push(ConfigError::new(
            "notify.timeout_secs",
            "must be at least 1",
        ));
    }

    if config.notify.enabled
        && let Some(url) = &config.notify.callback_url
        && !url.starts_with("http://")
        && !url.starts_with("https://")
    {
        errors.push(ConfigError::new(
            "notify.callback_url",
            "must be an http:// or https:// URL",
        ));
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Print each error on its own line to stderr.
pub fn render_errors(errors: &[ConfigError]) {
    for error in errors {
        eprintln!("error: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        validate_config(&LureboxConfig::default()).unwrap();
    }

    #[test]
    fn bad_log_level_is_reported() {
        let mut config = LureboxConfig::default();
        config.agent.log_level = "loud".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "agent.log_level");
    }

    #[test]
    fn multiple_problems_are_all_collected() {
        let mut config = LureboxConfig::default();
        config.agent.history_window = 0;
        config.gemini.timeout_secs = 0;
        config.gateway.host = " ".into();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let mut config = LureboxConfig::default();
        config.gateway.api_key = Some("  ".into());
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "gateway.api_key");
    }

    #[test]
    fn non_http_callback_url_is_rejected() {
        let mut config = LureboxConfig::default();
        config.notify.callback_url = Some("ftp://example.com".into());
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "notify.callback_url");
    }

    #[test]
    fn disabled_notify_skips_url_check() {
        let mut config = LureboxConfig::default();
        config.notify.enabled = false;
        config.notify.callback_url = Some("not-a-url".into());
        validate_config(&config).unwrap();
    }
}
