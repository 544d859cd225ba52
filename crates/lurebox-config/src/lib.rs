// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the Lurebox honeypot agent.
//!
//! TOML configuration with strict parsing (`deny_unknown_fields`), XDG
//! file hierarchy lookup, `LUREBOX_*` environment overrides, and
//! collected post-deserialization validation.
//!
//! # Usage
//!
//! ```no_run
//! let config = lurebox_config::load_and_validate().expect("config errors");
//! println!("listening on {}:{}", config.gateway.host, config.gateway.port);
//! ```

pub mod loader;
pub mod model;
pub mod validation;

pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::LureboxConfig;
pub use validation::{render_errors, ConfigError};

/// Load configuration from the XDG hierarchy and validate it.
///
/// Returns either a valid [`LureboxConfig`] or the full list of
/// problems found.
pub fn load_and_validate() -> Result<LureboxConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![ConfigError {
            field: err
                .path
                .first()
                .cloned()
                .unwrap_or_else(|| "<config>".to_string()),
            message: err.to_string(),
        }]),
    }
}

/// Load configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<LureboxConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![ConfigError {
            field: err
                .path
                .first()
                .cloned()
                .unwrap_or_else(|| "<config>".to_string()),
            message: err.to_string(),
        }]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_toml_passes_load_and_validate() {
        let config = load_and_validate_str(
            r#"
            [gateway]
            api_key = "sk_test_key"
            "#,
        )
        .unwrap();
        assert_eq!(config.gateway.api_key.as_deref(), Some("sk_test_key"));
    }

    #[test]
    fn parse_error_surfaces_as_config_error() {
        let errors = load_and_validate_str("[agent]\nname = 42\n").unwrap_err();
        assert!(!errors.is_empty());
    }

    #[test]
    fn validation_error_surfaces_after_successful_parse() {
        let errors = load_and_validate_str(
            r#"
            [agent]
            log_level = "shout"
            "#,
        )
        .unwrap_err();
        assert_eq!(errors[0].field, "agent.log_level");
    }
}
