// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports the XDG hierarchy: `./lurebox.toml` > `~/.config/lurebox/lurebox.toml`
//! > `/etc/lurebox/lurebox.toml`, with environment variable overrides via
//! the `LUREBOX_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::LureboxConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/lurebox/lurebox.toml` (system-wide)
/// 3. `~/.config/lurebox/lurebox.toml` (user XDG config)
/// 4. `./lurebox.toml` (local directory)
/// 5. `LUREBOX_*` environment variables
pub fn load_config() -> Result<LureboxConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LureboxConfig::default()))
        .merge(Toml::file("/etc/lurebox/lurebox.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("lurebox/lurebox.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("lurebox.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<LureboxConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LureboxConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<LureboxConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(LureboxConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` so keys that contain
/// underscores stay unambiguous: `LUREBOX_GEMINI_API_KEY` must map to
/// `gemini.api_key`, not `gemini.api.key`.
fn env_provider() -> Env {
    Env::prefixed("LUREBOX_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: LUREBOX_GEMINI_API_KEY -> "gemini_api_key"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("gateway_", "gateway.", 1)
            .replacen("gemini_", "gemini.", 1)
            .replacen("notify_", "notify.", 1);
        mapped.into()
    })
}
