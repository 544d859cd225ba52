// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Lurebox honeypot agent.

use thiserror::Error;

/// The primary error type used across all Lurebox crates.
///
/// Only [`LureboxError::InvalidRequest`] and [`LureboxError::Unauthorized`]
/// are ever surfaced to callers. Reply-engine and notify-sink failures are
/// recovered locally (fallback reply, discarded notification) so the
/// extract-record-broadcast pipeline always completes once input validation
/// passes.
#[derive(Debug, Error)]
pub enum LureboxError {
    /// Missing or malformed required fields in an inbound request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Missing or invalid caller credential.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Configuration errors (invalid TOML, missing required fields, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Reply-engine errors (API failure, malformed response, unreachable provider).
    #[error("reply engine error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Notify-sink errors (callback unreachable, non-success status).
    #[error("notify sink error: {message}")]
    Notify {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// HTTP transport errors (bind failure, server error).
    #[error("channel error: {message}")]
    Channel {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
