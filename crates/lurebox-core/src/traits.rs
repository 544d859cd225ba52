// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams for the external collaborators of the engagement pipeline.
//!
//! The orchestrator only ever talks to the reply engine and the result
//! sink through these traits, so tests can substitute deterministic or
//! failing implementations.

use async_trait::async_trait;

use crate::error::LureboxError;
use crate::types::NotifySummary;

/// Generates an in-character persona reply for a fully assembled prompt.
///
/// Implementations are expected to bound their own network time; the
/// orchestrator additionally wraps calls in a timeout and substitutes a
/// fixed fallback reply on any failure, so an error returned here is
/// never surfaced to the caller.
#[async_trait]
pub trait ReplyEngine: Send + Sync {
    /// Produce free-text output for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, LureboxError>;
}

/// Best-effort sink for per-message engagement summaries.
///
/// The contract is fire-and-forget: the orchestrator spawns the call,
/// logs failures at warn level, and never retries or surfaces them.
#[async_trait]
pub trait NotifySink: Send + Sync {
    /// Deliver one summary payload.
    async fn notify(&self, summary: &NotifySummary) -> Result<(), LureboxError>;
}
