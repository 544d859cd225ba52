// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini reply-engine adapter for the Lurebox honeypot agent.
//!
//! Implements [`lurebox_core::ReplyEngine`] against the Gemini
//! generateContent API. The orchestrator treats this engine as
//! best-effort: any error or timeout here is absorbed by the fixed
//! fallback reply.

pub mod client;
pub mod types;

pub use client::GeminiClient;
