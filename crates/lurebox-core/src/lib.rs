// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Lurebox honeypot agent.
//!
//! Provides the shared error type, the wire types used by the gateway
//! and the engagement pipeline, and the trait seams for the external
//! reply engine and result-reporting sink.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::LureboxError;
pub use traits::{NotifySink, ReplyEngine};
pub use types::{
    EngagementReply, EngagementRequest, IntelligenceRecord, Message, Metadata, NotifySummary,
    ScamEvent,
};
