// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP gateway for the Lurebox honeypot agent.
//!
//! Exposes the external surface of the engagement pipeline:
//! - `POST /api/honeypot` -- handle one inbound scammer message (API-key guarded)
//! - `GET /history` -- the full ordered event log
//! - `GET /events` -- SSE live stream of newly published events
//! - `GET /health` -- public liveness probe

pub mod auth;
pub mod handlers;
pub mod server;
pub mod sse;

pub use auth::AuthConfig;
pub use server::{build_router, start_server, AppState, ServerConfig};
