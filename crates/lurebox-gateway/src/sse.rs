// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Server-Sent Events live stream of scam events.
//!
//! GET /events subscribes to the broadcast hub and frames each event as
//! a discrete `data: <json>` message the instant it is published. The
//! stream carries only events published after the connection opened;
//! clients replay earlier history via GET /history first.
//!
//! When the client disconnects, axum drops the stream, which drops the
//! [`Subscription`], which unregisters the channel from the hub -- no
//! dead channels accumulate.

use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::Stream;

use lurebox_bus::Subscription;

use crate::server::AppState;

/// GET /events
///
/// Long-lived SSE connection emitting each published [`ScamEvent`](lurebox_core::ScamEvent).
pub async fn stream_events(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let subscription = state.engagement.hub().subscribe();
    tracing::debug!(subscriber_id = %subscription.id(), "sse stream opened");

    Sse::new(event_stream(subscription)).keep_alive(KeepAlive::default())
}

/// Turn a hub subscription into an SSE event stream.
///
/// Ends when the subscription is closed from the hub side; an event that
/// fails to serialize is skipped rather than tearing the stream down
/// (cannot happen for well-formed [`ScamEvent`]s, but the stream must
/// never panic in the publisher's face).
fn event_stream(subscription: Subscription) -> impl Stream<Item = Result<Event, Infallible>> {
    futures::stream::unfold(subscription, |mut subscription| async move {
        loop {
            let scam_event = subscription.recv().await?;
            match serde_json::to_string(scam_event.as_ref()) {
                Ok(data) => {
                    return Some((Ok(Event::default().data(data)), subscription));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "failed to serialize scam event for sse, skipping");
                }
            }
        }
    })
}
