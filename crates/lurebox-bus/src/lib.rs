// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Broadcast hub fanning published scam events out to live subscribers.
//!
//! Each subscriber gets its own unbounded delivery queue, so a slow or
//! blocked consumer never stalls publication to the others or to the
//! orchestrator. A [`Subscription`] only ever observes events published
//! after its creation -- late joiners replay history through the event
//! log, not through the hub.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::mpsc;
use uuid::Uuid;

use lurebox_core::ScamEvent;

/// Fan-out hub over a dynamic set of subscriber channels.
///
/// Subscribe, unsubscribe, and publish may all be invoked concurrently
/// from independent requests; the subscriber set is a concurrent map, so
/// a subscriber added mid-publish may or may not see that in-flight
/// event (no guarantee either way), but delivery to other subscribers is
/// never disturbed.
#[derive(Debug, Default)]
pub struct BroadcastHub {
    subscribers: DashMap<Uuid, mpsc::UnboundedSender<Arc<ScamEvent>>>,
}

impl BroadcastHub {
    /// Create a hub with no subscribers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber channel.
    ///
    /// The returned [`Subscription`] removes itself from the hub when
    /// dropped, so a disconnecting stream consumer cannot leak a dead
    /// channel.
    pub fn subscribe(self: &Arc<Self>) -> Subscription {
        let id = Uuid::new_v4();
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.insert(id, tx);
        tracing::debug!(subscriber_id = %id, total = self.subscribers.len(), "subscriber registered");
        Subscription {
            id,
            rx,
            hub: Arc::clone(self),
        }
    }

    /// Remove a subscriber channel by id. Removing an unknown id is a no-op.
    pub fn unsubscribe(&self, id: Uuid) {
        if self.subscribers.remove(&id).is_some() {
            tracing::debug!(subscriber_id = %id, total = self.subscribers.len(), "subscriber removed");
        }
    }

    /// Deliver an event to every currently registered subscriber.
    ///
    /// Non-blocking: each delivery is an unbounded enqueue (the documented
    /// tradeoff -- a bounded queue with a drop policy is an open production
    /// hardening). Channels whose receiver is already gone are pruned here
    /// rather than failing the publish. Returns the number of subscribers
    /// the event was delivered to.
    pub fn publish(&self, event: &Arc<ScamEvent>) -> usize {
        let mut delivered = 0;
        let mut dead = Vec::new();

        for entry in self.subscribers.iter() {
            if entry.value().send(Arc::clone(event)).is_ok() {
                delivered += 1;
            } else {
                dead.push(*entry.key());
            }
        }

        for id in dead {
            self.subscribers.remove(&id);
            tracing::debug!(subscriber_id = %id, "pruned dead subscriber during publish");
        }

        delivered
    }

    /// Number of currently registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

/// A live subscriber channel handle.
///
/// Yields events published after its creation, in publish order. Dropping
/// the subscription unregisters it from the hub.
pub struct Subscription {
    id: Uuid,
    rx: mpsc::UnboundedReceiver<Arc<ScamEvent>>,
    hub: Arc<BroadcastHub>,
}

impl Subscription {
    /// The hub-assigned subscriber id.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Wait for the next published event.
    ///
    /// Suspends until an event is published or the subscription is
    /// unsubscribed from the hub side, in which case `None` is returned
    /// once the queue drains.
    pub async fn recv(&mut self) -> Option<Arc<ScamEvent>> {
        self.rx.recv().await
    }

    /// Non-blocking variant of [`recv`](Self::recv).
    pub fn try_recv(&mut self) -> Option<Arc<ScamEvent>> {
        self.rx.try_recv().ok()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.hub.unsubscribe(self.id);
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
