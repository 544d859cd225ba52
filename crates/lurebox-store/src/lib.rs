// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Append-only event log for recorded scam engagements.
//!
//! The log is the single owner of every [`ScamEvent`] after creation.
//! Entries are never mutated or removed for the lifetime of the process,
//! and growth is unbounded -- capping retention is an explicit scope
//! limitation of the current design.

use std::sync::{Arc, RwLock};

use lurebox_core::ScamEvent;

/// Process-wide append-only log of scam events.
///
/// Internally a lock-guarded vector of shared events; the raw container
/// is never exposed. Reads take a point-in-time snapshot, so iterating a
/// snapshot is safe while concurrent appends occur.
#[derive(Debug, Default)]
pub struct EventLog {
    events: RwLock<Vec<Arc<ScamEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event, returning its zero-based position.
    ///
    /// An appender's own subsequent [`snapshot`](Self::snapshot) always
    /// observes this write.
    pub fn append(&self, event: Arc<ScamEvent>) -> usize {
        let mut events = self.events.write().unwrap_or_else(|e| e.into_inner());
        events.push(event);
        events.len() - 1
    }

    /// Point-in-time copy of the full log, in append order.
    pub fn snapshot(&self) -> Vec<Arc<ScamEvent>> {
        self.events
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Number of events recorded so far.
    pub fn len(&self) -> usize {
        self.events.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    /// True when nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lurebox_core::IntelligenceRecord;

    fn event(session_id: &str, message: &str) -> Arc<ScamEvent> {
        Arc::new(ScamEvent {
            session_id: session_id.into(),
            message: message.into(),
            ai_reply: "reply".into(),
            intel: IntelligenceRecord::default(),
            medium: "SMS".into(),
        })
    }

    #[test]
    fn append_returns_monotonic_positions() {
        let log = EventLog::new();
        assert_eq!(log.append(event("s1", "a")), 0);
        assert_eq!(log.append(event("s1", "b")), 1);
        assert_eq!(log.append(event("s2", "c")), 2);
        assert_eq!(log.len(), 3);
    }

    #[test]
    fn snapshot_preserves_append_order() {
        let log = EventLog::new();
        log.append(event("s1", "first"));
        log.append(event("s1", "second"));

        let snap = log.snapshot();
        assert_eq!(snap.len(), 2);
        assert_eq!(snap[0].message, "first");
        assert_eq!(snap[1].message, "second");
    }

    #[test]
    fn snapshot_is_stable_under_later_appends() {
        let log = EventLog::new();
        log.append(event("s1", "a"));

        let snap = log.snapshot();
        log.append(event("s1", "b"));

        assert_eq!(snap.len(), 1);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn empty_log_reports_empty() {
        let log = EventLog::new();
        assert!(log.is_empty());
        assert!(log.snapshot().is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_appends_lose_nothing() {
        let log = Arc::new(EventLog::new());
        let mut handles = Vec::new();
        for t in 0..8 {
            let log = Arc::clone(&log);
            handles.push(tokio::spawn(async move {
                for i in 0..50 {
                    log.append(event(&format!("s{t}"), &format!("m{i}")));
                }
            }));
        }
        for h in handles {
            h.await.unwrap();
        }
        assert_eq!(log.len(), 8 * 50);
    }
}
