// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Engagement orchestrator for the Lurebox honeypot agent.
//!
//! [`Engagement`] coordinates one inbound scammer message end to end:
//! - extracts intelligence from the latest message text,
//! - generates an in-character persona reply (fallback on any failure),
//! - appends a [`ScamEvent`] to the log, then publishes it to the hub,
//! - fires off the best-effort result notification,
//! - returns the reply to the transport.
//!
//! Append and publish happen synchronously, in that order, before the
//! reply is returned; the notify call is spawned and its outcome never
//! affects the response.

pub mod persona;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use lurebox_bus::BroadcastHub;
use lurebox_core::{
    EngagementReply, EngagementRequest, LureboxError, NotifySink, NotifySummary, ReplyEngine,
    ScamEvent,
};
use lurebox_store::EventLog;

/// Medium recorded when the caller supplies no channel metadata.
const DEFAULT_MEDIUM: &str = "SMS";

/// Tunable behavior for the orchestrator.
#[derive(Debug, Clone)]
pub struct EngagementOptions {
    /// Persona framing passed to the reply engine.
    pub persona: String,
    /// Fixed reply substituted when the engine fails or times out.
    pub fallback_reply: String,
    /// Trailing history turns included in the prompt.
    pub history_window: usize,
    /// Upper bound on one reply-engine call.
    pub reply_timeout: Duration,
}

impl Default for EngagementOptions {
    fn default() -> Self {
        Self {
            persona: persona::DEFAULT_PERSONA.to_string(),
            fallback_reply: persona::DEFAULT_FALLBACK_REPLY.to_string(),
            history_window: persona::DEFAULT_HISTORY_WINDOW,
            reply_timeout: Duration::from_secs(10),
        }
    }
}

/// Per-message coordinator between extractor, log, hub, reply engine,
/// and notify sink.
pub struct Engagement {
    log: Arc<EventLog>,
    hub: Arc<BroadcastHub>,
    engine: Arc<dyn ReplyEngine>,
    sink: Arc<dyn NotifySink>,
    options: EngagementOptions,
}

impl Engagement {
    /// Creates an orchestrator over the given collaborators.
    pub fn new(
        log: Arc<EventLog>,
        hub: Arc<BroadcastHub>,
        engine: Arc<dyn ReplyEngine>,
        sink: Arc<dyn NotifySink>,
        options: EngagementOptions,
    ) -> Self {
        Self {
            log,
            hub,
            engine,
            sink,
            options,
        }
    }

    /// Handles one inbound scammer message.
    ///
    /// Fails only on validation (`InvalidRequest`), in which case no
    /// event is recorded. Reply-engine and notify failures degrade
    /// gracefully: the former substitutes the fixed fallback reply, the
    /// latter is logged and discarded.
    pub async fn handle(&self, request: EngagementRequest) -> Result<EngagementReply, LureboxError> {
        if request.session_id.trim().is_empty() {
            return Err(LureboxError::InvalidRequest("sessionId is required".into()));
        }
        if request.message.text.trim().is_empty() {
            return Err(LureboxError::InvalidRequest(
                "message.text is required".into(),
            ));
        }

        let session_id = request.session_id.clone();
        // Intel comes from the latest message only, never from history.
        let intel = lurebox_intel::extract(&request.message.text);
        debug!(
            session_id = %session_id,
            accounts = intel.bank_accounts.len(),
            links = intel.phishing_links.len(),
            keywords = intel.suspicious_keywords.len(),
            "intelligence extracted"
        );

        let prompt = persona::build_prompt(
            &self.options.persona,
            &request.conversation_history,
            &request.message.text,
            self.options.history_window,
        );

        let reply =
            match tokio::time::timeout(self.options.reply_timeout, self.engine.generate(&prompt))
                .await
            {
                Ok(Ok(text)) => text,
                Ok(Err(e)) => {
                    warn!(session_id = %session_id, error = %e, "reply engine failed, using fallback");
                    self.options.fallback_reply.clone()
                }
                Err(_) => {
                    warn!(
                        session_id = %session_id,
                        timeout = ?self.options.reply_timeout,
                        "reply engine timed out, using fallback"
                    );
                    self.options.fallback_reply.clone()
                }
            };

        let medium = request
            .metadata
            .channel
            .clone()
            .unwrap_or_else(|| DEFAULT_MEDIUM.to_string());

        let event = Arc::new(ScamEvent {
            session_id: session_id.clone(),
            message: request.message.text.clone(),
            ai_reply: reply.clone(),
            intel: intel.clone(),
            medium: medium.clone(),
        });

        // Append first, then publish: a client that reads history and
        // then subscribes can never miss this event.
        let position = self.log.append(Arc::clone(&event));
        let delivered = self.hub.publish(&event);
        info!(
            session_id = %session_id,
            position,
            delivered,
            medium = %medium,
            "engagement recorded and broadcast"
        );

        self.spawn_notify(NotifySummary {
            session_id,
            scam_detected: true,
            total_messages_exchanged: request.conversation_history.len() + 1,
            extracted_intelligence: intel,
            agent_notes: format!("Detected {medium} scam."),
        });

        Ok(EngagementReply {
            status: "success".into(),
            reply,
        })
    }

    /// Fire-and-forget delivery of the engagement summary.
    ///
    /// Contract: failures are logged at warn and swallowed -- never
    /// retried, never surfaced to the caller.
    fn spawn_notify(&self, summary: NotifySummary) {
        let sink = Arc::clone(&self.sink);
        tokio::spawn(async move {
            if let Err(e) = sink.notify(&summary).await {
                warn!(session_id = %summary.session_id, error = %e, "notify sink failed, discarding summary");
            }
        });
    }

    /// The event log this orchestrator records into.
    pub fn log(&self) -> &Arc<EventLog> {
        &self.log
    }

    /// The broadcast hub this orchestrator publishes to.
    pub fn hub(&self) -> &Arc<BroadcastHub> {
        &self.hub
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use lurebox_core::{Message, Metadata};
    use tokio::sync::mpsc;

    struct FixedEngine(String);

    #[async_trait]
    impl ReplyEngine for FixedEngine {
        async fn generate(&self, _prompt: &str) -> Result<String, LureboxError> {
            Ok(self.0.clone())
        }
    }

    struct FailingEngine;

    #[async_trait]
    impl ReplyEngine for FailingEngine {
        async fn generate(&self, _prompt: &str) -> Result<String, LureboxError> {
            Err(LureboxError::Provider {
                message: "provider unreachable".into(),
                source: None,
            })
        }
    }

    struct HangingEngine;

    #[async_trait]
    impl ReplyEngine for HangingEngine {
        async fn generate(&self, _prompt: &str) -> Result<String, LureboxError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok("never".into())
        }
    }

    /// Records every summary it receives on a channel the test can await.
    struct RecordingSink(mpsc::UnboundedSender<NotifySummary>);

    #[async_trait]
    impl NotifySink for RecordingSink {
        async fn notify(&self, summary: &NotifySummary) -> Result<(), LureboxError> {
            let _ = self.0.send(summary.clone());
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl NotifySink for FailingSink {
        async fn notify(&self, _summary: &NotifySummary) -> Result<(), LureboxError> {
            Err(LureboxError::Notify {
                message: "callback timed out".into(),
                source: None,
            })
        }
    }

    fn engagement(
        engine: Arc<dyn ReplyEngine>,
        sink: Arc<dyn NotifySink>,
    ) -> (Engagement, Arc<EventLog>, Arc<BroadcastHub>) {
        let log = Arc::new(EventLog::new());
        let hub = Arc::new(BroadcastHub::new());
        let orchestrator = Engagement::new(
            Arc::clone(&log),
            Arc::clone(&hub),
            engine,
            sink,
            EngagementOptions {
                reply_timeout: Duration::from_millis(200),
                ..EngagementOptions::default()
            },
        );
        (orchestrator, log, hub)
    }

    fn request(session_id: &str, text: &str) -> EngagementRequest {
        EngagementRequest {
            session_id: session_id.into(),
            message: Message {
                sender: "scammer".into(),
                text: text.into(),
                timestamp: None,
            },
            conversation_history: vec![],
            metadata: Metadata::default(),
        }
    }

    #[tokio::test]
    async fn handled_message_records_and_broadcasts_one_event() {
        let (orchestrator, log, hub) =
            engagement(Arc::new(FixedEngine("which account?".into())), Arc::new(NullSink));
        let mut sub = hub.subscribe();

        let reply = orchestrator
            .handle(request("sess-1", "send to 123456789012, urgent"))
            .await
            .unwrap();

        assert_eq!(reply.status, "success");
        assert_eq!(reply.reply, "which account?");

        assert_eq!(log.len(), 1);
        let recorded = &log.snapshot()[0];
        assert_eq!(recorded.session_id, "sess-1");
        assert_eq!(recorded.ai_reply, "which account?");
        assert_eq!(recorded.intel.bank_accounts, vec!["123456789012"]);
        assert_eq!(recorded.medium, "SMS");

        let published = sub.recv().await.unwrap();
        assert_eq!(published.as_ref(), recorded.as_ref());
    }

    struct NullSink;

    #[async_trait]
    impl NotifySink for NullSink {
        async fn notify(&self, _summary: &NotifySummary) -> Result<(), LureboxError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn empty_session_id_is_rejected_without_recording() {
        let (orchestrator, log, _hub) =
            engagement(Arc::new(FixedEngine("r".into())), Arc::new(NullSink));
        let err = orchestrator.handle(request("  ", "pay now")).await.unwrap_err();
        assert!(matches!(err, LureboxError::InvalidRequest(_)));
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn empty_message_text_is_rejected_without_recording() {
        let (orchestrator, log, _hub) =
            engagement(Arc::new(FixedEngine("r".into())), Arc::new(NullSink));
        let err = orchestrator.handle(request("sess-1", "")).await.unwrap_err();
        assert!(matches!(err, LureboxError::InvalidRequest(_)));
        assert!(log.is_empty());
    }

    #[tokio::test]
    async fn engine_failure_falls_back_and_still_records() {
        let (orchestrator, log, hub) = engagement(Arc::new(FailingEngine), Arc::new(NullSink));
        let mut sub = hub.subscribe();

        let reply = orchestrator.handle(request("sess-1", "verify now")).await.unwrap();
        assert_eq!(reply.status, "success");
        assert_eq!(reply.reply, persona::DEFAULT_FALLBACK_REPLY);

        assert_eq!(log.len(), 1);
        let published = sub.recv().await.unwrap();
        assert_eq!(published.ai_reply, persona::DEFAULT_FALLBACK_REPLY);
    }

    #[tokio::test]
    async fn engine_timeout_falls_back_and_still_records() {
        let (orchestrator, log, _hub) = engagement(Arc::new(HangingEngine), Arc::new(NullSink));

        let reply = orchestrator.handle(request("sess-1", "kyc expired")).await.unwrap();
        assert_eq!(reply.reply, persona::DEFAULT_FALLBACK_REPLY);
        assert_eq!(log.len(), 1);
    }

    #[tokio::test]
    async fn notify_failure_never_fails_the_operation() {
        let (orchestrator, log, _hub) =
            engagement(Arc::new(FixedEngine("ok".into())), Arc::new(FailingSink));

        let reply = orchestrator.handle(request("sess-1", "pay me")).await.unwrap();
        assert_eq!(reply.status, "success");
        assert_eq!(log.len(), 1);
    }

    #[tokio::test]
    async fn notify_summary_carries_the_contract_payload() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let (orchestrator, _log, _hub) =
            engagement(Arc::new(FixedEngine("ok".into())), Arc::new(RecordingSink(tx)));

        let mut req = request("sess-9", "send upi raju@okaxis, urgent");
        req.conversation_history = vec![
            Message {
                sender: "scammer".into(),
                text: "hello".into(),
                timestamp: None,
            },
            Message {
                sender: "user".into(),
                text: "who?".into(),
                timestamp: None,
            },
        ];
        req.metadata = Metadata {
            channel: Some("WhatsApp".into()),
            language: None,
            locale: None,
        };

        orchestrator.handle(req).await.unwrap();

        let summary = rx.recv().await.unwrap();
        assert_eq!(summary.session_id, "sess-9");
        assert!(summary.scam_detected);
        assert_eq!(summary.total_messages_exchanged, 3);
        assert_eq!(summary.extracted_intelligence.upi_ids, vec!["raju@okaxis"]);
        assert_eq!(summary.agent_notes, "Detected WhatsApp scam.");
    }

    #[tokio::test]
    async fn history_grows_by_one_per_handled_call() {
        let (orchestrator, log, _hub) =
            engagement(Arc::new(FixedEngine("ok".into())), Arc::new(NullSink));

        for k in 0..4 {
            orchestrator
                .handle(request("sess-1", &format!("message {k}")))
                .await
                .unwrap();
            assert_eq!(log.len(), k + 1);
        }

        let snap = log.snapshot();
        assert_eq!(snap.len(), 4);
        for (k, event) in snap.iter().enumerate() {
            assert_eq!(event.message, format!("message {k}"));
        }
    }

    #[tokio::test]
    async fn metadata_channel_becomes_the_event_medium() {
        let (orchestrator, log, _hub) =
            engagement(Arc::new(FixedEngine("ok".into())), Arc::new(NullSink));

        let mut req = request("sess-1", "click http://bad.example");
        req.metadata.channel = Some("Email".into());
        orchestrator.handle(req).await.unwrap();

        assert_eq!(log.snapshot()[0].medium, "Email");
    }
}
