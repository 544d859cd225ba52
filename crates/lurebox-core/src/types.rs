// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wire types shared across the Lurebox crates.
//!
//! Field names follow the external API contract (camelCase on the wire),
//! so serde renames are applied per field rather than per struct where
//! the Rust names differ.

use serde::{Deserialize, Serialize};

/// A single message in a scam conversation.
///
/// Immutable once created; history is an append-only sequence of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Who sent the message (e.g., "scammer", "user").
    pub sender: String,
    /// Raw message text.
    pub text: String,
    /// Optional ISO 8601 timestamp supplied by the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Caller-supplied channel metadata for an engagement request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Originating medium (e.g., "SMS", "WhatsApp").
    #[serde(default)]
    pub channel: Option<String>,
    /// Conversation language.
    #[serde(default)]
    pub language: Option<String>,
    /// Caller locale (e.g., "IN").
    #[serde(default)]
    pub locale: Option<String>,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            channel: Some("SMS".to_string()),
            language: Some("English".to_string()),
            locale: Some("IN".to_string()),
        }
    }
}

/// Structured intelligence extracted from a single message's text.
///
/// All five fields are always present; empty vectors mean nothing matched.
/// Each field is de-duplicated internally (first occurrence wins) but no
/// de-duplication happens across fields -- a phone number embedded in a
/// digit run may also appear as a bank account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntelligenceRecord {
    /// Runs of 9-18 consecutive digits, word-bounded.
    #[serde(rename = "bankAccounts")]
    pub bank_accounts: Vec<String>,
    /// UPI-style `handle@provider` identifiers (letters-only provider).
    #[serde(rename = "upiIds")]
    pub upi_ids: Vec<String>,
    /// http/https URLs.
    #[serde(rename = "phishingLinks")]
    pub phishing_links: Vec<String>,
    /// Optional `+` followed by 10-12 digits.
    #[serde(rename = "phoneNumbers")]
    pub phone_numbers: Vec<String>,
    /// Members of the fixed suspicious vocabulary present in the text.
    #[serde(rename = "suspiciousKeywords")]
    pub suspicious_keywords: Vec<String>,
}

impl IntelligenceRecord {
    /// Returns true when no field matched anything.
    pub fn is_empty(&self) -> bool {
        self.bank_accounts.is_empty()
            && self.upi_ids.is_empty()
            && self.phishing_links.is_empty()
            && self.phone_numbers.is_empty()
            && self.suspicious_keywords.is_empty()
    }
}

/// One recorded engagement: the scammer's message, the persona's reply,
/// and the intelligence extracted from the message.
///
/// Created once per handled message, appended to the event log, and
/// broadcast to live subscribers. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScamEvent {
    /// Opaque session identifier supplied by the caller.
    #[serde(rename = "sessionId")]
    pub session_id: String,
    /// The scammer's message text.
    pub message: String,
    /// The persona's reply (generated or fallback).
    #[serde(rename = "aiReply")]
    pub ai_reply: String,
    /// Intelligence extracted from `message` alone.
    pub intel: IntelligenceRecord,
    /// Originating medium (metadata channel, defaulting to "SMS").
    pub medium: String,
}

/// Inbound request body for the engagement operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementRequest {
    /// Opaque session identifier. Must be non-empty.
    #[serde(rename = "sessionId")]
    pub session_id: String,
    /// The latest inbound message. `text` must be non-empty.
    pub message: Message,
    /// Prior dialogue in chronological order, oldest first.
    #[serde(rename = "conversationHistory", default)]
    pub conversation_history: Vec<Message>,
    /// Channel metadata. Defaults to SMS/English/IN when absent.
    #[serde(default)]
    pub metadata: Metadata,
}

/// Response body for the engagement operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementReply {
    /// Always "success" for a handled message.
    pub status: String,
    /// The persona's reply text.
    pub reply: String,
}

/// Summary payload POSTed to the result-reporting sink after each
/// handled message. Delivery is best-effort; failures are swallowed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotifySummary {
    /// Session the summary belongs to.
    #[serde(rename = "sessionId")]
    pub session_id: String,
    /// Always true -- every engaged session is treated as a scam.
    #[serde(rename = "scamDetected")]
    pub scam_detected: bool,
    /// History length plus the latest message.
    #[serde(rename = "totalMessagesExchanged")]
    pub total_messages_exchanged: usize,
    /// Intelligence extracted from the latest message.
    #[serde(rename = "extractedIntelligence")]
    pub extracted_intelligence: IntelligenceRecord,
    /// Free-text note about the engagement.
    #[serde(rename = "agentNotes")]
    pub agent_notes: String,
}
