// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persona framing for the reply engine.
//!
//! The honeypot plays "Priya", a confused victim who keeps the scammer
//! talking and fishes for payment details. The prompt is the fixed
//! framing, the joined recent history, and the latest scammer message.

use lurebox_core::Message;

/// Default persona framing prepended to every prompt.
pub const DEFAULT_PERSONA: &str = "Persona: Priya (confused victim). You are not an assistant; \
stay in character, act worried and slightly confused, and try to get the scammer to reveal \
payment details (account numbers, UPI IDs, links).";

/// Reply used whenever the reply engine fails or times out.
pub const DEFAULT_FALLBACK_REPLY: &str = "Oh no, I'm so worried. What should I do?";

/// How many trailing history messages are included in the prompt.
pub const DEFAULT_HISTORY_WINDOW: usize = 10;

/// Assemble the full prompt: persona framing, the most recent
/// `history_window` turns of dialogue, and the latest scammer message.
pub fn build_prompt(
    persona: &str,
    history: &[Message],
    latest_text: &str,
    history_window: usize,
) -> String {
    let start = history.len().saturating_sub(history_window);
    let mut prompt = String::with_capacity(persona.len() + latest_text.len() + 128);

    prompt.push_str(persona);
    prompt.push_str("\n\nConversation so far:\n");
    for message in &history[start..] {
        prompt.push_str(&message.sender);
        prompt.push_str(": ");
        prompt.push_str(&message.text);
        prompt.push('\n');
    }
    prompt.push_str("Scammer: ");
    prompt.push_str(latest_text);
    prompt.push_str("\nPriya's Response:");
    prompt
}
