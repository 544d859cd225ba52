// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intelligence extraction from scam message text.
//!
//! [`extract`] is a pure, total function: any string input yields an
//! [`IntelligenceRecord`], with all-empty fields when nothing matches.
//! Each field is computed independently against the full text -- there is
//! no cross-field de-duplication, so a phone number embedded inside a
//! longer digit run may legitimately appear under both `phone_numbers`
//! and `bank_accounts`.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use lurebox_core::IntelligenceRecord;

/// Maximal word-bounded runs of 9-18 digits. Boundary anchors give
/// longest-match-wins: shorter numeric substrings inside a valid run are
/// not separately reported.
static BANK_ACCOUNT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b\d{9,18}\b").unwrap());

/// UPI-style `handle@provider` tokens. The provider part is letters only,
/// which excludes numeric TLDs but also matches ordinary email-like
/// strings -- an accepted false positive, not a bug to fix.
static UPI_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-zA-Z0-9.\-_]+@[a-zA-Z]+").unwrap());

/// http/https URLs over a permissive RFC3986-ish character set. Note the
/// `$-_` range covers most URL punctuation (`/`, `:`, `=`, `?`, ...).
static PHISHING_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"https?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*(),]|%[0-9a-fA-F]{2})+").unwrap()
});

/// Optional leading `+`, then 10-12 digits. Unbounded on purpose: the
/// original service double-matches numbers inside longer digit runs.
static PHONE_NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\+?\d{10,12}").unwrap());

/// Fixed vocabulary checked by case-insensitive containment, reported in
/// this canonical order.
const SUSPICIOUS_KEYWORDS: [&str; 5] = ["blocked", "urgent", "verify", "suspend", "kyc"];

/// Extract structured intelligence from a single message's text.
///
/// Deterministic and never fails; empty or malformed input yields an
/// all-empty record. Operates on the given text alone, not on any
/// accumulated history.
pub fn extract(text: &str) -> IntelligenceRecord {
    let lowered = text.to_lowercase();

    IntelligenceRecord {
        bank_accounts: find_all(&BANK_ACCOUNT, text),
        upi_ids: find_all(&UPI_ID, text),
        phishing_links: find_all(&PHISHING_LINK, text),
        phone_numbers: find_all(&PHONE_NUMBER, text),
        suspicious_keywords: SUSPICIOUS_KEYWORDS
            .iter()
            .filter(|kw| lowered.contains(**kw))
            .map(|kw| kw.to_string())
            .collect(),
    }
}

/// Collect all matches of `pattern`, de-duplicated with first occurrence
/// winning so the field has set semantics while preserving text order.
fn find_all(pattern: &Regex, text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    pattern
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .filter(|s| seen.insert(s.clone()))
        .collect()
}
