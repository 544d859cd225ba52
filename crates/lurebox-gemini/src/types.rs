// SPDX-FileCopyrightText: 2026 Lurebox Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gemini generateContent API request/response types.

use serde::{Deserialize, Serialize};

/// A request to the Gemini generateContent endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    /// Conversation contents. The persona prompt goes in as a single
    /// user turn.
    pub contents: Vec<Content>,

    /// Generation parameters.
    #[serde(
        rename = "generationConfig",
        skip_serializing_if = "Option::is_none"
    )]
    pub generation_config: Option<GenerationConfig>,
}

/// A single content block (one conversational turn).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    /// Text parts of this turn.
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One text part within a content block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    /// Plain text payload.
    pub text: String,
}

/// Generation parameters for the request.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationConfig {
    /// Maximum tokens to generate.
    #[serde(rename = "maxOutputTokens")]
    pub max_output_tokens: u32,
}

/// A response from the generateContent endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    /// Candidate completions; the first one is used.
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

impl GenerateContentResponse {
    /// Extract the text of the first candidate, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .first()
            .map(|p| p.text.as_str())
    }
}

/// One candidate completion.
#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    /// Generated content; absent when the candidate was blocked.
    #[serde(default)]
    pub content: Option<Content>,
}

/// Error envelope returned by the Gemini API on failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Error details.
    pub error: ApiError,
}

/// Error details within an [`ApiErrorResponse`].
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// HTTP-ish status code.
    #[serde(default)]
    pub code: i32,
    /// Human-readable error message.
    #[serde(default)]
    pub message: String,
    /// Symbolic status (e.g., "INVALID_ARGUMENT").
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hello".into(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                max_output_tokens: 200,
            }),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"generationConfig\""));
        assert!(json.contains("\"maxOutputTokens\":200"));
        assert!(json.contains("\"parts\":[{\"text\":\"hello\"}]"));
    }

    #[test]
    fn response_first_text_extracts_candidate() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Oh dear, which account?"}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), Some("Oh dear, which account?"));
    }

    #[test]
    fn response_without_candidates_has_no_text() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn blocked_candidate_has_no_text() {
        let json = r#"{"candidates": [{}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn api_error_deserializes() {
        let json = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        let err: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(err.error.code, 400);
        assert_eq!(err.error.status, "INVALID_ARGUMENT");
    }
}
