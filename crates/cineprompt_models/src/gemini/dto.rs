//! Gemini `generateContent` wire-format data transfer objects.
//!
//! Field names follow the REST API's camelCase convention; absent
//! optionals are omitted from the serialized body.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A single text part within a content block.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new, Getters)]
pub struct Part {
    /// Text payload
    #[new(into)]
    text: String,
}

/// A content block holding one or more parts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new, Getters)]
pub struct Content {
    /// The parts making up this block
    parts: Vec<Part>,
}

/// Thinking configuration bounding the model's internal reasoning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new, Getters)]
#[serde(rename_all = "camelCase")]
pub struct ThinkingConfig {
    /// Token allowance for internal reasoning
    thinking_budget: u32,
}

/// Generation parameters for a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, new, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f64>,
    /// Optional reasoning allowance
    #[serde(skip_serializing_if = "Option::is_none")]
    thinking_config: Option<ThinkingConfig>,
}

/// Request body for the `generateContent` endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, new, Getters)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest {
    /// Conversation contents (a single user block for this client)
    contents: Vec<Content>,
    /// Generation parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

/// A response candidate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new, Getters)]
pub struct Candidate {
    /// Generated content for this candidate
    #[serde(default)]
    content: Option<Content>,
}

/// Response body from the `generateContent` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, new, Getters)]
pub struct GeminiResponse {
    /// Ranked candidates; the first is the primary result
    #[serde(default)]
    candidates: Vec<Candidate>,
}

impl GeminiResponse {
    /// Concatenated text of the first candidate's parts.
    ///
    /// Returns an empty string when the response carries no candidates or
    /// no text parts; the caller decides how to degrade.
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .map(|part| part.text.as_str())
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default()
    }
}
