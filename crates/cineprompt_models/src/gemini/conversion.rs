//! Conversions between cineprompt types and the Gemini wire format.

use crate::gemini::dto::{
    Content, GenerationConfig, GeminiRequest, GeminiResponse, Part, ThinkingConfig,
};
use cineprompt_core::{CompletionRequest, CompletionResponse};

/// Build a Gemini request body from a completion request.
///
/// The prompt becomes a single user content block. A generation config is
/// attached only when the request carries a temperature or a thinking
/// budget, keeping the serialized body minimal.
pub fn to_gemini_request(req: &CompletionRequest) -> GeminiRequest {
    let contents = vec![Content::new(vec![Part::new(req.prompt.clone())])];

    let generation_config = if req.temperature.is_some() || req.thinking_budget.is_some() {
        Some(GenerationConfig::new(
            req.temperature,
            req.thinking_budget.map(ThinkingConfig::new),
        ))
    } else {
        None
    };

    GeminiRequest::new(contents, generation_config)
}

/// Extract a completion response from a Gemini response body.
pub fn from_gemini_response(resp: &GeminiResponse) -> CompletionResponse {
    CompletionResponse { text: resp.text() }
}
