//! Google Gemini REST API backend.

mod client;
mod conversion;
mod dto;

pub use client::{GENERATION_MODEL, GeminiClient, REFINEMENT_MODEL};
pub use conversion::{from_gemini_response, to_gemini_request};
pub use dto::{
    Candidate, Content, GenerationConfig, GeminiRequest, GeminiResponse, Part, ThinkingConfig,
};

/// Result type carrying Gemini-specific errors.
pub type GeminiResult<T> = std::result::Result<T, cineprompt_error::GeminiError>;
