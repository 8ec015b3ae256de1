//! LLM provider integrations for the cineprompt library.
//!
//! Currently a single backend: the Google Gemini REST API. Backends
//! implement [`cineprompt_interface::CompletionDriver`] and are injected
//! into the studio by the application layer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod gemini;

pub use gemini::{GENERATION_MODEL, GeminiClient, REFINEMENT_MODEL};
