//! Trait definitions for text-generation backends.

use async_trait::async_trait;
use cineprompt_core::{CompletionRequest, CompletionResponse};
use cineprompt_error::CinepromptResult;

/// Core trait every text-generation backend must implement.
///
/// This is the minimal interface for single-shot text completion. The
/// studio never depends on a particular transport, authentication scheme,
/// or wire format; it only drives this trait.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Produce model output for a completion request.
    async fn complete(&self, req: &CompletionRequest) -> CinepromptResult<CompletionResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier used when `CompletionRequest.model` is None.
    fn model_name(&self) -> &str;
}
