//! Request and response types for text completion.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// A single text-completion request to a model backend.
///
/// # Examples
///
/// ```
/// use cineprompt_core::CompletionRequest;
///
/// let request = CompletionRequest::builder()
///     .prompt("Describe a sunrise over Mars.")
///     .temperature(Some(0.8))
///     .thinking_budget(Some(4000))
///     .build()
///     .unwrap();
///
/// assert_eq!(request.temperature, Some(0.8));
/// assert!(request.model.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
pub struct CompletionRequest {
    /// The full instruction text to send
    pub prompt: String,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f64>,
    /// Internal reasoning token allowance, for models that support it
    pub thinking_budget: Option<u32>,
    /// Model identifier override; backends fall back to their default
    pub model: Option<String>,
}

impl CompletionRequest {
    /// Creates a new builder for `CompletionRequest`.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}

/// The unified completion response.
///
/// An empty `text` is a valid transport-level success; callers decide how
/// to degrade when the model returns nothing usable.
///
/// # Examples
///
/// ```
/// use cineprompt_core::CompletionResponse;
///
/// let response = CompletionResponse {
///     text: "A neon-drenched astronaut drifts...".to_string(),
/// };
///
/// assert!(!response.text.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
pub struct CompletionResponse {
    /// The generated text, verbatim from the model
    pub text: String,
}

impl CompletionResponse {
    /// Creates a new builder for `CompletionResponse`.
    pub fn builder() -> CompletionResponseBuilder {
        CompletionResponseBuilder::default()
    }
}
