//! Generation and refinement orchestration.

use cineprompt_core::{CompletionRequest, SceneConfig, compile_generation, compile_refinement};
use cineprompt_error::{CinepromptResult, ConfigError, GenerationFailure};
use cineprompt_interface::CompletionDriver;
use tracing::{error, instrument, warn};

/// Sampling temperature for the generation path: creative but coherent.
pub const GENERATION_TEMPERATURE: f64 = 0.8;

/// Sampling temperature for the refinement path.
pub const REFINEMENT_TEMPERATURE: f64 = 0.7;

/// Internal reasoning allowance granted to the generation model.
pub const THINKING_BUDGET: u32 = 4000;

/// Literal returned when the model answers successfully but with no text.
///
/// A degraded success, not an error: the caller always receives something
/// to display rather than a blank result.
pub const FALLBACK_PROMPT: &str = "Failed to generate prompt.";

/// Orchestrates the two request lifecycles against injected backends.
///
/// The generator and refiner are independent driver instances, typically
/// the same backend configured with different model identifiers. The
/// studio is stateless; both operations are safe to run concurrently.
///
/// The two paths deliberately fail differently: [`generate`] surfaces a
/// uniform [`GenerationFailure`] the caller must show the user, while
/// [`refine`] absorbs every fault and hands back the input unchanged, so a
/// refinement attempt can never destroy a prompt the user already has.
///
/// [`generate`]: PromptStudio::generate
/// [`refine`]: PromptStudio::refine
#[derive(Debug, Clone)]
pub struct PromptStudio<D> {
    generator: D,
    refiner: D,
}

impl<D: CompletionDriver> PromptStudio<D> {
    /// Create a studio from generation and refinement backends.
    pub fn new(generator: D, refiner: D) -> Self {
        Self { generator, refiner }
    }

    /// Generate a cinematic video prompt for a scene configuration.
    ///
    /// Compiles the scene into an instruction and sends it to the
    /// generation backend. The model's text is returned verbatim; an empty
    /// answer degrades to [`FALLBACK_PROMPT`]. No retries are attempted —
    /// a failure is terminal for this invocation.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`]-backed failure for an empty subject, and
    /// a uniform [`GenerationFailure`] for any transport or API fault. The
    /// underlying fault is logged and not exposed to the caller.
    #[instrument(skip(self, config))]
    pub async fn generate(&self, config: &SceneConfig) -> CinepromptResult<String> {
        if !config.has_subject() {
            return Err(ConfigError::new("generation requires a non-empty subject").into());
        }

        let req = CompletionRequest {
            prompt: compile_generation(config),
            temperature: Some(GENERATION_TEMPERATURE),
            thinking_budget: Some(THINKING_BUDGET),
            model: None,
        };

        match self.generator.complete(&req).await {
            Ok(resp) if resp.text.is_empty() => Ok(FALLBACK_PROMPT.to_string()),
            Ok(resp) => Ok(resp.text),
            Err(e) => {
                error!(error = %e, provider = self.generator.provider_name(), "Generation request failed");
                Err(GenerationFailure::new().into())
            }
        }
    }

    /// Refine an existing prompt, degrading to a no-op on any fault.
    ///
    /// Sends the current prompt to the refinement backend and returns the
    /// elaborated text verbatim. If the backend fails or answers with
    /// empty text, the input is returned unchanged; the fault is only
    /// logged.
    #[instrument(skip(self, current_prompt))]
    pub async fn refine(&self, current_prompt: &str) -> String {
        let req = CompletionRequest {
            prompt: compile_refinement(current_prompt),
            temperature: Some(REFINEMENT_TEMPERATURE),
            thinking_budget: None,
            model: None,
        };

        match self.refiner.complete(&req).await {
            Ok(resp) if resp.text.is_empty() => {
                warn!(provider = self.refiner.provider_name(), "Refinement returned empty text, keeping original");
                current_prompt.to_string()
            }
            Ok(resp) => resp.text,
            Err(e) => {
                warn!(error = %e, provider = self.refiner.provider_name(), "Refinement request failed, keeping original");
                current_prompt.to_string()
            }
        }
    }
}
