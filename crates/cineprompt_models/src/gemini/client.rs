//! Google Gemini API client.

use async_trait::async_trait;
use reqwest::Client;
use std::env;
use tracing::{debug, instrument};

use cineprompt_core::{CompletionRequest, CompletionResponse};
use cineprompt_error::{CinepromptResult, GeminiError, GeminiErrorKind};
use cineprompt_interface::CompletionDriver;

use super::GeminiResult;
use super::conversion;

/// Model identifier for the generation path (higher quality, slower).
pub const GENERATION_MODEL: &str = "gemini-3-pro-preview";

/// Model identifier for the refinement path (faster, lighter).
pub const REFINEMENT_MODEL: &str = "gemini-3-flash-preview";

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Client for the Google Gemini `generateContent` REST API.
///
/// One client addresses one default model; requests may override the model
/// per call via `CompletionRequest.model`. The API key is read from the
/// `GEMINI_API_KEY` environment variable.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl GeminiClient {
    /// Create a new Gemini client for the given default model.
    ///
    /// # Errors
    ///
    /// Returns an error if `GEMINI_API_KEY` is not set in the environment.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cineprompt_models::{GeminiClient, GENERATION_MODEL};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = GeminiClient::new(GENERATION_MODEL)?;
    /// # Ok(())
    /// # }
    /// ```
    #[instrument(name = "gemini_client_new")]
    pub fn new(model: &str) -> CinepromptResult<Self> {
        Self::new_internal(model).map_err(Into::into)
    }

    /// Create a new Gemini client with an explicit API key.
    pub fn with_api_key(api_key: impl Into<String>, model: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            model: model.to_string(),
        }
    }

    /// Client configured for the generation path.
    pub fn for_generation() -> CinepromptResult<Self> {
        Self::new(GENERATION_MODEL)
    }

    /// Client configured for the refinement path.
    pub fn for_refinement() -> CinepromptResult<Self> {
        Self::new(REFINEMENT_MODEL)
    }

    /// Internal constructor that returns Gemini-specific errors.
    fn new_internal(model: &str) -> GeminiResult<Self> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| GeminiError::new(GeminiErrorKind::MissingApiKey))?;

        Ok(Self {
            client: Client::new(),
            api_key,
            base_url: BASE_URL.to_string(),
            model: model.to_string(),
        })
    }

    /// Internal complete method that returns Gemini-specific errors.
    async fn complete_internal(&self, req: &CompletionRequest) -> GeminiResult<CompletionResponse> {
        let model = req.model.as_deref().unwrap_or(&self.model);
        let url = format!("{}/{}:generateContent", self.base_url, model);
        let body = conversion::to_gemini_request(req);

        debug!(url = %url, model = %model, "Sending Gemini API request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ApiRequest(e.to_string())))?;

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(GeminiError::new(GeminiErrorKind::HttpError {
                status_code,
                message,
            }));
        }

        let gemini_response = response
            .json::<super::GeminiResponse>()
            .await
            .map_err(|e| GeminiError::new(GeminiErrorKind::ResponseParse(e.to_string())))?;

        Ok(conversion::from_gemini_response(&gemini_response))
    }
}

#[async_trait]
impl CompletionDriver for GeminiClient {
    #[instrument(skip(self, req))]
    async fn complete(&self, req: &CompletionRequest) -> CinepromptResult<CompletionResponse> {
        self.complete_internal(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
