//! Mock completion driver for testing.

use async_trait::async_trait;
use cineprompt::{
    CinepromptError, CinepromptResult, CompletionDriver, CompletionRequest, CompletionResponse,
    GeminiError, GeminiErrorKind,
};
use std::sync::{Arc, Mutex};

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(GeminiErrorKind),
    /// Return a sequence of responses (errors or success)
    Sequence(Vec<MockResponse>),
}

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    Success(String),
    Error(GeminiErrorKind),
}

/// Mock completion driver for testing.
///
/// Allows tests to control responses and inspect the requests the studio
/// issued without making actual API calls.
#[derive(Debug, Clone)]
pub struct MockDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
    model_name: String,
}

impl MockDriver {
    /// Create a mock driver that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock driver that always fails with the given error.
    pub fn new_error(error: GeminiErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Create a mock driver with a sequence of responses.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// Create a mock driver with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
            model_name: "mock-model".to_string(),
        }
    }

    /// Get the number of times complete() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Get the most recent request, if any.
    pub fn last_request(&self) -> Option<CompletionRequest> {
        self.requests.lock().unwrap().last().cloned()
    }

    /// Get the next response based on the configured behavior.
    fn next_response(&self, current_count: usize) -> CinepromptResult<CompletionResponse> {
        match &self.behavior {
            MockBehavior::Success(text) => Ok(CompletionResponse { text: text.clone() }),
            MockBehavior::Error(error_kind) => {
                Err(CinepromptError::from(GeminiError::new(error_kind.clone())))
            }
            MockBehavior::Sequence(responses) => {
                if current_count >= responses.len() {
                    // Past end of sequence, return error
                    Err(CinepromptError::from(GeminiError::new(
                        GeminiErrorKind::ApiRequest(format!(
                            "Mock sequence exhausted (call {} beyond {} responses)",
                            current_count + 1,
                            responses.len()
                        )),
                    )))
                } else {
                    match &responses[current_count] {
                        MockResponse::Success(text) => {
                            Ok(CompletionResponse { text: text.clone() })
                        }
                        MockResponse::Error(error_kind) => {
                            Err(CinepromptError::from(GeminiError::new(error_kind.clone())))
                        }
                    }
                }
            }
        }
    }
}

#[async_trait]
impl CompletionDriver for MockDriver {
    async fn complete(&self, req: &CompletionRequest) -> CinepromptResult<CompletionResponse> {
        let current_count = {
            let mut count = self.call_count.lock().unwrap();
            let current = *count;
            *count += 1;
            current
        };
        self.requests.lock().unwrap().push(req.clone());
        self.next_response(current_count)
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
