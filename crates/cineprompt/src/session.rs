//! Session controller owning the application state.

use crate::{HistoryLedger, PromptStudio};
use cineprompt_core::SceneConfig;
use cineprompt_error::CinepromptResult;
use cineprompt_interface::CompletionDriver;

/// Single-owner controller for one editing session.
///
/// Owns the current prompt and the history ledger, and mutates them only
/// through the core operations. Every mutating method takes `&mut self`,
/// so completions apply strictly in the order they arrive and no locking
/// is needed — the single-writer invariant holds by construction.
///
/// State is in-memory for the lifetime of the session and does not survive
/// a restart.
#[derive(Debug)]
pub struct Session<D> {
    studio: PromptStudio<D>,
    history: HistoryLedger,
    current_prompt: Option<String>,
}

impl<D: CompletionDriver> Session<D> {
    /// Create a session with an empty history and no current prompt.
    pub fn new(studio: PromptStudio<D>) -> Self {
        Self {
            studio,
            history: HistoryLedger::new(),
            current_prompt: None,
        }
    }

    /// Generate a prompt for a scene snapshot.
    ///
    /// On success the result becomes the current prompt and is recorded in
    /// the ledger; the returned string is the id of the new history entry.
    ///
    /// # Errors
    ///
    /// Propagates the studio's generation failure. On failure the current
    /// prompt and the ledger are left untouched, and the caller may retry
    /// by resubmitting.
    pub async fn generate(&mut self, config: SceneConfig) -> CinepromptResult<String> {
        let prompt = self.studio.generate(&config).await?;
        let entry = self.history.record(config, prompt.clone());
        let id = entry.id().clone();
        self.current_prompt = Some(prompt);
        Ok(id)
    }

    /// Refine the current prompt in place.
    ///
    /// A no-op when no prompt has been generated yet. Refinement results
    /// replace the displayed prompt but are never recorded in the ledger.
    pub async fn refine(&mut self) {
        let Some(current) = self.current_prompt.take() else {
            return;
        };
        let refined = self.studio.refine(&current).await;
        self.current_prompt = Some(refined);
    }

    /// Restore a past generation as the current state.
    ///
    /// Returns the stored scene snapshot so the caller can restore its
    /// form; the stored text becomes the current prompt. Returns `None`
    /// for an unknown id, leaving the state unchanged.
    pub fn replay(&mut self, id: &str) -> Option<SceneConfig> {
        let (config, prompt) = self.history.select(id)?;
        let config = config.clone();
        let prompt = prompt.to_string();
        self.current_prompt = Some(prompt);
        Some(config)
    }

    /// The currently displayed prompt, if any.
    pub fn current_prompt(&self) -> Option<&str> {
        self.current_prompt.as_deref()
    }

    /// The session's history ledger.
    pub fn history(&self) -> &HistoryLedger {
        &self.history
    }
}
