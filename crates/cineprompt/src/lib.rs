//! Cineprompt - Cinematic Video Prompt Studio
//!
//! Cineprompt turns a structured scene description into a professional,
//! cinematic video prompt by driving a generative text model, with a
//! second refinement pass and a bounded in-session history of results.
//!
//! # Features
//!
//! - **Deterministic compilation**: the same scene always renders the same
//!   model instruction; the creative variation comes from the model
//! - **Two request lifecycles**: generation surfaces failures, refinement
//!   degrades to a no-op so an existing prompt is never lost
//! - **Bounded history**: the ten most recent generations, replayable
//! - **Injectable backend**: any [`CompletionDriver`] implementation plugs
//!   into the studio; the Gemini REST client ships in `cineprompt_models`
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use cineprompt::{GeminiClient, PromptStudio, SceneConfig, Session, VideoStyle};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let studio = PromptStudio::new(
//!         GeminiClient::for_generation()?,
//!         GeminiClient::for_refinement()?,
//!     );
//!     let mut session = Session::new(studio);
//!
//!     let config = SceneConfig::builder()
//!         .subject("a lone astronaut")
//!         .style(VideoStyle::Cyberpunk)
//!         .build()?;
//!
//!     session.generate(config).await?;
//!     println!("{}", session.current_prompt().unwrap_or_default());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Cineprompt is organized as a workspace with focused crates:
//!
//! - `cineprompt_core` - Scene configuration and instruction rendering
//! - `cineprompt_interface` - CompletionDriver trait definition
//! - `cineprompt_error` - Error types
//! - `cineprompt_models` - Gemini backend
//!
//! This crate (`cineprompt`) holds the studio, history ledger, and session
//! controller, and re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod history;
mod session;
mod studio;

pub use history::{HISTORY_CAP, HistoryEntry, HistoryLedger};
pub use session::Session;
pub use studio::{
    FALLBACK_PROMPT, GENERATION_TEMPERATURE, PromptStudio, REFINEMENT_TEMPERATURE, THINKING_BUDGET,
};

// Re-export workspace crates (always available)
pub use cineprompt_core::*;
pub use cineprompt_error::*;
pub use cineprompt_interface::*;
pub use cineprompt_models::*;
