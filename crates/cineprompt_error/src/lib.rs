//! Error types for the cineprompt library.
//!
//! This crate provides the foundation error types used throughout the
//! cineprompt workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use cineprompt_error::{CinepromptResult, ConfigError};
//!
//! fn load_key() -> CinepromptResult<String> {
//!     Err(ConfigError::new("GEMINI_API_KEY not set"))?
//! }
//!
//! match load_key() {
//!     Ok(key) => println!("Got: {}", key),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod gemini;
mod generation;

pub use config::ConfigError;
pub use error::{CinepromptError, CinepromptErrorKind, CinepromptResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use generation::GenerationFailure;
