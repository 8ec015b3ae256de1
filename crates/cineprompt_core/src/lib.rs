//! Core data types for the cineprompt video prompt library.
//!
//! This crate provides the scene configuration model, the completion
//! request/response types shared by all backends, and the deterministic
//! instruction rendering that turns a scene into model-ready text.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod compiler;
mod request;
mod scene;

pub use compiler::{compile_generation, compile_refinement};
pub use request::{
    CompletionRequest, CompletionRequestBuilder, CompletionResponse, CompletionResponseBuilder,
};
pub use scene::{SceneConfig, SceneConfigBuilder, VideoStyle};
