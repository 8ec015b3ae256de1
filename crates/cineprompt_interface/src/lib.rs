//! Backend trait definitions for the cineprompt library.
//!
//! The prompt studio treats the text-generation model as an opaque,
//! possibly-failing capability behind [`CompletionDriver`]. Any backend —
//! a hosted API, a local server, or a test mock — plugs in by
//! implementing the trait.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;

pub use traits::CompletionDriver;
