//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! cineprompt binary.

mod commands;
mod run;

pub use commands::{Cli, Commands, SceneArgs};
pub use run::{run_compile, run_generate};
