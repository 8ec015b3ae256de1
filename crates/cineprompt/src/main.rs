//! Cineprompt CLI binary.
//!
//! Command-line frontend for the prompt studio:
//! - Generate a cinematic video prompt from scene flags
//! - Optionally run a refinement pass over the result
//! - Print the compiled instruction without contacting the API

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, run_compile, run_generate};

    // Load .env if present (GEMINI_API_KEY)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Generate { scene, refine } => {
            run_generate(scene.into(), refine).await?;
        }

        Commands::Compile { scene } => {
            run_compile(&scene.into());
        }
    }

    Ok(())
}
