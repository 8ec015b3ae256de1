//! Command handlers for the cineprompt binary.

use cineprompt::{
    CinepromptResult, GeminiClient, PromptStudio, SceneConfig, Session, compile_generation,
};
use tracing::info;

/// Generate a prompt for the given scene, optionally refining it.
///
/// Builds the Gemini-backed studio, runs one generation, and prints the
/// resulting prompt to stdout. With `refine`, a refinement pass replaces
/// the printed text when it succeeds.
pub async fn run_generate(scene: SceneConfig, refine: bool) -> CinepromptResult<()> {
    let studio = PromptStudio::new(
        GeminiClient::for_generation()?,
        GeminiClient::for_refinement()?,
    );
    let mut session = Session::new(studio);

    let entry_id = session.generate(scene).await?;
    info!(entry = %entry_id, "Prompt recorded");

    if refine {
        session.refine().await;
    }

    println!("{}", session.current_prompt().unwrap_or_default());
    Ok(())
}

/// Print the compiled model instruction for a scene without calling the API.
pub fn run_compile(scene: &SceneConfig) {
    println!("{}", compile_generation(scene));
}
