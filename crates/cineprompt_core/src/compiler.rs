//! Deterministic rendering of scene configurations into model instructions.
//!
//! These functions are pure string construction: the same input always
//! yields the same instruction text, and no field is silently dropped —
//! an empty field is rendered as an empty value so the model knows the
//! user left it blank. The creative output comes from the model; the
//! instruction itself is fully determined here.

use crate::SceneConfig;

/// Render the generation instruction for a scene configuration.
///
/// Frames the model as a video prompt engineer targeting the major
/// generative video platforms, enumerates every field of the user concept
/// (blank fields included), places the negative prompt under an explicit
/// exclusion directive, and closes with the fixed structural requirements
/// the output must satisfy.
///
/// # Examples
///
/// ```
/// use cineprompt_core::{SceneConfig, VideoStyle, compile_generation};
///
/// let config = SceneConfig::builder()
///     .subject("a lone astronaut")
///     .style(VideoStyle::Cyberpunk)
///     .build()
///     .unwrap();
///
/// let instruction = compile_generation(&config);
/// assert!(instruction.contains("Subject: a lone astronaut"));
/// assert!(instruction.contains("Style: cyberpunk"));
/// ```
pub fn compile_generation(config: &SceneConfig) -> String {
    format!(
        "Act as a World-Class AI Video Prompt Engineer.\n\
         Transform the following user concept into a highly detailed, professional, and cinematic video prompt \
         optimized for models like Sora, Runway Gen-3, Kling, and Luma Dream Machine.\n\
         \n\
         User Concept:\n\
         - Subject: {subject}\n\
         - Action: {action}\n\
         - Setting: {setting}\n\
         - Style: {style}\n\
         - Mood: {mood}\n\
         - Lighting: {lighting}\n\
         - Camera Angle: {camera_angle}\n\
         - Camera Movement: {camera_movement}\n\
         - Resolution/Quality: {resolution}\n\
         \n\
         Negative constraints (do not include): {negative}\n\
         \n\
         Requirements for the output:\n\
         1. Start with a strong subject-action-setting foundation.\n\
         2. Incorporate specific technical cinematic terms (e.g., bokeh, anamorphic lens flares, ray tracing, subsurface scattering).\n\
         3. Describe the motion dynamics clearly (e.g., fluid movement, slow-motion 120fps feel).\n\
         4. Ensure the lighting is atmospheric and detailed.\n\
         5. The final prompt should be a single cohesive paragraph, followed by a list of technical tags.\n",
        subject = config.subject,
        action = config.action,
        setting = config.setting,
        style = config.style,
        mood = config.mood,
        lighting = config.lighting,
        camera_angle = config.camera_angle,
        camera_movement = config.camera_movement,
        resolution = config.resolution,
        negative = config.negative_prompt,
    )
}

/// Render the refinement instruction wrapping an existing prompt.
///
/// Asks the model to intensify sensory and cinematic detail while
/// preserving the prompt's intent, and to return only the refined text
/// with no surrounding commentary.
pub fn compile_refinement(current_prompt: &str) -> String {
    format!(
        "Take the following AI video prompt and make it even more detailed, professional, and visually stunning.\n\
         Add more sensory details, improve the cinematic language, and refine the motion descriptions.\n\
         \n\
         Current Prompt:\n\
         {current_prompt}\n\
         \n\
         Return ONLY the refined prompt text.\n"
    )
}
