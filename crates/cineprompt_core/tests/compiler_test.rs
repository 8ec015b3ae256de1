// Tests for deterministic instruction rendering.

use cineprompt_core::{SceneConfig, VideoStyle, compile_generation, compile_refinement};

fn full_scene() -> SceneConfig {
    SceneConfig {
        subject: "a lone astronaut".to_string(),
        action: "drifting through a ruined station".to_string(),
        setting: "low Earth orbit".to_string(),
        style: VideoStyle::Cyberpunk,
        mood: "melancholy".to_string(),
        lighting: "hard rim light".to_string(),
        camera_angle: "low angle".to_string(),
        camera_movement: "slow dolly in".to_string(),
        resolution: "8K".to_string(),
        negative_prompt: "text overlays".to_string(),
    }
}

#[test]
fn test_compilation_is_deterministic() {
    let config = full_scene();
    assert_eq!(compile_generation(&config), compile_generation(&config));
}

#[test]
fn test_every_field_appears_verbatim() {
    let config = full_scene();
    let instruction = compile_generation(&config);

    assert!(instruction.contains("Subject: a lone astronaut"));
    assert!(instruction.contains("Action: drifting through a ruined station"));
    assert!(instruction.contains("Setting: low Earth orbit"));
    assert!(instruction.contains("Style: cyberpunk"));
    assert!(instruction.contains("Mood: melancholy"));
    assert!(instruction.contains("Lighting: hard rim light"));
    assert!(instruction.contains("Camera Angle: low angle"));
    assert!(instruction.contains("Camera Movement: slow dolly in"));
    assert!(instruction.contains("Resolution/Quality: 8K"));
    assert!(instruction.contains("Negative constraints (do not include): text overlays"));
}

#[test]
fn test_empty_fields_are_rendered_as_empty_values() {
    let config = SceneConfig::builder()
        .subject("a lone astronaut")
        .style(VideoStyle::Cyberpunk)
        .build()
        .unwrap();
    let instruction = compile_generation(&config);

    // Blank fields stay visible so the model knows they were left empty
    assert!(instruction.contains("Subject: a lone astronaut"));
    assert!(instruction.contains("Style: cyberpunk"));
    assert!(instruction.contains("- Action: \n"));
    assert!(instruction.contains("- Setting: \n"));
    assert!(instruction.contains("- Mood: \n"));
    assert!(instruction.contains("- Lighting: \n"));
    assert!(instruction.contains("- Camera Angle: \n"));
    assert!(instruction.contains("- Camera Movement: \n"));
    assert!(instruction.contains("- Resolution/Quality: \n"));
    assert!(instruction.contains("Negative constraints (do not include): \n"));
}

#[test]
fn test_generation_instruction_framing() {
    let instruction = compile_generation(&full_scene());

    assert!(instruction.starts_with("Act as a World-Class AI Video Prompt Engineer."));
    assert!(instruction.contains("Sora, Runway Gen-3, Kling, and Luma Dream Machine"));
    assert!(instruction.contains("User Concept:"));
    assert!(instruction.contains("Requirements for the output:"));
    assert!(instruction.contains("subject-action-setting foundation"));
    assert!(instruction.contains("motion dynamics"));
    assert!(instruction.contains("lighting is atmospheric"));
    assert!(instruction.contains("single cohesive paragraph, followed by a list of technical tags"));
}

#[test]
fn test_refinement_instruction_wraps_current_prompt() {
    let instruction = compile_refinement("A fox leaps across a mossy log.");

    assert!(instruction.contains("Current Prompt:\nA fox leaps across a mossy log.\n"));
    assert!(instruction.contains("Return ONLY the refined prompt text."));
    assert!(instruction.contains("sensory details"));
}

#[test]
fn test_refinement_is_deterministic() {
    let current = "A fox leaps across a mossy log.";
    assert_eq!(compile_refinement(current), compile_refinement(current));
}

#[test]
fn test_style_serde_encoding_is_kebab_case() -> anyhow::Result<()> {
    assert_eq!(serde_json::to_string(&VideoStyle::ThreeDRender)?, "\"3d-render\"");
    assert_eq!(serde_json::to_string(&VideoStyle::Cyberpunk)?, "\"cyberpunk\"");
    let style: VideoStyle = serde_json::from_str("\"vintage\"")?;
    assert_eq!(style, VideoStyle::Vintage);
    Ok(())
}

#[test]
fn test_scene_config_serde_round_trip() -> anyhow::Result<()> {
    let config = full_scene();
    let json = serde_json::to_string(&config)?;
    let decoded: SceneConfig = serde_json::from_str(&json)?;
    assert_eq!(decoded, config);
    Ok(())
}

#[test]
fn test_default_scene_has_cinematic_style_and_no_subject() {
    let config = SceneConfig::default();
    assert_eq!(config.style, VideoStyle::Cinematic);
    assert!(!config.has_subject());
    assert!(config.subject.is_empty());
}
