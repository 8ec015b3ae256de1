//! Test utilities for cineprompt tests.
//!
//! This module provides mock implementations and test helpers.

mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{MockBehavior, MockDriver, MockResponse};

use cineprompt::{SceneConfig, VideoStyle};

/// Helper to create a fully populated scene configuration.
#[allow(dead_code)]
pub fn full_scene() -> SceneConfig {
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

/// Helper to create a minimal scene with only a subject.
#[allow(dead_code)]
pub fn subject_only(subject: &str) -> SceneConfig {
    SceneConfig::builder()
        .subject(subject)
        .build()
        .expect("Failed to build scene config")
}
