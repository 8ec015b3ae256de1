//! Scene configuration types describing a desired video shot.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Visual style of the generated video prompt.
///
/// A closed set: every style the form offers maps to exactly one variant,
/// and the kebab-case encoding matches the values exchanged with frontends.
///
/// # Examples
///
/// ```
/// use cineprompt_core::VideoStyle;
///
/// assert_eq!(format!("{}", VideoStyle::Cyberpunk), "cyberpunk");
/// assert_eq!(format!("{}", VideoStyle::ThreeDRender), "3d-render");
/// assert_eq!(VideoStyle::default(), VideoStyle::Cinematic);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum VideoStyle {
    /// Classic film look with dramatic framing
    #[default]
    Cinematic,
    /// Photorealistic rendering
    Realistic,
    /// Japanese animation style
    Anime,
    /// Computer-generated 3D render
    #[serde(rename = "3d-render")]
    #[strum(serialize = "3d-render")]
    ThreeDRender,
    /// Neon-soaked high-tech dystopia
    Cyberpunk,
    /// Dreamlike, impossible imagery
    Surreal,
    /// Aged film stock and period texture
    Vintage,
}

/// The structured scene description controlled by the user.
///
/// Every field except `style` is free text and defaults to empty. Only a
/// non-empty `subject` gates whether generation may be invoked; all other
/// fields are optional detail. A snapshot of this struct is taken per
/// generation call, so later edits never alter a recorded history entry.
///
/// # Examples
///
/// ```
/// use cineprompt_core::{SceneConfig, VideoStyle};
///
/// let config = SceneConfig::builder()
///     .subject("a lone astronaut")
///     .style(VideoStyle::Cyberpunk)
///     .build()
///     .unwrap();
///
/// assert!(config.has_subject());
/// assert_eq!(config.action, "");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Builder)]
#[builder(setter(into), default)]
pub struct SceneConfig {
    /// The main subject of the shot
    pub subject: String,
    /// What the subject is doing
    pub action: String,
    /// Where the shot takes place
    pub setting: String,
    /// Visual style of the output
    pub style: VideoStyle,
    /// Emotional tone of the scene
    pub mood: String,
    /// Lighting description
    pub lighting: String,
    /// Camera angle, e.g. "low angle" or "bird's eye"
    pub camera_angle: String,
    /// Camera movement, e.g. "slow dolly in"
    pub camera_movement: String,
    /// Resolution or quality target, e.g. "8K"
    pub resolution: String,
    /// Elements the generated video must not include
    pub negative_prompt: String,
}

impl SceneConfig {
    /// Creates a new builder for `SceneConfig`.
    pub fn builder() -> SceneConfigBuilder {
        SceneConfigBuilder::default()
    }

    /// Whether the subject field is non-empty.
    ///
    /// Generation must not be invoked for a subjectless scene; callers use
    /// this to gate submission.
    pub fn has_subject(&self) -> bool {
        !self.subject.trim().is_empty()
    }
}
