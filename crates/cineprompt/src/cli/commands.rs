//! CLI command definitions.

use clap::{Args, Parser, Subcommand};
use cineprompt_core::{SceneConfig, VideoStyle};

/// Cineprompt - cinematic video prompt studio for generative AI video models
#[derive(Parser, Debug)]
#[command(name = "cineprompt")]
#[command(about = "Generate cinematic video prompts from a structured scene description", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a video prompt from scene flags
    Generate {
        /// Scene description
        #[command(flatten)]
        scene: SceneArgs,

        /// Run a refinement pass over the generated prompt
        #[arg(long)]
        refine: bool,
    },

    /// Print the compiled model instruction without calling the API
    Compile {
        /// Scene description
        #[command(flatten)]
        scene: SceneArgs,
    },
}

/// Scene description flags shared by the generate and compile commands.
#[derive(Args, Debug)]
pub struct SceneArgs {
    /// Main subject of the shot (required for generation)
    #[arg(long)]
    pub subject: String,

    /// What the subject is doing
    #[arg(long, default_value = "")]
    pub action: String,

    /// Where the shot takes place
    #[arg(long, default_value = "")]
    pub setting: String,

    /// Visual style (cinematic, realistic, anime, 3d-render, cyberpunk, surreal, vintage)
    #[arg(long, default_value = "cinematic")]
    pub style: VideoStyle,

    /// Emotional tone of the scene
    #[arg(long, default_value = "")]
    pub mood: String,

    /// Lighting description
    #[arg(long, default_value = "")]
    pub lighting: String,

    /// Camera angle
    #[arg(long, default_value = "")]
    pub camera_angle: String,

    /// Camera movement
    #[arg(long, default_value = "")]
    pub camera_movement: String,

    /// Resolution or quality target
    #[arg(long, default_value = "")]
    pub resolution: String,

    /// Elements the video must not include
    #[arg(long, default_value = "")]
    pub negative_prompt: String,
}

impl From<SceneArgs> for SceneConfig {
    fn from(args: SceneArgs) -> Self {
        SceneConfig {
            subject: args.subject,
            action: args.action,
            setting: args.setting,
            style: args.style,
            mood: args.mood,
            lighting: args.lighting,
            camera_angle: args.camera_angle,
            camera_movement: args.camera_movement,
            resolution: args.resolution,
            negative_prompt: args.negative_prompt,
        }
    }
}
