// Game settings with defaults matching the classic feel: chunky paddles,
// a big slow ball, one-pixel-per-millisecond shots.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // Left paddle (the human in vs-AI mode)
    pub left_up: String,
    pub left_down: String,
    pub left_aim_up: String,
    pub left_aim_down: String,
    pub left_aim_clear: String,
    pub left_fire: String,

    // Right paddle (second human in --local mode; ignored vs the AI)
    pub right_up: String,
    pub right_down: String,
    pub right_aim_up: String,
    pub right_aim_down: String,
    pub right_aim_clear: String,
    pub right_fire: String,

    // Game controls
    pub quit: String,
    pub rematch: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: "W".to_string(),
            left_down: "S".to_string(),
            left_aim_up: "A".to_string(),
            left_aim_down: "D".to_string(),
            left_aim_clear: "C".to_string(),
            left_fire: "Space".to_string(),
            right_up: "Up".to_string(),
            right_down: "Down".to_string(),
            right_aim_up: "Left".to_string(),
            right_aim_down: "Right".to_string(),
            right_aim_clear: ".".to_string(),
            right_fire: "Enter".to_string(),
            quit: "Q".to_string(),
            rematch: "R".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // Virtual field dimensions; the renderer scales these to the terminal
    pub virtual_width: f32,
    pub virtual_height: f32,

    // Ball extent used for the carry offset and the AI's follow threshold
    pub ball_size: f32,

    // Half-extent used for wall-bounce proximity and render offset
    pub ball_margin: f32,

    // Paddle thickness: also the capture-plane depth from each edge
    pub paddle_width: f32,

    // Paddle vertical extent: clamp range and catch window
    pub paddle_height: f32,

    // Distance one move command travels, human and AI alike
    pub paddle_step: f32,

    // Speed of a fired ball in virtual units per millisecond
    pub fire_speed: f32,

    // Score required to win the match
    pub winning_score: u8,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            virtual_width: 1280.0,
            virtual_height: 800.0,
            ball_size: 74.0,
            ball_margin: 32.0,
            paddle_width: 170.0,
            paddle_height: 132.0,
            paddle_step: 24.0,
            fire_speed: 1.0,
            winning_score: 5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AiConfig {
    // How long the AI idles before chasing the ball again
    pub follow_delay_ms: u64,

    // Cadence of the fake-thinking twitches while lining up a shot
    pub jitter_interval_ms: u64,

    // Twitch count range, drawn uniformly each time aiming starts
    pub aim_repeats_min: u8,
    pub aim_repeats_max: u8,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            follow_delay_ms: 400,
            jitter_interval_ms: 250,
            aim_repeats_min: 5,
            aim_repeats_max: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Target frames per second
    pub target_fps: u64,

    // RGB values 0-255
    pub score_color: [u8; 3],
    pub paddle_color: [u8; 3],
    pub ball_color: [u8; 3],
    pub center_line_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            score_color: [255, 255, 255],
            paddle_color: [255, 255, 255],
            ball_color: [255, 255, 255],
            center_line_color: [100, 100, 100],
        }
    }
}
