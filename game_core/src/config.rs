use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::ai::AiTuning;
use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub manual_paddle_speed: f32,
    pub ball_radius: f32,
    pub serve_speed_y: f32,
    pub deflection_factor: f32,
    pub right_ai_offset_scale: f32,
    pub predict_max_steps: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: Params::CANVAS_WIDTH,
            canvas_height: Params::CANVAS_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            manual_paddle_speed: Params::MANUAL_PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            serve_speed_y: Params::SERVE_SPEED_Y,
            deflection_factor: Params::DEFLECTION_FACTOR,
            right_ai_offset_scale: Params::RIGHT_AI_OFFSET_SCALE,
            predict_max_steps: Params::PREDICT_MAX_STEPS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the dimensions of the actual canvas element
    pub fn with_canvas(mut self, width: f32, height: f32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Left edge X of the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => 0.0,
            Side::Right => self.canvas_width - self.paddle_width,
        }
    }

    /// The paddle's inner face, i.e. the line the AI predicts the ball against
    pub fn paddle_target_line(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_width,
            Side::Right => self.canvas_width - self.paddle_width,
        }
    }

    /// Clamp paddle top edge to the canvas
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.max_paddle_y())
    }

    pub fn max_paddle_y(&self) -> f32 {
        (self.canvas_height - self.paddle_height).max(0.0)
    }

    pub fn centered_paddle_y(&self) -> f32 {
        (self.canvas_height - self.paddle_height) / 2.0
    }

    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.canvas_width / 2.0, self.canvas_height / 2.0)
    }

    /// AI tuning for one side. The right controller gets a narrower aim spread.
    pub fn ai_tuning(&self, settings: &DifficultySettings, side: Side) -> AiTuning {
        let offset_range = match side {
            Side::Left => settings.offset,
            Side::Right => settings.offset * self.right_ai_offset_scale,
        };
        AiTuning {
            reaction_frames: settings.reaction_frames,
            offset_range,
            paddle_speed: settings.ai_paddle_speed,
        }
    }
}

/// Difficulty tier selected in the menu
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Parse a menu key. Unknown keys fall back to `Normal`.
    pub fn from_key(key: &str) -> Self {
        match key {
            "easy" => Difficulty::Easy,
            "normal" => Difficulty::Normal,
            "hard" => Difficulty::Hard,
            other => {
                log::warn!("unknown difficulty {other:?}, using normal");
                Difficulty::Normal
            }
        }
    }

    pub fn as_key(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    pub fn settings(&self) -> DifficultySettings {
        DifficultySettings::for_difficulty(*self)
    }
}

impl From<String> for Difficulty {
    fn from(key: String) -> Self {
        Difficulty::from_key(&key)
    }
}

/// Per-difficulty tuning, all knobs moving together
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DifficultySettings {
    pub reaction_frames: u32,
    pub offset: f32,
    pub ball_speed: f32,
    pub ai_paddle_speed: f32,
    pub target_score: u8,
}

impl DifficultySettings {
    pub const EASY: Self = Self {
        reaction_frames: 30,
        offset: 60.0,
        ball_speed: 4.0,
        ai_paddle_speed: 4.0,
        target_score: 5,
    };

    pub const NORMAL: Self = Self {
        reaction_frames: 15,
        offset: 20.0,
        ball_speed: 5.0,
        ai_paddle_speed: 6.0,
        target_score: 7,
    };

    pub const HARD: Self = Self {
        reaction_frames: 5,
        offset: 5.0,
        ball_speed: 6.0,
        ai_paddle_speed: 8.0,
        target_score: 10,
    };

    pub fn for_difficulty(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Easy => Self::EASY,
            Difficulty::Normal => Self::NORMAL,
            Difficulty::Hard => Self::HARD,
        }
    }
}

impl Default for DifficultySettings {
    fn default() -> Self {
        Self::NORMAL
    }
}
