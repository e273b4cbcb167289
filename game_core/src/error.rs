//! Error types for game_core

use thiserror::Error;

/// Rejected tuning values
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },

    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: i32 },

    #[error("paddle height {paddle} does not fit in arena height {arena}")]
    PaddleTooTall { paddle: i32, arena: i32 },

    #[error("ball size {ball} does not fit in arena {width}x{height}")]
    BallTooLarge { ball: i32, width: i32, height: i32 },
}

/// Failure reported by a canvas backend
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("surface unavailable: {0}")]
    Surface(String),

    #[error("text rendering failed for {text:?}: {reason}")]
    Text { text: String, reason: String },
}

/// Anything that can stop a running game
#[derive(Error, Debug)]
pub enum GameError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("render failed: {0}")]
    Render(#[from] RenderError),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, GameError>;
