use crate::components::PaddleKind;
use crate::error::ConfigError;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub arena_width: i32,
    pub arena_height: i32,
    pub score_area_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_edge_offset: i32,
    pub player_swing: i32,
    pub ai_swing: i32,
    pub player_margin: i32,
    pub ai_margin: i32,
    pub ai_jitter: i32,
    pub ball_size: i32,
    pub ball_speed_initial: f32,
    pub player_hit_bonus: f32,
    pub ai_hit_bonus: f32,
    pub wall_hit_bonus: f32,
    pub deflect_jitter: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            score_area_height: Params::SCORE_AREA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_edge_offset: Params::PADDLE_EDGE_OFFSET,
            player_swing: Params::PLAYER_SWING,
            ai_swing: Params::AI_SWING,
            player_margin: Params::PLAYER_MARGIN,
            ai_margin: Params::AI_MARGIN,
            ai_jitter: Params::AI_JITTER,
            ball_size: Params::BALL_SIZE,
            ball_speed_initial: Params::BALL_SPEED_INITIAL,
            player_hit_bonus: Params::PLAYER_HIT_BONUS,
            ai_hit_bonus: Params::AI_HIT_BONUS,
            wall_hit_bonus: Params::WALL_HIT_BONUS,
            deflect_jitter: Params::DEFLECT_JITTER,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject geometry the simulation cannot run in
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sizes = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_size", self.ball_size),
            ("player_swing", self.player_swing),
            ("ai_swing", self.ai_swing),
        ];
        for (name, value) in sizes {
            if value <= 0 {
                return Err(ConfigError::NonPositive {
                    name,
                    value: value as f32,
                });
            }
        }
        let offsets = [
            ("paddle_edge_offset", self.paddle_edge_offset),
            ("player_margin", self.player_margin),
            ("ai_margin", self.ai_margin),
            ("ai_jitter", self.ai_jitter),
            ("deflect_jitter", self.deflect_jitter),
        ];
        for (name, value) in offsets {
            if value < 0 {
                return Err(ConfigError::Negative { name, value });
            }
        }
        if self.ball_speed_initial <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "ball_speed_initial",
                value: self.ball_speed_initial,
            });
        }
        if self.paddle_height > self.arena_height {
            return Err(ConfigError::PaddleTooTall {
                paddle: self.paddle_height,
                arena: self.arena_height,
            });
        }
        if self.ball_size > self.arena_width || self.ball_size > self.arena_height {
            return Err(ConfigError::BallTooLarge {
                ball: self.ball_size,
                width: self.arena_width,
                height: self.arena_height,
            });
        }
        Ok(())
    }

    /// Left edge X of a paddle
    pub fn paddle_x(&self, kind: PaddleKind) -> i32 {
        match kind {
            PaddleKind::Player => self.paddle_edge_offset,
            PaddleKind::Ai => self.arena_width - self.paddle_edge_offset - self.paddle_width,
        }
    }

    /// Vertical step for one input or AI update
    pub fn swing(&self, kind: PaddleKind) -> i32 {
        match kind {
            PaddleKind::Player => self.player_swing,
            PaddleKind::Ai => self.ai_swing,
        }
    }

    /// Distance a paddle must keep from the top and bottom of the play area
    pub fn margin(&self, kind: PaddleKind) -> i32 {
        match kind {
            PaddleKind::Player => self.player_margin,
            PaddleKind::Ai => self.ai_margin,
        }
    }

    /// Speed added to the ball when it strikes a paddle of this kind
    pub fn hit_bonus(&self, kind: PaddleKind) -> f32 {
        match kind {
            PaddleKind::Player => self.player_hit_bonus,
            PaddleKind::Ai => self.ai_hit_bonus,
        }
    }

    /// Y of the play area's top edge in surface coordinates
    pub fn play_top(&self) -> i32 {
        self.score_area_height
    }

    /// Y of the play area's bottom edge in surface coordinates
    pub fn play_bottom(&self) -> i32 {
        self.score_area_height + self.arena_height
    }
}
