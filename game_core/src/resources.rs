use rand::{Rng, SeedableRng};

use crate::components::{Ball, PaddleKind};
use crate::config::Config;
use crate::map::GameMap;
use crate::params::Params;

/// Where launch angles, deflection jitter and AI noise come from
pub trait RandomSource {
    /// Uniform integer in `low..=high`
    fn int_inclusive(&mut self, low: i32, high: i32) -> i32;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(rand::rngs::StdRng::from_entropy())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl RandomSource for GameRng {
    fn int_inclusive(&mut self, low: i32, high: i32) -> i32 {
        self.0.gen_range(low..=high)
    }
}

/// Always answers the same value, clamped into the requested range
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRandom(pub i32);

impl RandomSource for FixedRandom {
    fn int_inclusive(&mut self, low: i32, high: i32) -> i32 {
        self.0.clamp(low, high)
    }
}

/// Match lifecycle derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    InProgress,
    PlayerWon,
    AiWon,
}

impl MatchState {
    pub fn is_over(self) -> bool {
        self != MatchState::InProgress
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u32,
    pub ai: u32,
    pub player_victory: bool, // Terminal, never cleared
    pub ai_victory: bool,     // Terminal, never cleared
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MatchState {
        if self.player_victory {
            MatchState::PlayerWon
        } else if self.ai_victory {
            MatchState::AiWon
        } else {
            MatchState::InProgress
        }
    }

    /// Someone has reached the winning score and the other is within a point
    pub fn is_deuce(&self) -> bool {
        (self.player >= Params::WIN_SCORE || self.ai >= Params::WIN_SCORE)
            && self.player.abs_diff(self.ai) <= 1
    }

    /// Award a point if the ball has left the arena.
    ///
    /// Returns the side that scored. Nothing changes once the match is decided.
    pub fn update<R: RandomSource + ?Sized>(
        &mut self,
        ball_out_of_bounds: bool,
        ball: &mut Ball,
        map: &GameMap,
        config: &Config,
        rng: &mut R,
    ) -> Option<PaddleKind> {
        if !ball_out_of_bounds || self.state().is_over() {
            return None;
        }

        let x = ball.rect.center_x();
        let scorer = if x > map.width {
            self.player += 1;
            PaddleKind::Player
        } else if x < 0 {
            self.ai += 1;
            PaddleKind::Ai
        } else {
            return None;
        };

        log::debug!(
            "{:?} scored at x={}, score {}-{}",
            scorer,
            x,
            self.player,
            self.ai
        );
        ball.reset(map, config, rng);
        self.check_victory();
        Some(scorer)
    }

    fn check_victory(&mut self) {
        let leads = |own: u32, other: u32| {
            own >= Params::WIN_SCORE && own >= other + Params::WIN_MARGIN
        };
        if leads(self.player, self.ai) {
            self.player_victory = true;
            log::info!("Player wins {}-{}", self.player, self.ai);
        } else if leads(self.ai, self.player) {
            self.ai_victory = true;
            log::info!("AI wins {}-{}", self.ai, self.player);
        }
    }
}

/// Events that occurred during this step
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub hit_player_paddle: bool,
    pub hit_ai_paddle: bool,
    pub hit_wall: bool,
    pub ball_out: bool,
    pub player_scored: bool,
    pub ai_scored: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn ball_hit_paddle(&self) -> bool {
        self.hit_player_paddle || self.hit_ai_paddle
    }
}
