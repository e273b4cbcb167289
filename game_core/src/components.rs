use glam::{IVec2, Vec2};

use crate::config::Config;
use crate::input::Key;
use crate::map::{GameMap, Rect};
use crate::params::Params;
use crate::resources::RandomSource;

/// Which side a paddle plays on
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PaddleKind {
    Player, // Left, keyboard driven
    Ai,     // Right, tracks the ball
}

/// Paddle component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paddle {
    pub kind: PaddleKind,
    pub rect: Rect,
}

impl Paddle {
    pub fn new(kind: PaddleKind, rect: Rect) -> Self {
        Self { kind, rect }
    }

    /// Paddle centred vertically at its side of the arena
    pub fn spawn(kind: PaddleKind, map: &GameMap, config: &Config) -> Self {
        Self::new(kind, map.paddle_spawn(kind, config))
    }

    fn shift(&mut self, dy: i32) {
        self.rect.set_center_y(self.rect.center_y() + dy);
    }

    fn room_above(&self, config: &Config) -> bool {
        self.rect.top() > config.play_top() + config.margin(self.kind)
    }

    fn room_below(&self, config: &Config) -> bool {
        self.rect.bottom() < config.play_bottom() - config.margin(self.kind)
    }

    /// Move one swing up or down for a key press. Other keys do nothing.
    pub fn handle_input(&mut self, key: Key, config: &Config) {
        let swing = config.swing(self.kind);
        match key {
            Key::Up if self.room_above(config) => self.shift(-swing),
            Key::Down if self.room_below(config) => self.shift(swing),
            _ => {}
        }
    }

    /// Chase the ball's vertical centre.
    ///
    /// Moves one swing per call, plus a noisy extra swing when the ball is
    /// far away vertically and already on this paddle's half.
    pub fn track<R: RandomSource + ?Sized>(&mut self, ball: &Ball, config: &Config, rng: &mut R) {
        let swing = config.swing(self.kind);
        let catch_up_gap = config.arena_height / 8;
        let ball_center = ball.rect.center();
        let ball_on_far_half = ball_center.x > config.arena_width / 2;

        if self.rect.center_y() < ball_center.y && self.room_below(config) {
            self.shift(swing);
            if self.rect.center_y() < ball_center.y - catch_up_gap && ball_on_far_half {
                self.shift(swing + rng.int_inclusive(-config.ai_jitter, config.ai_jitter));
            }
        } else if self.rect.center_y() > ball_center.y && self.room_above(config) {
            self.shift(-swing);
            if self.rect.center_y() > ball_center.y + catch_up_gap && ball_on_far_half {
                self.shift(-(swing + rng.int_inclusive(-config.ai_jitter, config.ai_jitter)));
            }
        }
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    pub speed: f32,
    pub direction: f32, // Degrees, x grows right and y grows down
}

impl Ball {
    pub fn new(center: IVec2, config: &Config) -> Self {
        let size = IVec2::splat(config.ball_size);
        Self {
            rect: Rect::from_center_size(center, size),
            speed: config.ball_speed_initial,
            direction: 0.0,
        }
    }

    /// A ball at the centre with a fresh launch angle
    pub fn served<R: RandomSource + ?Sized>(map: &GameMap, config: &Config, rng: &mut R) -> Self {
        let mut ball = Self::new(map.ball_spawn(), config);
        ball.reset(map, config, rng);
        ball
    }

    /// Re-serve from the centre at base speed
    pub fn reset<R: RandomSource + ?Sized>(&mut self, map: &GameMap, config: &Config, rng: &mut R) {
        self.rect.set_center(map.ball_spawn());
        self.direction = launch_angle(rng);
        self.speed = config.ball_speed_initial;
        log::debug!("Ball served at {} degrees", self.direction);
    }

    /// Velocity in pixels per tick
    pub fn velocity(&self) -> Vec2 {
        let radians = self.direction.to_radians();
        Vec2::new(radians.cos(), radians.sin()) * self.speed
    }

    /// Advance one tick.
    ///
    /// Returns `true` without moving once the horizontal centre has left
    /// `[0, width]`, which is a scoring event.
    pub fn advance(&mut self, map: &GameMap) -> bool {
        let center = self.rect.center();
        if !map.contains_x(center.x) {
            return true;
        }

        // Truncate toward zero, whole pixels per step
        let step = self.velocity();
        let next = IVec2::new(center.x + step.x as i32, center.y + step.y as i32);
        self.rect.set_center(next);
        false
    }
}

/// Pick a band uniformly, then a whole degree uniformly inside it
pub fn launch_angle<R: RandomSource + ?Sized>(rng: &mut R) -> f32 {
    let last = Params::LAUNCH_BANDS.len() as i32 - 1;
    let (low, high) = Params::LAUNCH_BANDS[rng.int_inclusive(0, last) as usize];
    rng.int_inclusive(low, high) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::{FixedRandom, GameRng};

    fn setup() -> (Config, GameMap) {
        let config = Config::new();
        let map = GameMap::new(&config);
        (config, map)
    }

    fn in_band(direction: f32) -> usize {
        Params::LAUNCH_BANDS
            .iter()
            .filter(|(low, high)| direction >= *low as f32 && direction <= *high as f32)
            .count()
    }

    #[test]
    fn test_reset_direction_always_in_one_band() {
        let (config, map) = setup();
        for seed in 0..500 {
            let mut rng = GameRng::new(seed);
            let ball = Ball::served(&map, &config, &mut rng);
            assert_eq!(in_band(ball.direction), 1, "direction {}", ball.direction);
            assert!(![0.0, 90.0, 180.0, 270.0].contains(&ball.direction));
        }
    }

    #[test]
    fn test_reset_reaches_every_band() {
        let mut rng = GameRng::new(99);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let angle = launch_angle(&mut rng);
            let band = Params::LAUNCH_BANDS
                .iter()
                .position(|(low, high)| angle >= *low as f32 && angle <= *high as f32)
                .unwrap();
            seen[band] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_reset_restores_center_and_speed() {
        let (config, map) = setup();
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(IVec2::new(-30, 120), &config);
        ball.speed = 19.7;

        ball.reset(&map, &config, &mut rng);

        assert_eq!(ball.rect.center(), map.ball_spawn());
        assert_eq!(ball.speed, config.ball_speed_initial);
    }

    #[test]
    fn test_advance_returns_false_inside_bounds() {
        let (config, map) = setup();
        for x in [0, map.width / 2, map.width] {
            let mut ball = Ball::new(IVec2::new(x, 300), &config);
            assert!(!ball.advance(&map), "centre x {} is still in play", x);
        }
    }

    #[test]
    fn test_advance_returns_true_outside_bounds() {
        let (config, map) = setup();
        for x in [-1, map.width + 1] {
            let mut ball = Ball::new(IVec2::new(x, 300), &config);
            assert!(ball.advance(&map));
            assert_eq!(ball.rect.center(), IVec2::new(x, 300), "No movement when out");
        }
    }

    #[test]
    fn test_advance_truncates_toward_zero() {
        let (config, map) = setup();
        let mut ball = Ball::new(IVec2::new(400, 300), &config);
        ball.direction = 130.0; // 12 * (cos, sin) = (-7.71, 9.19)
        ball.speed = 12.0;

        ball.advance(&map);

        assert_eq!(ball.rect.center(), IVec2::new(393, 309));
    }

    #[test]
    fn test_player_paddle_moves_by_swing() {
        let (config, map) = setup();
        let mut paddle = Paddle::spawn(PaddleKind::Player, &map, &config);
        let start = paddle.rect.center_y();

        paddle.handle_input(Key::Up, &config);
        assert_eq!(paddle.rect.center_y(), start - config.player_swing);
        paddle.handle_input(Key::Down, &config);
        paddle.handle_input(Key::Down, &config);
        assert_eq!(paddle.rect.center_y(), start + config.player_swing);
        paddle.handle_input(Key::Escape, &config);
        paddle.handle_input(Key::Other, &config);
        assert_eq!(paddle.rect.center_y(), start + config.player_swing);
        assert_eq!(paddle.rect.left(), config.paddle_x(PaddleKind::Player));
    }

    #[test]
    fn test_player_paddle_stays_inside_margins() {
        let (config, map) = setup();
        let mut paddle = Paddle::spawn(PaddleKind::Player, &map, &config);

        for _ in 0..200 {
            paddle.handle_input(Key::Up, &config);
        }
        assert!(paddle.rect.top() <= config.play_top() + config.player_margin);
        assert!(paddle.rect.top() > config.play_top() + config.player_margin - config.player_swing);

        for _ in 0..200 {
            paddle.handle_input(Key::Down, &config);
        }
        assert!(paddle.rect.bottom() >= config.play_bottom() - config.player_margin);
        assert!(
            paddle.rect.bottom() < config.play_bottom() - config.player_margin + config.player_swing
        );
    }

    #[test]
    fn test_ai_tracks_ball_on_near_half() {
        let (config, map) = setup();
        let mut paddle = Paddle::spawn(PaddleKind::Ai, &map, &config);
        let start = paddle.rect.center_y();
        let ball = Ball::new(IVec2::new(200, start + 150), &config);

        paddle.track(&ball, &config, &mut FixedRandom(3));

        // Ball on the player's half: single swing only
        assert_eq!(paddle.rect.center_y(), start + config.ai_swing);
    }

    #[test]
    fn test_ai_catches_up_on_far_half() {
        let (config, map) = setup();
        let mut paddle = Paddle::spawn(PaddleKind::Ai, &map, &config);
        let start = paddle.rect.center_y();

        let below = Ball::new(IVec2::new(600, start + 150), &config);
        paddle.track(&below, &config, &mut FixedRandom(3));
        assert_eq!(paddle.rect.center_y(), start + 5 + (5 + 3));

        let mut paddle = Paddle::spawn(PaddleKind::Ai, &map, &config);
        let above = Ball::new(IVec2::new(600, start - 150), &config);
        paddle.track(&above, &config, &mut FixedRandom(-3));
        assert_eq!(paddle.rect.center_y(), start - 5 - (5 - 3));
    }

    #[test]
    fn test_ai_holds_when_level_with_ball() {
        let (config, map) = setup();
        let mut paddle = Paddle::spawn(PaddleKind::Ai, &map, &config);
        let before = paddle;
        let ball = Ball::new(IVec2::new(600, paddle.rect.center_y()), &config);

        paddle.track(&ball, &config, &mut GameRng::new(0));

        assert_eq!(paddle, before);
    }

    #[test]
    fn test_ai_stays_inside_margins() {
        let (config, map) = setup();
        let mut rng = GameRng::new(11);
        let mut paddle = Paddle::spawn(PaddleKind::Ai, &map, &config);
        let low_ball = Ball::new(IVec2::new(700, config.play_bottom() + 40), &config);

        for _ in 0..200 {
            paddle.track(&low_ball, &config, &mut rng);
        }
        // Last allowed move starts with a margin and can add at most two swings plus jitter
        let max_overshoot = 2 * config.ai_swing + config.ai_jitter;
        assert!(paddle.rect.bottom() <= config.play_bottom() - config.ai_margin + max_overshoot);
        assert!(paddle.rect.bottom() >= config.play_bottom() - config.ai_margin);
    }
}
