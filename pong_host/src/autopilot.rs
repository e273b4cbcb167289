//! Scripted stand-in for a keyboard

use game_core::{Game, InputEvent, Key, PaddleKind, RandomSource};

use crate::settings::LINGER_FRAMES;

/// Presses Up or Down to follow the ball, and Escape once the match has
/// been on screen long enough after it ends. Keys are named the way a
/// browser keyboard event names them.
#[derive(Debug, Default)]
pub struct AutoPilot {
    deadzone: i32,
    linger: u32,
}

impl AutoPilot {
    pub fn new(deadzone: i32) -> Self {
        Self {
            deadzone,
            linger: 0,
        }
    }

    /// Key presses for this frame
    pub fn poll<R: RandomSource>(&mut self, game: &Game<R>) -> Vec<InputEvent> {
        if game.is_game_over() {
            self.linger += 1;
            return if self.linger >= LINGER_FRAMES {
                press("Escape")
            } else {
                Vec::new()
            };
        }

        let (ball, paddle) = match (game.ball(), game.paddle(PaddleKind::Player)) {
            (Some(ball), Some(paddle)) => (ball, paddle),
            _ => return Vec::new(),
        };

        // Only chase a ball heading our way, otherwise drift back to centre
        let target_y = if ball.velocity().x < 0.0 {
            ball.rect.center_y()
        } else {
            game.map.ball_spawn().y
        };

        let diff = target_y - paddle.rect.center_y();
        if diff > self.deadzone {
            press("ArrowDown")
        } else if diff < -self.deadzone {
            press("ArrowUp")
        } else {
            Vec::new()
        }
    }
}

fn press(name: &str) -> Vec<InputEvent> {
    vec![InputEvent::KeyDown(Key::from_name(name))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_after_linger() {
        let mut game = Game::with_seed(1).unwrap();
        game.score.ai = 11;
        game.score.ai_victory = true;
        game.update();
        assert!(game.is_game_over());

        let mut pilot = AutoPilot::new(10);
        for _ in 1..LINGER_FRAMES {
            assert!(pilot.poll(&game).is_empty());
        }
        assert_eq!(pilot.poll(&game), vec![InputEvent::KeyDown(Key::Escape)]);
    }

    #[test]
    fn test_recentres_while_ball_leaves() {
        let mut game = Game::with_seed(1).unwrap();
        // Push the paddle up, ball heading right
        for _ in 0..10 {
            game.handle_events([InputEvent::KeyDown(Key::Up)]);
        }
        let ball = game.world.query_mut::<&mut game_core::Ball>().into_iter().next();
        if let Some((_e, ball)) = ball {
            ball.direction = 0.0;
        }

        let mut pilot = AutoPilot::new(10);
        assert_eq!(pilot.poll(&game), vec![InputEvent::KeyDown(Key::Down)]);
    }

    #[test]
    fn test_chases_incoming_ball() {
        let mut game = Game::with_seed(1).unwrap();
        let ball = game.world.query_mut::<&mut game_core::Ball>().into_iter().next();
        if let Some((_e, ball)) = ball {
            ball.direction = 180.0;
            ball.rect.set_center_y(100);
        }

        let mut pilot = AutoPilot::new(10);
        assert_eq!(pilot.poll(&game), vec![InputEvent::KeyDown(Key::Up)]);
    }

    #[test]
    fn test_holds_still_inside_deadzone() {
        let game = Game::with_seed(1).unwrap();
        let mut pilot = AutoPilot::new(10);
        assert!(pilot.poll(&game).is_empty());
    }
}
