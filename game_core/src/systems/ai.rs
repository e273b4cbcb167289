use hecs::World;

use crate::components::{Ball, Paddle, PaddleKind};
use crate::config::Config;
use crate::resources::RandomSource;

/// Let every AI paddle react to the ball
pub fn update_ai<R: RandomSource + ?Sized>(world: &mut World, config: &Config, rng: &mut R) {
    let ball = match world.query::<&Ball>().iter().next().map(|(_e, ball)| *ball) {
        Some(ball) => ball,
        None => return, // No ball in world
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.kind == PaddleKind::Ai {
            paddle.track(&ball, config, rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, FixedRandom, GameMap};
    use glam::IVec2;

    #[test]
    fn test_ai_follows_ball_down() {
        let config = Config::new();
        let map = GameMap::new(&config);
        let mut world = World::new();
        let player = create_paddle(&mut world, &map, &config, PaddleKind::Player);
        let ai = create_paddle(&mut world, &map, &config, PaddleKind::Ai);
        create_ball(&mut world, Ball::new(IVec2::new(300, 400), &config));
        let player_before = *world.get::<&Paddle>(player).unwrap();

        update_ai(&mut world, &config, &mut FixedRandom(0));

        assert_eq!(world.get::<&Paddle>(ai).unwrap().rect.center_y(), 305);
        assert_eq!(*world.get::<&Paddle>(player).unwrap(), player_before);
    }

    #[test]
    fn test_no_ball_no_movement() {
        let config = Config::new();
        let map = GameMap::new(&config);
        let mut world = World::new();
        let ai = create_paddle(&mut world, &map, &config, PaddleKind::Ai);

        update_ai(&mut world, &config, &mut FixedRandom(0));

        assert_eq!(
            world.get::<&Paddle>(ai).unwrap().rect,
            map.paddle_spawn(PaddleKind::Ai, &config)
        );
    }
}
