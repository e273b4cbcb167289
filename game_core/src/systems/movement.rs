use crate::{Ball, Events, GameMap};
use hecs::World;

/// Advance the ball one tick, flagging a scoring event when it is out
pub fn move_ball(world: &mut World, map: &GameMap, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.advance(map) {
            events.ball_out = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Config};
    use glam::IVec2;

    #[test]
    fn test_ball_moves_along_heading() {
        let config = Config::new();
        let map = GameMap::new(&config);
        let mut world = World::new();
        let mut events = Events::new();
        let mut ball = Ball::new(map.ball_spawn(), &config);
        ball.direction = 0.0;
        create_ball(&mut world, ball);

        move_ball(&mut world, &map, &mut events);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.rect.center(), map.ball_spawn() + IVec2::new(12, 0));
        }
        assert!(!events.ball_out);
    }

    #[test]
    fn test_ball_out_flagged_past_right_edge() {
        let config = Config::new();
        let map = GameMap::new(&config);
        let mut world = World::new();
        let mut events = Events::new();
        create_ball(&mut world, Ball::new(IVec2::new(map.width + 3, 300), &config));

        move_ball(&mut world, &map, &mut events);

        assert!(events.ball_out);
    }
}
