use crate::{Ball, Config, Events, GameMap, PaddleKind, RandomSource, Score};
use hecs::World;

/// Award a point for a ball that left the arena and re-serve it
pub fn check_scoring<R: RandomSource + ?Sized>(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut R,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        match score.update(events.ball_out, ball, map, config, rng) {
            Some(PaddleKind::Player) => events.player_scored = true,
            Some(PaddleKind::Ai) => events.ai_scored = true,
            None => {}
        }
    }
}
