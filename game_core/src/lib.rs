pub mod components;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod map;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use error::{ConfigError, GameError, RenderError};
pub use game::*;
pub use input::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one deterministic Pong step.
///
/// Order matters: collisions only change heading and speed, so they must be
/// resolved before the ball advances.
pub fn step<R: RandomSource + ?Sized>(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut R,
) {
    // Clear events at start of step
    events.clear();

    // 1. AI paddle reacts to the ball
    update_ai(world, config, rng);

    // 2. Check collisions (player paddle, AI paddle, frame)
    check_collisions(world, config, events, rng);

    // 3. Move ball
    move_ball(world, map, events);

    // 4. Check scoring (ball exited arena)
    check_scoring(world, map, config, score, events, rng);
}

/// Helper to create a paddle entity at its spawn point
pub fn create_paddle(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    kind: PaddleKind,
) -> hecs::Entity {
    world.spawn((Paddle::spawn(kind, map, config),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, ball: Ball) -> hecs::Entity {
    world.spawn((ball,))
}
