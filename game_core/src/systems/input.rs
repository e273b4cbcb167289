use hecs::World;

use crate::components::{Paddle, PaddleKind};
use crate::config::Config;
use crate::input::Key;

/// Apply one key press to the player's paddle
pub fn apply_key(world: &mut World, key: Key, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.kind == PaddleKind::Player {
            paddle.handle_input(key, config);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, GameMap};

    #[test]
    fn test_key_moves_only_player_paddle() {
        let config = Config::new();
        let map = GameMap::new(&config);
        let mut world = World::new();
        let player = create_paddle(&mut world, &map, &config, PaddleKind::Player);
        let ai = create_paddle(&mut world, &map, &config, PaddleKind::Ai);
        let ai_before = *world.get::<&Paddle>(ai).unwrap();
        let player_y = world.get::<&Paddle>(player).unwrap().rect.center_y();

        apply_key(&mut world, Key::Down, &config);

        assert_eq!(
            world.get::<&Paddle>(player).unwrap().rect.center_y(),
            player_y + config.player_swing
        );
        assert_eq!(*world.get::<&Paddle>(ai).unwrap(), ai_before);
    }
}
