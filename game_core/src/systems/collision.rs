use crate::{Ball, Config, Events, Paddle, PaddleKind, RandomSource};
use hecs::World;

/// Deflect the ball off a paddle it overlaps.
///
/// The new heading depends on where the ball meets the paddle relative to the
/// paddle's centre, plus a little jitter. Position is left for `advance`.
pub fn collide_with_paddle<R: RandomSource + ?Sized>(
    ball: &mut Ball,
    paddle: &Paddle,
    config: &Config,
    rng: &mut R,
) -> bool {
    if !paddle.rect.collides(&ball.rect) {
        return false;
    }

    let offset = (paddle.rect.center_y() - ball.rect.center_y()) as f32;
    let jitter = rng.int_inclusive(-config.deflect_jitter, config.deflect_jitter) as f32;
    ball.direction = match paddle.kind {
        PaddleKind::Player => -offset + jitter,
        PaddleKind::Ai => 180.0 + offset + jitter,
    };
    ball.speed += config.hit_bonus(paddle.kind);

    log::trace!(
        "Ball hit {:?} paddle, heading {} at speed {}",
        paddle.kind,
        ball.direction,
        ball.speed
    );
    true
}

/// Bounce off the top or bottom of the play area
pub fn collide_with_frame(ball: &mut Ball, config: &Config) -> bool {
    let y = ball.rect.center_y();
    if y < config.play_top() || y > config.play_bottom() {
        ball.direction = -ball.direction;
        ball.speed += config.wall_hit_bonus;
        log::trace!("Ball hit frame at y={}, speed {}", y, ball.speed);
        return true;
    }
    false
}

/// Check ball collisions with both paddles, then the frame
pub fn check_collisions<R: RandomSource + ?Sized>(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    rng: &mut R,
) {
    // Collect paddle data without holding borrows; player side first
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.kind);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for paddle in &paddles {
            if collide_with_paddle(ball, paddle, config, rng) {
                match paddle.kind {
                    PaddleKind::Player => events.hit_player_paddle = true,
                    PaddleKind::Ai => events.hit_ai_paddle = true,
                }
            }
        }

        if collide_with_frame(ball, config) {
            events.hit_wall = true;
        }
    }
}
