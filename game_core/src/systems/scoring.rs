use crate::{Ball, Config, Events, GameRng, Paddle, Score, Side};
use hecs::World;

/// Check if ball left the canvas. Awards the point, re-serves and recentres
/// the paddles, and returns the side that scored.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let mut scorer = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x - config.ball_radius < 0.0 {
            scorer = Some(Side::Right);
            events.right_scored = true;
        } else if ball.pos.x + config.ball_radius > config.canvas_width {
            scorer = Some(Side::Left);
            events.left_scored = true;
        } else {
            continue;
        }

        ball.reset_after_goal(config.ball_spawn(), config.serve_speed_y, rng);
    }

    if let Some(side) = scorer {
        score.award(side);
        recenter_paddles(world, config);
        log::debug!("{side:?} scored, {} - {}", score.left, score.right);
    }

    scorer
}

/// Put both paddles back at the vertical centre
pub fn recenter_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = config.centered_paddle_y();
    }
}
