use crate::{ball_state, Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let (mut ball_pos, mut ball_vel) = match ball_state(world) {
        Some(data) => data,
        None => return, // No ball in world
    };

    let radius = config.ball_radius;

    // Top/bottom walls
    if ball_pos.y - radius < 0.0 {
        ball_pos.y = radius;
        ball_vel.y = -ball_vel.y;
        events.ball_hit_wall = true;
    } else if ball_pos.y + radius > config.canvas_height {
        ball_pos.y = config.canvas_height - radius;
        ball_vel.y = -ball_vel.y;
        events.ball_hit_wall = true;
    }

    // Paddles, left before right
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|paddle| paddle.side == Side::Right);

    for paddle in paddles {
        let crossed = match paddle.side {
            Side::Left => ball_pos.x - radius < config.paddle_target_line(Side::Left),
            Side::Right => ball_pos.x + radius > config.paddle_target_line(Side::Right),
        };
        if !crossed || !paddle.spans(ball_pos.y, config.paddle_height) {
            continue;
        }

        // Push ball out of the paddle face
        ball_pos.x = match paddle.side {
            Side::Left => config.paddle_target_line(Side::Left) + radius,
            Side::Right => config.paddle_target_line(Side::Right) - radius,
        };
        ball_vel.x = -ball_vel.x;

        // Deflection replaces the incoming vertical speed
        let hit_offset = ball_pos.y - paddle.center_y(config.paddle_height);
        ball_vel.y = hit_offset * config.deflection_factor;

        events.ball_hit_paddle = true;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = ball_pos;
        ball.vel = ball_vel;
    }
}
