use crate::ai::{predict_ball_y, PaddleAi};
use crate::systems::step_manual_paddle;
use crate::{ball_state, Config, GameRng, ManualControl, ManualInput, Paddle, Side};
use hecs::World;

/// Move both paddles, left first then right.
///
/// Keyboard paddles follow `input`. AI paddles wait out their reaction timer,
/// then chase the predicted crossing point on their own paddle line, drifting
/// back to the vertical centre while the ball travels away.
pub fn drive_paddles(world: &mut World, input: &ManualInput, config: &Config, rng: &mut GameRng) {
    let Some((ball_pos, ball_vel)) = ball_state(world) else {
        return;
    };

    for side in [Side::Left, Side::Right] {
        let query = world.query_mut::<(&mut Paddle, Option<&mut PaddleAi>, Option<&ManualControl>)>();
        for (_entity, (paddle, ai, manual)) in query {
            if paddle.side != side {
                continue;
            }

            if manual.is_some() {
                paddle.y = step_manual_paddle(paddle.y, input, config);
            } else if let Some(ai) = ai {
                ai.update_state(side.is_approached_by(ball_vel.x));

                let target_y = if ai.active {
                    predict_ball_y(
                        ball_pos,
                        ball_vel,
                        config.ball_radius,
                        config.paddle_target_line(side),
                        config.canvas_height,
                        config.predict_max_steps,
                    )
                } else {
                    config.canvas_height / 2.0
                };

                paddle.y = ai.move_toward_target(
                    paddle.y,
                    config.paddle_height,
                    target_y,
                    config.canvas_height,
                    rng,
                );
            }
        }
    }
}
