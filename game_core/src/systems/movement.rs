use crate::{Ball, Config, ManualInput};
use hecs::World;

/// Keyboard-driven paddle step. Up wins when both keys are held.
pub fn step_manual_paddle(y: f32, input: &ManualInput, config: &Config) -> f32 {
    let y = if input.up && y > 0.0 {
        y - config.manual_paddle_speed
    } else if input.down && y < config.max_paddle_y() {
        y + config.manual_paddle_speed
    } else {
        y
    };
    config.clamp_paddle_y(y)
}

/// Move ball based on velocity (one full step per frame)
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
