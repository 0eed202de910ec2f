//! Predictive paddle AI
//!
//! The opponent forecasts where the ball will cross its paddle line by
//! replaying the ball's flight frame by frame, then nudges the paddle toward
//! that point at a fixed speed. Human-like latency comes from a reaction timer
//! and aim imprecision from a random target offset; difficulty tiers only
//! change those three numbers.

use glam::Vec2;
use rand::Rng;

use crate::GameRng;

/// Predict the ball's y when its leading edge reaches `target_x`.
///
/// Uses the same full-step integration and wall reflection as the live
/// simulation. Gives up after `max_steps` and returns the last simulated y,
/// which covers a ball with no horizontal velocity.
pub fn predict_ball_y(
    pos: Vec2,
    vel: Vec2,
    radius: f32,
    target_x: f32,
    canvas_height: f32,
    max_steps: u32,
) -> f32 {
    let mut pos = pos;
    let mut vel = vel;

    let moving_right = vel.x > 0.0;
    let not_reached = |x: f32| {
        if moving_right {
            x + radius < target_x
        } else {
            x - radius > target_x
        }
    };

    let mut steps = 0;
    while steps < max_steps && not_reached(pos.x) {
        steps += 1;
        pos += vel;

        if pos.y - radius < 0.0 {
            pos.y = radius;
            vel.y = -vel.y;
        } else if pos.y + radius > canvas_height {
            pos.y = canvas_height - radius;
            vel.y = -vel.y;
        }
    }

    pos.y
}

/// Tuning for one AI controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiTuning {
    pub reaction_frames: u32,
    pub offset_range: f32, // Full width of the random aim spread
    pub paddle_speed: f32, // Units per frame
}

/// Reactive paddle controller, attached as a component to AI paddles
#[derive(Debug, Clone, Copy)]
pub struct PaddleAi {
    pub tuning: AiTuning,
    pub timer: u32,
    pub active: bool,
}

impl PaddleAi {
    pub fn new(tuning: AiTuning) -> Self {
        Self {
            tuning,
            timer: 0,
            active: false,
        }
    }

    /// Advance the reaction timer. The AI only starts tracking once the ball
    /// has been heading its way for `reaction_frames` consecutive frames.
    pub fn update_state(&mut self, ball_approaching: bool) {
        if ball_approaching {
            self.timer = self.timer.saturating_add(1);
            self.active = self.timer >= self.tuning.reaction_frames;
        } else {
            self.timer = 0;
            self.active = false;
        }
    }

    /// Step the paddle one `paddle_speed` increment toward `target_y`
    /// (jittered by the offset range) and return the clamped new top edge.
    pub fn move_toward_target(
        &self,
        current_y: f32,
        height: f32,
        target_y: f32,
        canvas_height: f32,
        rng: &mut GameRng,
    ) -> f32 {
        let mut target_y = target_y;
        let half = self.tuning.offset_range / 2.0;
        if half > 0.0 {
            target_y += rng.0.gen_range(-half..half);
        }

        let center_y = current_y + height / 2.0;
        let mut y = current_y;
        if center_y < target_y {
            y += self.tuning.paddle_speed;
        } else if center_y > target_y {
            y -= self.tuning.paddle_speed;
        }

        y.clamp(0.0, (canvas_height - height).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const HEIGHT: f32 = 600.0;
    const RADIUS: f32 = 8.0;

    fn tuning(reaction_frames: u32, offset_range: f32, paddle_speed: f32) -> AiTuning {
        AiTuning {
            reaction_frames,
            offset_range,
            paddle_speed,
        }
    }

    #[test]
    fn test_predict_straight_line() {
        let y = predict_ball_y(
            Vec2::new(400.0, 300.0),
            Vec2::new(5.0, 0.0),
            RADIUS,
            790.0,
            HEIGHT,
            2000,
        );
        assert_eq!(y, 300.0);
    }

    #[test]
    fn test_predict_reflects_off_top_wall() {
        // Heading left and up: hits the top after a few frames, then comes back down
        let y = predict_ball_y(
            Vec2::new(400.0, 20.0),
            Vec2::new(-5.0, -4.0),
            RADIUS,
            10.0,
            HEIGHT,
            2000,
        );
        assert!(y > RADIUS, "Ball should have bounced back into the field");
        assert!(y <= HEIGHT - RADIUS);
    }

    #[test]
    fn test_predict_already_at_target_returns_start() {
        let y = predict_ball_y(
            Vec2::new(785.0, 123.0),
            Vec2::new(5.0, 3.0),
            RADIUS,
            790.0,
            HEIGHT,
            2000,
        );
        assert_eq!(y, 123.0, "Edge-inclusive: no step when already touching");
    }

    #[test]
    fn test_predict_zero_horizontal_velocity_is_bounded() {
        // Never reaches the target; runs out the step budget instead
        let y = predict_ball_y(
            Vec2::new(400.0, 300.0),
            Vec2::new(0.0, 7.0),
            RADIUS,
            10.0,
            HEIGHT,
            2000,
        );
        assert!((RADIUS..=HEIGHT - RADIUS).contains(&y));
    }

    #[test]
    fn test_predict_respects_step_budget() {
        let y = predict_ball_y(
            Vec2::new(400.0, 300.0),
            Vec2::new(5.0, 1.0),
            RADIUS,
            790.0,
            HEIGHT,
            3,
        );
        assert_eq!(y, 303.0, "Stops after three steps");
    }

    #[test]
    fn test_update_state_false_resets() {
        let mut ai = PaddleAi::new(tuning(3, 0.0, 6.0));
        for _ in 0..10 {
            ai.update_state(true);
        }
        assert!(ai.active);

        ai.update_state(false);
        assert_eq!(ai.timer, 0);
        assert!(!ai.active);
    }

    #[test]
    fn test_update_state_activates_on_nth_frame() {
        let reaction_frames = 15;
        let mut ai = PaddleAi::new(tuning(reaction_frames, 20.0, 6.0));
        for frame in 1..reaction_frames {
            ai.update_state(true);
            assert!(!ai.active, "Should still be reacting on frame {frame}");
        }
        ai.update_state(true);
        assert!(ai.active, "Should activate on frame {reaction_frames}");
        assert_eq!(ai.timer, reaction_frames);
    }

    #[test]
    fn test_move_toward_target_steps_once() {
        let ai = PaddleAi::new(tuning(0, 0.0, 6.0));
        let mut rng = GameRng::new(1);

        // Centre at 300, target below
        assert_eq!(ai.move_toward_target(250.0, 100.0, 400.0, HEIGHT, &mut rng), 256.0);
        // Target above
        assert_eq!(ai.move_toward_target(250.0, 100.0, 100.0, HEIGHT, &mut rng), 244.0);
        // Already centred
        assert_eq!(ai.move_toward_target(250.0, 100.0, 300.0, HEIGHT, &mut rng), 250.0);
    }

    #[test]
    fn test_move_toward_target_clamps() {
        let ai = PaddleAi::new(tuning(0, 0.0, 8.0));
        let mut rng = GameRng::new(1);
        assert_eq!(ai.move_toward_target(3.0, 100.0, 0.0, HEIGHT, &mut rng), 0.0);
        assert_eq!(ai.move_toward_target(497.0, 100.0, HEIGHT, HEIGHT, &mut rng), 500.0);
    }

    #[test]
    fn test_offset_perturbs_within_half_range() {
        // Target sits 10 below centre; a 60 wide spread can push it above
        let ai = PaddleAi::new(tuning(0, 60.0, 4.0));
        let mut rng = GameRng::new(99);
        let mut saw_up = false;
        let mut saw_down = false;
        for _ in 0..200 {
            let y = ai.move_toward_target(250.0, 100.0, 310.0, HEIGHT, &mut rng);
            saw_up |= y < 250.0;
            saw_down |= y > 250.0;
        }
        assert!(saw_up && saw_down, "Aim spread should sometimes flip direction");

        // Target 40 below centre is outside the +-30 spread: always moves down
        for _ in 0..200 {
            let y = ai.move_toward_target(250.0, 100.0, 340.0, HEIGHT, &mut rng);
            assert_eq!(y, 254.0);
        }
    }

    proptest! {
        /// Any in-bounds start stays in bounds
        #[test]
        fn prop_prediction_stays_in_bounds(
            x in 0.0f32..800.0,
            y in RADIUS..(HEIGHT - RADIUS),
            vx in -12.0f32..12.0,
            vy in -12.0f32..12.0,
            target in 0.0f32..800.0,
        ) {
            let predicted = predict_ball_y(
                Vec2::new(x, y), Vec2::new(vx, vy), RADIUS, target, HEIGHT, 2000,
            );
            prop_assert!(predicted >= RADIUS && predicted <= HEIGHT - RADIUS);
        }

        /// Flat flight keeps its height no matter the distance
        #[test]
        fn prop_flat_flight_keeps_start_y(
            x in 0.0f32..800.0,
            y in RADIUS..(HEIGHT - RADIUS),
            vx in prop_oneof![-12.0f32..-0.5, 0.5f32..12.0],
            target in 0.0f32..800.0,
        ) {
            let predicted = predict_ball_y(
                Vec2::new(x, y), Vec2::new(vx, 0.0), RADIUS, target, HEIGHT, 2000,
            );
            prop_assert_eq!(predicted, y);
        }

        #[test]
        fn prop_move_toward_target_stays_on_canvas(
            current in -50.0f32..650.0,
            target in -200.0f32..800.0,
            offset in 0.0f32..100.0,
            speed in 0.0f32..20.0,
            seed in any::<u64>(),
        ) {
            let ai = PaddleAi::new(tuning(0, offset, speed));
            let mut rng = GameRng::new(seed);
            let y = ai.move_toward_target(current, 100.0, target, HEIGHT, &mut rng);
            prop_assert!((0.0..=HEIGHT - 100.0).contains(&y));
        }
    }
}
