use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::GameRng;

/// Which edge of the canvas a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Whether a ball with this horizontal velocity is heading toward this side
    pub fn is_approached_by(self, vel_x: f32) -> bool {
        match self {
            Side::Left => vel_x < 0.0,
            Side::Right => vel_x > 0.0,
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub y: f32, // Top edge, clamped to [0, canvas_height - paddle_height]
}

impl Paddle {
    pub fn new(side: Side, y: f32) -> Self {
        Self { side, y }
    }

    pub fn center_y(&self, height: f32) -> f32 {
        self.y + height / 2.0
    }

    /// Strict vertical span test against a ball centre
    pub fn spans(&self, ball_y: f32, height: f32) -> bool {
        ball_y > self.y && ball_y < self.y + height
    }
}

/// Marker for a paddle steered by the keyboard instead of its AI
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualControl;

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2, // Units per frame
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Opening serve: centre, random horizontal direction, random vertical sign
    pub fn serve(&mut self, spawn: Vec2, speed: f32, speed_y: f32, rng: &mut GameRng) {
        self.pos = spawn;
        let vx = if rng.0.gen_bool(0.5) { speed } else { -speed };
        let vy = if rng.0.gen_bool(0.5) { speed_y } else { -speed_y };
        self.vel = Vec2::new(vx, vy);
    }

    /// Re-serve after a goal. The horizontal direction is the reverse of the
    /// velocity the ball had when it left the canvas.
    pub fn reset_after_goal(&mut self, spawn: Vec2, speed_y: f32, rng: &mut GameRng) {
        self.pos = spawn;
        self.vel.x = -self.vel.x;
        self.vel.y = if rng.0.gen_bool(0.5) { speed_y } else { -speed_y };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_approach_predicate() {
        assert!(Side::Left.is_approached_by(-5.0));
        assert!(!Side::Left.is_approached_by(5.0));
        assert!(Side::Right.is_approached_by(5.0));
        assert!(!Side::Right.is_approached_by(-5.0));
        assert!(!Side::Left.is_approached_by(0.0));
        assert!(!Side::Right.is_approached_by(0.0));
        assert_eq!(Side::Left.opponent(), Side::Right);
    }

    #[test]
    fn test_paddle_span_is_strict() {
        let paddle = Paddle::new(Side::Left, 250.0);
        assert!(paddle.spans(310.0, 100.0));
        assert!(!paddle.spans(250.0, 100.0), "Top edge is outside the span");
        assert!(!paddle.spans(350.0, 100.0), "Bottom edge is outside the span");
        assert_eq!(paddle.center_y(100.0), 300.0);
    }

    #[test]
    fn test_serve_uses_configured_speeds() {
        let mut rng = GameRng::new(7);
        let spawn = Vec2::new(400.0, 300.0);
        for _ in 0..20 {
            let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
            ball.serve(spawn, 5.0, 3.0, &mut rng);
            assert_eq!(ball.pos, spawn);
            assert_eq!(ball.vel.x.abs(), 5.0);
            assert_eq!(ball.vel.y.abs(), 3.0);
        }
    }

    #[test]
    fn test_reset_after_goal_reverses_direction() {
        let mut rng = GameRng::new(7);
        let spawn = Vec2::new(400.0, 300.0);
        let mut ball = Ball::new(Vec2::new(-3.0, 120.0), Vec2::new(-6.0, 1.7));

        ball.reset_after_goal(spawn, 3.0, &mut rng);

        assert_eq!(ball.pos, spawn);
        assert_eq!(ball.vel.x, 6.0);
        assert_eq!(ball.vel.y.abs(), 3.0);
    }
}
