pub mod ai;
pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod params;
pub mod resources;
pub mod systems;

pub use ai::*;
pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one frame of the Pong simulation and return the side that scored, if any
pub fn step(
    world: &mut World,
    config: &Config,
    input: &ManualInput,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    // Clear events at start of frame
    events.clear();

    // 1-2. Paddles: left then right, manual or AI
    drive_paddles(world, input, config, rng);

    // 3. Move ball
    move_ball(world);

    // 4-5. Walls, then paddles
    check_collisions(world, config, events);

    // 6. Goals and round reset
    check_scoring(world, config, score, events, rng)
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Position and velocity of the ball, if one exists
pub fn ball_state(world: &World) -> Option<(Vec2, Vec2)> {
    world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| (ball.pos, ball.vel))
}
