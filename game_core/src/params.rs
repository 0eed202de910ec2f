/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Canvas
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const MANUAL_PADDLE_SPEED: f32 = 6.0; // per frame while a key is held

    // Ball
    pub const BALL_RADIUS: f32 = 8.0;
    pub const SERVE_SPEED_Y: f32 = 3.0;
    pub const DEFLECTION_FACTOR: f32 = 0.2; // vy = factor * (hit_y - paddle_center)

    // AI
    pub const RIGHT_AI_OFFSET_SCALE: f32 = 0.5; // right AI aims twice as precisely
    pub const PREDICT_MAX_STEPS: u32 = 2000;
}
