/// Game tuning parameters for the pipe dodging game
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Play field
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 800.0;
    pub const GROUND_MARGIN: f32 = 75.0; // Height of the ground strip at the bottom

    // Bird
    pub const BIRD_WIDTH: f32 = 64.0;
    pub const BIRD_HEIGHT: f32 = 48.0;
    pub const GRAVITY: f32 = 1000.0; // units per second squared, +y is down
    pub const JUMP_IMPULSE: f32 = -500.0; // units per second, overwrites velocity

    // Tilt (render hint)
    pub const TILT_VELOCITY_RANGE: f32 = 500.0;
    pub const TILT_MAX: f32 = 0.5; // radians

    // Pipes
    pub const PIPE_WIDTH: f32 = 103.0;
    pub const PIPE_LENGTH: f32 = 640.0;
    pub const GAP_HEIGHT: f32 = 160.0;
    pub const GAP_RANDOM_RANGE: f32 = 200.0; // Gap offset drawn from +/- this
    pub const BASE_SCROLL_DURATION_MS: f32 = 3000.0; // Full screen width at 1.0x
    pub const RESPAWN_MARGIN: f32 = 150.0; // Respawn once x < -RESPAWN_MARGIN

    // Speed curve
    pub const SPEED_CURVE_MIN_SCORE: u32 = 0;
    pub const SPEED_CURVE_MAX_SCORE: u32 = 10;
    pub const SPEED_MULTIPLIER_MIN: f32 = 1.0;
    pub const SPEED_MULTIPLIER_MAX: f32 = 2.0;

    // Physics
    pub const FIXED_DT: f32 = 1.0 / 60.0; // ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps after a stall
}
