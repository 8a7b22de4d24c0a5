use glam::Vec2;

use crate::map::Aabb;
use crate::params::Params;
use crate::Config;

/// Bird component - the player controlled body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub pos: Vec2, // Top-left corner, x stays fixed for the session
    pub vel: f32,  // Vertical velocity, +y is down
}

impl Bird {
    pub fn new(pos: Vec2) -> Self {
        Self { pos, vel: 0.0 }
    }

    /// Advance position with the current velocity, then apply gravity.
    ///
    /// A non-positive or NaN `dt` leaves the bird untouched. No clamping happens
    /// here; leaving the play field is a collision concern.
    pub fn integrate(&mut self, dt: f32, gravity: f32) {
        if dt.is_nan() || dt <= 0.0 {
            return;
        }
        self.pos.y += self.vel * dt;
        self.vel += gravity * dt;
    }

    /// Overwrite the vertical velocity
    pub fn jump(&mut self, impulse: f32) {
        self.vel = impulse;
    }

    /// Single point hitbox
    pub fn center(&self, size: Vec2) -> Vec2 {
        self.pos + size * 0.5
    }

    /// Velocity mapped onto a rotation in radians, clamped at the extremes
    pub fn tilt(&self) -> f32 {
        let t = self.vel / Params::TILT_VELOCITY_RANGE;
        (t * Params::TILT_MAX).clamp(-Params::TILT_MAX, Params::TILT_MAX)
    }

    /// Put the bird back at its spawn, at rest
    pub fn reset(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.vel = 0.0;
    }
}

/// Pipe pair component - upper and lower pipes sharing one x and one gap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipePair {
    pub x: f32,                // Left edge of both pipes
    pub gap_offset: f32,       // Gap center relative to the screen midline
    pub speed_multiplier: f32, // Fixed for one traversal
    pub last_x: Option<f32>,   // Previous frame sample, None right after a spawn
}

/// One post-move sample of a pipe pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeSample {
    pub previous: Option<f32>,
    pub current: f32,
}

impl PipePair {
    pub fn new(x: f32, gap_offset: f32, speed_multiplier: f32) -> Self {
        Self {
            x,
            gap_offset,
            speed_multiplier,
            last_x: None,
        }
    }

    /// Scroll left and record the sample the crossing check will read
    pub fn advance(&mut self, dt: f32, base_speed: f32) -> PipeSample {
        let previous = self.last_x;
        if dt > 0.0 {
            self.x -= base_speed * self.speed_multiplier * dt;
        }
        self.last_x = Some(self.x);
        PipeSample {
            previous,
            current: self.x,
        }
    }

    /// Restart the traversal from the right edge with a new gap and speed
    pub fn respawn(&mut self, screen_width: f32, gap_offset: f32, speed_multiplier: f32) {
        self.x = screen_width;
        self.gap_offset = gap_offset;
        self.speed_multiplier = speed_multiplier;
        self.last_x = None;
    }

    /// Top edge of the gap
    pub fn gap_top(&self, config: &Config) -> f32 {
        config.screen_height / 2.0 + self.gap_offset - config.gap_height / 2.0
    }

    /// Bottom edge of the gap
    pub fn gap_bottom(&self, config: &Config) -> f32 {
        self.gap_top(config) + config.gap_height
    }

    pub fn upper_rect(&self, config: &Config) -> Aabb {
        Aabb::from_corner_size(
            Vec2::new(self.x, self.gap_top(config) - config.pipe_length),
            Vec2::new(config.pipe_width, config.pipe_length),
        )
    }

    pub fn lower_rect(&self, config: &Config) -> Aabb {
        Aabb::from_corner_size(
            Vec2::new(self.x, self.gap_bottom(config)),
            Vec2::new(config.pipe_width, config.pipe_length),
        )
    }

    pub fn rects(&self, config: &Config) -> [Aabb; 2] {
        [self.upper_rect(config), self.lower_rect(config)]
    }
}
