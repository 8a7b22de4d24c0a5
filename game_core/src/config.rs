use serde::{Deserialize, Serialize};

use crate::params::Params;

/// Score to speed multiplier mapping.
///
/// Linear between `(min_score, min_multiplier)` and `(max_score, max_multiplier)`,
/// clamped outside that range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedCurve {
    pub min_score: u32,
    pub max_score: u32,
    pub min_multiplier: f32,
    pub max_multiplier: f32,
}

impl Default for SpeedCurve {
    fn default() -> Self {
        Self {
            min_score: Params::SPEED_CURVE_MIN_SCORE,
            max_score: Params::SPEED_CURVE_MAX_SCORE,
            min_multiplier: Params::SPEED_MULTIPLIER_MIN,
            max_multiplier: Params::SPEED_MULTIPLIER_MAX,
        }
    }
}

impl SpeedCurve {
    pub fn multiplier(&self, score: u32) -> f32 {
        if score <= self.min_score {
            return self.min_multiplier;
        }
        if score >= self.max_score {
            return self.max_multiplier;
        }
        let span = (self.max_score - self.min_score) as f32;
        let t = (score - self.min_score) as f32 / span;
        self.min_multiplier + (self.max_multiplier - self.min_multiplier) * t
    }
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub ground_margin: f32,
    pub bird_width: f32,
    pub bird_height: f32,
    pub gravity: f32,
    pub jump_impulse: f32,
    pub pipe_width: f32,
    pub pipe_length: f32,
    pub gap_height: f32,
    pub gap_random_range: f32,
    pub base_scroll_duration_ms: f32,
    pub respawn_margin: f32,
    pub speed_curve: SpeedCurve,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            ground_margin: Params::GROUND_MARGIN,
            bird_width: Params::BIRD_WIDTH,
            bird_height: Params::BIRD_HEIGHT,
            gravity: Params::GRAVITY,
            jump_impulse: Params::JUMP_IMPULSE,
            pipe_width: Params::PIPE_WIDTH,
            pipe_length: Params::PIPE_LENGTH,
            gap_height: Params::GAP_HEIGHT,
            gap_random_range: Params::GAP_RANDOM_RANGE,
            base_scroll_duration_ms: Params::BASE_SCROLL_DURATION_MS,
            respawn_margin: Params::RESPAWN_MARGIN,
            speed_curve: SpeedCurve::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal scroll speed at multiplier 1.0, in units per second
    pub fn base_scroll_speed(&self) -> f32 {
        self.screen_width / (self.base_scroll_duration_ms / 1000.0)
    }

    /// Pipe x below which the pair respawns on the right
    pub fn respawn_x(&self) -> f32 {
        -self.respawn_margin
    }

    /// Y of the ground line; reaching it is a bounds violation
    pub fn ground_y(&self) -> f32 {
        self.screen_height - self.ground_margin
    }

    /// Check that every tuning value is usable by the simulation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ground_margin", self.ground_margin),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("gravity", self.gravity),
            ("jump_impulse", self.jump_impulse),
            ("pipe_width", self.pipe_width),
            ("pipe_length", self.pipe_length),
            ("gap_height", self.gap_height),
            ("gap_random_range", self.gap_random_range),
            ("base_scroll_duration_ms", self.base_scroll_duration_ms),
            ("respawn_margin", self.respawn_margin),
            ("speed_curve.min_multiplier", self.speed_curve.min_multiplier),
            ("speed_curve.max_multiplier", self.speed_curve.max_multiplier),
        ];
        for (field, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field });
            }
        }

        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("pipe_length", self.pipe_length),
            ("gap_height", self.gap_height),
            ("base_scroll_duration_ms", self.base_scroll_duration_ms),
            ("speed_curve.min_multiplier", self.speed_curve.min_multiplier),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.gap_random_range < 0.0 {
            return Err(ConfigError::NegativeGapRange(self.gap_random_range));
        }
        if self.ground_margin < 0.0 || self.ground_margin >= self.screen_height {
            return Err(ConfigError::GroundMarginOutOfRange {
                margin: self.ground_margin,
                screen_height: self.screen_height,
            });
        }
        if self.respawn_margin < self.pipe_width {
            return Err(ConfigError::RespawnBeforeOffscreen {
                margin: self.respawn_margin,
                pipe_width: self.pipe_width,
            });
        }
        let spawn_y = self.screen_height / 2.0;
        if spawn_y >= self.ground_y() {
            return Err(ConfigError::SpawnOutOfBounds {
                spawn_y,
                ground_y: self.ground_y(),
            });
        }

        let curve = &self.speed_curve;
        if curve.max_score <= curve.min_score || curve.max_multiplier < curve.min_multiplier {
            return Err(ConfigError::SpeedCurveNotIncreasing);
        }

        Ok(())
    }
}

/// Errors reported by [`Config::validate`]
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NotFinite { field: &'static str },
    NotPositive { field: &'static str, value: f32 },
    NegativeGapRange(f32),
    GroundMarginOutOfRange { margin: f32, screen_height: f32 },
    RespawnBeforeOffscreen { margin: f32, pipe_width: f32 },
    SpawnOutOfBounds { spawn_y: f32, ground_y: f32 },
    SpeedCurveNotIncreasing,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFinite { field } => write!(f, "{} must be a finite number", field),
            ConfigError::NotPositive { field, value } => {
                write!(f, "{} must be positive, got {}", field, value)
            }
            ConfigError::NegativeGapRange(range) => {
                write!(f, "gap_random_range must not be negative, got {}", range)
            }
            ConfigError::GroundMarginOutOfRange {
                margin,
                screen_height,
            } => write!(
                f,
                "ground_margin {} must lie within the screen height {}",
                margin, screen_height
            ),
            ConfigError::RespawnBeforeOffscreen { margin, pipe_width } => write!(
                f,
                "respawn_margin {} must be at least the pipe width {}",
                margin, pipe_width
            ),
            ConfigError::SpawnOutOfBounds { spawn_y, ground_y } => write!(
                f,
                "bird spawn y {} is at or below the ground line {}",
                spawn_y, ground_y
            ),
            ConfigError::SpeedCurveNotIncreasing => {
                write!(f, "speed curve must increase with score")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
