//! Stand-in for a player: decides when to tap from the render snapshot alone.

use game_core::{Config, Snapshot};

/// Flap this far above the lower pipe's top edge
const FLAP_MARGIN: f32 = 30.0;

/// Frames to wait on the game over screen before tapping to restart
const RESTART_DELAY_FRAMES: u32 = 30;

pub struct Autopilot {
    bird_half_height: f32,
    wait_frames: u32,
}

impl Autopilot {
    pub fn new(config: &Config) -> Self {
        Self {
            bird_half_height: config.bird_height / 2.0,
            wait_frames: RESTART_DELAY_FRAMES,
        }
    }

    /// Decide whether to tap before the next frame.
    ///
    /// Strategy:
    /// 1. While playing, flap once the falling bird's center drops to within
    ///    `FLAP_MARGIN` of the lower pipe, so the apex lands inside the gap.
    /// 2. When the game is over, wait a moment and tap to restart.
    pub fn should_activate(&mut self, snapshot: &Snapshot) -> bool {
        if snapshot.game_over {
            if self.wait_frames == 0 {
                self.wait_frames = RESTART_DELAY_FRAMES;
                return true;
            }
            self.wait_frames -= 1;
            return false;
        }

        let center_y = snapshot.bird_y + self.bird_half_height;
        let falling = snapshot.bird_tilt >= 0.0;
        falling && center_y >= snapshot.lower_pipe_y - FLAP_MARGIN
    }
}
