use rand::Rng;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Elapsed time for this frame, untrusted
    pub now: f32, // Total simulated time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }

    /// Usable frame time: `None` for zero, negative or NaN input, otherwise
    /// clamped to `max_dt`.
    pub fn frame_dt(&self, max_dt: f32) -> Option<f32> {
        if self.dt.is_nan() || self.dt <= 0.0 {
            None
        } else {
            Some(self.dt.min(max_dt))
        }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.0, now: 0.0 }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub current: u32, // Pipes passed in this attempt
    pub best: u32,    // Best attempt this session
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self) {
        self.current += 1;
        self.best = self.best.max(self.current);
    }

    /// Start a new attempt, keeping the session best
    pub fn reset(&mut self) {
        self.current = 0;
    }
}

/// Source of gap offsets for pipe pairs
pub trait GapSampler {
    /// Draw an offset uniformly from `[-range, range]`
    fn sample_gap(&mut self, range: f32) -> f32;
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

impl GapSampler for GameRng {
    fn sample_gap(&mut self, range: f32) -> f32 {
        if range.is_nan() || range <= 0.0 {
            return 0.0;
        }
        self.0.gen_range(-range..=range)
    }
}

/// Why an attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crash {
    Ceiling,
    Ground,
    Pipe,
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub jumped: bool,
    pub scored: u32, // Crossings this frame
    pub respawned: bool,
    pub crashed: Option<Crash>,
    pub restarted: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.jumped = false;
        self.scored = 0;
        self.respawned = false;
        self.crashed = None;
        self.restarted = false;
    }
}

/// Activate intent set by the input collaborator, consumed by the next step
#[derive(Debug, Clone, Copy, Default)]
pub struct PendingInput {
    pub activate: bool,
}

impl PendingInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repeated activations before the next step collapse into one
    pub fn push_activate(&mut self) {
        self.activate = true;
    }

    pub fn take_activate(&mut self) -> bool {
        std::mem::take(&mut self.activate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_dt_rejects_degenerate_values() {
        assert_eq!(Time::new(0.0, 0.0).frame_dt(0.1), None);
        assert_eq!(Time::new(-0.016, 0.0).frame_dt(0.1), None);
        assert_eq!(Time::new(f32::NAN, 0.0).frame_dt(0.1), None);
    }

    #[test]
    fn test_frame_dt_clamps_stalls() {
        assert_eq!(Time::new(0.016, 0.0).frame_dt(0.1), Some(0.016));
        assert_eq!(Time::new(3.5, 0.0).frame_dt(0.1), Some(0.1));
        assert_eq!(Time::new(f32::INFINITY, 0.0).frame_dt(0.1), Some(0.1));
    }

    #[test]
    fn test_score_increment_tracks_best() {
        let mut score = Score::new();
        score.increment();
        score.increment();
        assert_eq!(score.current, 2);
        assert_eq!(score.best, 2);

        score.reset();
        assert_eq!(score.current, 0);
        assert_eq!(score.best, 2, "Best survives a restart");

        score.increment();
        assert_eq!(score.best, 2);
    }

    #[test]
    fn test_gap_sampler_stays_in_range() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            let gap = rng.sample_gap(200.0);
            assert!((-200.0..=200.0).contains(&gap));
        }
    }

    #[test]
    fn test_gap_sampler_is_deterministic_per_seed() {
        let mut a = GameRng::new(99);
        let mut b = GameRng::new(99);
        for _ in 0..10 {
            assert_eq!(a.sample_gap(200.0), b.sample_gap(200.0));
        }
    }

    #[test]
    fn test_gap_sampler_zero_range() {
        let mut rng = GameRng::default();
        assert_eq!(rng.sample_gap(0.0), 0.0);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.jumped = true;
        events.scored = 2;
        events.respawned = true;
        events.crashed = Some(Crash::Pipe);
        events.restarted = true;

        events.clear();

        assert_eq!(events, Events::new());
    }

    #[test]
    fn test_pending_input_coalesces() {
        let mut input = PendingInput::new();
        input.push_activate();
        input.push_activate();
        assert!(input.take_activate());
        assert!(!input.take_activate(), "Consumed once");
    }
}
