//! Frame-driven facade over [`step`](crate::step).
//!
//! A display driver calls [`Game::on_frame`] once per refresh, an input source
//! calls [`Game::on_activate`] on every tap, and a renderer reads
//! [`Game::snapshot`] after each frame.

use hecs::{Entity, World};
use serde::Serialize;

use crate::{
    create_bird, create_pipe_pair, step, Bird, Config, ConfigError, Events, GameFsm, GameMap,
    GameRng, GameState, GapSampler, PendingInput, PipePair, Score, Time,
};

/// Read-only view of one frame for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub bird_x: f32,
    pub bird_y: f32,
    pub bird_tilt: f32,
    pub pipe_x: f32,
    pub gap_offset: f32,
    pub upper_pipe_y: f32,
    pub lower_pipe_y: f32,
    pub score: u32,
    pub best_score: u32,
    pub game_over: bool,
}

pub struct Game<R: GapSampler = GameRng> {
    pub world: World,
    pub bird: Entity,
    pub pipe: Entity,
    pub time: Time,
    pub map: GameMap,
    pub config: Config,
    pub fsm: GameFsm,
    pub score: Score,
    pub events: Events,
    pub input: PendingInput,
    pub rng: R,
}

impl Game<GameRng> {
    /// New game with a seeded random gap sequence
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        Self::with_sampler(config, GameRng::new(seed))
    }
}

impl<R: GapSampler> Game<R> {
    /// New game drawing gap offsets from `rng`
    pub fn with_sampler(config: Config, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;

        let map = GameMap::new(&config);
        let mut world = World::new();
        let bird = create_bird(&mut world, map.bird_spawn());
        let gap_offset = rng.sample_gap(config.gap_random_range);
        let pipe = create_pipe_pair(
            &mut world,
            map.pipe_spawn_x(),
            gap_offset,
            config.speed_curve.multiplier(0),
        );

        Ok(Self {
            world,
            bird,
            pipe,
            time: Time::default(),
            map,
            config,
            fsm: GameFsm::new(),
            score: Score::new(),
            events: Events::new(),
            input: PendingInput::new(),
            rng,
        })
    }

    /// Advance one display frame. `None` is the first callback with no
    /// measured interval yet.
    pub fn on_frame(&mut self, elapsed: Option<f32>) -> &Events {
        self.time.dt = elapsed.unwrap_or(0.0);

        step(
            &mut self.world,
            &mut self.time,
            &self.map,
            &self.config,
            &mut self.fsm,
            &mut self.score,
            &mut self.events,
            &mut self.input,
            &mut self.rng,
        );

        &self.events
    }

    /// Record a tap; it takes effect at the start of the next frame
    pub fn on_activate(&mut self) {
        self.input.push_activate();
    }

    pub fn state(&self) -> GameState {
        self.fsm.state()
    }

    pub fn is_game_over(&self) -> bool {
        self.fsm.is_game_over()
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn bird_state(&self) -> Bird {
        self.world
            .get::<&Bird>(self.bird)
            .map(|bird| *bird)
            .unwrap_or_else(|_| Bird::new(self.map.bird_spawn()))
    }

    pub fn pipe_state(&self) -> PipePair {
        self.world
            .get::<&PipePair>(self.pipe)
            .map(|pipe| *pipe)
            .unwrap_or_else(|_| PipePair::new(self.map.pipe_spawn_x(), 0.0, 1.0))
    }

    pub fn snapshot(&self) -> Snapshot {
        let bird = self.bird_state();
        let pipe = self.pipe_state();
        Snapshot {
            bird_x: bird.pos.x,
            bird_y: bird.pos.y,
            bird_tilt: bird.tilt(),
            pipe_x: pipe.x,
            gap_offset: pipe.gap_offset,
            upper_pipe_y: pipe.upper_rect(&self.config).min.y,
            lower_pipe_y: pipe.lower_rect(&self.config).min.y,
            score: self.score.current,
            best_score: self.score.best,
            game_over: self.fsm.is_game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let game = Game::new(Config::new(), 42).unwrap();
        assert_eq!(game.state(), GameState::Playing);
        assert_eq!(game.score(), Score::new());

        let snapshot = game.snapshot();
        assert_eq!(snapshot.bird_x, 100.0);
        assert_eq!(snapshot.bird_y, 400.0);
        assert_eq!(snapshot.bird_tilt, 0.0);
        assert_eq!(snapshot.pipe_x, 400.0);
        assert!((-200.0..=200.0).contains(&snapshot.gap_offset));
        assert!(!snapshot.game_over);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = Config {
            screen_width: 0.0,
            ..Config::new()
        };
        assert!(matches!(
            Game::new(config, 1),
            Err(ConfigError::NotPositive {
                field: "screen_width",
                ..
            })
        ));
    }

    #[test]
    fn test_first_frame_without_interval_is_noop() {
        let mut game = Game::new(Config::new(), 42).unwrap();
        let before = game.snapshot();
        game.on_activate();

        let events = game.on_frame(None).clone();

        assert_eq!(events, Events::new());
        assert_eq!(game.snapshot(), before);
        assert!(game.input.activate, "Intent waits for a real frame");
    }

    #[test]
    fn test_snapshot_pipe_geometry() {
        let game = Game::new(Config::new(), 5).unwrap();
        let snapshot = game.snapshot();
        // Defaults reproduce offset - length / 2 and height - length / 2 + offset
        assert!((snapshot.upper_pipe_y - (snapshot.gap_offset - 320.0)).abs() < 1e-3);
        assert!((snapshot.lower_pipe_y - (480.0 + snapshot.gap_offset)).abs() < 1e-3);
    }
}
