pub mod components;
pub mod config;
pub mod fsm;
pub mod game;
pub mod map;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use game::*;
pub use map::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one frame of the deterministic simulation.
///
/// Elapsed time in `time.dt` is untrusted: zero, negative or NaN makes the frame
/// a no-op (any pending input stays pending), and stalls are clamped to
/// [`Params::MAX_DT`]. While the game is over nothing moves until an activate
/// intent restarts it.
#[allow(clippy::too_many_arguments)]
pub fn step<R: GapSampler>(
    world: &mut World,
    time: &mut Time,
    map: &GameMap,
    config: &Config,
    fsm: &mut GameFsm,
    score: &mut Score,
    events: &mut Events,
    input: &mut PendingInput,
    rng: &mut R,
) {
    events.clear();

    let Some(frame_dt) = time.frame_dt(Params::MAX_DT) else {
        return;
    };
    if frame_dt < time.dt {
        log::trace!("Clamped frame time {:.3}s to {:.3}s", time.dt, frame_dt);
    }

    // 1. Consume the activate intent (jump or restart)
    let outcome = ingest_inputs(world, map, config, fsm, score, events, input, rng);

    // The restart frame only resets; frozen worlds stay frozen
    if outcome != InputOutcome::Restarted && fsm.is_playing() {
        // Fixed micro-steps for stable physics
        let mut remaining_dt = frame_dt;
        while remaining_dt > 0.0 {
            let step_dt = remaining_dt.min(Params::FIXED_DT);
            remaining_dt -= step_dt;

            let step_time = Time {
                dt: step_dt,
                now: time.now + (frame_dt - remaining_dt),
            };

            // 2. Integrate bird physics
            move_bird(world, &step_time, config);

            // 3. Scroll pipes, then respawn any pair past the off-screen line
            let samples = move_pipes(world, &step_time, config);
            respawn_pipes(world, map, config, score, events, rng);

            // 4. Check collisions (bounds, pipes)
            if let Some(crash) = check_collisions(world, map, config) {
                fsm.apply(GameAction::Crash);
                events.crashed = Some(crash);
                log::info!("Crashed ({:?}) with score {}", crash, score.current);
                break;
            }

            // 5. Check scoring (pipe pair crossed the bird)
            check_scoring(&samples, map, score, events);
        }
    }

    // Update time
    time.now += frame_dt;
}

/// Helper to create the bird entity
pub fn create_bird(world: &mut World, pos: glam::Vec2) -> hecs::Entity {
    world.spawn((Bird::new(pos),))
}

/// Helper to create a pipe pair entity
pub fn create_pipe_pair(
    world: &mut World,
    x: f32,
    gap_offset: f32,
    speed_multiplier: f32,
) -> hecs::Entity {
    world.spawn((PipePair::new(x, gap_offset, speed_multiplier),))
}
