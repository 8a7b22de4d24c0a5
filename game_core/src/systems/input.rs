use hecs::World;

use crate::fsm::{GameAction, GameFsm, GameState};
use crate::systems::reset_world;
use crate::{Bird, Config, Events, GameMap, GapSampler, PendingInput, Score};

/// What the pending activate intent turned into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    None,
    Jumped,
    Restarted,
}

/// Consume the pending activate intent: jump while playing, restart when over
#[allow(clippy::too_many_arguments)]
pub fn ingest_inputs<R: GapSampler>(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    fsm: &mut GameFsm,
    score: &mut Score,
    events: &mut Events,
    input: &mut PendingInput,
    rng: &mut R,
) -> InputOutcome {
    if !input.take_activate() {
        return InputOutcome::None;
    }

    match fsm.state() {
        GameState::Playing => {
            for (_entity, bird) in world.query_mut::<&mut Bird>() {
                bird.jump(config.jump_impulse);
            }
            events.jumped = true;
            InputOutcome::Jumped
        }
        GameState::GameOver => {
            let last_score = score.current;
            reset_world(world, map, config, score, rng);
            fsm.apply(GameAction::Restart);
            events.restarted = true;

            log::info!("Restarted after scoring {} (best {})", last_score, score.best);
            InputOutcome::Restarted
        }
    }
}
