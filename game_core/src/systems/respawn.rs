use hecs::World;

use crate::{Bird, Config, Events, GameMap, GapSampler, PipePair, Score};

/// Send pipe pairs that left the screen back to the right edge.
///
/// The speed multiplier for the next traversal is taken from the score at
/// respawn time.
pub fn respawn_pipes<R: GapSampler>(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &Score,
    events: &mut Events,
    rng: &mut R,
) {
    for (_entity, pipe) in world.query_mut::<&mut PipePair>() {
        if pipe.x < map.respawn_x {
            let gap_offset = rng.sample_gap(config.gap_random_range);
            let multiplier = config.speed_curve.multiplier(score.current);
            pipe.respawn(map.pipe_spawn_x(), gap_offset, multiplier);
            events.respawned = true;

            log::debug!(
                "Pipe pair respawned: gap offset {:.1}, speed x{:.2}",
                gap_offset,
                multiplier
            );
        }
    }
}

/// Put every entity back to its starting state for a new attempt
pub fn reset_world<R: GapSampler>(
    world: &mut World,
    map: &GameMap,
    config: &Config,
    score: &mut Score,
    rng: &mut R,
) {
    score.reset();

    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        bird.reset(map.bird_spawn());
    }

    let multiplier = config.speed_curve.multiplier(score.current);
    for (_entity, pipe) in world.query_mut::<&mut PipePair>() {
        let gap_offset = rng.sample_gap(config.gap_random_range);
        pipe.respawn(map.pipe_spawn_x(), gap_offset, multiplier);
    }
}
