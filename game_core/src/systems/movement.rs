use crate::{Bird, Config, PipePair, PipeSample, Time};
use hecs::World;

/// Integrate bird physics
pub fn move_bird(world: &mut World, time: &Time, config: &Config) {
    for (_entity, bird) in world.query_mut::<&mut Bird>() {
        bird.integrate(time.dt, config.gravity);
    }
}

/// Scroll pipe pairs left and return one sample per pair.
///
/// The samples are taken before any respawn so crossing and respawn checks
/// read the same position.
pub fn move_pipes(world: &mut World, time: &Time, config: &Config) -> Vec<PipeSample> {
    let base_speed = config.base_scroll_speed();
    world
        .query_mut::<&mut PipePair>()
        .into_iter()
        .map(|(_entity, pipe)| pipe.advance(time.dt, base_speed))
        .collect()
}
