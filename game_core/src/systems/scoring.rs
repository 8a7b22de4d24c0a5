use crate::{Events, GameMap, PipeSample, Score};

/// A leftward crossing of `bird_x` between two samples.
///
/// Requires a previous sample, so the first frame after a spawn never fires.
pub fn check_crossing(previous: Option<f32>, current: f32, bird_x: f32) -> bool {
    match previous {
        Some(prev) => prev > bird_x && current <= bird_x,
        None => false,
    }
}

/// Award one point per pipe pair that crossed the bird this micro-step
pub fn check_scoring(
    samples: &[PipeSample],
    map: &GameMap,
    score: &mut Score,
    events: &mut Events,
) {
    let bird_x = map.bird_x();
    for sample in samples {
        if check_crossing(sample.previous, sample.current, bird_x) {
            score.increment();
            events.scored += 1;
            log::debug!("Scored, now {}", score.current);
        }
    }
}
