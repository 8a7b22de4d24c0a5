use glam::Vec2;
use hecs::World;

use crate::{Aabb, Bird, Config, Crash, GameMap, PipePair};

/// Classify a collision for one bird against the play field and pipe rects.
///
/// Bounds use the bird's vertical position. Pipes use only the bird's center
/// point, so contact at the edges of the sprite is not detected.
pub fn detect_crash(bird: &Bird, bird_size: Vec2, rects: &[Aabb], map: &GameMap) -> Option<Crash> {
    if map.out_of_bounds(bird.pos.y) {
        return Some(if bird.pos.y <= 0.0 {
            Crash::Ceiling
        } else {
            Crash::Ground
        });
    }

    let center = bird.center(bird_size);
    if rects.iter().any(|rect| rect.contains(center)) {
        Some(Crash::Pipe)
    } else {
        None
    }
}

/// True when the bird is out of bounds or its center is inside any rect
pub fn collides(bird: &Bird, bird_size: Vec2, rects: &[Aabb], map: &GameMap) -> bool {
    detect_crash(bird, bird_size, rects, map).is_some()
}

/// Check the bird against the bounds and every pipe pair
pub fn check_collisions(world: &World, map: &GameMap, config: &Config) -> Option<Crash> {
    // Collect pipe geometry first
    let rects: Vec<Aabb> = world
        .query::<&PipePair>()
        .iter()
        .flat_map(|(_e, pipe)| pipe.rects(config))
        .collect();

    let bird_size = Vec2::new(config.bird_width, config.bird_height);
    let mut bird_query = world.query::<&Bird>();
    let crash = bird_query
        .iter()
        .find_map(|(_e, bird)| detect_crash(bird, bird_size, &rects, map));
    crash
}
