use glam::Vec2;

use crate::Config;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Build from a top-left corner and a size (+y is down)
    pub fn from_corner_size(corner: Vec2, size: Vec2) -> Self {
        Self {
            min: corner,
            max: corner + size,
        }
    }

    /// Inclusive point test on every edge
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

/// Play field geometry derived from the config
#[derive(Debug, Clone, Copy)]
pub struct GameMap {
    pub width: f32,
    pub height: f32,
    pub ground_y: f32,
    pub respawn_x: f32,
}

impl GameMap {
    pub fn new(config: &Config) -> Self {
        Self {
            width: config.screen_width,
            height: config.screen_height,
            ground_y: config.ground_y(),
            respawn_x: config.respawn_x(),
        }
    }

    /// Fixed horizontal position of the bird (a quarter of the way in)
    pub fn bird_x(&self) -> f32 {
        self.width / 4.0
    }

    /// Where the bird starts and restarts
    pub fn bird_spawn(&self) -> Vec2 {
        Vec2::new(self.bird_x(), self.height / 2.0)
    }

    /// Pipe pairs enter from the right edge
    pub fn pipe_spawn_x(&self) -> f32 {
        self.width
    }

    /// Vertical midline the gap offset is measured from
    pub fn midline(&self) -> f32 {
        self.height / 2.0
    }

    /// Bird top at or above the ceiling, or at or below the ground line
    pub fn out_of_bounds(&self, y: f32) -> bool {
        y >= self.ground_y || y <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_contains_is_inclusive() {
        let rect = Aabb::from_corner_size(Vec2::new(10.0, 20.0), Vec2::new(5.0, 5.0));
        assert!(rect.contains(Vec2::new(12.0, 22.0)));
        assert!(rect.contains(Vec2::new(10.0, 20.0)), "Top-left corner");
        assert!(rect.contains(Vec2::new(15.0, 25.0)), "Bottom-right corner");
        assert!(!rect.contains(Vec2::new(16.0, 22.0)));
        assert!(!rect.contains(Vec2::new(12.0, 19.0)));
    }

    #[test]
    fn test_map_from_default_config() {
        let map = GameMap::new(&Config::new());
        assert_eq!(map.bird_x(), 100.0);
        assert_eq!(map.bird_spawn(), Vec2::new(100.0, 400.0));
        assert_eq!(map.pipe_spawn_x(), 400.0);
        assert_eq!(map.respawn_x, -150.0);
    }

    #[test]
    fn test_out_of_bounds() {
        let map = GameMap::new(&Config::new());
        assert!(map.out_of_bounds(0.0), "Touching the ceiling");
        assert!(map.out_of_bounds(-5.0));
        assert!(map.out_of_bounds(map.ground_y), "Touching the ground");
        assert!(map.out_of_bounds(map.height));
        assert!(!map.out_of_bounds(1.0));
        assert!(!map.out_of_bounds(map.ground_y - 1.0));
    }
}
