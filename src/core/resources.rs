//! Core domain: tuning constants and startup configuration.

use bevy::prelude::*;
use rand::Rng;
use std::time::Duration;

/// Every constant the scene and its animations are built from.
#[derive(Resource, Debug, Clone)]
pub struct SceneTuning {
    /// Render ticks between walking frame changes.
    pub frame_delay_ticks: u32,
    /// Horizontal distance the character moves per render tick.
    pub walk_step: f64,
    /// Character x at which the backdrop animation starts.
    pub backdrop_trigger_x: f64,
    /// Wall-clock seconds between backdrop frames.
    pub backdrop_interval_secs: f32,
    /// Displayed height of the walking sprite; width follows each frame's aspect.
    pub sprite_height: f32,
    pub star_count: usize,
    pub star_bounds: StarBounds,
    pub star_scale: Vec3,
    /// Grid texture edge length in pixels.
    pub grid_size: u32,
    /// Number of grid cells per texture edge.
    pub grid_lines: u32,
    pub grid_repeat: f32,
    pub floor_size: f32,
    pub floor_y: f32,
    /// Pixel size of the backdrop source art, used only for its aspect ratio.
    pub backdrop_source_size: Vec2,
    pub backdrop_width: f32,
    pub backdrop_x: f32,
    pub backdrop_z: f32,
    pub camera_distance: f32,
    pub camera_fov_degrees: f32,
    pub camera_near: f32,
    pub camera_far: f32,
}

impl Default for SceneTuning {
    fn default() -> Self {
        Self {
            frame_delay_ticks: 15,
            walk_step: 0.05,
            backdrop_trigger_x: 100.0,
            backdrop_interval_secs: 4.0,
            sprite_height: 3.0,
            star_count: 2000,
            star_bounds: StarBounds::default(),
            star_scale: Vec3::new(2.0, 2.0, 1.0),
            grid_size: 1024,
            grid_lines: 50,
            grid_repeat: 10.0,
            floor_size: 1000.0,
            floor_y: -1.5,
            backdrop_source_size: Vec2::new(500.0, 250.0),
            backdrop_width: 200.0,
            backdrop_x: 125.0,
            backdrop_z: -50.0,
            camera_distance: 5.0,
            camera_fov_degrees: 75.0,
            camera_near: 0.1,
            camera_far: 1000.0,
        }
    }
}

impl SceneTuning {
    pub fn backdrop_interval(&self) -> Duration {
        Duration::from_secs_f32(self.backdrop_interval_secs)
    }

    /// Backdrop plane size, keeping the source art's aspect ratio.
    pub fn backdrop_size(&self) -> Vec2 {
        let aspect = self.backdrop_source_size.y / self.backdrop_source_size.x;
        Vec2::new(self.backdrop_width, self.backdrop_width * aspect)
    }

    /// Backdrop plane translation. The bottom edge sits 1.5 below the floor.
    pub fn backdrop_translation(&self) -> Vec3 {
        let size = self.backdrop_size();
        Vec3::new(
            self.backdrop_x,
            self.floor_y + size.y / 2.0 - 1.5,
            self.backdrop_z,
        )
    }
}

/// Axis-aligned box that star positions are drawn from (inclusive).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StarBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for StarBounds {
    fn default() -> Self {
        Self {
            min: Vec3::new(-50.0, -50.0, -110.0),
            max: Vec3::new(50.0, 50.0, -10.0),
        }
    }
}

impl StarBounds {
    #[cfg(test)]
    pub fn contains(&self, point: Vec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Seed for the star field RNG. Fresh every launch, so placement differs per run.
#[derive(Resource, Debug, Clone, Copy)]
pub struct StarFieldSeed(pub u64);

impl Default for StarFieldSeed {
    fn default() -> Self {
        Self(rand::rng().random())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_plane_keeps_source_aspect() {
        let tuning = SceneTuning::default();
        assert_eq!(tuning.backdrop_size(), Vec2::new(200.0, 100.0));
    }

    #[test]
    fn test_backdrop_plane_sits_on_floor() {
        let tuning = SceneTuning::default();
        let translation = tuning.backdrop_translation();
        assert_eq!(translation, Vec3::new(125.0, 47.0, -50.0));
    }

    #[test]
    fn test_star_bounds_are_inclusive() {
        let bounds = StarBounds::default();
        assert!(bounds.contains(Vec3::new(-50.0, 50.0, -110.0)));
        assert!(bounds.contains(Vec3::new(50.0, -50.0, -10.0)));
        assert!(!bounds.contains(Vec3::new(0.0, 0.0, -5.0)));
        assert!(!bounds.contains(Vec3::new(50.1, 0.0, -50.0)));
    }
}
