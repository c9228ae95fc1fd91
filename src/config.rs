//! Game tunables.
//!
//! Everything the loop, the entities and the renderer need to know about
//! sizes, speeds and asset paths lives here. Movement values are per frame,
//! not per second: the loop runs at a fixed delay and never scales by `dt`.

use std::time::Duration;

use glam::Vec3;

#[derive(Clone, Debug, Default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub player: PlayerConfig,
    pub enemy: EnemyConfig,
    pub world: WorldConfig,
    pub assets: AssetConfig,
}

#[derive(Clone, Debug)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
    pub title: String,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Sky colour as RGB in [0, 1].
    pub sky: [f32; 3],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            title: "3D Chase Game".to_string(),
            fovy: 90.0,
            sky: [0.529, 0.808, 0.922],
        }
    }
}

#[derive(Clone, Debug)]
pub struct CameraConfig {
    pub eye_height: f32,
    /// Degrees of rotation per pixel of mouse motion.
    pub mouse_sensitivity: f32,
    pub pitch_limit: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            eye_height: 1.7,
            mouse_sensitivity: 0.15,
            pitch_limit: 89.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PlayerConfig {
    pub start: Vec3,
    pub speed: f32,     // faster than the enemy
    pub acceleration: f32,
    pub friction: f32,
    pub jump_strength: f32,
    pub gravity: f32,
    pub moving_threshold: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            start: Vec3::ZERO,
            speed: 0.25,
            acceleration: 0.8,
            friction: 0.85,
            jump_strength: 0.5,
            gravity: 0.02,
            moving_threshold: 0.01,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EnemyConfig {
    pub start: Vec3,
    pub speed: f32,
    /// Edge length of the billboard quad.
    pub size: f32,
    /// Planar distance at or below which the proximity loop plays.
    pub sound_distance: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            start: Vec3::new(5.0, 0.0, 5.0),
            speed: 0.2,
            size: 4.0,
            sound_distance: 15.0,
        }
    }
}

#[derive(Clone, Debug)]
pub struct WorldConfig {
    pub collision_threshold: f32,
    pub floor_half_extent: i32,
    pub floor_tile: i32,
    pub frame_delay: Duration,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            collision_threshold: 1.5,
            floor_half_extent: 50,
            floor_tile: 2,
            frame_delay: Duration::from_millis(10),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AssetConfig {
    pub enemy_texture: String,
    pub proximity_sound: String,
    pub proximity_volume: f32,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            enemy_texture: "assets/enemy.png".to_string(),
            proximity_sound: "assets/proximity.mp3".to_string(),
            proximity_volume: 1.0,
        }
    }
}
