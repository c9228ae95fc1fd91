//! Enemy pursuit and proximity sound state.
use glam::{Vec2, Vec3};
use log::debug;

use crate::config::EnemyConfig;
use crate::core::entity::{Entity, Tick};

/// Sound transition emitted when the enemy crosses the hearing radius.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SoundCue {
    Start,
    Stop,
}

/// Anything that can loop the proximity clip.
///
/// Implementations must treat repeated starts or stops as no-ops. A start
/// that fails on the device leaves `is_looping` false.
pub trait ProximityAudio {
    fn start_loop(&mut self);
    fn stop_loop(&mut self);
    fn is_looping(&self) -> bool;

    fn apply(&mut self, cue: SoundCue) {
        match cue {
            SoundCue::Start => self.start_loop(),
            SoundCue::Stop => self.stop_loop(),
        }
    }
}

/// Distance ignoring height.
#[inline]
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x - b.x, a.z - b.z).length()
}

#[derive(Clone, Debug)]
pub struct Enemy {
    pub position: Vec3,
    pub speed: f32,
    pub size: f32,
    pub sound_distance: f32,
    /// Mirrors whether the last `advance` found the player within
    /// `sound_distance`; only `advance` writes it.
    pub sound_playing: bool,
    start: Vec3,
}

impl Enemy {
    pub fn new(cfg: &EnemyConfig) -> Self {
        Self {
            position: cfg.start,
            speed: cfg.speed,
            size: cfg.size,
            sound_distance: cfg.sound_distance,
            sound_playing: false,
            start: cfg.start,
        }
    }

    /// Back to the spawn point. The sound flag is re-evaluated on the next
    /// `advance`.
    pub fn reset(&mut self) {
        self.position = self.start;
    }

    /// Steps toward the player in the XZ plane and reports a sound
    /// transition if the hearing radius was crossed.
    pub fn advance(&mut self, player_position: Vec3) -> Option<SoundCue> {
        let dx = player_position.x - self.position.x;
        let dz = player_position.z - self.position.z;
        let distance = (dx * dx + dz * dz).sqrt();

        let cue = if distance <= self.sound_distance {
            if self.sound_playing {
                None
            } else {
                self.sound_playing = true;
                debug!("enemy within {distance:.2}, starting proximity loop");
                Some(SoundCue::Start)
            }
        } else if self.sound_playing {
            self.sound_playing = false;
            debug!("enemy out of range ({distance:.2}), stopping proximity loop");
            Some(SoundCue::Stop)
        } else {
            None
        };

        if distance > 0.0 {
            self.position.x += dx / distance * self.speed;
            self.position.z += dz / distance * self.speed;
        }
        cue
    }

    /// Rotation around +Y, in degrees, that turns the quad's +Z face toward
    /// the camera.
    pub fn billboard_yaw(&self, camera_position: Vec3) -> f32 {
        let dx = camera_position.x - self.position.x;
        let dz = camera_position.z - self.position.z;
        dx.atan2(dz).to_degrees()
    }

    /// The quad is centred half its size above the feet.
    pub fn billboard_center(&self) -> Vec3 {
        self.position + Vec3::Y * (self.size / 2.0)
    }
}

impl Entity for Enemy {
    type Output = Option<SoundCue>;

    fn update(&mut self, tick: &Tick<'_>) -> Option<SoundCue> {
        self.advance(tick.player_position)
    }
}
