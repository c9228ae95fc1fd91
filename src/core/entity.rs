//! Shared update interface for everything the loop advances once per frame.
use glam::Vec3;

use crate::core::input::InputState;

/// Frame context handed to `Entity::update`.
///
/// Built fresh for each call, so `player_position` is whatever the player
/// holds at that point of the frame (the enemy sees the post-move position).
#[derive(Clone, Copy, Debug)]
pub struct Tick<'a> {
    pub input: &'a InputState,
    pub camera_yaw: f32,
    pub player_position: Vec3,
}

pub trait Entity {
    /// Side information the owner has to act on (sound cues, ...).
    type Output;

    fn update(&mut self, tick: &Tick<'_>) -> Self::Output;
}
