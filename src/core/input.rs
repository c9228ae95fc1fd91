//! Per-frame input snapshot.
use glam::Vec2;

/// What the keyboard and mouse did this frame, decoupled from raylib so the
/// simulation can be driven from tests.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputState {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    /// Restart key went down this frame.
    pub restart: bool,
    /// Relative mouse motion in pixels.
    pub mouse_delta: Vec2,
}
