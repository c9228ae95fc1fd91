//! Reads raylib's keyboard and mouse state into an `InputState`.
use glam::Vec2;
use raylib::prelude::*;

use crate::core::input::InputState;

fn any_down(window: &RaylibHandle, keys: &[KeyboardKey]) -> bool {
    keys.iter().any(|&k| window.is_key_down(k))
}

pub fn process_events(window: &RaylibHandle) -> InputState {
    let mouse = window.get_mouse_delta();
    InputState {
        forward: any_down(window, &[KeyboardKey::KEY_W, KeyboardKey::KEY_UP]),
        backward: any_down(window, &[KeyboardKey::KEY_S, KeyboardKey::KEY_DOWN]),
        left: any_down(window, &[KeyboardKey::KEY_A, KeyboardKey::KEY_LEFT]),
        right: any_down(window, &[KeyboardKey::KEY_D, KeyboardKey::KEY_RIGHT]),
        jump: window.is_key_down(KeyboardKey::KEY_SPACE),
        restart: window.is_key_pressed(KeyboardKey::KEY_R),
        mouse_delta: Vec2::new(mouse.x, mouse.y),
    }
}
