//! Player movement: smoothed walking, friction, jump and gravity.
use glam::Vec3;

use crate::config::PlayerConfig;
use crate::core::camera::heading_vectors;
use crate::core::entity::{Entity, Tick};
use crate::core::input::InputState;

#[derive(Clone, Debug)]
pub struct Player {
    pub position: Vec3,
    /// Horizontal velocity; `y` stays 0.
    pub velocity: Vec3,
    pub vertical_velocity: f32,
    pub is_jumping: bool,
    pub is_moving: bool,
    cfg: PlayerConfig,
}

impl Player {
    pub fn new(cfg: &PlayerConfig) -> Self {
        Self {
            position: cfg.start,
            velocity: Vec3::ZERO,
            vertical_velocity: 0.0,
            is_jumping: false,
            is_moving: false,
            cfg: cfg.clone(),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(&self.cfg);
    }

    /// One frame of movement relative to the camera heading.
    pub fn advance(&mut self, input: &InputState, camera_yaw: f32) {
        let (forward, right) = heading_vectors(camera_yaw);

        let mut wish = Vec3::ZERO;
        if input.forward {
            wish += forward;
        }
        if input.backward {
            wish -= forward;
        }
        if input.right {
            wish += right;
        }
        if input.left {
            wish -= right;
        }

        // opposite keys cancel out to zero, which counts as no input
        if wish.length_squared() > 0.0 {
            let target = wish.normalize() * self.cfg.speed;
            self.velocity += (target - self.velocity) * self.cfg.acceleration;
        } else {
            self.velocity *= self.cfg.friction;
        }

        if input.jump && !self.is_jumping {
            self.vertical_velocity = self.cfg.jump_strength;
            self.is_jumping = true;
        }

        self.vertical_velocity -= self.cfg.gravity;
        self.position.y += self.vertical_velocity;
        if self.position.y <= 0.0 {
            self.position.y = 0.0;
            self.vertical_velocity = 0.0;
            self.is_jumping = false;
        }

        self.position.x += self.velocity.x;
        self.position.z += self.velocity.z;

        let t = self.cfg.moving_threshold;
        self.is_moving = self.velocity.x.abs() > t || self.velocity.z.abs() > t;
    }
}

impl Entity for Player {
    type Output = ();

    fn update(&mut self, tick: &Tick<'_>) {
        self.advance(tick.input, tick.camera_yaw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(&PlayerConfig::default())
    }

    fn held(f: impl FnOnce(&mut InputState)) -> InputState {
        let mut input = InputState::default();
        f(&mut input);
        input
    }

    #[test]
    fn forward_at_zero_yaw_walks_down_negative_z() {
        let mut p = player();
        let input = held(|i| i.forward = true);
        p.advance(&input, 0.0);
        assert!((p.velocity.z + 0.2).abs() < 1e-6); // 0.25 * 0.8
        assert!(p.velocity.x.abs() < 1e-6);
        assert!(p.position.z < 0.0);
        assert!(p.is_moving);
    }

    #[test]
    fn strafe_left_moves_toward_negative_x() {
        let mut p = player();
        p.advance(&held(|i| i.left = true), 0.0);
        assert!(p.position.x < 0.0);
        let mut p = player();
        p.advance(&held(|i| i.right = true), 0.0);
        assert!(p.position.x > 0.0);
    }

    #[test]
    fn diagonal_speed_is_capped() {
        let mut p = player();
        let input = held(|i| {
            i.forward = true;
            i.right = true;
        });
        for _ in 0..60 {
            p.advance(&input, 45.0);
        }
        assert!((p.velocity.length() - 0.25).abs() < 1e-4);
    }

    #[test]
    fn friction_decays_velocity_geometrically() {
        let mut p = player();
        p.velocity = Vec3::new(0.2, 0.0, -0.1);
        let idle = InputState::default();
        let mut last = p.velocity.length();
        for _ in 0..40 {
            p.advance(&idle, 0.0);
            let now = p.velocity.length();
            assert!(now < last);
            assert!((now - last * 0.85).abs() < 1e-6);
            last = now;
        }
        assert!(!p.is_moving);
    }

    #[test]
    fn opposite_keys_count_as_idle() {
        let mut p = player();
        p.velocity = Vec3::new(0.1, 0.0, 0.0);
        let input = held(|i| {
            i.forward = true;
            i.backward = true;
        });
        p.advance(&input, 0.0);
        assert!((p.velocity.x - 0.085).abs() < 1e-6);
    }

    #[test]
    fn never_below_ground() {
        let mut p = player();
        let patterns = [
            held(|i| i.jump = true),
            InputState::default(),
            held(|i| {
                i.jump = true;
                i.forward = true;
            }),
            held(|i| i.left = true),
        ];
        for frame in 0..500 {
            p.advance(&patterns[frame % patterns.len()], frame as f32);
            assert!(p.position.y >= 0.0);
        }
    }

    #[test]
    fn jump_rises_then_lands() {
        let mut p = player();
        p.advance(&held(|i| i.jump = true), 0.0);
        assert!(p.is_jumping);
        assert!((p.position.y - 0.48).abs() < 1e-6);

        let idle = InputState::default();
        let mut frames = 0;
        while p.is_jumping {
            p.advance(&idle, 0.0);
            frames += 1;
            assert!(frames < 200, "never landed");
        }
        assert_eq!(p.position.y, 0.0);
        assert_eq!(p.vertical_velocity, 0.0);
    }

    #[test]
    fn jump_is_not_retriggered_midair() {
        let mut p = player();
        let jump = held(|i| i.jump = true);
        p.advance(&jump, 0.0);
        let v = p.vertical_velocity;
        p.advance(&jump, 0.0);
        assert!((p.vertical_velocity - (v - 0.02)).abs() < 1e-6);
    }

    #[test]
    fn holding_jump_rejumps_after_landing() {
        let mut p = player();
        let jump = held(|i| i.jump = true);
        let mut takeoffs = 0;
        let mut was_jumping = false;
        for _ in 0..200 {
            p.advance(&jump, 0.0);
            if p.is_jumping && !was_jumping {
                takeoffs += 1;
            }
            was_jumping = p.is_jumping;
        }
        assert!(takeoffs >= 2, "takeoffs {takeoffs}");
    }

    #[test]
    fn reset_restores_start() {
        let mut p = player();
        p.advance(&held(|i| i.forward = true), 10.0);
        p.reset();
        assert_eq!(p.position, Vec3::ZERO);
        assert_eq!(p.velocity, Vec3::ZERO);
        assert!(!p.is_jumping && !p.is_moving);
    }
}
