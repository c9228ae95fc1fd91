//! First-person camera: yaw/pitch in degrees, eye glued to the player.
use glam::{Mat4, Vec3};

use crate::config::CameraConfig;
use crate::core::entity::{Entity, Tick};

/// Horizontal forward and right unit vectors for a yaw in degrees.
///
/// Yaw 0 looks down -Z; positive yaw turns left (counter-clockwise seen from
/// above).
pub fn heading_vectors(yaw_deg: f32) -> (Vec3, Vec3) {
    let (s, c) = yaw_deg.to_radians().sin_cos();
    let forward = Vec3::new(-s, 0.0, -c);
    let right = Vec3::new(c, 0.0, -s);
    (forward, right)
}

#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub yaw: f32,   // degrees, [0, 360)
    pub pitch: f32, // degrees, positive looks down
    view: Mat4,
    eye_height: f32,
    sensitivity: f32,
    pitch_limit: f32,
}

impl Camera {
    pub fn new(cfg: &CameraConfig) -> Self {
        let mut cam = Self {
            position: Vec3::new(0.0, cfg.eye_height, 0.0),
            yaw: 0.0,
            pitch: 0.0,
            view: Mat4::IDENTITY,
            eye_height: cfg.eye_height,
            sensitivity: cfg.mouse_sensitivity,
            pitch_limit: cfg.pitch_limit,
        };
        cam.rebuild_view();
        cam
    }

    /// Moves the eye above the player and rebuilds the view transform.
    pub fn update(&mut self, player_position: Vec3) {
        self.position = player_position + Vec3::Y * self.eye_height;
        self.rebuild_view();
    }

    pub fn handle_mouse_movement(&mut self, dx: f32, dy: f32) {
        let mut yaw = (self.yaw - dx * self.sensitivity).rem_euclid(360.0);
        // rem_euclid rounds tiny negatives up to exactly 360
        if yaw >= 360.0 {
            yaw -= 360.0;
        }
        self.yaw = yaw;
        self.pitch = (self.pitch + dy * self.sensitivity).clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Pitch, then yaw, then translation by the negated eye position.
    fn rebuild_view(&mut self) {
        self.view = Mat4::from_rotation_x(self.pitch.to_radians())
            * Mat4::from_rotation_y(-self.yaw.to_radians())
            * Mat4::from_translation(-self.position);
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    /// World-space look direction including pitch.
    pub fn look_direction(&self) -> Vec3 {
        self.view().inverse().transform_vector3(Vec3::NEG_Z).normalize_or_zero()
    }

    pub fn look_target(&self) -> Vec3 {
        self.position + self.look_direction()
    }
}

impl Entity for Camera {
    type Output = ();

    fn update(&mut self, tick: &Tick<'_>) {
        Camera::update(self, tick.player_position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    #[test]
    fn mouse_keeps_yaw_and_pitch_in_range() {
        let mut cam = Camera::new(&CameraConfig::default());
        let deltas = [
            (0.0, 0.0),
            (1.0, 1.0),
            (-1.0, -1.0),
            (2400.0, 900.0),
            (-2400.0, -900.0),
            (1e-6, -1e-6),
            (-1e-6, 1e-6),
            (123.4, -56.7),
            (-99999.0, 99999.0),
        ];
        for _ in 0..50 {
            for &(dx, dy) in &deltas {
                cam.handle_mouse_movement(dx, dy);
                assert!((0.0..360.0).contains(&cam.yaw), "yaw {}", cam.yaw);
                assert!((-89.0..=89.0).contains(&cam.pitch), "pitch {}", cam.pitch);
            }
        }
    }

    #[test]
    fn yaw_wraps_below_zero() {
        let mut cam = Camera::new(&CameraConfig::default());
        cam.handle_mouse_movement(10.0, 0.0); // yaw -= 1.5
        assert!((cam.yaw - 358.5).abs() < 1e-4);
    }

    #[test]
    fn update_places_eye_above_player() {
        let mut cam = Camera::new(&CameraConfig::default());
        cam.update(Vec3::new(3.0, 0.5, -2.0));
        assert!(close(cam.position, Vec3::new(3.0, 2.2, -2.0)));
        // the eye maps to the view-space origin
        assert!(close(cam.view().transform_point3(cam.position), Vec3::ZERO));
    }

    #[test]
    fn view_looks_along_heading_when_level() {
        let mut cam = Camera::new(&CameraConfig::default());
        for yaw in [0.0, 37.0, 90.0, 180.0, 271.5] {
            cam.yaw = yaw;
            cam.pitch = 0.0;
            cam.update(Vec3::ZERO);
            assert!(close(cam.look_direction(), heading_vectors(yaw).0), "yaw {yaw}");
        }
    }

    #[test]
    fn positive_pitch_looks_down() {
        let mut cam = Camera::new(&CameraConfig::default());
        cam.handle_mouse_movement(0.0, 100.0);
        cam.update(Vec3::ZERO);
        assert!(cam.look_direction().y < 0.0);
        assert!(cam.look_target().y < cam.position.y);
    }

    #[test]
    fn right_is_clockwise_from_forward() {
        let (f, r) = heading_vectors(0.0);
        assert!(close(f, Vec3::NEG_Z));
        assert!(close(r, Vec3::X));
        // forward x up == right in a right-handed frame
        assert!(close(f.cross(Vec3::Y), r));
    }
}
