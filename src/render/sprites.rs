//! Enemy billboard: a textured quad turned around +Y to face the camera.
//!
//! Drawn through rlgl immediate mode so the quad follows the enemy's own
//! facing angle instead of the camera plane. Blending and the texture binding
//! are held by guards for the duration of the draw only.
use glam::{Quat, Vec3};
use raylib::ffi;
use raylib::prelude::*;

use crate::core::enemy::Enemy;
use crate::render::{Mode3D, Render};

/// Corners in quad space as (u, v, x, y), counter-clockwise seen from +Z.
/// Image rows run top to bottom, so the bottom edge samples v = 1.
pub const QUAD: [(f32, f32, f32, f32); 4] = [
    (0.0, 1.0, -1.0, -1.0),
    (1.0, 1.0, 1.0, -1.0),
    (1.0, 0.0, 1.0, 1.0),
    (0.0, 0.0, -1.0, 1.0),
];

/// Binds a texture to the rlgl batch and unbinds it on drop.
struct BoundTexture;

impl BoundTexture {
    fn bind(texture: &Texture2D) -> Self {
        let raw: &ffi::Texture2D = texture.as_ref();
        unsafe { ffi::rlSetTexture(raw.id) };
        BoundTexture
    }
}

impl Drop for BoundTexture {
    fn drop(&mut self) {
        unsafe { ffi::rlSetTexture(0) };
    }
}

/// World-space corners of the enemy quad, in `QUAD` order, turned by the
/// billboard yaw.
pub fn billboard_corners(enemy: &Enemy, camera_position: Vec3) -> [Vec3; 4] {
    let rot = Quat::from_rotation_y(enemy.billboard_yaw(camera_position).to_radians());
    let center = enemy.billboard_center();
    let half = enemy.size / 2.0;
    QUAD.map(|(_, _, x, y)| center + rot * Vec3::new(x * half, y * half, 0.0))
}

pub struct EnemySprite<'a> {
    pub enemy: &'a Enemy,
    pub texture: &'a Texture2D,
    pub camera_position: Vec3,
}

impl<'a, 'b> Render<Mode3D<'a, 'b>> for EnemySprite<'_> {
    fn render(&self, d: &mut Mode3D<'a, 'b>) {
        let corners = billboard_corners(self.enemy, self.camera_position);
        let normal = (corners[1] - corners[0]).cross(corners[2] - corners[1]).normalize_or_zero();

        // raylib already defaults to alpha blending; the guard pins it for this draw
        let _blend = d.begin_blend_mode(BlendMode::BLEND_ALPHA);
        let _texture = BoundTexture::bind(self.texture);
        unsafe {
            ffi::rlBegin(ffi::RL_QUADS as i32);
            ffi::rlColor4ub(255, 255, 255, 255);
            ffi::rlNormal3f(normal.x, normal.y, normal.z);
            for ((u, v, _, _), p) in QUAD.iter().zip(corners) {
                ffi::rlTexCoord2f(*u, *v);
                ffi::rlVertex3f(p.x, p.y, p.z);
            }
            ffi::rlEnd();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnemyConfig;

    #[test]
    fn quad_normal_points_at_camera() {
        let enemy = Enemy::new(&EnemyConfig::default());
        for camera in [Vec3::new(0.0, 1.7, 0.0), Vec3::new(20.0, 1.7, 5.0), Vec3::new(5.0, 1.7, -9.0)] {
            let c = billboard_corners(&enemy, camera);
            let normal = (c[1] - c[0]).cross(c[2] - c[1]).normalize();
            let to_camera = camera - enemy.position;
            let to_camera = Vec3::new(to_camera.x, 0.0, to_camera.z).normalize();
            assert!((normal - to_camera).length() < 1e-4, "camera {camera}");
        }
    }

    #[test]
    fn quad_stands_on_the_ground() {
        let enemy = Enemy::new(&EnemyConfig::default());
        let c = billboard_corners(&enemy, Vec3::ZERO);
        let bottom = c.iter().map(|p| p.y).fold(f32::MAX, f32::min);
        let top = c.iter().map(|p| p.y).fold(f32::MIN, f32::max);
        assert!(bottom.abs() < 1e-5);
        assert!((top - enemy.size).abs() < 1e-5);
    }

    #[test]
    fn quad_is_centred_on_the_enemy() {
        let enemy = Enemy::new(&EnemyConfig::default());
        let c = billboard_corners(&enemy, Vec3::new(-3.0, 1.7, 2.0));
        let mid = (c[0] + c[1] + c[2] + c[3]) / 4.0;
        assert!((mid - enemy.billboard_center()).length() < 1e-5);
    }
}
