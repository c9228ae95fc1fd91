//! Rendering on top of raylib.
//!
//! Re-exports:
//! - `textures`: enemy texture loading
//! - `floor`: checkered floor grid
//! - `sprites`: enemy billboard (rlgl quad, scoped blend/texture state)
//! - `hud`: score and game-over text

pub mod textures;
pub mod floor;
pub mod sprites;
pub mod hud;

use glam::Vec3;
use raylib::prelude::*;

use crate::config::GameConfig;
use crate::core::camera::Camera;
use crate::core::world::World;
use floor::FloorGrid;
use hud::Hud;
use sprites::EnemySprite;
use textures::TextureManager;

pub type Mode3D<'a, 'b> = RaylibMode3D<'a, RaylibDrawHandle<'b>>;

/// Something that draws itself onto a raylib surface (`Mode3D` for world
/// geometry, `RaylibDrawHandle` for overlays).
pub trait Render<Surface> {
    fn render(&self, d: &mut Surface);
}

#[inline]
fn to_rl(v: Vec3) -> Vector3 {
    Vector3::new(v.x, v.y, v.z)
}

fn unit_channel(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

pub fn unit_rgb(rgb: [f32; 3]) -> Color {
    Color::new(unit_channel(rgb[0]), unit_channel(rgb[1]), unit_channel(rgb[2]), 255)
}

pub fn unit_gray(c: f32) -> Color {
    unit_rgb([c, c, c])
}

/// Hands the first-person view to raylib as an eye/target/up camera.
pub fn scene_camera(camera: &Camera, fovy: f32) -> Camera3D {
    Camera3D::perspective(
        to_rl(camera.position),
        to_rl(camera.look_target()),
        Vector3::new(0.0, 1.0, 0.0),
        fovy,
    )
}

pub fn draw_frame(d: &mut RaylibDrawHandle<'_>, world: &World, textures: &TextureManager, cfg: &GameConfig) {
    d.clear_background(unit_rgb(cfg.window.sky));
    {
        let mut d3 = d.begin_mode3D(scene_camera(&world.camera, cfg.window.fovy));
        FloorGrid::new(&cfg.world).render(&mut d3);
        EnemySprite {
            enemy: &world.enemy,
            texture: textures.enemy(),
            camera_position: world.camera.position,
        }
        .render(&mut d3);
    }
    Hud {
        score: world.score(),
        game_over: world.is_game_over(),
        screen_w: cfg.window.width,
        screen_h: cfg.window.height,
    }
    .render(d);
}
