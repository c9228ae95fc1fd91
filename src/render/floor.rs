//! Checkered floor grid.
use raylib::prelude::*;

use crate::config::WorldConfig;
use crate::render::{Mode3D, Render, unit_gray};

/// A square tile on the ground plane, given by its minimum corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub x: i32,
    pub z: i32,
    pub light: bool,
}

pub struct FloorGrid {
    half_extent: i32,
    tile: i32,
    light: Color,
    dark: Color,
}

impl FloorGrid {
    pub fn new(cfg: &WorldConfig) -> Self {
        Self {
            half_extent: cfg.floor_half_extent,
            tile: cfg.floor_tile.max(1),
            light: unit_gray(0.8),
            dark: unit_gray(0.6),
        }
    }

    /// Tiles alternate light/dark in a checkerboard.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        let step = self.tile as usize;
        let period = self.tile * 2;
        (-self.half_extent..self.half_extent).step_by(step).flat_map(move |x| {
            (-self.half_extent..self.half_extent).step_by(step).map(move |z| Tile {
                x,
                z,
                light: (x + z).rem_euclid(period) == 0,
            })
        })
    }
}

impl<'a, 'b> Render<Mode3D<'a, 'b>> for FloorGrid {
    fn render(&self, d: &mut Mode3D<'a, 'b>) {
        let half = self.tile as f32 / 2.0;
        let size = Vector2::new(self.tile as f32, self.tile as f32);
        for t in self.tiles() {
            let center = Vector3::new(t.x as f32 + half, 0.0, t.z as f32 + half);
            d.draw_plane(center, size, if t.light { self.light } else { self.dark });
        }
    }
}
