use std::path::Path;

use log::info;
use raylib::ffi;
use raylib::prelude::*;

use crate::config::AssetConfig;
use crate::error::{GameError, Result};

/// GPU textures, loaded once in `init` and dropped at exit.
pub struct TextureManager {
    enemy: Texture2D,
}

impl TextureManager {
    pub fn new(rl: &mut RaylibHandle, thread: &RaylibThread, assets: &AssetConfig) -> Result<Self> {
        let path = &assets.enemy_texture;
        if !Path::new(path).is_file() {
            return Err(GameError::Texture { path: path.into(), reason: "file not found".to_string() });
        }
        let enemy = rl
            .load_texture(thread, path)
            .map_err(|e| GameError::Texture { path: path.into(), reason: e.to_string() })?;
        let raw: &ffi::Texture2D = enemy.as_ref();
        info!("loaded enemy texture {path} ({}x{})", raw.width, raw.height);
        Ok(Self { enemy })
    }

    pub fn enemy(&self) -> &Texture2D {
        &self.enemy
    }
}
