//! Window/audio setup and the frame loop.
use std::thread;
use std::time::Instant;

use log::info;
use raylib::prelude::*;

use crate::audio_manager::AudioManager;
use crate::config::GameConfig;
use crate::core::process_events::process_events;
use crate::core::world::World;
use crate::error::Result;
use crate::render::{draw_frame, textures::TextureManager};

/// Everything acquired at startup and held until exit.
///
/// Fields drop in order, so GPU textures go before the window closes.
pub struct GameContext {
    pub textures: TextureManager,
    pub audio: AudioManager,
    pub rl: RaylibHandle,
    pub raylib_thread: RaylibThread,
    pub config: GameConfig,
}

pub fn init(config: GameConfig) -> Result<GameContext> {
    let (mut rl, raylib_thread) = raylib::init()
        .size(config.window.width, config.window.height)
        .title(&config.window.title)
        .build();
    info!("window {}x{} \"{}\"", config.window.width, config.window.height, config.window.title);

    // hidden + locked cursor for mouse look; Escape closes the window
    rl.disable_cursor();
    rl.set_exit_key(Some(KeyboardKey::KEY_ESCAPE));

    let textures = TextureManager::new(&mut rl, &raylib_thread, &config.assets)?;
    let audio = AudioManager::new(&config.assets)?;

    Ok(GameContext { textures, audio, rl, raylib_thread, config })
}

pub fn run(ctx: GameContext) {
    let GameContext { textures, mut audio, mut rl, raylib_thread, config } = ctx;
    let mut world = World::new(&config, Instant::now());

    while !rl.window_should_close() {
        let input = process_events(&rl);
        world.frame(&input, Instant::now(), &mut audio);

        {
            let mut d = rl.begin_drawing(&raylib_thread);
            draw_frame(&mut d, &world, &textures, &config);
        }

        thread::sleep(config.world.frame_delay);
    }

    info!("quit with score {}", world.score());
    // unload while the GL context still exists
    drop(textures);
}
