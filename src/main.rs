// main.rs
mod app;
mod audio_manager;
mod config;
mod core;
mod error;
mod render;

use log::{error, info};

use config::GameConfig;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    info!("Logger initialized");

    // missing assets or devices are fatal
    let ctx = app::init(GameConfig::default()).map_err(|e| {
        error!("Startup failed: {e}");
        e
    })?;

    app::run(ctx);
    Ok(())
}
