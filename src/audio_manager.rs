use std::{fs::File, io::Cursor, io::Read, path::Path, path::PathBuf, sync::Arc};

use log::{debug, info, warn};
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

use crate::config::AssetConfig;
use crate::core::enemy::ProximityAudio;
use crate::error::{GameError, Result};

fn load_bytes(path: &Path) -> Result<Vec<u8>> {
    let read = || -> std::io::Result<Vec<u8>> {
        let mut f = File::open(path)?;
        let mut buf = Vec::new();
        f.read_to_end(&mut buf)?;
        Ok(buf)
    };
    read().map_err(|source| GameError::AssetIo { path: path.to_path_buf(), source })
}

fn open_loop(handle: &OutputStreamHandle, clip: &[u8], path: &Path, volume: f32) -> Result<Sink> {
    let dec = Decoder::new_looped(Cursor::new(clip.to_vec()))
        .map_err(|source| GameError::AudioDecode { path: path.to_path_buf(), source })?;
    let sink = Sink::try_new(handle)?;
    sink.append(dec);
    sink.set_volume(volume.clamp(0.0, 1.5));
    Ok(sink)
}

/// Holds at most one looping voice.
///
/// A failed open leaves the slot empty, so the next `start` tries again.
/// Only the first failure in a row is logged as a warning.
struct LoopSlot<V> {
    voice: Option<V>,
    failing: bool,
}

impl<V> LoopSlot<V> {
    fn new() -> Self {
        Self { voice: None, failing: false }
    }

    fn is_filled(&self) -> bool {
        self.voice.is_some()
    }

    /// Returns true if a new voice was opened.
    fn start(&mut self, open: impl FnOnce() -> Result<V>) -> bool {
        if self.voice.is_some() {
            return false;
        }
        match open() {
            Ok(v) => {
                self.voice = Some(v);
                self.failing = false;
                debug!("proximity loop started");
                true
            }
            Err(e) => {
                if self.failing {
                    debug!("proximity loop still not started: {e}");
                } else {
                    warn!("proximity loop not started: {e}");
                }
                self.failing = true;
                false
            }
        }
    }

    fn stop(&mut self) -> Option<V> {
        self.voice.take()
    }
}

/// Owns the output stream and the looping proximity clip.
///
/// The stream must outlive every sink, so it is kept even though nothing
/// reads it.
pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    proximity: Arc<Vec<u8>>,
    proximity_path: PathBuf,
    proximity_volume: f32,
    loop_sink: LoopSlot<Sink>,
}

impl AudioManager {
    pub fn new(assets: &AssetConfig) -> Result<Self> {
        let (_stream, handle) = OutputStream::try_default()?;

        let path = Path::new(&assets.proximity_sound);
        let bytes = load_bytes(path)?;
        // decode once so a bad file fails at startup
        Decoder::new(Cursor::new(bytes.clone()))
            .map_err(|source| GameError::AudioDecode { path: path.to_path_buf(), source })?;
        info!("loaded proximity sound {} ({} bytes)", path.display(), bytes.len());

        Ok(Self {
            _stream,
            handle,
            proximity: Arc::new(bytes),
            proximity_path: path.to_path_buf(),
            proximity_volume: assets.proximity_volume,
            loop_sink: LoopSlot::new(),
        })
    }
}

impl ProximityAudio for AudioManager {
    fn start_loop(&mut self) {
        self.loop_sink.start(|| {
            open_loop(&self.handle, &self.proximity, &self.proximity_path, self.proximity_volume)
        });
    }

    fn stop_loop(&mut self) {
        if let Some(s) = self.loop_sink.stop() {
            s.stop();
            debug!("proximity loop stopped");
        }
    }

    fn is_looping(&self) -> bool {
        self.loop_sink.is_filled()
    }
}
