//! Startup errors, fatal: `main` logs them and exits. At runtime only a
//! proximity loop start can fail, and that is retried by the audio manager.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("no audio output device: {0}")]
    AudioStream(#[from] rodio::StreamError),
    #[error("cannot create audio sink: {0}")]
    AudioSink(#[from] rodio::PlayError),
    #[error("cannot read asset {path}: {source}")]
    AssetIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode audio {path}: {source}")]
    AudioDecode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
    #[error("cannot load texture {path}: {reason}")]
    Texture { path: PathBuf, reason: String },
}

pub type Result<T> = std::result::Result<T, GameError>;
