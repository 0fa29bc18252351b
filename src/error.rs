//! Error types shared across the library, session and runtime layers.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Raised by a `Player` when a file cannot be loaded for playback.
#[derive(Debug, Error)]
pub enum PlaybackError {
    #[error("could not open file: {0}")]
    Open(#[from] io::Error),

    #[error("unsupported or corrupt audio: {0}")]
    Decode(String),

    #[error("no audio output device: {0}")]
    Device(String),
}

/// Raised when a directory cannot be listed.
#[derive(Debug, Error)]
pub enum DirectoryAccessError {
    #[error("{} does not exist", path.display())]
    NotFound { path: PathBuf },

    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The terminal is smaller than the UI supports.
#[derive(Debug, Error)]
#[error("Screen size too small, the minimum dimensions supported are {min_width}x{min_height}")]
pub struct ScreenSizeError {
    pub width: u16,
    pub height: u16,
    pub min_width: u16,
    pub min_height: u16,
}

/// Failures touching the persisted library file.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("could not create library directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read library file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write library file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Top-level error returned by `runtime::run`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    ScreenSize(#[from] ScreenSizeError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
}
