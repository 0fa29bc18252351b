use std::path::{Path, PathBuf};

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, info};

use crate::config::{AudioSettings, UiSettings};
use crate::error::PlaybackError;
use crate::library::{TrackTags, display_from_fields};

use super::sink::create_sink;
use super::types::PlaybackState;

/// What the navigation session needs from an audio backend.
pub trait Player {
    /// Load and start `path`. Leaves the player stopped on error.
    fn play(&mut self, path: &Path) -> Result<(), PlaybackError>;
    fn stop(&mut self);
    /// Pause when playing, resume when paused; no-op when stopped.
    fn toggle_pause(&mut self);
    /// Display text of the loaded song, if any.
    fn current_song(&self) -> Option<String>;
    fn state(&self) -> PlaybackState;
}

struct Loaded {
    sink: Sink,
    path: PathBuf,
    title: String,
}

/// `Player` backed by the default rodio output device.
pub struct RodioPlayer {
    stream: OutputStream,
    current: Option<Loaded>,
    audio: AudioSettings,
    ui: UiSettings,
}

impl RodioPlayer {
    pub fn new(audio: AudioSettings, ui: UiSettings) -> Result<Self, PlaybackError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlaybackError::Device(e.to_string()))?;
        // rodio logs to stderr when the stream is dropped, which would land
        // on top of the restored terminal.
        stream.log_on_drop(false);

        Ok(Self {
            stream,
            current: None,
            audio,
            ui,
        })
    }
}

impl Player for RodioPlayer {
    fn play(&mut self, path: &Path) -> Result<(), PlaybackError> {
        self.stop();

        let sink = create_sink(&self.stream, path, self.audio.volume)?;
        let tags = TrackTags::read(path);
        let title = display_from_fields(
            path,
            &tags,
            &self.ui.now_playing_fields,
            &self.ui.now_playing_separator,
        );

        sink.play();
        info!(path = %path.display(), %title, "playback started");
        self.current = Some(Loaded {
            sink,
            path: path.to_path_buf(),
            title,
        });
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(loaded) = self.current.take() {
            debug!(path = %loaded.path.display(), "playback stopped");
            loaded.sink.stop();
        }
    }

    fn toggle_pause(&mut self) {
        if let Some(loaded) = &self.current {
            if loaded.sink.is_paused() {
                loaded.sink.play();
            } else {
                loaded.sink.pause();
            }
        }
    }

    fn current_song(&self) -> Option<String> {
        self.current.as_ref().map(|l| l.title.clone())
    }

    fn state(&self) -> PlaybackState {
        match &self.current {
            None => PlaybackState::Stopped,
            Some(l) if l.sink.empty() => PlaybackState::Stopped,
            Some(l) if l.sink.is_paused() => PlaybackState::Paused,
            Some(_) => PlaybackState::Playing,
        }
    }
}
