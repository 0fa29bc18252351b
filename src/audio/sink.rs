//! Utilities for turning a path into a playing `rodio` sink.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use rodio::{Decoder, OutputStream, Sink};

use crate::error::PlaybackError;

/// Open and decode `path`. Fails for missing files and for anything rodio
/// cannot decode.
pub(super) fn open_source(path: &Path) -> Result<Decoder<BufReader<File>>, PlaybackError> {
    let file = File::open(path)?;
    Decoder::new(BufReader::new(file)).map_err(|e| PlaybackError::Decode(e.to_string()))
}

/// Create a paused `Sink` on `stream` holding the decoded contents of `path`.
pub(super) fn create_sink(
    stream: &OutputStream,
    path: &Path,
    volume: f32,
) -> Result<Sink, PlaybackError> {
    let source = open_source(path)?;

    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    Ok(sink)
}
