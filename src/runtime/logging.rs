use std::fs;
use std::io;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::config::LoggingSettings;

pub const LOG_FILE_NAME: &str = "cli-audio.log";

/// Send `tracing` output to `<directory>/cli-audio.log`.
///
/// The terminal belongs to the TUI, so nothing is written to stdout/stderr.
/// Keep the returned guard alive until exit so buffered lines are flushed.
pub fn init_logging(settings: &LoggingSettings) -> io::Result<Option<WorkerGuard>> {
    if !settings.enabled {
        return Ok(None);
    }

    fs::create_dir_all(&settings.directory)?;
    let file_appender = tracing_appender::rolling::never(&settings.directory, LOG_FILE_NAME);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.filter));

    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(filter)
        .finish();

    tracing::subscriber::set_global_default(subscriber).map_err(io::Error::other)?;
    Ok(Some(guard))
}
