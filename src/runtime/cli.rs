use std::path::PathBuf;

use clap::Parser;

/// Browse, play and remember audio files from the terminal.
#[derive(Debug, Parser)]
#[command(name = "cli-audio", version, about)]
pub struct Args {
    /// File to play or directory to browse on launch.
    pub path: Option<PathBuf>,

    /// Directory holding the library file (overrides `library.directory`).
    #[arg(long, value_name = "DIR")]
    pub library_dir: Option<PathBuf>,

    /// Config file to read instead of the default location.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}
