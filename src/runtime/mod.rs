use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info, warn};

use crate::audio::RodioPlayer;
use crate::error::AppError;
use crate::library::LibraryStore;
use crate::session::NavigationSession;

mod cli;
mod event_loop;
mod logging;
mod settings;
mod startup;

pub fn run() -> Result<(), AppError> {
    let args = cli::Args::parse();

    let mut settings = settings::load_settings(args.config.as_deref());
    if let Some(dir) = args.library_dir {
        settings.library.directory = dir;
    }

    let _log_guard = match logging::init_logging(&settings.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("cli-audio: logging disabled: {e}");
            None
        }
    };
    info!(version = env!("CARGO_PKG_VERSION"), "cli-audio starting");

    if let Err(e) = startup::check_screen_size(crossterm::terminal::size()?) {
        warn!(width = e.width, height = e.height, "terminal too small");
        return Err(e.into());
    }

    let library = LibraryStore::load(&settings.library.directory, &settings.library.file_name)?;
    debug!(path = %library.save_path().display(), "library file");
    let player = RodioPlayer::new(settings.audio.clone(), settings.ui.clone())?;
    let mut session = NavigationSession::new(library, player);

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result: Result<(), AppError> = (|| {
        if let Some(path) = &args.path {
            session.choose_song(path);
        }
        event_loop::run(&mut terminal, &settings, &mut session)
    })();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    info!("cli-audio exiting");
    run_result
}
