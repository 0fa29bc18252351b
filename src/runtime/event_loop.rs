use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::audio::Player;
use crate::config;
use crate::error::AppError;
use crate::session::NavigationSession;
use crate::ui;

/// Main terminal event loop: draw, then block until the next key press and
/// hand it to the session. Returns `Ok(())` when the session asks to quit.
pub fn run<P: Player>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    session: &mut NavigationSession<P>,
) -> Result<(), AppError> {
    loop {
        terminal.draw(|f| ui::draw(f, session, &settings.ui))?;

        // Resize and focus events fall through to a redraw.
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if session.handle_key(key.code) {
                return Ok(());
            }
        }
    }
}
