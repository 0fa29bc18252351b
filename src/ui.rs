//! UI rendering helpers for the terminal user interface.
//!
//! This module paints a `NavigationSession` with `ratatui`: the main menu,
//! the status line and whichever popup the current mode needs.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph},
};

use crate::audio::Player;
use crate::config::UiSettings;
use crate::session::{Mode, NavigationSession};

const MENU: [&str; 5] = [
    "c - Change current song",
    "p - Play/Pause",
    "l - Library",
    "",
    "ESC - Quit",
];

const POPUP_WIDTH: u16 = 40;
const LIST_POPUP_HEIGHT: u16 = 15;
const PROMPT_POPUP_HEIGHT: u16 = 3;

/// Compute a rectangle of the given size anchored at the right half of `r`,
/// vertically centered, constrained to `r`.
fn popup_rect(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10).min(r.width);
    height = height.min(r.height.saturating_sub(2)).max(3).min(r.height);

    let x = r.x + (r.width / 2).min(r.width.saturating_sub(width));
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Pick the slice of a `total`-row list to draw in `height` rows so that
/// `selected` stays visible, centered when possible.
///
/// Returns `(start, end, selected_row_in_window)`.
fn visible_window(total: usize, height: usize, selected: usize) -> (usize, usize, usize) {
    if total <= height || height == 0 {
        return (0, total, selected);
    }
    let half = height / 2;
    let mut start = selected.saturating_sub(half);
    if start + height > total {
        start = total - height;
    }
    (start, start + height, selected - start)
}

fn popup_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .padding(Padding {
            left: 1,
            right: 1,
            top: 0,
            bottom: 0,
        })
}

/// Render the entire UI into the provided `frame`.
pub fn draw<P: Player>(frame: &mut Frame, session: &NavigationSession<P>, ui_settings: &UiSettings) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", ui_settings.header_text))
        .title_alignment(Alignment::Left)
        .title_style(Style::default().add_modifier(Modifier::REVERSED));
    let area = outer.inner(frame.area());
    frame.render_widget(outer, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(MENU.len() as u16 + 1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let state = Paragraph::new(format!("[{}]", session.playback_state().label()))
        .alignment(Alignment::Right);
    frame.render_widget(state, chunks[0]);

    let menu = Paragraph::new(MENU.join("\n")).block(Block::default().padding(Padding {
        left: 9,
        right: 0,
        top: 1,
        bottom: 0,
    }));
    frame.render_widget(menu, chunks[1]);

    let status = Paragraph::new(session.status()).block(Block::default().padding(Padding {
        left: 9,
        right: 0,
        top: 0,
        bottom: 0,
    }));
    frame.render_widget(status, chunks[3]);

    match session.mode() {
        Mode::Main => {}
        Mode::LibraryBrowse => draw_list(frame, session, " Music Library ".to_string(), area),
        Mode::DirectoryBrowse => {
            let title = match session.current_directory() {
                Some(dir) => format!(" Choose a file: {} ", dir.display()),
                None => " Choose a file ".to_string(),
            };
            draw_list(frame, session, title, area);
        }
        Mode::PathPrompt => draw_prompt(frame, session, area),
    }
}

fn draw_list<P: Player>(frame: &mut Frame, session: &NavigationSession<P>, title: String, area: Rect) {
    let popup = popup_rect(POPUP_WIDTH, LIST_POPUP_HEIGHT, area);
    frame.render_widget(Clear, popup);

    // Only build ListItems for the rows that fit.
    let labels = session.listing().labels();
    let height = popup.height.saturating_sub(2) as usize;
    let (start, end, selected_in_window) =
        visible_window(labels.len(), height, session.selected());

    let items: Vec<ListItem> = labels[start..end]
        .iter()
        .map(|l| ListItem::new(l.as_str()))
        .collect();

    let list = List::new(items)
        .block(popup_block(title))
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = ratatui::widgets::ListState::default();
    if !labels.is_empty() {
        state.select(Some(selected_in_window));
    }
    frame.render_stateful_widget(list, popup, &mut state);
}

fn draw_prompt<P: Player>(frame: &mut Frame, session: &NavigationSession<P>, area: Rect) {
    let popup = popup_rect(POPUP_WIDTH, PROMPT_POPUP_HEIGHT, area);
    frame.render_widget(Clear, popup);

    let input = Paragraph::new(format!("{}_", session.prompt()))
        .block(popup_block(" What is the file path? ".to_string()));
    frame.render_widget(input, popup);
}
