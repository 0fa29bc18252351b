//! Navigation state: which view is open, what it lists, and where the
//! highlight sits.
//!
//! Every way of picking a song (launch argument, library, directory browser,
//! typed path) ends in `NavigationSession::choose_song`.

use std::path::Path;

use crossterm::event::KeyCode;
use tracing::{error, info, warn};

use crate::audio::{PlaybackState, Player};
use crate::library::{DirectoryEntry, FileRecord, LibraryStore};

use super::Traversal;

/// The view the session is in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Main,
    DirectoryBrowse,
    LibraryBrowse,
    PathPrompt,
}

/// Contents of the list the highlight moves over.
#[derive(Debug, Default)]
pub enum Listing {
    #[default]
    Empty,
    Directory {
        traversal: Traversal,
        entries: Vec<DirectoryEntry>,
    },
    Library(Vec<FileRecord>),
}

impl Listing {
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Directory { entries, .. } => entries.len(),
            Self::Library(records) => records.len(),
        }
    }

    /// Display strings; directories carry a ` >` suffix.
    pub fn labels(&self) -> Vec<String> {
        match self {
            Self::Empty => Vec::new(),
            Self::Directory { entries, .. } => entries
                .iter()
                .map(|e| {
                    if e.is_directory {
                        format!("{} >", e.name)
                    } else {
                        e.name.clone()
                    }
                })
                .collect(),
            Self::Library(records) => records.iter().map(|r| r.file_name().to_string()).collect(),
        }
    }
}

/// The interactive state machine driving the library and the player.
pub struct NavigationSession<P: Player> {
    library: LibraryStore,
    player: P,
    mode: Mode,
    selected: usize,
    listing: Listing,
    prompt: String,
    status: String,
}

impl<P: Player> NavigationSession<P> {
    pub fn new(library: LibraryStore, player: P) -> Self {
        Self {
            library,
            player,
            mode: Mode::Main,
            selected: 0,
            listing: Listing::Empty,
            prompt: String::new(),
            status: String::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn listing(&self) -> &Listing {
        &self.listing
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[cfg(test)]
    pub fn library(&self) -> &LibraryStore {
        &self.library
    }

    #[cfg(test)]
    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.player.state()
    }

    /// Directory shown by the browser, when it is open.
    pub fn current_directory(&self) -> Option<&Path> {
        match &self.listing {
            Listing::Directory { traversal, .. } => Some(traversal.current()),
            _ => None,
        }
    }

    /// Apply one key press. Returns `true` when the session should end.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.mode {
            Mode::Main => return self.handle_main_key(key),
            Mode::LibraryBrowse => self.handle_library_key(key),
            Mode::DirectoryBrowse => self.handle_directory_key(key),
            Mode::PathPrompt => self.handle_prompt_key(key),
        }
        false
    }

    fn handle_main_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('c') => {
                self.prompt.clear();
                self.mode = Mode::PathPrompt;
            }
            KeyCode::Char('p') => self.player.toggle_pause(),
            KeyCode::Char('l') => {
                self.listing = Listing::Library(self.library.list().to_vec());
                self.selected = 0;
                self.mode = Mode::LibraryBrowse;
            }
            KeyCode::Esc => {
                self.player.stop();
                info!("quit requested");
                return true;
            }
            _ => {}
        }
        false
    }

    fn handle_library_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Enter => {
                let picked = match &self.listing {
                    Listing::Library(records) => records
                        .get(self.selected)
                        .map(|r| r.relative_path().to_path_buf()),
                    _ => None,
                };
                if let Some(path) = picked {
                    self.back_to_main();
                    self.choose_song(path);
                }
            }
            KeyCode::Esc => self.back_to_main(),
            _ => {}
        }
    }

    fn handle_directory_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Enter => self.open_selected_entry(),
            KeyCode::Esc => self.back_to_main(),
            _ => {}
        }
    }

    fn handle_prompt_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char(c) if !c.is_control() => self.prompt.push(c),
            KeyCode::Backspace => {
                self.prompt.pop();
            }
            KeyCode::Enter => {
                let typed = std::mem::take(&mut self.prompt);
                self.mode = Mode::Main;
                if !typed.is_empty() {
                    self.choose_song(typed);
                }
            }
            KeyCode::Esc => {
                self.prompt.clear();
                self.mode = Mode::Main;
            }
            _ => {}
        }
    }

    fn open_selected_entry(&mut self) {
        let Listing::Directory { traversal, entries } = &self.listing else {
            return;
        };
        let Some(entry) = entries.get(self.selected) else {
            return;
        };

        if !entry.is_directory {
            let path = traversal.file_path(&entry.name);
            self.back_to_main();
            self.choose_song(path);
            return;
        }

        let next = traversal.step(&entry.name).and_then(|next| {
            let listed = self.library.directory_entries(next.current())?;
            Ok((next, listed))
        });
        match next {
            Ok((traversal, entries)) => {
                self.listing = Listing::Directory { traversal, entries };
                self.selected = 0;
            }
            Err(e) => {
                warn!(entry = %entry.name, error = %e, "cannot enter directory");
                self.status = format!("Cannot open {}: {e}", entry.name);
            }
        }
    }

    /// Route a picked path to the browser or the player.
    ///
    /// Directories open the browser. Files stop the current song, start the
    /// new one and are registered in the library only if playback started.
    pub fn choose_song(&mut self, path: impl AsRef<Path>) {
        let path = path.as_ref();

        if path.is_dir() {
            let opened = Traversal::start(path).and_then(|traversal| {
                let entries = self.library.directory_entries(traversal.current())?;
                Ok((traversal, entries))
            });
            match opened {
                Ok((traversal, entries)) => {
                    self.player.stop();
                    self.listing = Listing::Directory { traversal, entries };
                    self.selected = 0;
                    self.mode = Mode::DirectoryBrowse;
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "cannot open directory");
                    self.back_to_main();
                    self.status = format!("Cannot open {}: {e}", path.display());
                }
            }
            return;
        }

        self.player.stop();
        self.back_to_main();

        match self.player.play(path) {
            Ok(()) => {
                let song = self.player.current_song().unwrap_or_else(|| file_label(path));
                self.status = format!("Now playing: {song}");
                if let Err(e) = self.library.register(path) {
                    error!(path = %path.display(), error = %e, "could not save library");
                    self.status.push_str(&format!(" (library not saved: {e})"));
                }
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "playback failed");
                self.status = format!("Error loading {}: {e}", file_label(path));
            }
        }
    }

    fn back_to_main(&mut self) {
        self.listing = Listing::Empty;
        self.selected = 0;
        self.mode = Mode::Main;
    }

    fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn move_down(&mut self) {
        let last = self.listing.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(last);
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
