use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::{DirectoryAccessError, StorageError};

use super::{DirectoryEntry, FileRecord, list_directory};

/// The deduplicated, insertion-ordered set of previously played files,
/// mirrored to a line-oriented record file.
///
/// Each line of the file is `relative,absolute,file_name`. Only the first
/// field is read back; the others are recomputed on load.
#[derive(Debug)]
pub struct LibraryStore {
    save_path: PathBuf,
    entries: Vec<FileRecord>,
}

impl LibraryStore {
    /// Open the library stored at `directory/file_name`, creating both if absent.
    ///
    /// Lines pointing at files that no longer exist are dropped, and the file
    /// is rewritten without them.
    pub fn load(directory: &Path, file_name: &str) -> Result<Self, StorageError> {
        fs::create_dir_all(directory).map_err(|source| StorageError::CreateDir {
            path: directory.to_path_buf(),
            source,
        })?;

        let mut store = Self {
            save_path: directory.join(file_name),
            entries: Vec::new(),
        };

        if !store.save_path.exists() {
            store.write_all()?;
            info!(path = %store.save_path.display(), "created empty library");
            return Ok(store);
        }

        let contents =
            fs::read_to_string(&store.save_path).map_err(|source| StorageError::Read {
                path: store.save_path.clone(),
                source,
            })?;

        let mut dropped = 0usize;
        for (lineno, line) in contents.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }

            let Some(relative) = parse_line(line) else {
                warn!(line = lineno + 1, content = line, "skipping malformed library line");
                dropped += 1;
                continue;
            };

            if !Path::new(relative).exists() {
                debug!(path = relative, "dropping library entry for missing file");
                dropped += 1;
                continue;
            }

            if !store.insert(FileRecord::new(relative)) {
                dropped += 1;
            }
        }

        if dropped > 0 {
            store.write_all()?;
        }

        info!(
            path = %store.save_path.display(),
            kept = store.entries.len(),
            dropped,
            "loaded library"
        );
        Ok(store)
    }

    /// Remember `path` as played.
    ///
    /// Returns `Ok(true)` when the path was new and the file was rewritten, and
    /// `Ok(false)` when a record with the same absolute path already existed.
    /// The file itself does not have to exist.
    pub fn register(&mut self, path: impl AsRef<Path>) -> Result<bool, StorageError> {
        let record = FileRecord::new(path);
        if !self.insert(record) {
            return Ok(false);
        }

        if let Some(added) = self.entries.last() {
            info!(path = %added.absolute_path().display(), "registered song");
        }
        self.write_all()?;
        Ok(true)
    }

    /// All records in the order they were first registered.
    pub fn list(&self) -> &[FileRecord] {
        &self.entries
    }

    /// Children of `path`, with the `..` entry last.
    pub fn directory_entries(
        &self,
        path: &Path,
    ) -> Result<Vec<DirectoryEntry>, DirectoryAccessError> {
        list_directory(path)
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }

    fn insert(&mut self, record: FileRecord) -> bool {
        if self
            .entries
            .iter()
            .any(|e| e.absolute_path() == record.absolute_path())
        {
            return false;
        }
        self.entries.push(record);
        true
    }

    fn write_all(&self) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: self.save_path.clone(),
            source,
        };

        let file = File::create(&self.save_path).map_err(write_err)?;
        let mut out = BufWriter::new(file);
        for record in &self.entries {
            writeln!(out, "{}", record.to_line()).map_err(write_err)?;
        }
        out.flush().map_err(write_err)
    }
}

/// Extract the relative path from a record line, or `None` when the line
/// has no comma or an empty first field.
fn parse_line(line: &str) -> Option<&str> {
    let (relative, _) = line.split_once(',')?;
    if relative.is_empty() {
        None
    } else {
        Some(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::parse_line;

    #[test]
    fn parse_line_takes_first_field() {
        assert_eq!(parse_line("songs/a.wav,/abs/songs/a.wav,a.wav"), Some("songs/a.wav"));
        assert_eq!(parse_line("a.wav,"), Some("a.wav"));
    }

    #[test]
    fn parse_line_rejects_lines_without_a_relative_path() {
        assert_eq!(parse_line("no-comma-here"), None);
        assert_eq!(parse_line(",/abs/a.wav,a.wav"), None);
    }
}
