use std::fs;
use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::error::DirectoryAccessError;

/// Name of the synthetic entry that leads to the parent directory.
pub const PARENT_ENTRY: &str = "..";

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub is_directory: bool,
}

impl DirectoryEntry {
    fn parent() -> Self {
        Self {
            name: PARENT_ENTRY.to_string(),
            is_directory: true,
        }
    }

    #[cfg(test)]
    pub fn is_parent(&self) -> bool {
        self.name == PARENT_ENTRY
    }
}

/// List the immediate children of `path` in filesystem order, followed by
/// the `..` entry.
///
/// Symlinks are followed when deciding whether a child is a directory; a
/// dangling link is listed as a plain file.
pub fn list_directory(path: &Path) -> Result<Vec<DirectoryEntry>, DirectoryAccessError> {
    let metadata = fs::metadata(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DirectoryAccessError::NotFound {
            path: path.to_path_buf(),
        },
        _ => DirectoryAccessError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })?;
    if !metadata.is_dir() {
        return Err(DirectoryAccessError::NotADirectory {
            path: path.to_path_buf(),
        });
    }

    let mut entries = Vec::new();
    for entry in WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        match entry {
            Ok(e) => entries.push(DirectoryEntry {
                name: e.file_name().to_string_lossy().into_owned(),
                is_directory: e.file_type().is_dir(),
            }),
            // A child we cannot stat (broken link, loop) is still shown.
            Err(err) if err.depth() > 0 => {
                if let Some(name) = err.path().and_then(Path::file_name) {
                    entries.push(DirectoryEntry {
                        name: name.to_string_lossy().into_owned(),
                        is_directory: false,
                    });
                }
            }
            Err(err) => {
                return Err(DirectoryAccessError::Unreadable {
                    path: path.to_path_buf(),
                    source: io::Error::from(err),
                });
            }
        }
    }

    entries.push(DirectoryEntry::parent());
    Ok(entries)
}
