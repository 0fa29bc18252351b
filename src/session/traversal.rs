use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::error::DirectoryAccessError;
use crate::library::PARENT_ENTRY;

/// Where the directory browser is.
///
/// `current` is the canonical directory that gets listed. `shown` names the
/// same directory the way the user reached it: the path they started from
/// with one segment added per descent and removed per climb. Files picked in
/// the browser are built from `shown`, so they are remembered in the same
/// form as a path typed at the prompt.
#[derive(Debug, Clone)]
pub struct Traversal {
    current: PathBuf,
    shown: PathBuf,
}

fn canonical_dir(path: &Path) -> Result<PathBuf, DirectoryAccessError> {
    fs::canonicalize(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => DirectoryAccessError::NotFound {
            path: path.to_path_buf(),
        },
        _ => DirectoryAccessError::Unreadable {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// `path` without `.` segments or a trailing separator.
fn tidy(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// The user-facing path one level above `shown`, whose canonical form is
/// `parent`. Falls back to `parent` itself when the lexical climb lands
/// somewhere else, as it does after descending through a symlink.
fn climb(shown: &Path, parent: &Path) -> PathBuf {
    let mut up = shown.to_path_buf();
    match shown.components().next_back() {
        Some(Component::Normal(_)) => {
            up.pop();
        }
        Some(Component::RootDir | Component::Prefix(_)) => {}
        _ => up.push(PARENT_ENTRY),
    }

    let probe = if up.as_os_str().is_empty() {
        Path::new(".")
    } else {
        up.as_path()
    };
    match fs::canonicalize(probe) {
        Ok(p) if p == parent => up,
        _ => parent.to_path_buf(),
    }
}

impl Traversal {
    /// Start browsing at `path`.
    pub fn start(path: &Path) -> Result<Self, DirectoryAccessError> {
        Ok(Self {
            current: canonical_dir(path)?,
            shown: tidy(path),
        })
    }

    /// Canonical directory being listed.
    pub fn current(&self) -> &Path {
        &self.current
    }

    /// The current directory as the user reached it.
    pub fn shown(&self) -> &Path {
        &self.shown
    }

    /// The traversal after entering the child `name`, or the parent for `..`.
    ///
    /// At a filesystem root `..` stays at the root.
    pub fn step(&self, name: &str) -> Result<Self, DirectoryAccessError> {
        if name == PARENT_ENTRY {
            let parent = self.current.parent().unwrap_or(&self.current).to_path_buf();
            let shown = climb(&self.shown, &parent);
            return Ok(Self {
                current: parent,
                shown,
            });
        }

        Ok(Self {
            current: canonical_dir(&self.current.join(name))?,
            shown: self.shown.join(name),
        })
    }

    /// Path of a file listed in the current directory, in user-facing form.
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.shown.join(name)
    }
}
