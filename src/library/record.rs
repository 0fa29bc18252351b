use std::fs;
use std::path::{Component, Path, PathBuf};

/// One music file as the library knows it.
///
/// Two records describe the same song iff their `absolute_path`s are equal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    relative_path: PathBuf,
    absolute_path: PathBuf,
    file_name: String,
}

impl FileRecord {
    /// Build a record from the path as the user or the browser supplied it.
    ///
    /// Never fails: a path that does not exist still gets an absolute form.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let relative_path = path.as_ref().to_path_buf();
        let absolute_path = resolve_path(&relative_path);
        let file_name = relative_path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            relative_path,
            absolute_path,
            file_name,
        }
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Render the record as one line of the library file (without the newline).
    pub(super) fn to_line(&self) -> String {
        format!(
            "{},{},{}",
            self.relative_path.to_string_lossy(),
            self.absolute_path.to_string_lossy(),
            self.file_name
        )
    }
}

/// Resolve `path` to an absolute path with symlinks and `.`/`..` removed.
///
/// Each prefix that exists on disk is canonicalized; missing components are
/// kept as written, so this works for paths that do not exist.
pub fn resolve_path(path: &Path) -> PathBuf {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => resolved.push(component),
            Component::CurDir => {}
            Component::ParentDir => {
                resolved.pop();
            }
            Component::Normal(name) => {
                resolved.push(name);
                if let Ok(real) = fs::canonicalize(&resolved) {
                    resolved = real;
                }
            }
        }
    }
    resolved
}
