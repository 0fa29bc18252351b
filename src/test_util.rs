//! Helpers shared by tests that touch process-wide state.

use std::env;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};

static CWD_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

/// Switches the working directory for the lifetime of the guard.
///
/// Holds a process-wide lock so tests that resolve relative paths never see
/// another test's directory. Declare it after the tempdir it points into so
/// the old directory is restored before the tempdir is removed.
pub struct CurrentDirGuard {
    old: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl CurrentDirGuard {
    pub fn enter(dir: &Path) -> Self {
        let lock = CWD_LOCK
            .get_or_init(|| Mutex::new(()))
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let old = env::current_dir().unwrap();
        env::set_current_dir(dir).unwrap();
        Self { old, _lock: lock }
    }
}

impl Drop for CurrentDirGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.old);
    }
}
