use super::load::{default_config_path, resolve_config_path};
use super::schema::*;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> std::sync::MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

struct EnvGuard {
    key: &'static str,
    old: Option<std::ffi::OsString>,
}

impl EnvGuard {
    fn set(key: &'static str, val: &str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::set_var(key, val);
        }
        Self { key, old }
    }

    fn remove(key: &'static str) -> Self {
        let old = std::env::var_os(key);
        unsafe {
            std::env::remove_var(key);
        }
        Self { key, old }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match self.old.take() {
            Some(v) => unsafe {
                std::env::set_var(self.key, v);
            },
            None => unsafe {
                std::env::remove_var(self.key);
            },
        }
    }
}

#[test]
fn resolve_config_path_prefers_cli_audio_config_path() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("CLI_AUDIO_CONFIG_PATH", "/tmp/cli-audio-test-config.toml");
    assert_eq!(
        resolve_config_path().unwrap(),
        PathBuf::from("/tmp/cli-audio-test-config.toml")
    );
}

#[test]
fn default_config_path_prefers_xdg_config_home() {
    let _lock = env_lock();
    let _g1 = EnvGuard::set("XDG_CONFIG_HOME", "/tmp/xdg-config-home");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-should-not-win");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/xdg-config-home")
            .join("cli-audio")
            .join("config.toml")
    );
}

#[test]
fn default_config_path_falls_back_to_home_dot_config() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("XDG_CONFIG_HOME");
    let _g2 = EnvGuard::set("HOME", "/tmp/home-dir");

    assert_eq!(
        default_config_path().unwrap(),
        PathBuf::from("/tmp/home-dir")
            .join(".config")
            .join("cli-audio")
            .join("config.toml")
    );
}

#[test]
fn defaults_match_the_historic_library_location() {
    let s = Settings::default();
    assert_eq!(s.library.directory, PathBuf::from(".music-lib"));
    assert_eq!(s.library.file_name, "library-save");
    assert_eq!(s.ui.header_text, "cli-audio");
    assert!(s.validate().is_ok());
}

#[test]
fn settings_load_from_explicit_config_file() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("CLI_AUDIO__AUDIO__VOLUME");
    let _g2 = EnvGuard::remove("CLI_AUDIO__LIBRARY__DIRECTORY");

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
directory = "/srv/music-lib"
file_name = "saved"

[ui]
header_text = "hello"
now_playing_fields = ["title", "file-name"]
now_playing_separator = " | "

[audio]
volume = 0.5

[logging]
enabled = false
filter = "debug"
"#,
    )
    .unwrap();

    let s = Settings::load(Some(&cfg_path)).unwrap();
    assert_eq!(s.library.directory, PathBuf::from("/srv/music-lib"));
    assert_eq!(s.library.file_name, "saved");
    assert_eq!(s.ui.header_text, "hello");
    assert_eq!(
        s.ui.now_playing_fields,
        vec![TrackDisplayField::Title, TrackDisplayField::Filename]
    );
    assert_eq!(s.ui.now_playing_separator, " | ");
    assert_eq!(s.audio.volume, 0.5);
    assert!(!s.logging.enabled);
    assert_eq!(s.logging.filter, "debug");
    // untouched keys keep their defaults
    assert_eq!(s.logging.directory, PathBuf::from(".music-lib").join("logs"));
}

#[test]
fn settings_env_overrides_config_file() {
    let _lock = env_lock();

    let dir = tempfile::tempdir().unwrap();
    let cfg_path = dir.path().join("config.toml");
    std::fs::write(
        &cfg_path,
        r#"
[library]
directory = "from-file"
"#,
    )
    .unwrap();

    let _g1 = EnvGuard::set("CLI_AUDIO_CONFIG_PATH", cfg_path.to_str().unwrap());
    let _g2 = EnvGuard::set("CLI_AUDIO__LIBRARY__DIRECTORY", "from-env");

    let s = Settings::load(None).unwrap();
    assert_eq!(s.library.directory, PathBuf::from("from-env"));
}

#[test]
fn missing_config_file_yields_defaults() {
    let _lock = env_lock();
    let _g1 = EnvGuard::remove("CLI_AUDIO__LIBRARY__DIRECTORY");
    let _g2 = EnvGuard::remove("CLI_AUDIO__AUDIO__VOLUME");

    let dir = tempfile::tempdir().unwrap();
    let s = Settings::load(Some(&dir.path().join("absent.toml"))).unwrap();
    assert_eq!(s.library.file_name, "library-save");
}

#[test]
fn validate_rejects_empty_file_name_and_wild_volume() {
    let mut s = Settings::default();
    s.library.file_name = "  ".into();
    assert!(s.validate().is_err());

    let mut s = Settings::default();
    s.audio.volume = 3.5;
    assert!(s.validate().is_err());
}
