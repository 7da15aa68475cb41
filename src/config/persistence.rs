//! Reading and writing `config.json`
//!
//! Settings live in `<config dir>/devfolio/config.json`. Loading never fails
//! the app: a missing, empty or unreadable file falls back to defaults.
//! Saving goes through `config.json.bak` and a rename so a crash mid-write
//! leaves the previous file intact.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::config::Settings;
use crate::error::{Error, Result, ResultExt};

const APP_NAME: &str = "devfolio";
const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_BACKUP_NAME: &str = "config.json.bak";

// ─────────────────────────────────────────────────────────────────────────────
// Locations
// ─────────────────────────────────────────────────────────────────────────────

/// `%APPDATA%\devfolio`, `~/Library/Application Support/devfolio` or
/// `~/.config/devfolio`.
pub fn get_config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|base| base.join(APP_NAME))
        .ok_or(Error::ConfigDirNotFound)
}

pub fn get_config_file_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join(CONFIG_FILE_NAME))
}

fn ensure_config_dir() -> Result<PathBuf> {
    let dir = get_config_dir()?;
    if !dir.exists() {
        debug!("Creating config directory {}", dir.display());
        fs::create_dir_all(&dir).map_err(|e| Error::ConfigSave {
            path: dir.clone(),
            source: Box::new(e),
        })?;
    }
    Ok(dir)
}

// ─────────────────────────────────────────────────────────────────────────────
// Load
// ─────────────────────────────────────────────────────────────────────────────

/// Load preferences, falling back to defaults on any failure.
pub fn load_config() -> Settings {
    get_config_file_path()
        .and_then(|path| load_config_from(&path))
        .unwrap_or_warn_default(Settings::default(), "Failed to load configuration")
}

/// Load and sanitize settings from `path`.
///
/// A missing or blank file yields the defaults; malformed JSON is
/// `Error::ConfigParse`.
pub fn load_config_from(path: &Path) -> Result<Settings> {
    if !path.exists() {
        debug!("No config at {}, using defaults", path.display());
        return Ok(Settings::default());
    }

    let contents = fs::read_to_string(path).map_err(|e| Error::ConfigLoad {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;
    if contents.trim().is_empty() {
        debug!("Config at {} is blank, using defaults", path.display());
        return Ok(Settings::default());
    }

    let settings = Settings::from_json_sanitized(&contents).map_err(|e| {
        warn!("Invalid config JSON in {}: {}", path.display(), e);
        Error::ConfigParse {
            message: format!("Failed to parse config file: {}", e),
            source: Some(Box::new(e)),
        }
    })?;

    info!(
        "Loaded preferences from {} (theme {:?}, zoom {:.1}, chat model {})",
        path.display(),
        settings.theme,
        settings.zoom_level,
        settings.chat.model
    );
    Ok(settings)
}

// ─────────────────────────────────────────────────────────────────────────────
// Save
// ─────────────────────────────────────────────────────────────────────────────

/// Write preferences to the platform config directory.
pub fn save_config(settings: &Settings) -> Result<()> {
    save_config_to(settings, &ensure_config_dir()?)
}

/// Write `config.json` inside `dir` via the backup file.
pub fn save_config_to(settings: &Settings, dir: &Path) -> Result<()> {
    let target = dir.join(CONFIG_FILE_NAME);
    let staging = dir.join(CONFIG_BACKUP_NAME);
    let save_err = |path: &Path| {
        let path = path.to_path_buf();
        move |e: std::io::Error| Error::ConfigSave {
            path,
            source: Box::new(e),
        }
    };

    let json = serde_json::to_string_pretty(settings).map_err(|e| Error::ConfigSave {
        path: target.clone(),
        source: Box::new(e),
    })?;
    fs::write(&staging, json).map_err(save_err(&staging))?;
    fs::rename(&staging, &target).map_err(save_err(&target))?;

    info!("Saved preferences to {}", target.display());
    Ok(())
}

/// Save and report success; failures are only logged.
pub fn save_config_silent(settings: &Settings) -> bool {
    match save_config(settings) {
        Ok(()) => true,
        Err(e) => {
            warn!("Failed to save configuration: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use std::fs;
    use tempfile::TempDir;

    struct TestEnv {
        _temp_dir: TempDir,
        config_dir: PathBuf,
        config_file: PathBuf,
    }

    impl TestEnv {
        fn new() -> Self {
            let temp_dir = TempDir::new().unwrap();
            let config_dir = temp_dir.path().join(APP_NAME);
            let config_file = config_dir.join(CONFIG_FILE_NAME);
            fs::create_dir_all(&config_dir).unwrap();
            Self {
                _temp_dir: temp_dir,
                config_dir,
                config_file,
            }
        }

        fn write_config(&self, content: &str) {
            fs::write(&self.config_file, content).unwrap();
        }
    }

    #[test]
    fn test_get_config_file_path() {
        if let Ok(path) = get_config_file_path() {
            let display = path.to_string_lossy().to_string();
            assert!(display.contains(APP_NAME));
            assert!(display.ends_with(CONFIG_FILE_NAME));
        }
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let env = TestEnv::new();
        let settings = load_config_from(&env.config_file).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_empty_file_uses_defaults() {
        let env = TestEnv::new();
        env.write_config("   \n");
        let settings = load_config_from(&env.config_file).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_load_partial_config() {
        let env = TestEnv::new();
        env.write_config(r#"{"theme": "light", "zoom_level": 1.5}"#);

        let settings = load_config_from(&env.config_file).unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.zoom_level, 1.5);
        assert_eq!(settings.transcript_cadence_ms, 500);
    }

    #[test]
    fn test_load_corrupted_config_returns_error() {
        let env = TestEnv::new();
        env.write_config("{ invalid json }");

        let result = load_config_from(&env.config_file);
        assert!(matches!(result, Err(Error::ConfigParse { .. })));
    }

    #[test]
    fn test_load_config_sanitizes_values() {
        let env = TestEnv::new();
        env.write_config(r#"{"zoom_level": 12.0, "transcript_cadence_ms": 1}"#);

        let settings = load_config_from(&env.config_file).unwrap();
        assert_eq!(settings.zoom_level, Settings::MAX_ZOOM);
        assert_eq!(
            settings.transcript_cadence_ms,
            Settings::MIN_TRANSCRIPT_CADENCE_MS
        );
    }

    #[test]
    fn test_config_with_unknown_fields_ignored() {
        let env = TestEnv::new();
        env.write_config(r#"{"theme": "dark", "font_family": "inter", "future_feature": true}"#);

        let settings = load_config_from(&env.config_file).unwrap();
        assert_eq!(settings.theme, Theme::Dark);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let env = TestEnv::new();
        let mut original = Settings {
            theme: Theme::Light,
            zoom_level: 1.2,
            portfolio_url: "https://example.org".to_string(),
            ..Settings::default()
        };
        original.chat.enabled = false;

        save_config_to(&original, &env.config_dir).unwrap();
        let loaded = load_config_from(&env.config_file).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_save_leaves_no_backup_file() {
        let env = TestEnv::new();
        save_config_to(&Settings::default(), &env.config_dir).unwrap();

        assert!(env.config_file.exists());
        assert!(!env.config_dir.join(CONFIG_BACKUP_NAME).exists());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let env = TestEnv::new();
        let missing = env.config_dir.join("does-not-exist");

        let result = save_config_to(&Settings::default(), &missing);
        assert!(matches!(result, Err(Error::ConfigSave { .. })));
    }
}
