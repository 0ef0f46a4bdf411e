use crate::detector::DetectOptions;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result type for reading settings
pub type SettingsResult<T> = Result<T, SettingsError>;

/// Error types for reading the settings file
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "Failed to read settings file: {}", e),
            SettingsError::Parse(e) => write!(f, "Failed to parse settings file: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

impl From<std::io::Error> for SettingsError {
    fn from(error: std::io::Error) -> Self {
        SettingsError::Io(error)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(error: serde_json::Error) -> Self {
        SettingsError::Parse(error)
    }
}

/// Default `EnvFilter` directive when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Persistent settings shared between runs of the command-line tool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Options used when no flag overrides them
    pub detect: DetectOptions,

    /// Fixed seed for centroid initialization; entropy when unset
    pub seed: Option<u64>,

    /// Log filter directive, e.g. "info" or "stylesnap_colors=debug"
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            detect: DetectOptions::default(),
            seed: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Settings {
    /// Platform directories for this tool
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("app", "StyleSnap", "stylesnap-colors")
    }

    /// Get the path to the settings file in the user's config directory
    pub fn get_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from disk, or return defaults if file doesn't exist or is corrupted
    pub fn load() -> Self {
        match Self::get_config_path() {
            Some(config_path) => Self::load_from(&config_path),
            None => {
                warn!("Could not determine config directory. Using defaults.");
                Self::default()
            }
        }
    }

    pub fn load_from(config_path: &Path) -> Self {
        Self::from_load_result(config_path, Self::try_load_from(config_path))
    }

    /// Read and parse a settings file without logging.
    ///
    /// `Ok(None)` means the file does not exist yet.
    pub fn try_load_from(config_path: &Path) -> SettingsResult<Option<Self>> {
        let contents = match fs::read_to_string(config_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(SettingsError::Io(e)),
        };

        Ok(Some(serde_json::from_str(&contents)?))
    }

    /// Log the outcome of [`Self::try_load_from`] and fall back to defaults on failure
    pub fn from_load_result(config_path: &Path, result: SettingsResult<Option<Self>>) -> Self {
        match result {
            Ok(Some(settings)) => {
                info!("Loaded settings from: {:?}", config_path);
                settings
            }
            Ok(None) => {
                info!("No settings file at {:?}. Using defaults.", config_path);
                Self::default()
            }
            Err(e) => {
                warn!("{} ({:?}). Using defaults.", e, config_path);
                Self::default()
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self) {
        match Self::get_config_path() {
            Some(config_path) => self.save_to(&config_path),
            None => warn!("Could not determine config directory. Settings not saved."),
        }
    }

    pub fn save_to(&self, config_path: &Path) {
        if let Some(parent) = config_path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                warn!("Failed to create config directory: {}", e);
                return;
            }
        }

        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(config_path, json) {
                    warn!("Failed to write settings file: {}", e);
                } else {
                    info!("Settings saved to: {:?}", config_path);
                }
            }
            Err(e) => {
                warn!("Failed to serialize settings: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "stylesnap_colors_{}_{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.detect, DetectOptions::default());
        assert!(settings.seed.is_none());
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_settings_serialization_roundtrip() {
        let settings = Settings {
            detect: DetectOptions {
                max_colors: 3,
                quality: 1,
                exclude_white_black: false,
            },
            seed: Some(42),
            log_filter: "debug".to_string(),
        };

        let json = serde_json::to_string(&settings).unwrap();
        let loaded: Settings = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_settings_file() {
        let loaded: Settings = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(loaded.seed, Some(7));
        assert_eq!(loaded.detect.max_colors, 5);
        assert_eq!(loaded.log_filter, "info");
    }

    #[test]
    fn test_save_and_load_from_disk() {
        let dir = scratch_dir("save_load");
        let path = dir.join("nested").join("settings.json");

        let settings = Settings {
            seed: Some(9),
            ..Default::default()
        };
        settings.save_to(&path);
        assert_eq!(Settings::load_from(&path), settings);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_try_load_reports_corrupt_file() {
        let dir = scratch_dir("try_load");
        let path = dir.join("settings.json");
        assert!(matches!(Settings::try_load_from(&path), Ok(None)));

        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, "{ not json").unwrap();
        let result = Settings::try_load_from(&path);
        assert!(matches!(result, Err(SettingsError::Parse(_))));
        assert_eq!(Settings::from_load_result(&path, result), Settings::default());

        fs::write(&path, r#"{"seed": 3}"#).unwrap();
        let loaded = Settings::try_load_from(&path).unwrap().unwrap();
        assert_eq!(loaded.seed, Some(3));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_corrupt_or_missing_file_uses_defaults() {
        let dir = scratch_dir("corrupt");
        let path = dir.join("settings.json");
        assert_eq!(Settings::load_from(&path), Settings::default());

        fs::create_dir_all(&dir).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());

        let _ = fs::remove_dir_all(&dir);
    }
}
