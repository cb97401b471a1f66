/*
 * Persists the save dialog's configurable properties between runs, together
 * with the last file name the user accepted. Settings are stored as pretty
 * JSON in the application's local configuration directory.
 *
 * It uses a trait-based approach (`ConfigManagerOperations`) so callers can
 * swap in a different backend or a mock. `CoreConfigManager` resolves its
 * directory through `path_utils` unless constructed with an explicit one.
 */
use crate::core::path_utils;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Read};
use std::path::PathBuf;

const DIALOG_SETTINGS_FILENAME: &str = "dialog_settings.json";

/// Snapshot of the dialog properties that survive a restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogSettings {
    pub title: String,
    pub filter: String,
    pub filter_index: u32,
    pub initial_directory: String,
    pub default_ext: String,
    pub restore_directory: bool,
    pub last_file_name: String,
}

impl Default for DialogSettings {
    fn default() -> Self {
        DialogSettings {
            title: String::new(),
            filter: String::new(),
            filter_index: 1,
            initial_directory: String::new(),
            default_ext: String::new(),
            restore_directory: false,
            last_file_name: String::new(),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Serde(serde_json::Error),
    NoProjectDirectory,
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serde(err)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Configuration I/O error: {e}"),
            ConfigError::Serde(e) => write!(f, "Configuration format error: {e}"),
            ConfigError::NoProjectDirectory => {
                write!(f, "Could not determine directory for configuration")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Serde(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

pub trait ConfigManagerOperations: Send + Sync {
    fn load_dialog_settings(&self, app_name: &str) -> Result<Option<DialogSettings>>;
    fn save_dialog_settings(&self, app_name: &str, settings: &DialogSettings) -> Result<()>;
}

pub struct CoreConfigManager {
    config_dir_override: Option<PathBuf>,
}

impl CoreConfigManager {
    pub fn new() -> Self {
        CoreConfigManager {
            config_dir_override: None,
        }
    }

    /// Uses `config_dir` instead of the per-user application directory.
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        CoreConfigManager {
            config_dir_override: Some(config_dir),
        }
    }

    fn settings_file_path(&self, app_name: &str) -> Result<PathBuf> {
        let config_dir = match &self.config_dir_override {
            Some(dir) => {
                if !dir.exists() {
                    fs::create_dir_all(dir)?;
                }
                dir.clone()
            }
            None => path_utils::get_base_app_config_local_dir(app_name)
                .ok_or(ConfigError::NoProjectDirectory)?,
        };
        Ok(config_dir.join(DIALOG_SETTINGS_FILENAME))
    }
}

impl Default for CoreConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManagerOperations for CoreConfigManager {
    /*
     * Loads the stored dialog settings for `app_name`. A missing or blank
     * settings file is not an error and yields `Ok(None)`.
     */
    fn load_dialog_settings(&self, app_name: &str) -> Result<Option<DialogSettings>> {
        log::trace!("CoreConfigManager: Loading dialog settings for app '{app_name}'");
        let file_path = self.settings_file_path(app_name)?;

        if !file_path.exists() {
            log::debug!("CoreConfigManager: Settings file {file_path:?} does not exist.");
            return Ok(None);
        }

        let mut contents = String::new();
        BufReader::new(File::open(&file_path)?).read_to_string(&mut contents)?;
        if contents.trim().is_empty() {
            log::debug!("CoreConfigManager: Settings file {file_path:?} is empty.");
            return Ok(None);
        }

        let settings: DialogSettings = serde_json::from_str(&contents)?;
        log::debug!("CoreConfigManager: Loaded dialog settings from {file_path:?}.");
        Ok(Some(settings))
    }

    fn save_dialog_settings(&self, app_name: &str, settings: &DialogSettings) -> Result<()> {
        log::trace!("CoreConfigManager: Saving dialog settings for app '{app_name}'");
        let file_path = self.settings_file_path(app_name)?;
        let writer = BufWriter::new(File::create(&file_path)?);
        serde_json::to_writer_pretty(writer, settings)?;
        log::debug!("CoreConfigManager: Saved dialog settings to {file_path:?}.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const APP_NAME_FOR_TESTS: &str = "SaveFileDialogTests";

    #[test]
    fn test_load_missing_settings_returns_none() -> Result<()> {
        let dir = tempdir().expect("Failed to create temp dir for test");
        let manager = CoreConfigManager::with_config_dir(dir.path().to_path_buf());

        assert_eq!(manager.load_dialog_settings(APP_NAME_FOR_TESTS)?, None);
        Ok(())
    }

    #[test]
    fn test_save_then_load_settings() -> Result<()> {
        let dir = tempdir().expect("Failed to create temp dir for test");
        let manager = CoreConfigManager::with_config_dir(dir.path().to_path_buf());
        let settings = DialogSettings {
            title: "Export".to_string(),
            filter: "Text|*.txt".to_string(),
            filter_index: 1,
            initial_directory: "/home/user".to_string(),
            default_ext: "txt".to_string(),
            restore_directory: true,
            last_file_name: "/home/user/report.txt".to_string(),
        };

        manager.save_dialog_settings(APP_NAME_FOR_TESTS, &settings)?;
        let loaded = manager.load_dialog_settings(APP_NAME_FOR_TESTS)?;

        assert_eq!(loaded, Some(settings));
        Ok(())
    }

    #[test]
    fn test_load_blank_settings_file_returns_none() -> Result<()> {
        let dir = tempdir().expect("Failed to create temp dir for test");
        fs::write(dir.path().join(DIALOG_SETTINGS_FILENAME), "  \n")?;
        let manager = CoreConfigManager::with_config_dir(dir.path().to_path_buf());

        assert_eq!(manager.load_dialog_settings(APP_NAME_FOR_TESTS)?, None);
        Ok(())
    }

    #[test]
    fn test_load_partial_settings_fills_defaults() -> Result<()> {
        let dir = tempdir().expect("Failed to create temp dir for test");
        fs::write(
            dir.path().join(DIALOG_SETTINGS_FILENAME),
            r#"{ "title": "Only title" }"#,
        )?;
        let manager = CoreConfigManager::with_config_dir(dir.path().to_path_buf());

        let loaded = manager
            .load_dialog_settings(APP_NAME_FOR_TESTS)?
            .expect("Settings should load");
        assert_eq!(loaded.title, "Only title");
        assert_eq!(loaded.filter_index, 1);
        assert!(loaded.filter.is_empty());
        Ok(())
    }

    #[test]
    fn test_load_malformed_settings_reports_serde_error() {
        let dir = tempdir().expect("Failed to create temp dir for test");
        fs::write(dir.path().join(DIALOG_SETTINGS_FILENAME), "{ not json").unwrap();
        let manager = CoreConfigManager::with_config_dir(dir.path().to_path_buf());

        let result = manager.load_dialog_settings(APP_NAME_FOR_TESTS);
        assert!(matches!(result, Err(ConfigError::Serde(_))));
    }

    #[test]
    fn test_with_config_dir_creates_missing_directory() -> Result<()> {
        let dir = tempdir().expect("Failed to create temp dir for test");
        let nested = dir.path().join("nested").join("config");
        let manager = CoreConfigManager::with_config_dir(nested.clone());

        manager.save_dialog_settings(APP_NAME_FOR_TESTS, &DialogSettings::default())?;

        assert!(nested.join(DIALOG_SETTINGS_FILENAME).exists());
        Ok(())
    }
}
