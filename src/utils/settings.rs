use super::SettingsError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
const DEFAULT_IMAGE_PATH: &str = "/image-prediction/";
const DEFAULT_TEXT_PATH: &str = "/text-prediction/";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the prediction service, e.g. `http://127.0.0.1:8000`
    pub api_base: String,
    pub image_path: String,
    pub text_path: String,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            image_path: DEFAULT_IMAGE_PATH.to_string(),
            text_path: DEFAULT_TEXT_PATH.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Settings {
    /// Get the platform-specific settings directory
    pub fn settings_dir() -> Result<PathBuf, SettingsError> {
        let config_dir = if cfg!(any(target_os = "windows", target_os = "macos")) {
            // Windows: %APPDATA%\plantdoc, macOS: ~/Library/Application Support/plantdoc
            dirs::config_dir()
                .ok_or(SettingsError::NoConfigDir)?
                .join("plantdoc")
        } else {
            // Linux/Unix: $HOME/.plantdoc
            dirs::home_dir()
                .ok_or(SettingsError::NoConfigDir)?
                .join(".plantdoc")
        };

        Ok(config_dir)
    }

    pub fn settings_path() -> Result<PathBuf, SettingsError> {
        Ok(Self::settings_dir()?.join("settings.toml"))
    }

    /// Load settings from the config file. On first launch the defaults are
    /// written out so the endpoints can be edited by hand.
    pub fn load_or_init() -> Result<Self, SettingsError> {
        Self::load_or_init_at(&Self::settings_path()?)
    }

    pub fn load_or_init_at(path: &Path) -> Result<Self, SettingsError> {
        if path.exists() {
            return Self::load_from(path);
        }

        let settings = Self::default();
        settings.save_to(path)?;
        Ok(settings)
    }

    /// Load settings from `path`, falling back to defaults when it does not
    /// exist.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|source| SettingsError::Write {
                    path: dir.to_path_buf(),
                    source,
                })?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn image_endpoint(&self) -> String {
        join_url(&self.api_base, &self.image_path)
    }

    pub fn text_endpoint(&self) -> String {
        join_url(&self.api_base, &self.text_path)
    }

    /// Never zero, so a misconfigured file cannot make every request time out
    /// immediately.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
