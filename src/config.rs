//! Settings loading: optional config.toml, then environment, then defaults.
//!
//! Supports ADD_HOST_CONFIG env var override for testing.

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::block::Markers;

/// Env var holding the branding name used in the marker lines.
pub const APP_NAME_ENV: &str = "APP_NAME";
/// Env var pointing at an alternative config file.
pub const CONFIG_FILE_ENV: &str = "ADD_HOST_CONFIG";

pub const DEFAULT_APP_NAME: &str = "web-server";
pub const DEFAULT_HOST_ADDRESS: &str = "127.0.0.1";

/// config.toml structure. Every field is optional.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub app_name: Option<String>,
    #[serde(default)]
    pub host_address: Option<String>,
}

impl ConfigFile {
    /// Load from `path` (shared lock while reading). Missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }
        let mut file = fs::OpenOptions::new()
            .read(true)
            .open(path)
            .with_context(|| format!("open config: {}", path.display()))?;
        fs2::FileExt::lock_shared(&file)?;
        let mut s = String::new();
        file.read_to_string(&mut s)?;
        toml::from_str(&s).with_context(|| format!("parse config: {}", path.display()))
    }
}

/// Resolved settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub app_name: String,
    pub host_address: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            host_address: DEFAULT_HOST_ADDRESS.to_string(),
        }
    }
}

impl Settings {
    /// Merge sources; `app_name_env` wins over the file, which wins over defaults.
    pub fn from_sources(file: ConfigFile, app_name_env: Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            app_name: app_name_env
                .or(file.app_name)
                .unwrap_or(defaults.app_name),
            host_address: file.host_address.unwrap_or(defaults.host_address),
        }
    }

    /// Load from the default config path and the process environment.
    pub fn load() -> Result<Self> {
        let file = ConfigFile::load(&config_path())?;
        Ok(Self::from_sources(file, std::env::var(APP_NAME_ENV).ok()))
    }

    pub fn markers(&self) -> Markers {
        Markers::for_app(&self.app_name)
    }
}

/// Path to config.toml (respects ADD_HOST_CONFIG).
pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_FILE_ENV) {
        PathBuf::from(path)
    } else if let Some(dirs) = directories::ProjectDirs::from("com", "addhost", "add-host") {
        dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from(".add-host.toml")
    }
}
