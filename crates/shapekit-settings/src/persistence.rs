//! Settings Persistence
//!
//! Locates the configuration file under the platform config directory and
//! loads or saves it. A missing file means defaults.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{SettingsError, SettingsResult};

const APP_DIR: &str = "shapekit";
const CONFIG_FILE: &str = "config.toml";

/// A configuration bound to the file it came from
#[derive(Debug, Clone)]
pub struct SettingsPersistence {
    config: Config,
    path: PathBuf,
}

impl SettingsPersistence {
    /// Default config file path, e.g. `~/.config/shapekit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config or home directory".to_string())
            })?;
        Ok(base.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Loads the default config file, or defaults if it does not exist.
    pub fn load_default() -> SettingsResult<Self> {
        Self::load_or_default(&Self::default_path()?)
    }

    /// Loads `path`, or defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        let config = if path.exists() {
            Config::load_from_file(path)?
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Config::default()
        };
        Ok(Self {
            config,
            path: path.to_path_buf(),
        })
    }

    /// Writes the config back, creating the parent directory if needed.
    pub fn save(&self) -> SettingsResult<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)
                    .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e)))?;
            }
        }
        self.config.save_to_file(&self.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    pub fn into_config(self) -> Config {
        self.config
    }
}
