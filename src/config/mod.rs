use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// CSV file holding the record table.
    pub data_file: String,
    /// Ask before deleting records.
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: Self::default_data_file().to_string_lossy().to_string(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("gatelog")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".gatelog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("gatelog.conf")
    }

    /// Return the default location of the record table
    pub fn default_data_file() -> PathBuf {
        Self::config_dir().join("records.csv")
    }

    /// Data file with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    /// Point the configuration at `custom`, a `--data` override.
    ///
    /// `~/` is expanded and a relative path is taken from the working
    /// directory, so every command sees the same absolute file.
    pub fn override_data_file(&mut self, custom: &str) -> AppResult<()> {
        let path = expand_tilde(custom);
        let path = if path.is_absolute() {
            path
        } else {
            env::current_dir()?.join(path)
        };
        self.data_file = path.to_string_lossy().to_string();
        Ok(())
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        Self::from_yaml(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize the configuration file for `data_path`.
    /// In test mode the configuration file is left untouched.
    pub fn init_all(data_path: PathBuf, is_test: bool) -> AppResult<Self> {
        fs::create_dir_all(Self::config_dir())?;

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            confirm_delete: default_confirm_delete(),
        };

        if !is_test {
            fs::write(Self::config_file(), config.to_yaml()?)?;
        }

        Ok(config)
    }
}
