use crate::errors::{AppError, AppResult};
use crate::models::subject::default_subjects;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an alternative config file.
pub const CONFIG_ENV: &str = "HOURTRACK_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_folder")]
    pub data_folder: String,
    #[serde(default = "default_subjects")]
    pub subjects: Vec<String>,
    #[serde(default = "default_input_date_format")]
    pub input_date_format: String,
}

fn default_data_folder() -> String {
    Config::data_dir().to_string_lossy().to_string()
}

fn default_input_date_format() -> String {
    "%d-%m-%Y".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_folder: default_data_folder(),
            subjects: default_subjects(),
            input_date_format: default_input_date_format(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hourtrack")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".hourtrack")
        }
    }

    /// Return the full path of the config file; `HOURTRACK_CONFIG` overrides it
    pub fn config_file() -> PathBuf {
        match env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => PathBuf::from(path),
            _ => Self::config_dir().join("hourtrack.conf"),
        }
    }

    /// Default folder holding one `<name>_hours.csv` file per person
    pub fn data_dir() -> PathBuf {
        Self::config_dir().join("hour_tracking_files")
    }

    /// Resolved data folder (`~/` expanded)
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_folder)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;
        let cfg: Config = serde_yaml::from_str(&content)?;

        if cfg.subjects.is_empty() {
            return Err(AppError::Config(
                "at least one subject must be configured".into(),
            ));
        }

        Ok(cfg)
    }

    /// Initialize configuration file and data folder.
    ///
    /// With `is_test` the config file is left untouched and only the data
    /// folder is created.
    pub fn init_all(custom_data: Option<&str>, is_test: bool) -> AppResult<Config> {
        let mut config = Config::default();
        if let Some(folder) = custom_data {
            config.data_folder = folder.to_string();
        }

        if !is_test {
            let file = Self::config_file();
            if let Some(parent) = file.parent() {
                fs::create_dir_all(parent)?;
            }
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(file, yaml)?;
        }

        fs::create_dir_all(config.data_path())?;

        Ok(config)
    }
}
