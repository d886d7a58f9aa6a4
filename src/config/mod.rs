use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

fn default_bar_width() -> usize {
    30
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the SQLite file backing the key-value store.
    pub database: String,
    /// Width of the summary progress bars, in terminal cells.
    #[serde(default = "default_bar_width")]
    pub progress_bar_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::store_file().to_string_lossy().to_string(),
            progress_bar_width: default_bar_width(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("drivelog")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("drivelog.conf")
    }

    /// Return the full path of the SQLite store
    pub fn store_file() -> PathBuf {
        Self::config_dir().join("drivelog.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize configuration and store files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // store path: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::store_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            progress_bar_width: default_bar_width(),
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        Ok(db_path)
    }
}
