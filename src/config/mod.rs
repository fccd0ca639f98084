use crate::ui::messages;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub mod filters; // saved-filters persistence at src/config/filters.rs

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Path of the local results file (JSON array of test records).
    pub results_file: String,
    /// Test type preselected when `add` is called without `--test-type`.
    #[serde(default = "default_test_type")]
    pub default_test_type: String,
}

fn default_test_type() -> String {
    "2k".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            results_file: Self::results_file_path().to_string_lossy().to_string(),
            default_test_type: default_test_type(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("oarlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".oarlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("oarlog.conf")
    }

    /// Return the full path of the default results file
    pub fn results_file_path() -> PathBuf {
        Self::config_dir().join("results.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => match serde_yaml::from_str(&content) {
                    Ok(cfg) => cfg,
                    Err(e) => {
                        messages::warning(format!(
                            "Failed to parse {}: {} (using defaults)",
                            path.display(),
                            e
                        ));
                        Config::default()
                    }
                },
                Err(e) => {
                    messages::warning(format!(
                        "Failed to read {}: {} (using defaults)",
                        path.display(),
                        e
                    ));
                    Config::default()
                }
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and results files
    pub fn init_all(custom_store: Option<String>, is_test: bool) -> io::Result<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // Results file: user provided or default
        let results_path = if let Some(name) = custom_store {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::results_file_path()
        };

        let config = Config {
            results_file: results_path.to_string_lossy().to_string(),
            default_test_type: default_test_type(),
        };

        // Write config file (skipped in test mode)
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            messages::success(format!("Config file: {:?}", Self::config_file()));
        }

        Ok(results_path)
    }
}
