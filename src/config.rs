use crate::error::{BoardcoreError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "config.toml";
const DEFAULT_REGISTRY_FILE: &str = "registry.json";

/// Environment variable overriding the boardcore home directory.
pub const HOME_ENV: &str = "BOARDCORE_HOME";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    registry: RegistryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Registry snapshot file name, relative to the boardcore home.
    #[serde(default = "default_registry_file")]
    pub index_file: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            index_file: DEFAULT_REGISTRY_FILE.to_string(),
        }
    }
}

fn default_registry_file() -> String {
    DEFAULT_REGISTRY_FILE.to_string()
}

#[derive(Debug, Clone)]
pub struct BoardcoreConfig {
    home: PathBuf,
    pub registry: RegistryConfig,
}

impl BoardcoreConfig {
    pub fn new(home: PathBuf) -> Result<Self> {
        let file = load_config_file(&home)?;
        Ok(Self {
            home,
            registry: file.registry,
        })
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn registry_path(&self) -> PathBuf {
        self.home.join(&self.registry.index_file)
    }
}

fn load_config_file(home: &Path) -> Result<ConfigFile> {
    let config_path = home.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        log::debug!("Config file not found at {config_path:?}, using defaults");
        return Ok(ConfigFile::default());
    }

    let contents = fs::read_to_string(&config_path)?;
    let file: ConfigFile = toml::from_str(&contents)
        .map_err(|e| BoardcoreError::ConfigError(format!("Failed to parse config.toml: {e}")))?;

    log::debug!("Loaded config from {config_path:?}");
    Ok(file)
}

/// Resolve the boardcore home (`$BOARDCORE_HOME`, else `~/.boardcore`)
/// and load the configuration found there.
pub fn new_boardcore_config() -> Result<BoardcoreConfig> {
    let home = match std::env::var_os(HOME_ENV) {
        Some(dir) => PathBuf::from(dir),
        None => dirs::home_dir()
            .ok_or_else(|| {
                BoardcoreError::ConfigError("Cannot determine home directory".to_string())
            })?
            .join(".boardcore"),
    };
    BoardcoreConfig::new(home)
}
