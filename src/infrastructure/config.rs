//! Configuration management

use crate::error::{DentryError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "DENTRY_CONFIG";

pub const DEFAULT_MAX_FILE_SIZE: u64 = 16 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Files larger than this many bytes are refused before parsing
    pub max_file_size: u64,
    /// Chunks longer than this many bytes abort the scan; unset means no limit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_chunk_size: Option<usize>,
    /// Whether `--tag` filtering ignores ASCII case
    pub case_insensitive_tags: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_chunk_size: None,
            case_insensitive_tags: false,
        }
    }
}

impl Config {
    /// Pick the config file: explicit path first, then DENTRY_CONFIG
    pub fn locate(explicit: Option<&Path>) -> Option<PathBuf> {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
    }

    /// Load the effective config, falling back to defaults when no file is named
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match Self::locate(explicit) {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Config::default()),
        }
    }

    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DentryError::ConfigNotFound(path.to_path_buf())
            } else {
                DentryError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| {
            DentryError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validate()?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load config from a file, or defaults if the file doesn't exist yet
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load_from_file(path) {
            Err(DentryError::ConfigNotFound(_)) => Ok(Config::default()),
            other => other,
        }
    }

    /// Save config to a TOML file
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;

        fs::write(path, contents)?;

        Ok(())
    }

    /// Reject limits that would make every file unreadable
    pub fn validate(&self) -> Result<()> {
        if self.max_file_size == 0 {
            return Err(DentryError::Config(
                "max_file_size must be greater than 0".to_string(),
            ));
        }
        if self.max_chunk_size == Some(0) {
            return Err(DentryError::Config(
                "max_chunk_size must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
