//! Config management use case

use crate::error::{DentryError, Result};
use crate::infrastructure::Config;
use std::path::PathBuf;

const VALID_KEYS: &str = "max_file_size, max_chunk_size, case_insensitive_tags";

/// Shown for, and accepted as, an unset chunk size limit
pub const UNLIMITED: &str = "unlimited";

/// Render an optional chunk size limit
pub fn format_chunk_limit(limit: Option<usize>) -> String {
    limit.map_or_else(|| UNLIMITED.to_string(), |n| n.to_string())
}

/// Service for reading and editing the config file
pub struct ConfigService {
    path: Option<PathBuf>,
}

impl ConfigService {
    /// Create a new config service; `path` is the located config file, if any
    pub fn new(path: Option<PathBuf>) -> Self {
        ConfigService { path }
    }

    fn load(&self) -> Result<Config> {
        match &self.path {
            Some(path) => Config::load_from_file(path),
            None => Ok(Config::default()),
        }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.load()?;

        match key {
            "max_file_size" => Ok(config.max_file_size.to_string()),
            "max_chunk_size" => Ok(format_chunk_limit(config.max_chunk_size)),
            "case_insensitive_tags" => Ok(config.case_insensitive_tags.to_string()),
            _ => Err(DentryError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value, creating the config file if needed
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path.as_ref().ok_or_else(|| {
            DentryError::Config(
                "No config file to write. Pass --config <PATH> or set DENTRY_CONFIG".to_string(),
            )
        })?;
        let mut config = Config::load_or_default(path)?;

        match key {
            "max_file_size" => config.max_file_size = parse_value(key, value)?,
            "max_chunk_size" => {
                config.max_chunk_size = if value.trim() == UNLIMITED {
                    None
                } else {
                    Some(parse_value(key, value)?)
                }
            }
            "case_insensitive_tags" => config.case_insensitive_tags = parse_value(key, value)?,
            _ => {
                return Err(DentryError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        config.validate()?;
        config.save_to_file(path)?;
        log::info!("Wrote {} to {}", key, path.display());
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.load()
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| DentryError::Config(format!("Invalid value for {}: '{}'", key, value)))
}
