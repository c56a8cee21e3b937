//! Error types for dentry

use std::path::PathBuf;
use thiserror::Error;

/// Failure while scanning a note body for entries
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    #[error("chunk at byte {offset} is {len} bytes long, limit is {limit}")]
    ChunkTooLong {
        offset: usize,
        len: usize,
        limit: usize,
    },
}

/// Main error type for dentry application
#[derive(Debug, Error)]
pub enum DentryError {
    #[error("Cannot read note header: {0}")]
    HeaderRead(std::io::Error),

    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Not a tag note: {0}")]
    NotTagNote(PathBuf),

    #[error("File too large: {path} ({size} bytes, limit {limit})")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        limit: u64,
    },

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DentryError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DentryError::FileTooLarge { .. } => 2,
            DentryError::HeaderRead(_) | DentryError::Scan(_) => 3,
            DentryError::NotTagNote(_) => 4,
            DentryError::ConfigNotFound(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DentryError::HeaderRead(_) => {
                format!(
                    "{}\n\n\
                    A tag note must start with a newline-terminated header line, e.g.:\n\
                    !Tagnotes\n\
                    (#)work, ideas#)\n\
                    First entry",
                    self
                )
            }
            DentryError::Scan(ScanError::ChunkTooLong { limit, .. }) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Split the entry into several smaller entries\n\
                    • Raise the limit: dentry config max_chunk_size {}",
                    self,
                    limit * 2
                )
            }
            DentryError::NotTagNote(path) => {
                format!(
                    "Not a tag note: {}\n\n\
                    The first line of the file must start with '!Tagnotes'",
                    path.display()
                )
            }
            DentryError::FileTooLarge { limit, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Raise the limit: dentry config max_file_size {}",
                    self,
                    limit * 2
                )
            }
            DentryError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Create it with: dentry --config {} config max_file_size 16777216\n\
                    • Unset DENTRY_CONFIG to use the built-in defaults",
                    path.display(),
                    path.display()
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DentryError
pub type Result<T> = std::result::Result<T, DentryError>;
