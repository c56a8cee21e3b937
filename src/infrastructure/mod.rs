//! Infrastructure layer - External I/O and configuration

pub mod config;
pub mod repository;
pub mod source;

pub use config::Config;
pub use repository::NoteDirectory;
pub use source::{FileChooser, FixedChooser, NoteSource, PromptChooser};
