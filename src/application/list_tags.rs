//! List tags use case

use crate::application::view_note::{NoteOutcome, ViewNoteService};
use crate::domain::notes::unique_tags;
use crate::error::{DentryError, Result};
use crate::infrastructure::Config;
use std::path::Path;

/// Service for listing all tags used in a tag note.
pub struct ListTagsService {
    viewer: ViewNoteService,
}

impl ListTagsService {
    /// Create a new list tags service.
    pub fn new(config: &Config) -> Self {
        Self {
            viewer: ViewNoteService::new(config),
        }
    }

    /// Load `path` and return its distinct tags, sorted.
    pub fn execute(&self, path: &Path) -> Result<Vec<String>> {
        match self.viewer.load(path)? {
            NoteOutcome::Entries(entries) => Ok(unique_tags(&entries)),
            NoteOutcome::NotTagNote => Err(DentryError::NotTagNote(path.to_path_buf())),
        }
    }
}
