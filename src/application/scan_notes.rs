//! Scan directory use case

use crate::application::view_note::{NoteOutcome, ViewNoteService};
use crate::error::{DentryError, Result};
use crate::infrastructure::{Config, NoteDirectory};
use std::path::{Path, PathBuf};

/// A tag note found during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedNote {
    /// Path relative to the scanned root
    pub path: PathBuf,
    pub entries: usize,
}

/// Service for finding tag notes below a directory
pub struct ScanNotesService {
    viewer: ViewNoteService,
}

impl ScanNotesService {
    pub fn new(config: &Config) -> Self {
        ScanNotesService {
            viewer: ViewNoteService::new(config),
        }
    }

    /// Walk `root` and report every tag note with its entry count.
    ///
    /// Files that can't be parsed (too large, empty, no header line,
    /// scan failures) are skipped; only I/O errors on `root` itself abort.
    pub fn execute(&self, root: &Path) -> Result<Vec<ScannedNote>> {
        if !root.is_dir() {
            return Err(DentryError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Not a directory: {}", root.display()),
            )));
        }

        let dir = NoteDirectory::new(root.to_path_buf());
        let mut notes = Vec::new();

        for file in dir.list_files() {
            match self.viewer.load(&file) {
                Ok(NoteOutcome::Entries(entries)) => notes.push(ScannedNote {
                    path: dir.relative(&file).to_path_buf(),
                    entries: entries.len(),
                }),
                Ok(NoteOutcome::NotTagNote) => {}
                Err(e @ DentryError::FileTooLarge { .. }) | Err(e @ DentryError::Scan(_)) => {
                    log::warn!("Skipping {}: {}", file.display(), e)
                }
                Err(e) => log::debug!("Skipping {}: {}", file.display(), e),
            }
        }

        Ok(notes)
    }
}
