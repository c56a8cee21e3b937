//! View note use case
//!
//! Loads a file, checks its header, splits it into entries and hands the
//! result to a view. `run_viewer` repeats this for every file a chooser
//! supplies until the user cancels.

use crate::domain::notes::{is_tag_note, Entry, EntrySplitter};
use crate::error::Result;
use crate::infrastructure::{Config, FileChooser, NoteSource};
use std::path::Path;

/// Message shown when a file yields nothing to display
pub const CONSOLATION: &str = "There were no tags to be displayed, sorry!";

/// Result of loading one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteOutcome {
    /// The file is a tag note; entries in document order
    Entries(Vec<Entry>),
    /// The header line does not carry the tag note signature
    NotTagNote,
}

/// Displays parsed entries
pub trait EntryView {
    fn show_entries(&mut self, entries: &[Entry]) -> Result<()>;

    /// Shown when there is nothing to display
    fn show_consolation(&mut self) -> Result<()>;
}

/// Service for loading and presenting tag notes
pub struct ViewNoteService {
    source: NoteSource,
    splitter: EntrySplitter,
}

impl ViewNoteService {
    /// Create a new view service using the limits from `config`
    pub fn new(config: &Config) -> Self {
        ViewNoteService {
            source: NoteSource::new(config.max_file_size),
            splitter: EntrySplitter::new(config.max_chunk_size),
        }
    }

    /// Check the header and split the buffer if it is a tag note
    pub fn parse(&self, bytes: &[u8]) -> Result<NoteOutcome> {
        if !is_tag_note(bytes)? {
            return Ok(NoteOutcome::NotTagNote);
        }

        let entries = self.splitter.split(bytes)?;
        Ok(NoteOutcome::Entries(entries))
    }

    /// Read and parse the file at `path`
    pub fn load(&self, path: &Path) -> Result<NoteOutcome> {
        let bytes = self.source.read(path)?;
        let outcome = self.parse(&bytes)?;

        match &outcome {
            NoteOutcome::Entries(entries) => {
                log::info!("Parsed {} entries from {}", entries.len(), path.display())
            }
            NoteOutcome::NotTagNote => log::info!("{} is not a tag note", path.display()),
        }

        Ok(outcome)
    }

    /// Hand an outcome to the view
    pub fn present(&self, outcome: &NoteOutcome, view: &mut dyn EntryView) -> Result<()> {
        match outcome {
            NoteOutcome::Entries(entries) if !entries.is_empty() => view.show_entries(entries),
            _ => view.show_consolation(),
        }
    }

    /// Open the next file from `chooser` and present it.
    ///
    /// Returns `false` when the chooser cancels. Load errors are returned to
    /// the caller.
    pub fn view_next(
        &self,
        chooser: &mut dyn FileChooser,
        view: &mut dyn EntryView,
    ) -> Result<bool> {
        let path = match chooser.choose()? {
            Some(path) => path,
            None => return Ok(false),
        };

        let outcome = self.load(&path)?;
        self.present(&outcome, view)?;
        Ok(true)
    }

    /// Open files from `chooser` until it cancels.
    ///
    /// A file that fails to load is logged and skipped, the loop goes on
    /// with the next choice. Errors from the chooser or the view end it.
    pub fn run_viewer(
        &self,
        chooser: &mut dyn FileChooser,
        view: &mut dyn EntryView,
    ) -> Result<()> {
        while let Some(path) = chooser.choose()? {
            match self.load(&path) {
                Ok(outcome) => self.present(&outcome, view)?,
                Err(e) => log::error!("Opening {}: {}", path.display(), e),
            }
        }

        log::debug!("File selection cancelled");
        Ok(())
    }
}
