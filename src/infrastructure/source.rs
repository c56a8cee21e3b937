//! Note file acquisition: bounded reads and file selection

use crate::error::{DentryError, Result};
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Reads note files into memory, refusing files above a size limit
#[derive(Debug, Clone, Copy)]
pub struct NoteSource {
    max_file_size: u64,
}

impl NoteSource {
    pub fn new(max_file_size: u64) -> Self {
        NoteSource { max_file_size }
    }

    /// Read the whole file at `path`
    pub fn read(&self, path: &Path) -> Result<Vec<u8>> {
        let size = fs::metadata(path)?.len();
        if size > self.max_file_size {
            return Err(DentryError::FileTooLarge {
                path: path.to_path_buf(),
                size,
                limit: self.max_file_size,
            });
        }

        log::info!("Reading {} ({} bytes)", path.display(), size);
        fs::read(path).map_err(DentryError::Io)
    }
}

/// Supplies the next file to open; `None` means the user cancelled
pub trait FileChooser {
    fn choose(&mut self) -> Result<Option<PathBuf>>;
}

/// Yields a single preselected path, then cancels
#[derive(Debug)]
pub struct FixedChooser {
    path: Option<PathBuf>,
}

impl FixedChooser {
    pub fn new(path: PathBuf) -> Self {
        FixedChooser { path: Some(path) }
    }
}

impl FileChooser for FixedChooser {
    fn choose(&mut self) -> Result<Option<PathBuf>> {
        Ok(self.path.take())
    }
}

/// Asks for a path on each call; an empty line or end of input cancels
pub struct PromptChooser<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptChooser<R, W> {
    pub fn new(input: R, output: W) -> Self {
        PromptChooser { input, output }
    }
}

impl<R: BufRead, W: Write> FileChooser for PromptChooser<R, W> {
    fn choose(&mut self) -> Result<Option<PathBuf>> {
        write!(self.output, "Open file (empty to quit): ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let path = line.trim();
        if path.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(path)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_read_within_limit() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("note.txt");
        fs::write(&path, "!Tagnotes\n").unwrap();

        let bytes = NoteSource::new(100).read(&path).unwrap();
        assert_eq!(bytes, b"!Tagnotes\n");
    }

    #[test]
    fn test_read_too_large() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("note.txt");
        fs::write(&path, "0123456789").unwrap();

        match NoteSource::new(5).read(&path).unwrap_err() {
            DentryError::FileTooLarge { size, limit, .. } => {
                assert_eq!(size, 10);
                assert_eq!(limit, 5);
            }
            other => panic!("Expected FileTooLarge, got {:?}", other),
        }
    }

    #[test]
    fn test_read_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = NoteSource::new(5).read(&temp.path().join("missing.txt"));
        assert!(matches!(result, Err(DentryError::Io(_))));
    }

    #[test]
    fn test_fixed_chooser_yields_once() {
        let mut chooser = FixedChooser::new(PathBuf::from("a.txt"));
        assert_eq!(chooser.choose().unwrap(), Some(PathBuf::from("a.txt")));
        assert_eq!(chooser.choose().unwrap(), None);
    }

    #[test]
    fn test_prompt_chooser() {
        let input = Cursor::new("  notes/a.txt \nb.txt\n\nc.txt\n");
        let mut output = Vec::new();
        let mut chooser = PromptChooser::new(input, &mut output);

        assert_eq!(chooser.choose().unwrap(), Some(PathBuf::from("notes/a.txt")));
        assert_eq!(chooser.choose().unwrap(), Some(PathBuf::from("b.txt")));
        assert_eq!(chooser.choose().unwrap(), None);

        let prompt = String::from_utf8(output).unwrap();
        assert_eq!(prompt.matches("Open file").count(), 3);
    }

    #[test]
    fn test_prompt_chooser_eof_cancels() {
        let mut chooser = PromptChooser::new(Cursor::new(""), Vec::new());
        assert_eq!(chooser.choose().unwrap(), None);
    }
}
