//! Directory walking for note discovery

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A directory tree that may contain tag notes
#[derive(Debug, Clone)]
pub struct NoteDirectory {
    pub root: PathBuf,
}

impl NoteDirectory {
    /// Create a new directory handle with the given root
    pub fn new(root: PathBuf) -> Self {
        NoteDirectory { root }
    }

    /// List all regular files below the root, skipping hidden directories.
    ///
    /// Paths are returned sorted. Unreadable directory entries are logged and
    /// skipped.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }

        files.sort();
        files
    }

    /// Path relative to the root, for display
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}
