//! Parsed tag entry

use serde::Serialize;

/// A piece of note content with the tags written above it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Trimmed tags in source order; may contain empty strings
    pub tags: Vec<String>,

    /// Text following the closing marker, up to the next entry
    pub content: String,
}

impl Entry {
    pub fn new(tags: Vec<String>, content: String) -> Self {
        Self { tags, content }
    }

    /// Check whether any tag equals `tag` exactly
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
