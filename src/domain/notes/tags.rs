//! Tag listing and filtering over parsed entries

use crate::domain::notes::Entry;
use std::collections::BTreeSet;

/// Collect the distinct non-empty tags of all entries, sorted
pub fn unique_tags(entries: &[Entry]) -> Vec<String> {
    let tags: BTreeSet<&str> = entries
        .iter()
        .flat_map(|entry| entry.tags.iter())
        .map(String::as_str)
        .filter(|tag| !tag.is_empty())
        .collect();

    tags.into_iter().map(str::to_string).collect()
}

/// Selects entries carrying a given tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFilter {
    tag: String,
    case_insensitive: bool,
}

impl TagFilter {
    pub fn new(tag: &str, case_insensitive: bool) -> Self {
        Self {
            tag: tag.trim().to_string(),
            case_insensitive,
        }
    }

    /// Check if the entry has the filter tag
    pub fn matches(&self, entry: &Entry) -> bool {
        if self.case_insensitive {
            entry.tags.iter().any(|t| t.eq_ignore_ascii_case(&self.tag))
        } else {
            entry.has_tag(&self.tag)
        }
    }

    /// Keep matching entries, preserving document order
    pub fn apply(&self, entries: Vec<Entry>) -> Vec<Entry> {
        entries.into_iter().filter(|e| self.matches(e)).collect()
    }
}
