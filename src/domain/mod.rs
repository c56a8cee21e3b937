//! Domain layer - Tag note format and entry model

pub mod notes;

pub use notes::{is_tag_note, split_entries, Entry, EntrySplitter, TagFilter};
