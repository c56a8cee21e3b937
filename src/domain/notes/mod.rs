//! Tag note format: header detection and entry splitting

pub mod entry;
pub mod header;
pub mod splitter;
pub mod tags;

// Re-export main types
pub use entry::Entry;
pub use header::{is_tag_note, HEADER_SIGNATURE};
pub use splitter::{classify_chunk, split_entries, Chunk, Chunks, EntrySplitter};
pub use tags::{unique_tags, TagFilter};
