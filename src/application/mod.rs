//! Application layer - Use cases and orchestration

pub mod list_tags;
pub mod manage_config;
pub mod scan_notes;
pub mod view_note;

pub use list_tags::ListTagsService;
pub use manage_config::{format_chunk_limit, ConfigService};
pub use scan_notes::{ScanNotesService, ScannedNote};
pub use view_note::{EntryView, NoteOutcome, ViewNoteService, CONSOLATION};
