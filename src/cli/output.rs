//! Output formatting utilities

use crate::application::{EntryView, ScannedNote, CONSOLATION};
use crate::domain::Entry;
use crate::error::Result;
use std::io::Write;

/// Render tags as a row of labels: `[work] [ideas]`
fn format_tag_row(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("[{}]", tag))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format entries for display: tag row, then indented content lines
pub fn format_entries(entries: &[Entry]) -> String {
    let mut output = String::new();

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format_tag_row(&entry.tags));
        output.push('\n');

        for line in entry.content.trim_end_matches('\n').lines() {
            if line.is_empty() {
                output.push('\n');
            } else {
                output.push_str(&format!("  {}\n", line));
            }
        }
    }

    output
}

/// Format a list of tags for display.
pub fn format_tag_list(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        output.push_str(&format!("{}\n", tag));
    }

    output
}

/// Format scan results: entry count and relative path per line
pub fn format_scan_results(notes: &[ScannedNote]) -> String {
    if notes.is_empty() {
        return "No tag notes found".to_string();
    }

    let mut output = String::new();
    for note in notes {
        output.push_str(&format!("{:>5}  {}\n", note.entries, note.path.display()));
    }
    output
}

/// Entry view writing plain text to any writer
pub struct TerminalView<W> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        TerminalView { out }
    }
}

impl<W: Write> EntryView for TerminalView<W> {
    fn show_entries(&mut self, entries: &[Entry]) -> Result<()> {
        write!(self.out, "{}", format_entries(entries))?;
        self.out.flush()?;
        Ok(())
    }

    fn show_consolation(&mut self) -> Result<()> {
        writeln!(self.out, "{}", CONSOLATION)?;
        self.out.flush()?;
        Ok(())
    }
}
