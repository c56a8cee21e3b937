//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, OutputFormat};
pub use output::{format_entries, format_scan_results, format_tag_list, TerminalView};
