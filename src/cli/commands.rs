//! CLI command definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dentry")]
#[command(about = "Viewer for tag note files", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Tag note to view; prompts for files when omitted
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Config file (overrides DENTRY_CONFIG)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the entries of a tag note
    Show {
        /// Tag note to read
        file: PathBuf,

        /// Only show entries carrying this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Check whether a file is a tag note
    Check {
        /// File to inspect
        file: PathBuf,
    },

    /// List all tags used in a tag note
    Tags {
        /// Tag note to read
        file: PathBuf,
    },

    /// Find tag notes below a directory
    Scan {
        /// Directory to scan (default: current directory)
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show_with_filter() {
        let cli = Cli::try_parse_from([
            "dentry", "show", "notes.txt", "--tag", "work", "-f", "json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Show { file, tag, format }) => {
                assert_eq!(file, PathBuf::from("notes.txt"));
                assert_eq!(tag.as_deref(), Some("work"));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("Expected show command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_bare_file() {
        let cli = Cli::try_parse_from(["dentry", "-vv", "notes.txt"]).unwrap();
        assert_eq!(cli.file, Some(PathBuf::from("notes.txt")));
        assert_eq!(cli.verbose, 2);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from(["dentry", "tags", "a.txt", "--config", "d.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("d.toml")));
    }
}
