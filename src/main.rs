use clap::Parser;
use dentry::application::{
    format_chunk_limit, ConfigService, ListTagsService, NoteOutcome, ScanNotesService,
    ViewNoteService,
};
use dentry::cli::{format_scan_results, format_tag_list, Cli, Commands, OutputFormat, TerminalView};
use dentry::domain::TagFilter;
use dentry::error::DentryError;
use dentry::infrastructure::{Config, FixedChooser, PromptChooser};
use std::io;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<(), DentryError> {
    match cli.command {
        Some(Commands::Show { file, tag, format }) => {
            let config = Config::resolve(cli.config.as_deref())?;
            let service = ViewNoteService::new(&config);

            let outcome = match (service.load(&file)?, tag) {
                (NoteOutcome::Entries(entries), Some(tag)) => NoteOutcome::Entries(
                    TagFilter::new(&tag, config.case_insensitive_tags).apply(entries),
                ),
                (outcome, _) => outcome,
            };

            match format {
                OutputFormat::Text => {
                    let mut view = TerminalView::new(io::stdout().lock());
                    service.present(&outcome, &mut view)
                }
                OutputFormat::Json => match outcome {
                    NoteOutcome::Entries(entries) => {
                        println!("{}", serde_json::to_string_pretty(&entries)?);
                        Ok(())
                    }
                    NoteOutcome::NotTagNote => Err(DentryError::NotTagNote(file)),
                },
            }
        }
        Some(Commands::Check { file }) => {
            let config = Config::resolve(cli.config.as_deref())?;
            let service = ViewNoteService::new(&config);

            match service.load(&file)? {
                NoteOutcome::Entries(entries) => {
                    println!("{}: tag note with {} entries", file.display(), entries.len());
                    Ok(())
                }
                NoteOutcome::NotTagNote => Err(DentryError::NotTagNote(file)),
            }
        }
        Some(Commands::Tags { file }) => {
            let config = Config::resolve(cli.config.as_deref())?;
            let tags = ListTagsService::new(&config).execute(&file)?;
            println!("{}", format_tag_list(&tags).trim_end());
            Ok(())
        }
        Some(Commands::Scan { dir }) => {
            let config = Config::resolve(cli.config.as_deref())?;
            let notes = ScanNotesService::new(&config).execute(&dir)?;
            println!("{}", format_scan_results(&notes).trim_end());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let service = ConfigService::new(Config::locate(cli.config.as_deref()));

            if list {
                let config = service.list()?;
                println!("max_file_size = {}", config.max_file_size);
                println!("max_chunk_size = {}", format_chunk_limit(config.max_chunk_size));
                println!("case_insensitive_tags = {}", config.case_insensitive_tags);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: dentry config [--list | <key> [<value>]]");
                println!("Valid keys: max_file_size, max_chunk_size, case_insensitive_tags");
                Ok(())
            }
        }
        None => {
            let config = Config::resolve(cli.config.as_deref())?;
            let service = ViewNoteService::new(&config);
            let mut view = TerminalView::new(io::stdout());

            if let Some(file) = cli.file {
                // Errors for a single file reach the exit code
                service.view_next(&mut FixedChooser::new(file), &mut view)?;
                Ok(())
            } else {
                let mut chooser = PromptChooser::new(io::stdin().lock(), io::stderr());
                service.run_viewer(&mut chooser, &mut view)
            }
        }
    }
}
