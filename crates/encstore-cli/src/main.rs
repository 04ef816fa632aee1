//! Encstore CLI - encrypted key-value storage from the command line
//!
//! Thin command-line surface over `encstore-core`: every subcommand maps to
//! one engine operation against the configured store.

mod app;
mod cli;
mod config;
mod constants;
mod errors;
mod output;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use encstore_core::{EncryptStorage, GetFromPatternOptions, PatternMatch, RemoveFromPatternOptions};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::constants::LOG_ENV;
use crate::errors::{exit_code_for, CliError};
use crate::output::print_value;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(exit_code_for(&e));
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Set { key, value, json } => {
            let storage = app::open_storage(cli)?;
            if *json {
                let parsed: Value = serde_json::from_str(value).map_err(|e| {
                    CliError::invalid_input(format!("VALUE is not valid JSON: {}", e))
                })?;
                storage.set_item(key, &parsed)?;
            } else {
                storage.set_item(key, value.as_str())?;
            }
            if !cli.quiet {
                eprintln!("Stored {}", key);
            }
        }
        Commands::Get { key } => {
            let storage = app::open_storage(cli)?;
            let value = storage
                .get_item(key)?
                .ok_or_else(|| CliError::not_found(format!("Key \"{}\" not found", key)))?;
            print_value(&value);
        }
        Commands::Remove { key } => {
            let storage = app::open_storage(cli)?;
            storage.remove_item(key)?;
            if !cli.quiet {
                eprintln!("Removed {}", key);
            }
        }
        Commands::Find {
            pattern,
            exact,
            first,
        } => {
            let storage = app::open_storage(cli)?;
            let options = GetFromPatternOptions::default()
                .exact(*exact)
                .multiple(!*first);
            find(&storage, pattern, options)?;
        }
        Commands::Purge { pattern, exact } => {
            let storage = app::open_storage(cli)?;
            let before = storage.length();
            storage.remove_item_from_pattern(pattern, RemoveFromPatternOptions { exact: *exact })?;
            if !cli.quiet {
                let removed = before.saturating_sub(storage.length());
                eprintln!("Removed {} key(s) matching \"{}\"", removed, pattern);
            }
        }
        Commands::Clear { yes } => {
            if !*yes {
                return Err(CliError::invalid_input(
                    "Refusing to clear the whole store without --yes",
                )
                .into());
            }
            let storage = app::open_storage(cli)?;
            storage.clear()?;
            if !cli.quiet {
                eprintln!("Cleared store");
            }
        }
        Commands::Key { index } => {
            let storage = app::open_storage(cli)?;
            let key = storage
                .key(*index)?
                .ok_or_else(|| CliError::not_found(format!("No key at index {}", index)))?;
            println!("{}", key);
        }
        Commands::Len => {
            let storage = app::open_storage(cli)?;
            println!("{}", storage.length());
        }
        Commands::Encrypt { text } => {
            let storage = app::open_detached(cli)?;
            println!("{}", storage.encrypt_string(text)?);
        }
        Commands::Decrypt { text } => {
            let storage = app::open_detached(cli)?;
            println!("{}", storage.decrypt_string(text)?);
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(*shell, &mut cmd, "encstore", &mut std::io::stdout());
        }
    }

    Ok(())
}

fn find(
    storage: &EncryptStorage,
    pattern: &str,
    options: GetFromPatternOptions,
) -> anyhow::Result<()> {
    let not_found = || CliError::not_found(format!("No value matches \"{}\"", pattern));
    match storage.get_item_from_pattern(pattern, options)? {
        Some(PatternMatch::Single(value)) => print_value(&value),
        Some(PatternMatch::Multiple(map)) if !map.is_empty() => print_value(&Value::Object(map)),
        _ => return Err(not_found().into()),
    }
    Ok(())
}
