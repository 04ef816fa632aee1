//! Resolving configuration, secret and storage for a command.

use std::io::IsTerminal;
use std::path::PathBuf;

use dialoguer::Password;
use encstore_core::crypto::validate_secret_key;
use encstore_core::{
    EncAlgorithm, EncStoreError, EncryptStorage, EncryptStorageOptions, StorageHost, StorageType,
};
use zeroize::Zeroizing;

use crate::cli::Cli;
use crate::config::{default_config_path, default_store_path, read_config, EncstoreConfig};
use crate::constants::SECRET_ENV;
use crate::errors::CliError;

pub fn resolve_config_path(cli: &Cli) -> anyhow::Result<PathBuf> {
    match cli.config.as_deref() {
        Some(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
        _ => default_config_path(),
    }
}

pub fn load_config(cli: &Cli) -> anyhow::Result<EncstoreConfig> {
    read_config(&resolve_config_path(cli)?)
}

pub fn resolve_store_path(cli: &Cli, config: &EncstoreConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.store.as_deref() {
        return Ok(PathBuf::from(path));
    }
    match config.store.path.as_deref() {
        Some(path) => Ok(PathBuf::from(path)),
        None => default_store_path(),
    }
}

/// Engine options from the config file with command-line overrides applied.
pub fn resolve_options(
    cli: &Cli,
    config: &EncstoreConfig,
) -> Result<EncryptStorageOptions, EncStoreError> {
    let mut options = config.engine.clone();
    if let Some(prefix) = cli.prefix.as_ref() {
        options.prefix = prefix.clone();
    }
    if let Some(name) = cli.algorithm.as_deref() {
        options.enc_algorithm = name.parse::<EncAlgorithm>()?;
    }
    if cli.raw {
        options.state_management_use = true;
    }
    Ok(options)
}

/// Commands need a backend that outlives the process.
pub fn ensure_persistent(options: &EncryptStorageOptions) -> Result<(), CliError> {
    if options.storage_type == StorageType::Session {
        return Err(CliError::invalid_input(
            "storage_type \"session\" does not outlive a single command; use \"persistent\"",
        ));
    }
    Ok(())
}

/// Secret from the environment, or a hidden prompt when attached to a terminal.
pub fn read_secret() -> anyhow::Result<Zeroizing<String>> {
    if let Ok(value) = std::env::var(SECRET_ENV) {
        if !value.is_empty() {
            return Ok(Zeroizing::new(value));
        }
    }

    if !std::io::stdin().is_terminal() {
        return Err(anyhow::anyhow!(
            "No secret available. Set {} or run interactively.",
            SECRET_ENV
        ));
    }

    let secret = Password::new()
        .with_prompt("Enter secret key")
        .interact()
        .map_err(|e| anyhow::anyhow!("Failed to read secret: {}", e))?;
    Ok(Zeroizing::new(secret))
}

/// Build the engine a command runs against.
pub fn open_storage(cli: &Cli) -> anyhow::Result<EncryptStorage> {
    let config = load_config(cli)?;
    let options = resolve_options(cli, &config)?;
    ensure_persistent(&options)?;
    let secret = read_secret()?;
    validate_secret_key(&secret)?;

    let store_path = resolve_store_path(cli, &config)?;
    let host = StorageHost::open(&store_path)?;
    tracing::debug!(store = %store_path.display(), "opening encrypted store");

    Ok(EncryptStorage::new(&secret, &host, options)?)
}

/// Engine over throwaway in-memory backends, for `encrypt` and `decrypt`.
pub fn open_detached(cli: &Cli) -> anyhow::Result<EncryptStorage> {
    let config = load_config(cli)?;
    let options = resolve_options(cli, &config)?;
    let secret = read_secret()?;
    validate_secret_key(&secret)?;

    Ok(EncryptStorage::new(&secret, &StorageHost::in_memory(), options)?)
}
