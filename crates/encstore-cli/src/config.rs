use std::path::{Path, PathBuf};

use encstore_core::EncryptStorageOptions;
use serde::{Deserialize, Serialize};

/// On-disk CLI configuration.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct EncstoreConfig {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub engine: EncryptStorageOptions,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreSection {
    /// SQLite file for the persistent backend.
    pub path: Option<String>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_store_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("store.db"))
}

/// Read the config at `path`; a missing file means all defaults.
pub fn read_config(path: &Path) -> anyhow::Result<EncstoreConfig> {
    if !path.exists() {
        return Ok(EncstoreConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("encstore"));
        }
    }
    Ok(home_dir()?.join(".config").join("encstore"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("encstore"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("encstore"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use encstore_core::{EncAlgorithm, StorageType};

    #[test]
    fn test_full_config_parses() {
        let config: EncstoreConfig = toml::from_str(
            r#"
            [store]
            path = "/tmp/store.db"

            [engine]
            prefix = "app"
            state_management_use = true
            storage_type = "session"
            enc_algorithm = "XChaCha20"
            "#,
        )
        .unwrap();

        assert_eq!(config.store.path.as_deref(), Some("/tmp/store.db"));
        assert_eq!(config.engine.prefix, "app");
        assert!(config.engine.state_management_use);
        assert_eq!(config.engine.storage_type, StorageType::Session);
        assert_eq!(config.engine.enc_algorithm, EncAlgorithm::XChaCha20);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: EncstoreConfig = toml::from_str("").unwrap();

        assert!(config.store.path.is_none());
        assert_eq!(config.engine, EncryptStorageOptions::default());
    }

    #[test]
    fn test_unknown_algorithm_fails_to_parse() {
        let result = toml::from_str::<EncstoreConfig>("[engine]\nenc_algorithm = \"Rabbit\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = read_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.engine, EncryptStorageOptions::default());
    }
}
