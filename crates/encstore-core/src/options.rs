//! Engine configuration and pattern options.
//!
//! Options are fixed at construction. All fields have defaults, so a config
//! file only needs the settings it changes.

use serde::{Deserialize, Serialize};

use crate::cipher::EncAlgorithm;
use crate::storage::StorageType;

/// Construction options for an engine.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EncryptStorageOptions {
    /// Namespace prepended to every key as `prefix:key`. Empty means none.
    pub prefix: String,
    /// Return decrypted text without JSON decoding.
    pub state_management_use: bool,
    /// Backend to persist into.
    pub storage_type: StorageType,
    /// Encryption strategy.
    pub enc_algorithm: EncAlgorithm,
}

impl EncryptStorageOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_state_management_use(mut self, enabled: bool) -> Self {
        self.state_management_use = enabled;
        self
    }

    pub fn with_storage_type(mut self, storage_type: StorageType) -> Self {
        self.storage_type = storage_type;
        self
    }

    pub fn with_enc_algorithm(mut self, algorithm: EncAlgorithm) -> Self {
        self.enc_algorithm = algorithm;
        self
    }
}

/// Options for pattern removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RemoveFromPatternOptions {
    /// Match only the key equal to the namespaced pattern.
    pub exact: bool,
}

impl RemoveFromPatternOptions {
    pub fn exact() -> Self {
        Self { exact: true }
    }
}

/// Options for pattern lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetFromPatternOptions {
    /// Match only the key equal to the namespaced pattern.
    pub exact: bool,
    /// Return every match keyed by caller key, rather than the first value.
    pub multiple: bool,
}

impl Default for GetFromPatternOptions {
    fn default() -> Self {
        Self {
            exact: false,
            multiple: true,
        }
    }
}

impl GetFromPatternOptions {
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EncryptStorageOptions::default();
        assert_eq!(options.prefix, "");
        assert!(!options.state_management_use);
        assert_eq!(options.storage_type, StorageType::Persistent);
        assert_eq!(options.enc_algorithm, EncAlgorithm::Aes);

        let pattern = GetFromPatternOptions::default();
        assert!(!pattern.exact);
        assert!(pattern.multiple);

        assert!(!RemoveFromPatternOptions::default().exact);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let options: EncryptStorageOptions =
            serde_json::from_str(r#"{ "prefix": "app", "enc_algorithm": "XChaCha20" }"#).unwrap();

        assert_eq!(options.prefix, "app");
        assert_eq!(options.enc_algorithm, EncAlgorithm::XChaCha20);
        assert_eq!(options.storage_type, StorageType::Persistent);
    }

    #[test]
    fn test_unknown_algorithm_in_config_rejected() {
        let result = serde_json::from_str::<EncryptStorageOptions>(r#"{ "enc_algorithm": "RC4" }"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_builders() {
        let options = EncryptStorageOptions::new()
            .with_prefix("app")
            .with_state_management_use(true)
            .with_storage_type(StorageType::Session)
            .with_enc_algorithm(EncAlgorithm::Age);

        assert_eq!(options.prefix, "app");
        assert!(options.state_management_use);
        assert_eq!(options.storage_type, StorageType::Session);
        assert_eq!(options.enc_algorithm, EncAlgorithm::Age);

        let pattern = GetFromPatternOptions::default().exact(true).multiple(false);
        assert!(pattern.exact && !pattern.multiple);
    }
}
