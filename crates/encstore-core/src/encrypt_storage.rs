//! The encrypted key-value engine.
//!
//! `EncryptStorage` sits between callers and a [`StorageBackend`]: keys are
//! namespaced by the configured prefix, values are encoded and encrypted on
//! the way in, and decrypted and decoded on the way out. The backend only
//! ever sees namespaced keys and ciphertext.

use std::sync::Arc;

use secrecy::SecretString;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::cipher::{get_encryption, EncAlgorithm, Encryption};
use crate::crypto::validate_secret_key;
use crate::error::Result;
use crate::keyspace::KeySpace;
use crate::options::{EncryptStorageOptions, GetFromPatternOptions, RemoveFromPatternOptions};
use crate::storage::{StorageBackend, StorageHost, StorageType};
use crate::value::{decode_value, encode_value};

/// Result of a pattern lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternMatch {
    /// Value of the first matching key (`multiple: false`).
    Single(Value),
    /// Caller key to value for every match, in backend enumeration order.
    Multiple(Map<String, Value>),
}

impl PatternMatch {
    /// Collapse into one JSON value; `Multiple` becomes an object.
    pub fn into_value(self) -> Value {
        match self {
            PatternMatch::Single(value) => value,
            PatternMatch::Multiple(map) => Value::Object(map),
        }
    }
}

/// Encrypted key-value store over a storage backend.
///
/// The secret lives only inside the encryption strategy, which is private
/// to this struct. Nothing here implements `Serialize` and `Debug` never
/// prints key material.
pub struct EncryptStorage {
    encryption: Box<dyn Encryption>,
    storage: Arc<dyn StorageBackend>,
    keyspace: KeySpace,
    storage_type: StorageType,
    state_management_use: bool,
}

impl EncryptStorage {
    /// Build an engine over the backend `host` provides for
    /// `options.storage_type`.
    ///
    /// # Errors
    ///
    /// Returns `EncStoreError::InvalidSecretKey` if the secret is shorter
    /// than 10 characters. Nothing else happens in that case: no backend is
    /// selected and no key is derived.
    pub fn new(secret_key: &str, host: &StorageHost, options: EncryptStorageOptions) -> Result<Self> {
        validate_secret_key(secret_key)?;
        let storage = host.backend(options.storage_type);
        Self::build(secret_key, storage, options)
    }

    /// Build an engine over a caller-supplied backend.
    ///
    /// `options.storage_type` is recorded but not used for selection.
    pub fn with_backend(
        secret_key: &str,
        storage: Arc<dyn StorageBackend>,
        options: EncryptStorageOptions,
    ) -> Result<Self> {
        validate_secret_key(secret_key)?;
        Self::build(secret_key, storage, options)
    }

    fn build(
        secret_key: &str,
        storage: Arc<dyn StorageBackend>,
        options: EncryptStorageOptions,
    ) -> Result<Self> {
        let secret = SecretString::from(secret_key.to_string());
        let encryption = get_encryption(options.enc_algorithm, &secret)?;

        tracing::debug!(
            prefix = %options.prefix,
            storage_type = %options.storage_type,
            algorithm = %options.enc_algorithm,
            state_management_use = options.state_management_use,
            "encrypt storage ready"
        );

        Ok(Self {
            encryption,
            storage,
            keyspace: KeySpace::new(options.prefix),
            storage_type: options.storage_type,
            state_management_use: options.state_management_use,
        })
    }

    pub fn prefix(&self) -> &str {
        self.keyspace.prefix()
    }

    pub fn storage_type(&self) -> StorageType {
        self.storage_type
    }

    pub fn enc_algorithm(&self) -> EncAlgorithm {
        self.encryption.algorithm()
    }

    pub fn state_management_use(&self) -> bool {
        self.state_management_use
    }

    /// Number of keys in the backend, across all prefixes.
    ///
    /// A failing backend counts as empty.
    pub fn length(&self) -> usize {
        match self.storage.length() {
            Ok(length) => length,
            Err(err) => {
                tracing::warn!(error = %err, "storage length unavailable");
                0
            }
        }
    }

    /// Encode, encrypt and store `value` under `key`.
    ///
    /// Strings are stored as-is; every other value is stored as its JSON text.
    pub fn set_item<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        let storage_key = self.keyspace.namespaced(key);
        let plaintext = encode_value(value)?;
        let ciphertext = self.encryption.encrypt(&plaintext)?;

        tracing::trace!(key = %storage_key, "set item");
        self.storage.set_item(&storage_key, &ciphertext)
    }

    /// Read and decrypt the value under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(None)` if nothing is stored under `key`
    /// - the decrypted text as a JSON string in state-management mode
    /// - otherwise the text parsed as JSON, or the raw text if it is not JSON
    pub fn get_item(&self, key: &str) -> Result<Option<Value>> {
        let storage_key = self.keyspace.namespaced(key);
        tracing::trace!(key = %storage_key, "get item");

        let ciphertext = match self.storage.get_item(&storage_key)? {
            Some(ciphertext) if !ciphertext.is_empty() => ciphertext,
            _ => return Ok(None),
        };

        let plaintext = self.encryption.decrypt(&ciphertext)?;
        Ok(Some(decode_value(plaintext, self.state_management_use)))
    }

    /// [`get_item`](Self::get_item) converted into `T`.
    ///
    /// # Errors
    ///
    /// Returns `EncStoreError::Serialization` if the stored value does not
    /// deserialize into `T`.
    pub fn get_item_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.get_item(key)? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Remove `key`. Absent keys are ignored.
    pub fn remove_item(&self, key: &str) -> Result<()> {
        let storage_key = self.keyspace.namespaced(key);
        tracing::trace!(key = %storage_key, "remove item");
        self.storage.remove_item(&storage_key)
    }

    fn matching_keys(&self, pattern: &str, exact: bool) -> Result<Vec<String>> {
        let keys = self.storage.keys()?;
        let matched = self.keyspace.filter(&keys, pattern, exact);

        tracing::debug!(
            pattern,
            exact,
            scanned = keys.len(),
            matched = matched.len(),
            "pattern scan"
        );
        Ok(matched)
    }

    /// Look up every key selected by `pattern`.
    ///
    /// Matching scans all backend keys:
    /// - `exact`: the key equal to the namespaced `pattern`
    /// - otherwise: keys containing `pattern`, and the prefix text when one
    ///   is configured
    ///
    /// Each match is read back through [`get_item`](Self::get_item) using the
    /// key with the prefix segment removed.
    ///
    /// # Returns
    ///
    /// `Ok(None)` when nothing matches. With `multiple` (the default) a map
    /// of caller key to value, skipping matches that read back as nothing;
    /// otherwise the value of the first match.
    pub fn get_item_from_pattern(
        &self,
        pattern: &str,
        options: GetFromPatternOptions,
    ) -> Result<Option<PatternMatch>> {
        let keys = self.matching_keys(pattern, options.exact)?;

        if !options.multiple {
            let Some(first) = keys.first() else {
                return Ok(None);
            };
            let value = self.get_item(&self.keyspace.strip(first))?;
            return Ok(value.map(PatternMatch::Single));
        }

        if keys.is_empty() {
            return Ok(None);
        }

        let mut values = Map::new();
        for key in keys {
            let raw_key = self.keyspace.strip(&key);
            if let Some(value) = self.get_item(&raw_key)? {
                values.insert(raw_key, value);
            }
        }

        Ok(Some(PatternMatch::Multiple(values)))
    }

    /// Remove every key selected by `pattern`, using the same matching
    /// rules as [`get_item_from_pattern`](Self::get_item_from_pattern).
    pub fn remove_item_from_pattern(
        &self,
        pattern: &str,
        options: RemoveFromPatternOptions,
    ) -> Result<()> {
        for key in self.matching_keys(pattern, options.exact)? {
            self.storage.remove_item(&key)?;
        }
        Ok(())
    }

    /// Remove every key in the backend.
    ///
    /// This is not limited to this engine's prefix: keys written by other
    /// engines sharing the backend are removed too.
    pub fn clear(&self) -> Result<()> {
        tracing::debug!(storage_type = %self.storage_type, "clearing storage");
        self.storage.clear()
    }

    /// The backend key at `index`, exactly as stored (prefix included).
    pub fn key(&self, index: usize) -> Result<Option<String>> {
        self.storage.key(index)
    }

    /// Encrypt an arbitrary string without touching the store.
    pub fn encrypt_string(&self, plaintext: &str) -> Result<String> {
        self.encryption.encrypt(plaintext)
    }

    /// Decrypt a string produced by [`encrypt_string`](Self::encrypt_string).
    pub fn decrypt_string(&self, ciphertext: &str) -> Result<String> {
        self.encryption.decrypt(ciphertext)
    }
}

impl std::fmt::Debug for EncryptStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptStorage")
            .field("prefix", &self.keyspace.prefix())
            .field("storage_type", &self.storage_type)
            .field("enc_algorithm", &self.encryption.algorithm())
            .field("state_management_use", &self.state_management_use)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
