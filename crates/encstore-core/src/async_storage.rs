//! `async` facade over [`EncryptStorage`].
//!
//! Every method resolves with exactly what the synchronous engine returns.
//! Nothing is spawned or deferred to a background task, so the facade works
//! under any executor. Construction stays synchronous.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::encrypt_storage::{EncryptStorage, PatternMatch};
use crate::error::Result;
use crate::options::{EncryptStorageOptions, GetFromPatternOptions, RemoveFromPatternOptions};
use crate::storage::{StorageBackend, StorageHost};

/// Awaitable wrapper around an [`EncryptStorage`].
#[derive(Debug)]
pub struct AsyncEncryptStorage {
    inner: EncryptStorage,
}

impl AsyncEncryptStorage {
    /// See [`EncryptStorage::new`]; fails the same way, synchronously.
    pub fn new(secret_key: &str, host: &StorageHost, options: EncryptStorageOptions) -> Result<Self> {
        Ok(Self {
            inner: EncryptStorage::new(secret_key, host, options)?,
        })
    }

    /// See [`EncryptStorage::with_backend`].
    pub fn with_backend(
        secret_key: &str,
        storage: Arc<dyn StorageBackend>,
        options: EncryptStorageOptions,
    ) -> Result<Self> {
        Ok(Self {
            inner: EncryptStorage::with_backend(secret_key, storage, options)?,
        })
    }

    /// The wrapped engine.
    pub fn inner(&self) -> &EncryptStorage {
        &self.inner
    }

    pub async fn length(&self) -> usize {
        self.inner.length()
    }

    pub async fn set_item<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<()> {
        self.inner.set_item(key, value)
    }

    pub async fn get_item(&self, key: &str) -> Result<Option<Value>> {
        self.inner.get_item(key)
    }

    pub async fn get_item_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        self.inner.get_item_as(key)
    }

    pub async fn remove_item(&self, key: &str) -> Result<()> {
        self.inner.remove_item(key)
    }

    pub async fn get_item_from_pattern(
        &self,
        pattern: &str,
        options: GetFromPatternOptions,
    ) -> Result<Option<PatternMatch>> {
        self.inner.get_item_from_pattern(pattern, options)
    }

    pub async fn remove_item_from_pattern(
        &self,
        pattern: &str,
        options: RemoveFromPatternOptions,
    ) -> Result<()> {
        self.inner.remove_item_from_pattern(pattern, options)
    }

    pub async fn clear(&self) -> Result<()> {
        self.inner.clear()
    }

    pub async fn key(&self, index: usize) -> Result<Option<String>> {
        self.inner.key(index)
    }

    pub async fn encrypt_string(&self, plaintext: &str) -> Result<String> {
        self.inner.encrypt_string(plaintext)
    }

    pub async fn decrypt_string(&self, ciphertext: &str) -> Result<String> {
        self.inner.decrypt_string(ciphertext)
    }
}

impl From<EncryptStorage> for AsyncEncryptStorage {
    fn from(inner: EncryptStorage) -> Self {
        Self { inner }
    }
}
