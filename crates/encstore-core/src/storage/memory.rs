//! In-memory storage backend.
//!
//! Lives exactly as long as the handle that owns it, which makes it the
//! session-scoped backend. Keys enumerate in insertion order.

use std::sync::{Mutex, MutexGuard};

use crate::error::{EncStoreError, Result};
use crate::storage::traits::StorageBackend;

/// Insertion-ordered in-memory store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<Vec<(String, String)>>,
}

impl MemoryStorage {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_items(&self) -> Result<MutexGuard<'_, Vec<(String, String)>>> {
        self.items
            .lock()
            .map_err(|_| EncStoreError::Storage("Memory storage lock poisoned".to_string()))
    }
}

impl StorageBackend for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .lock_items()?
            .iter()
            .find(|(stored, _)| stored == key)
            .map(|(_, value)| value.clone()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.lock_items()?;
        match items.iter_mut().find(|(stored, _)| stored == key) {
            // Overwrites keep their original position.
            Some((_, existing)) => *existing = value.to_string(),
            None => items.push((key.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.lock_items()?.retain(|(stored, _)| stored != key);
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.lock_items()?.clear();
        Ok(())
    }

    fn length(&self) -> Result<usize> {
        Ok(self.lock_items()?.len())
    }

    fn key(&self, index: usize) -> Result<Option<String>> {
        Ok(self.lock_items()?.get(index).map(|(key, _)| key.clone()))
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.lock_items()?.iter().map(|(key, _)| key.clone()).collect())
    }
}
