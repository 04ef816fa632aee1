//! Explicit holder of the session and persistent backends.
//!
//! Engines pick their backend from a host by [`StorageType`]. Engines built
//! from the same host share backends, so one engine's writes are visible to
//! another with a different prefix.

use std::path::Path;
use std::sync::Arc;

use crate::error::Result;
use crate::storage::memory::MemoryStorage;
use crate::storage::sqlite::SqliteStorage;
use crate::storage::traits::StorageBackend;
use crate::storage::types::StorageType;

/// One backend per [`StorageType`].
#[derive(Clone)]
pub struct StorageHost {
    session: Arc<dyn StorageBackend>,
    persistent: Arc<dyn StorageBackend>,
}

impl StorageHost {
    /// Both backends in memory. Nothing outlives the host.
    pub fn in_memory() -> Self {
        Self {
            session: Arc::new(MemoryStorage::new()),
            persistent: Arc::new(MemoryStorage::new()),
        }
    }

    /// Session backend in memory, persistent backend in a SQLite file at `path`.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            session: Arc::new(MemoryStorage::new()),
            persistent: Arc::new(SqliteStorage::open(path)?),
        })
    }

    /// Use caller-supplied backends.
    pub fn with_backends(
        session: Arc<dyn StorageBackend>,
        persistent: Arc<dyn StorageBackend>,
    ) -> Self {
        Self {
            session,
            persistent,
        }
    }

    /// The backend for `storage_type`.
    pub fn backend(&self, storage_type: StorageType) -> Arc<dyn StorageBackend> {
        match storage_type {
            StorageType::Session => Arc::clone(&self.session),
            StorageType::Persistent => Arc::clone(&self.persistent),
        }
    }
}

impl std::fmt::Debug for StorageHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageHost").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backends_are_distinct() {
        let host = StorageHost::in_memory();
        host.backend(StorageType::Session)
            .set_item("k", "session")
            .unwrap();

        assert_eq!(host.backend(StorageType::Persistent).get_item("k").unwrap(), None);
        assert_eq!(
            host.backend(StorageType::Session).get_item("k").unwrap(),
            Some("session".to_string())
        );
    }

    #[test]
    fn test_clones_share_backends() {
        let host = StorageHost::in_memory();
        let clone = host.clone();
        clone
            .backend(StorageType::Persistent)
            .set_item("shared", "yes")
            .unwrap();

        assert_eq!(
            host.backend(StorageType::Persistent).get_item("shared").unwrap(),
            Some("yes".to_string())
        );
    }
}
