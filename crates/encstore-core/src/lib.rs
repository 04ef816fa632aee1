//! # Encstore Core
//!
//! Encrypted key-value storage over a flat, string-keyed store.
//!
//! Values are encrypted before they reach the backend and decrypted on read.
//! On top of the backend's flat key space this crate adds key namespacing
//! (prefixing) and pattern-based bulk lookup and removal.
//!
//! ## Architecture
//!
//! - **cipher**: Encryption strategy contract and the algorithm registry
//! - **crypto**: Secret validation and key derivation
//! - **storage**: Storage backend trait, in-memory and SQLite backends
//! - **keyspace**: Key namespacing and pattern matching
//! - **value**: Value encode/decode policy
//! - **encrypt_storage**: The synchronous engine
//! - **async_storage**: `async` facade over the engine
//!
//! ## Example
//!
//! ```
//! use encstore_core::{EncryptStorage, EncryptStorageOptions, StorageHost};
//!
//! let host = StorageHost::in_memory();
//! let options = EncryptStorageOptions::default().with_prefix("app");
//! let storage = EncryptStorage::new("a-long-enough-secret", &host, options).unwrap();
//!
//! storage.set_item("user", &serde_json::json!({ "id": 1 })).unwrap();
//! assert_eq!(
//!     storage.get_item("user").unwrap(),
//!     Some(serde_json::json!({ "id": 1 }))
//! );
//! ```

pub mod async_storage;
pub mod cipher;
pub mod crypto;
pub mod encrypt_storage;
pub mod error;
pub mod keyspace;
pub mod options;
pub mod storage;
pub mod value;

pub use async_storage::AsyncEncryptStorage;
pub use cipher::{EncAlgorithm, Encryption};
pub use encrypt_storage::{EncryptStorage, PatternMatch};
pub use error::{EncStoreError, Result};
pub use options::{EncryptStorageOptions, GetFromPatternOptions, RemoveFromPatternOptions};
pub use storage::{MemoryStorage, SqliteStorage, StorageBackend, StorageHost, StorageType};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
