//! Storage abstraction for encstore.
//!
//! This module defines the `StorageBackend` trait and the backends that ship
//! with the crate.
//!
//! ## Architecture
//!
//! - `MemoryStorage`: session lifetime, insertion-ordered
//! - `SqliteStorage`: persistent, single SQLite table
//! - `StorageHost`: holds one backend per `StorageType`
//!
//! Backends only ever see namespaced keys and ciphertext; encryption and
//! namespacing happen in the engine.

pub mod host;
pub mod memory;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export public types
pub use host::StorageHost;
pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;
pub use traits::StorageBackend;
pub use types::StorageType;
