//! Storage backend trait definition.
//!
//! The `StorageBackend` trait is the flat, string-keyed store the engine
//! persists ciphertext into. The engine never assumes anything beyond this
//! interface, so callers can plug in their own backend.

use crate::error::Result;

/// Synchronous string-keyed key-value store.
///
/// All implementations must ensure:
/// - Writes are visible to every later call on the same backend
/// - `key` and `keys` enumerate in the same, stable order
/// - Overwriting an existing key does not move it in that order
pub trait StorageBackend: Send + Sync {
    /// Get the value stored under `key`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(value))` if present, `Ok(None)` if not.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;

    /// Remove every key.
    fn clear(&self) -> Result<()>;

    /// Number of stored keys.
    fn length(&self) -> Result<usize>;

    /// The key at `index` in enumeration order, or `None` when out of range.
    fn key(&self, index: usize) -> Result<Option<String>>;

    /// Every stored key in enumeration order.
    fn keys(&self) -> Result<Vec<String>>;
}
