//! Key derivation using Argon2id.
//!
//! The AEAD strategies need a fixed-size key; this module stretches the
//! caller's secret into one. Derivation runs once per engine, not per value.

use argon2::Argon2;
use zeroize::ZeroizeOnDrop;

use crate::error::{EncStoreError, Result};

/// Argon2id parameters.
///
/// - Memory: 19 MiB (19 * 1024 KB)
/// - Iterations: 2
/// - Parallelism: 1
const ARGON2_MEMORY_KB: u32 = 19 * 1024;
const ARGON2_ITERATIONS: u32 = 2;
const ARGON2_PARALLELISM: u32 = 1;

/// Length of derived key in bytes (256-bit AEAD keys).
pub const KEY_LENGTH: usize = 32;

/// Minimum salt length accepted by [`derive_key`].
const MIN_SALT_LENGTH: usize = 16;

/// A symmetric key derived from a secret.
///
/// Key bytes are zeroized when dropped.
#[derive(Clone, ZeroizeOnDrop)]
pub struct DerivedKey {
    key: [u8; KEY_LENGTH],
}

impl DerivedKey {
    pub(crate) fn from_bytes(bytes: [u8; KEY_LENGTH]) -> Self {
        Self { key: bytes }
    }

    /// Get a reference to the raw key bytes.
    ///
    /// # Security
    ///
    /// Avoid storing or logging this value. Use only for immediate cipher setup.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Derive a symmetric key from a secret using Argon2id.
///
/// The same secret and salt always produce the same key.
///
/// # Examples
///
/// ```
/// use encstore_core::crypto::derive_key;
///
/// let salt = b"encstore-example-salt";
/// let key = derive_key("my-long-secret", salt).unwrap();
/// assert_eq!(key.as_bytes().len(), 32);
/// ```
pub fn derive_key(secret: &str, salt: &[u8]) -> Result<DerivedKey> {
    if secret.is_empty() {
        return Err(EncStoreError::Crypto("Secret cannot be empty".to_string()));
    }

    if salt.len() < MIN_SALT_LENGTH {
        return Err(EncStoreError::Crypto(format!(
            "Salt must be at least {} bytes",
            MIN_SALT_LENGTH
        )));
    }

    let params = argon2::Params::new(
        ARGON2_MEMORY_KB,
        ARGON2_ITERATIONS,
        ARGON2_PARALLELISM,
        Some(KEY_LENGTH),
    )
    .map_err(|e| EncStoreError::Crypto(format!("Failed to create Argon2 params: {}", e)))?;

    let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

    let mut key_bytes = [0u8; KEY_LENGTH];
    argon2
        .hash_password_into(secret.as_bytes(), salt, &mut key_bytes)
        .map_err(|e| EncStoreError::Crypto(format!("Key derivation failed: {}", e)))?;

    Ok(DerivedKey::from_bytes(key_bytes))
}
