//! Secret key validation.
//!
//! Enforces the minimum length every engine requires before it does any
//! other work.

use crate::error::{EncStoreError, Result};

/// Minimum secret key length in UTF-16 code units.
pub const MIN_SECRET_KEY_LENGTH: usize = 10;

/// Validate that a secret key meets the minimum length.
///
/// Length is counted in UTF-16 code units, not bytes: characters outside
/// the Basic Multilingual Plane count twice.
///
/// # Examples
///
/// ```
/// use encstore_core::crypto::validate_secret_key;
///
/// assert!(validate_secret_key("0123456789").is_ok());
/// assert!(validate_secret_key("short").is_err());
/// ```
pub fn validate_secret_key(secret_key: &str) -> Result<()> {
    if secret_key.encode_utf16().count() < MIN_SECRET_KEY_LENGTH {
        return Err(EncStoreError::InvalidSecretKey {
            min_length: MIN_SECRET_KEY_LENGTH,
        });
    }

    Ok(())
}
