//! Error types for encstore core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to exit codes and user-facing messages.
//!
//! Absent keys are never errors: lookups report them as `Ok(None)`.

use thiserror::Error;

/// Result type alias for encstore operations.
pub type Result<T> = std::result::Result<T, EncStoreError>;

/// Core error type for encstore operations.
#[derive(Debug, Error)]
pub enum EncStoreError {
    /// Secret key is shorter than the required minimum
    #[error("Invalid secret key: must be at least {min_length} characters")]
    InvalidSecretKey { min_length: usize },

    /// Algorithm identifier has no registered strategy
    #[error("Unsupported encryption algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Encryption or decryption error
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Ciphertext could not be opened with this secret
    #[error("Incorrect secret key for stored value")]
    IncorrectSecret,

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Value could not be encoded or converted
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for EncStoreError {
    fn from(err: std::io::Error) -> Self {
        EncStoreError::Storage(err.to_string())
    }
}

impl From<rusqlite::Error> for EncStoreError {
    fn from(err: rusqlite::Error) -> Self {
        EncStoreError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for EncStoreError {
    fn from(err: serde_json::Error) -> Self {
        EncStoreError::Serialization(err.to_string())
    }
}
