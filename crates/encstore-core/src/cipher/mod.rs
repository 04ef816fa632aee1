//! Encryption strategies.
//!
//! An [`Encryption`] turns a string into ciphertext text and back. Each
//! engine builds exactly one strategy at construction, bound to its secret,
//! and never rebuilds it.
//!
//! Strategies are selected by [`EncAlgorithm`]:
//!
//! | Identifier  | Strategy                                   |
//! |-------------|--------------------------------------------|
//! | `AES`       | AES-256-GCM, Argon2id-derived key (default) |
//! | `XChaCha20` | XChaCha20-Poly1305, Argon2id-derived key   |
//! | `Age`       | age passphrase encryption (scrypt per value) |
//!
//! All ciphertext is standard base64 so it can live in a string-only store.

pub mod aead;
pub mod age;

use std::fmt;
use std::str::FromStr;

use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EncStoreError, Result};

pub use self::aead::{AesGcmEncryption, XChaChaEncryption};
pub use self::age::AgeEncryption;

/// A string-to-string encryption strategy bound to one secret.
///
/// Implementations must satisfy `decrypt(encrypt(x)) == x` for every string
/// `x`, and must fail rather than return garbage when handed ciphertext they
/// cannot authenticate.
pub trait Encryption: Send + Sync {
    /// Encrypt plaintext into ciphertext text.
    fn encrypt(&self, plaintext: &str) -> Result<String>;

    /// Decrypt ciphertext text produced by [`Encryption::encrypt`].
    fn decrypt(&self, ciphertext: &str) -> Result<String>;

    /// The algorithm this strategy implements.
    fn algorithm(&self) -> EncAlgorithm;
}

/// Supported encryption algorithm identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EncAlgorithm {
    /// AES-256-GCM
    #[default]
    Aes,
    /// XChaCha20-Poly1305
    XChaCha20,
    /// age passphrase encryption
    Age,
}

impl EncAlgorithm {
    /// All registered algorithms.
    pub const ALL: [EncAlgorithm; 3] = [EncAlgorithm::Aes, EncAlgorithm::XChaCha20, EncAlgorithm::Age];

    /// Canonical identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            EncAlgorithm::Aes => "AES",
            EncAlgorithm::XChaCha20 => "XChaCha20",
            EncAlgorithm::Age => "Age",
        }
    }
}

impl fmt::Display for EncAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EncAlgorithm {
    type Err = EncStoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aes" | "aes-256-gcm" => Ok(EncAlgorithm::Aes),
            "xchacha20" | "xchacha20-poly1305" => Ok(EncAlgorithm::XChaCha20),
            "age" => Ok(EncAlgorithm::Age),
            _ => Err(EncStoreError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

impl Serialize for EncAlgorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EncAlgorithm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// Build the strategy for `algorithm`, bound to `secret`.
pub fn get_encryption(algorithm: EncAlgorithm, secret: &SecretString) -> Result<Box<dyn Encryption>> {
    let encryption: Box<dyn Encryption> = match algorithm {
        EncAlgorithm::Aes => Box::new(AesGcmEncryption::new(secret)?),
        EncAlgorithm::XChaCha20 => Box::new(XChaChaEncryption::new(secret)?),
        EncAlgorithm::Age => Box::new(AgeEncryption::new(secret)),
    };
    Ok(encryption)
}

/// Build the strategy registered under `name`.
///
/// # Errors
///
/// Returns `EncStoreError::UnsupportedAlgorithm` for unknown identifiers.
pub fn encryption_for_name(name: &str, secret: &SecretString) -> Result<Box<dyn Encryption>> {
    let algorithm: EncAlgorithm = name.parse()?;
    get_encryption(algorithm, secret)
}
