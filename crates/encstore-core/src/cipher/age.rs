//! age passphrase strategy.
//!
//! Each value becomes a complete age file encrypted to the secret as a
//! passphrase, then base64 encoded. age runs scrypt for every value, so this
//! strategy trades throughput for a per-value work factor and salt.

use std::io::{Read, Write};
use std::iter;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use secrecy::{ExposeSecret, SecretString};

use super::{EncAlgorithm, Encryption};
use crate::error::{EncStoreError, Result};

/// age passphrase encryption bound to one secret.
pub struct AgeEncryption {
    passphrase: SecretString,
}

impl AgeEncryption {
    /// Bind a new age strategy to `secret`.
    pub fn new(secret: &SecretString) -> Self {
        Self {
            passphrase: SecretString::from(secret.expose_secret().to_string()),
        }
    }

    fn passphrase(&self) -> SecretString {
        SecretString::from(self.passphrase.expose_secret().to_string())
    }
}

impl std::fmt::Debug for AgeEncryption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgeEncryption")
            .field("passphrase", &"[REDACTED]")
            .finish()
    }
}

impl Encryption for AgeEncryption {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let encryptor = ::age::Encryptor::with_user_passphrase(self.passphrase());

        let mut encrypted = Vec::new();
        let mut writer = encryptor
            .wrap_output(&mut encrypted)
            .map_err(|e| EncStoreError::Crypto(format!("Failed to create encryptor: {}", e)))?;

        writer
            .write_all(plaintext.as_bytes())
            .map_err(|e| EncStoreError::Crypto(format!("Encryption write failed: {}", e)))?;

        writer
            .finish()
            .map_err(|e| EncStoreError::Crypto(format!("Encryption finish failed: {}", e)))?;

        Ok(BASE64.encode(encrypted))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let encrypted = BASE64
            .decode(ciphertext)
            .map_err(|e| EncStoreError::Crypto(format!("Base64 decode failed: {}", e)))?;

        let decryptor = ::age::Decryptor::new(encrypted.as_slice())
            .map_err(|e| EncStoreError::Crypto(format!("Failed to create decryptor: {}", e)))?;

        let identity = ::age::scrypt::Identity::new(self.passphrase());
        let mut reader = decryptor
            .decrypt(iter::once(&identity as &dyn ::age::Identity))
            .map_err(|e| match e {
                ::age::DecryptError::NoMatchingKeys
                | ::age::DecryptError::DecryptionFailed
                | ::age::DecryptError::KeyDecryptionFailed => EncStoreError::IncorrectSecret,
                _ => EncStoreError::Crypto(format!("Decryption failed: {}", e)),
            })?;

        let mut decrypted = String::new();
        reader
            .read_to_string(&mut decrypted)
            .map_err(|e| EncStoreError::Crypto(format!("Failed to read decrypted data: {}", e)))?;

        Ok(decrypted)
    }

    fn algorithm(&self) -> EncAlgorithm {
        EncAlgorithm::Age
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    #[test]
    fn test_age_round_trip() {
        let encryption = AgeEncryption::new(&secret("test-passphrase-secure-123"));
        let encrypted = encryption.encrypt("{\"user\":\"alice\"}").unwrap();

        assert!(!encrypted.contains("alice"));
        assert_eq!(encryption.decrypt(&encrypted).unwrap(), "{\"user\":\"alice\"}");
    }

    #[test]
    fn test_age_wrong_secret_fails() {
        let writer = AgeEncryption::new(&secret("correct-passphrase-123"));
        let reader = AgeEncryption::new(&secret("wrong-passphrase-456"));

        let encrypted = writer.encrypt("secret data").unwrap();
        assert!(matches!(
            reader.decrypt(&encrypted),
            Err(EncStoreError::IncorrectSecret)
        ));
    }

    #[test]
    fn test_age_rejects_non_age_payload() {
        let encryption = AgeEncryption::new(&secret("test-passphrase-secure-123"));
        let not_age = BASE64.encode(b"plainly not an age file");

        assert!(matches!(
            encryption.decrypt(&not_age),
            Err(EncStoreError::Crypto(_))
        ));
    }
}
