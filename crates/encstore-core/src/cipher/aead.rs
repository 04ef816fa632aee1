//! AEAD strategies: AES-256-GCM and XChaCha20-Poly1305.
//!
//! The key is derived once from the secret with Argon2id and a fixed,
//! per-algorithm salt. Every encryption draws a fresh random nonce; the
//! stored text is `base64(nonce || ciphertext || tag)`.

use aes_gcm::aead::generic_array::typenum::Unsigned;
use aes_gcm::aead::{Aead, AeadCore, KeyInit, Nonce, OsRng};
use aes_gcm::Aes256Gcm;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use chacha20poly1305::XChaCha20Poly1305;
use secrecy::{ExposeSecret, SecretString};

use super::{EncAlgorithm, Encryption};
use crate::crypto::derive_key;
use crate::error::{EncStoreError, Result};

const AES_KEY_SALT: &[u8] = b"encstore.v1.aes-256-gcm";
const XCHACHA_KEY_SALT: &[u8] = b"encstore.v1.xchacha20-poly1305";

/// AES-256-GCM strategy.
pub type AesGcmEncryption = AeadEncryption<Aes256Gcm>;

/// XChaCha20-Poly1305 strategy.
pub type XChaChaEncryption = AeadEncryption<XChaCha20Poly1305>;

/// Strategy over any AEAD cipher with a 256-bit key.
pub struct AeadEncryption<C> {
    cipher: C,
    algorithm: EncAlgorithm,
}

impl<C> std::fmt::Debug for AeadEncryption<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AeadEncryption")
            .field("algorithm", &self.algorithm)
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl AeadEncryption<Aes256Gcm> {
    /// Build an AES-256-GCM strategy bound to `secret`.
    pub fn new(secret: &SecretString) -> Result<Self> {
        Self::with_salt(secret, AES_KEY_SALT, EncAlgorithm::Aes)
    }
}

impl AeadEncryption<XChaCha20Poly1305> {
    /// Build an XChaCha20-Poly1305 strategy bound to `secret`.
    pub fn new(secret: &SecretString) -> Result<Self> {
        Self::with_salt(secret, XCHACHA_KEY_SALT, EncAlgorithm::XChaCha20)
    }
}

impl<C> AeadEncryption<C>
where
    C: Aead + AeadCore + KeyInit,
{
    fn with_salt(secret: &SecretString, salt: &[u8], algorithm: EncAlgorithm) -> Result<Self> {
        let key = derive_key(secret.expose_secret(), salt)?;
        let cipher = C::new_from_slice(key.as_bytes())
            .map_err(|e| EncStoreError::Crypto(format!("Failed to create {} cipher: {}", algorithm, e)))?;

        Ok(Self { cipher, algorithm })
    }
}

impl<C> Encryption for AeadEncryption<C>
where
    C: Aead + AeadCore + Send + Sync,
{
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let nonce = C::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|e| EncStoreError::Crypto(format!("{} encryption failed: {}", self.algorithm, e)))?;

        let mut payload = Vec::with_capacity(nonce.len() + ciphertext.len());
        payload.extend_from_slice(&nonce);
        payload.extend_from_slice(&ciphertext);
        Ok(BASE64.encode(payload))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let payload = BASE64
            .decode(ciphertext)
            .map_err(|e| EncStoreError::Crypto(format!("Base64 decode failed: {}", e)))?;

        let nonce_len = C::NonceSize::USIZE;
        if payload.len() < nonce_len {
            return Err(EncStoreError::Crypto(format!(
                "Ciphertext too short for {} nonce",
                self.algorithm
            )));
        }

        let (nonce, sealed) = payload.split_at(nonce_len);
        let plaintext = self
            .cipher
            .decrypt(Nonce::<C>::from_slice(nonce), sealed)
            .map_err(|_| EncStoreError::Crypto(format!("{} decryption failed", self.algorithm)))?;

        String::from_utf8(plaintext)
            .map_err(|e| EncStoreError::Crypto(format!("Decrypted value is not UTF-8: {}", e)))
    }

    fn algorithm(&self) -> EncAlgorithm {
        self.algorithm
    }
}
