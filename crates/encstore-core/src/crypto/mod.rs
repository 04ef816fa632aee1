//! Secret handling for encstore.
//!
//! This module validates caller-supplied secrets and derives symmetric key
//! material from them:
//! - **Argon2id**: Memory-hard key derivation for the AEAD strategies
//! - **Zeroize**: Derived key bytes are wiped from memory on drop
//!
//! ## Security Model
//!
//! - The secret is held only by the encryption strategy of one engine
//! - Secrets and derived keys never appear in `Debug` output or logs
//! - Nothing holding secret material implements `Serialize`
//!
//! We do NOT defend against:
//! - Compromised OS / memory inspection of a live process
//! - Weak secrets chosen by the caller beyond the minimum length

pub mod key;
pub mod secret;

pub use key::{derive_key, DerivedKey};
pub use secret::{validate_secret_key, MIN_SECRET_KEY_LENGTH};
