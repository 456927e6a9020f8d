// src/key_ops.rs
//! Key generation and representation utilities
//!
//! This module handles random key/IV generation, the password-to-key hash,
//! and multiple representations (hex, base64, etc.) for keys.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use sha2::{Digest, Sha256};

use crate::aliases::{Iv16, Key32, SecureRandomExt};

/// Generate a new random 256-bit key from the OS CSPRNG
#[inline]
pub fn generate_random_key() -> Key32 {
    Key32::random()
}

/// Generate a new random 128-bit IV from the OS CSPRNG
#[inline]
pub fn generate_random_iv() -> Iv16 {
    Iv16::random()
}

/// Derive a 256-bit key as the SHA-256 digest of `password`'s UTF-8 bytes
///
/// Deterministic: the same text always yields the same key.
///
/// # Security
///
/// This is a single unsalted hash, **not** a password-based KDF. There is no
/// salt and no iteration count, so keys derived from human passwords are
/// cheap to brute-force offline. Prefer [`generate_random_key`] wherever the
/// key does not have to be reproduced from a memorised secret.
pub fn key_from_password(password: &str) -> Key32 {
    #[cfg(feature = "logging")]
    {
        if crate::config::load().features.warn_weak_password_keys {
            tracing::warn!("key_from_password uses unsalted SHA-256, not a password KDF");
        }
    }

    let digest: [u8; 32] = Sha256::digest(password.as_bytes()).into();
    Key32::new(digest)
}

/// Multiple string representations of a key for export/display
#[derive(Debug, Clone)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
    pub base64url_no_pad: String,
}

pub fn key_representations(key: &Key32) -> KeyRepr {
    KeyRepr {
        hex: hex::encode(key.expose_secret()),
        base64: STANDARD.encode(key.expose_secret()),
        base64url_no_pad: URL_SAFE_NO_PAD.encode(key.expose_secret()),
    }
}
