// src/crypto/encrypt.rs
use zeroize::Zeroizing;

use super::primitive::cbc_encrypt;
use super::validate::validate;
use crate::consts::BLOCK_SIZE;
use crate::error::{CipherError, DetailedError, Result};

/// Encrypt `data` with AES-256-CBC and PKCS#7 padding (in-memory)
///
/// `key` must be 32 bytes and `iv` 16 bytes. Padding is always added, so the
/// ciphertext is `data.len()` rounded up to the next multiple of 16, plus a
/// full block when `data` is already block-aligned.
pub fn encrypt(data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    validate(key, iv).map_err(CipherError::Encrypt)?;

    // One spare block for the worst-case padding
    let mut buffer = Zeroizing::new(vec![0u8; data.len() + BLOCK_SIZE]);

    let written = cbc_encrypt(key, iv, data, buffer.as_mut_slice()).map_err(|failure| {
        #[cfg(feature = "logging")]
        tracing::debug!(status = failure.status(), "AES-256-CBC encryption failed");
        CipherError::Encrypt(DetailedError::EncryptFailed(failure.status()))
    })?;

    #[cfg(feature = "logging")]
    tracing::trace!(plaintext_len = data.len(), ciphertext_len = written, "encrypted");

    Ok(buffer[..written].to_vec())
}
