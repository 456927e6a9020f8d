// src/crypto/decrypt.rs
use zeroize::Zeroizing;

use super::primitive::{cbc_decrypt, PrimitiveFailure};
use super::validate::validate;
use crate::consts::BLOCK_SIZE;
use crate::error::{CipherError, DetailedError, Result};

/// Decrypt AES-256-CBC ciphertext and strip its PKCS#7 padding (in-memory)
///
/// Fails with [`DetailedError::InvalidContent`] when the padding does not
/// validate, and with [`DetailedError::DecryptFailed`] for any other cipher
/// failure such as a ciphertext that is not a whole number of blocks.
/// Nothing is returned on failure.
pub fn decrypt(data: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
    validate(key, iv).map_err(CipherError::Decrypt)?;

    let mut buffer = Zeroizing::new(vec![0u8; data.len() + BLOCK_SIZE]);

    let written = cbc_decrypt(key, iv, data, buffer.as_mut_slice()).map_err(|failure| {
        #[cfg(feature = "logging")]
        tracing::debug!(status = failure.status(), "AES-256-CBC decryption failed");
        let detail = match failure {
            PrimitiveFailure::Padding => DetailedError::InvalidContent,
            other => DetailedError::DecryptFailed(other.status()),
        };
        CipherError::Decrypt(detail)
    })?;

    #[cfg(feature = "logging")]
    tracing::trace!(ciphertext_len = data.len(), plaintext_len = written, "decrypted");

    Ok(buffer[..written].to_vec())
}
