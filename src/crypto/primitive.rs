// src/crypto/primitive.rs
//! Thin adapter over RustCrypto's AES-256-CBC with PKCS#7 padding
//!
//! Mirrors the shape of a platform "crypt" call: the caller owns the output
//! buffer, the adapter reports how many bytes it wrote, and every failure
//! carries a numeric status code.

use aes::Aes256;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};

use crate::consts::{ALIGNMENT_ERROR, BLOCK_SIZE, BUFFER_TOO_SMALL, DECODE_ERROR, PARAM_ERROR};

type Aes256CbcEnc = cbc::Encryptor<Aes256>;
type Aes256CbcDec = cbc::Decryptor<Aes256>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PrimitiveFailure {
    /// Key or IV rejected by the cipher
    Param,
    BufferTooSmall,
    /// Ciphertext is empty or not a whole number of blocks
    Alignment,
    /// PKCS#7 padding did not validate
    Padding,
}

impl PrimitiveFailure {
    pub(crate) fn status(self) -> i32 {
        match self {
            PrimitiveFailure::Param => PARAM_ERROR,
            PrimitiveFailure::BufferTooSmall => BUFFER_TOO_SMALL,
            PrimitiveFailure::Alignment => ALIGNMENT_ERROR,
            PrimitiveFailure::Padding => DECODE_ERROR,
        }
    }
}

/// Encrypt `input` into `output`, appending PKCS#7 padding
///
/// Returns the number of ciphertext bytes written to the front of `output`.
pub(crate) fn cbc_encrypt(
    key: &[u8],
    iv: &[u8],
    input: &[u8],
    output: &mut [u8],
) -> Result<usize, PrimitiveFailure> {
    let cipher = Aes256CbcEnc::new_from_slices(key, iv).map_err(|_| PrimitiveFailure::Param)?;
    cipher
        .encrypt_padded_b2b_mut::<Pkcs7>(input, output)
        .map(|ciphertext| ciphertext.len())
        .map_err(|_| PrimitiveFailure::BufferTooSmall)
}

/// Decrypt `input` into `output` and strip PKCS#7 padding
///
/// Returns the number of plaintext bytes written to the front of `output`.
pub(crate) fn cbc_decrypt(
    key: &[u8],
    iv: &[u8],
    input: &[u8],
    output: &mut [u8],
) -> Result<usize, PrimitiveFailure> {
    if input.is_empty() || input.len() % BLOCK_SIZE != 0 {
        return Err(PrimitiveFailure::Alignment);
    }
    if output.len() < input.len() {
        return Err(PrimitiveFailure::BufferTooSmall);
    }
    let cipher = Aes256CbcDec::new_from_slices(key, iv).map_err(|_| PrimitiveFailure::Param)?;
    cipher
        .decrypt_padded_b2b_mut::<Pkcs7>(input, output)
        .map(|plaintext| plaintext.len())
        .map_err(|_| PrimitiveFailure::Padding)
}
