// src/crypto/validate.rs
use crate::consts::{IV_SIZE, KEY_SIZE};
use crate::error::DetailedError;

/// Check key and IV lengths before touching the cipher
///
/// The key is checked first, so a call with both lengths wrong reports
/// [`DetailedError::KeyLength`]. Callers tag the cause with their operation.
pub fn validate(key: &[u8], iv: &[u8]) -> Result<(), DetailedError> {
    if key.len() != KEY_SIZE {
        return Err(DetailedError::KeyLength);
    }
    if iv.len() != IV_SIZE {
        return Err(DetailedError::IvLength);
    }
    Ok(())
}
