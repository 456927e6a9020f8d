// src/error.rs
//! Public error types for the entire crate

use thiserror::Error;

/// Which cipher operation an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Encrypt,
    Decrypt,
}

/// The concrete cause behind a [`CipherError`]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailedError {
    #[error("The key length must be 32 bytes")]
    KeyLength,

    #[error("The length of IV must be 16 bytes")]
    IvLength,

    #[error("Encryption failed, error code: {0}")]
    EncryptFailed(i32),

    #[error("Decryption failed, error code: {0}")]
    DecryptFailed(i32),

    /// Padding did not validate after decryption
    #[error("Invalid content")]
    InvalidContent,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    #[error("encrypt: {0}")]
    Encrypt(DetailedError),

    #[error("decrypt: {0}")]
    Decrypt(DetailedError),
}

impl CipherError {
    pub fn operation(&self) -> Operation {
        match self {
            CipherError::Encrypt(_) => Operation::Encrypt,
            CipherError::Decrypt(_) => Operation::Decrypt,
        }
    }

    pub fn detail(&self) -> DetailedError {
        match *self {
            CipherError::Encrypt(detail) | CipherError::Decrypt(detail) => detail,
        }
    }
}

/// Errors raised while reading a config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, CipherError>;
