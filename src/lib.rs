// src/lib.rs
//! aes256-cbc: single-shot AES-256-CBC with PKCS#7 padding
//!
//! Features:
//! - `encrypt` / `decrypt` over in-memory buffers (RustCrypto `aes` + `cbc`)
//! - Random key and IV generation from the OS CSPRNG
//! - SHA-256 password-to-key hash (fast, **not** a KDF)
//! - Zeroizing secret types via secure-gate

pub mod aliases;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod key_ops;

#[cfg(feature = "logging")]
pub mod logging;

// Re-export everything users need at the crate root
pub use aliases::{Iv16, Key32};
pub use config::load as load_config;
pub use crypto::{decrypt, encrypt, validate};
pub use error::{CipherError, ConfigError, DetailedError, Operation, Result};
pub use key_ops::{
    generate_random_iv, generate_random_key, key_from_password, key_representations, KeyRepr,
};
