// src/consts.rs
//! Shared constants: cipher parameters and primitive status codes

/// AES-256 key size in bytes
pub const KEY_SIZE: usize = 32;

/// AES block size in bytes (AES always uses 128-bit blocks)
pub const BLOCK_SIZE: usize = 16;

/// CBC initialization vector size, one block
pub const IV_SIZE: usize = BLOCK_SIZE;

// Status codes reported by the primitive adapter.
// Values match the ones platform crypto libraries use for the same conditions.

/// Illegal parameter value
pub const PARAM_ERROR: i32 = -4300;

/// Output buffer cannot hold the result
pub const BUFFER_TOO_SMALL: i32 = -4301;

/// Input length is not a multiple of the block size
pub const ALIGNMENT_ERROR: i32 = -4303;

/// Input data did not decode or decrypt properly
pub const DECODE_ERROR: i32 = -4304;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "aes256cbc.toml";

/// Environment variable that overrides the config file location
pub const CONFIG_ENV_VAR: &str = "AES256CBC_CONFIG";
