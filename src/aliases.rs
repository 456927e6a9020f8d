// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret types handed out by aes256-cbc.
//! Both zeroize their contents on drop.

pub use secure_gate::{fixed_alias, SecureRandomExt};

fixed_alias!(Key32, 32); // 256-bit AES key
fixed_alias!(Iv16, 16); // 128-bit CBC initialization vector
