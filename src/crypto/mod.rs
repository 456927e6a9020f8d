// src/crypto/mod.rs
//! Pure cryptographic operations: no I/O, no global state
//!
//! All functions work exclusively on in-memory buffers and are safe to call
//! concurrently from any number of threads.
mod decrypt;
mod encrypt;
mod primitive;
mod validate;

pub use decrypt::decrypt;
pub use encrypt::encrypt;
pub use validate::validate;
