// src/config/mod.rs
//! Configuration system for aes256-cbc
//!
//! Central, lazy-loaded global config with TOML + env override of the path.
//! The cipher operations never read it; it only tunes diagnostics.

pub use app::{load, Config, Features, Logging};

mod app;
mod defaults;
