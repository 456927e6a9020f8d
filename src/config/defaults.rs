// src/config/defaults.rs
use crate::config::app::{Features, Logging};

pub const DEFAULT_LOG_FILTER: &str = "info";

pub fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.into()
}

pub fn default_true() -> bool {
    true
}

impl Default for Logging {
    fn default() -> Self {
        Logging {
            filter: default_log_filter(),
        }
    }
}

impl Default for Features {
    fn default() -> Self {
        Features {
            warn_weak_password_keys: default_true(),
        }
    }
}
