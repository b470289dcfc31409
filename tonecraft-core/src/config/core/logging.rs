use crate::config::constants::defaults;
use serde::{Deserialize, Serialize};

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default tracing filter when `RUST_LOG` is unset (e.g. "warn", "tonecraft_core=debug")
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

fn default_level() -> String {
    defaults::DEFAULT_LOG_LEVEL.to_string()
}
