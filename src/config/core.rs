use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for starroster
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct StarrosterConfig {
    /// Upstream API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// First-page URL of the listing endpoint
    #[serde(default)]
    pub url: Option<String>,

    /// User agent sent with every request
    #[serde(default)]
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Log file used while the terminal UI is active
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Default level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[serde(default)]
    pub level: Option<String>,
}

/// Log levels accepted in `[logging] level`
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

impl LoggingConfig {
    /// Drop an unrecognised level, returning the rejected value.
    pub(crate) fn normalize_level(&mut self) -> Option<String> {
        let level = self.level.take()?;
        let lowered = level.trim().to_ascii_lowercase();
        if LOG_LEVELS.contains(&lowered.as_str()) {
            self.level = Some(lowered);
            None
        } else {
            Some(level)
        }
    }
}
