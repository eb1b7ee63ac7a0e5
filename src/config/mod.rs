// Core configuration types
mod core;
mod loader;

pub use self::core::{ApiConfig, LoggingConfig, StarrosterConfig, LOG_LEVELS};

// Re-export loader functions
pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

use crate::core::Locator;
use crate::io::DEFAULT_USER_AGENT;

/// Starting locator: command line (or its env var) first, then the config file.
///
/// Returns [`Locator::undefined`] when neither names one, so the first fetch
/// fails with an invalid-locator error instead of the process aborting.
pub fn resolve_start_locator(cli_url: Option<&str>, config: &StarrosterConfig) -> Locator {
    cli_url
        .filter(|url| !url.trim().is_empty())
        .or(config.api.url.as_deref())
        .map(Locator::new)
        .unwrap_or_else(|| {
            tracing::warn!("No API URL configured; the first fetch will fail");
            Locator::undefined()
        })
}

/// User agent from the config, or the crate default
pub fn user_agent(config: &StarrosterConfig) -> &str {
    config
        .api
        .user_agent
        .as_deref()
        .filter(|agent| !agent.trim().is_empty())
        .unwrap_or(DEFAULT_USER_AGENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_url(url: &str) -> StarrosterConfig {
        StarrosterConfig {
            api: ApiConfig {
                url: Some(url.to_string()),
                user_agent: None,
            },
            ..Default::default()
        }
    }

    #[test]
    fn cli_url_wins_over_config() {
        let config = config_with_url("https://from-config/");
        assert_eq!(
            resolve_start_locator(Some("https://from-cli/"), &config),
            Locator::new("https://from-cli/")
        );
    }

    #[test]
    fn config_url_used_when_cli_blank() {
        let config = config_with_url("https://from-config/");
        assert_eq!(
            resolve_start_locator(Some(""), &config),
            Locator::new("https://from-config/")
        );
        assert_eq!(
            resolve_start_locator(None, &config),
            Locator::new("https://from-config/")
        );
    }

    #[test]
    fn missing_url_resolves_to_undefined() {
        let locator = resolve_start_locator(None, &StarrosterConfig::default());
        assert!(locator.is_empty());
    }

    #[test]
    fn user_agent_falls_back_to_default() {
        let mut config = StarrosterConfig::default();
        assert_eq!(user_agent(&config), DEFAULT_USER_AGENT);
        config.api.user_agent = Some("custom/1.0".to_string());
        assert_eq!(user_agent(&config), "custom/1.0");
    }
}
