//! Shared error types for the application

use super::types::Locator;
use thiserror::Error;

/// Failure of a single fetch against the upstream resource.
///
/// Every variant carries the locator that was attempted so callers can
/// report which request failed without keeping extra bookkeeping.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The locator could not be turned into a request (missing or malformed URL)
    #[error("Invalid locator {locator}: {reason}")]
    InvalidLocator { locator: Locator, reason: String },

    /// Network or transport failure before a status was received
    #[error("Request to {locator} failed: {source}")]
    Transport {
        locator: Locator,
        #[source]
        source: reqwest::Error,
    },

    /// The upstream answered with a non-success status
    #[error("{locator} responded with HTTP {status}")]
    Status { locator: Locator, status: u16 },

    /// The body did not match the expected shape
    #[error("Could not decode response from {locator}: {source}")]
    Decode {
        locator: Locator,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Create an invalid-locator error
    pub fn invalid_locator(locator: Locator, reason: impl Into<String>) -> Self {
        Self::InvalidLocator {
            locator,
            reason: reason.into(),
        }
    }

    /// Create a status error
    pub fn status(locator: Locator, status: u16) -> Self {
        Self::Status { locator, status }
    }

    /// The locator the failed request targeted
    pub fn locator(&self) -> &Locator {
        match self {
            Self::InvalidLocator { locator, .. }
            | Self::Transport { locator, .. }
            | Self::Status { locator, .. }
            | Self::Decode { locator, .. } => locator,
        }
    }

    /// Short, single-line description suitable for a status bar
    pub fn summary(&self) -> String {
        match self {
            Self::InvalidLocator { reason, .. } => format!("invalid locator ({reason})"),
            Self::Transport { .. } => "network error".to_string(),
            Self::Status { status, .. } => format!("HTTP {status}"),
            Self::Decode { .. } => "unexpected response".to_string(),
        }
    }
}
