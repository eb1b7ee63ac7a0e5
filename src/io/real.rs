//! Production implementation of the I/O traits.

use super::traits::Fetcher;
use super::wire::{DetailWire, PageWire};
use crate::core::{FetchError, Locator, Page};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

/// User agent sent when the configuration does not name one
pub const DEFAULT_USER_AGENT: &str = concat!("starroster/", env!("CARGO_PKG_VERSION"));

/// Fetcher backed by a shared `reqwest` client.
///
/// Uses transport defaults for timeouts and performs no retries.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Build a fetcher with the given user agent.
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    /// Wrap an already configured client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    async fn get_json<T: DeserializeOwned>(&self, locator: &Locator) -> Result<T, FetchError> {
        let url = parse_locator(locator)?;
        debug!(%locator, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                locator: locator.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::status(locator.clone(), status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport {
                locator: locator.clone(),
                source,
            })?;

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            locator: locator.clone(),
            source,
        })
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch_page(&self, cursor: &Locator) -> Result<Page, FetchError> {
        let wire: PageWire = self.get_json(cursor).await?;
        let page = wire.into_page();
        debug!(%cursor, items = page.len(), last = page.is_last(), "page fetched");
        Ok(page)
    }

    async fn fetch_detail(&self, locator: &Locator) -> Result<String, FetchError> {
        let wire: DetailWire = self.get_json(locator).await?;
        Ok(wire.name)
    }
}

/// Turn a locator into an absolute http(s) URL.
fn parse_locator(locator: &Locator) -> Result<Url, FetchError> {
    if locator.is_empty() {
        return Err(FetchError::invalid_locator(
            locator.clone(),
            "no starting URL configured",
        ));
    }

    let url = Url::parse(locator.as_str())
        .map_err(|e| FetchError::invalid_locator(locator.clone(), e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(FetchError::invalid_locator(
            locator.clone(),
            format!("unsupported scheme '{other}'"),
        )),
    }
}
