//! I/O trait definitions for roster fetches.
//!
//! The roster state machine never performs I/O itself; it emits effects that
//! are carried out through a [`Fetcher`]. Keeping the network behind this
//! trait lets tests substitute scripted fetchers and lets the effect runner
//! stay agnostic of the transport.
//!
//! # Example
//!
//! ```rust,ignore
//! use starroster::io::traits::Fetcher;
//!
//! async fn first_names<F: Fetcher>(fetcher: &F, start: &Locator) -> Result<Vec<String>, FetchError> {
//!     let page = fetcher.fetch_page(start).await?;
//!     Ok(page.items.into_iter().map(|item| item.name).collect())
//! }
//! ```

use crate::core::{FetchError, Locator, Page};
use std::future::Future;
use std::sync::Arc;

/// Read-only access to the paginated listing and its detail records.
///
/// # Implementation Notes
///
/// Implementations must be `Send + Sync` and return `Send` futures so the
/// effect runner can move calls onto runtime worker threads. Neither method
/// may retry; failures are reported once and the caller decides what to do.
pub trait Fetcher: Send + Sync {
    /// Retrieve one page of items addressed by `cursor`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` carrying `cursor` if the locator is unusable,
    /// the transport fails, the status is not a success, or the body cannot
    /// be decoded.
    fn fetch_page(&self, cursor: &Locator) -> impl Future<Output = Result<Page, FetchError>> + Send;

    /// Resolve the display label of the detail record at `locator`.
    ///
    /// # Errors
    ///
    /// Same failure semantics as [`Fetcher::fetch_page`].
    fn fetch_detail(
        &self,
        locator: &Locator,
    ) -> impl Future<Output = Result<String, FetchError>> + Send;
}

impl<F: Fetcher> Fetcher for Arc<F> {
    async fn fetch_page(&self, cursor: &Locator) -> Result<Page, FetchError> {
        self.as_ref().fetch_page(cursor).await
    }

    async fn fetch_detail(&self, locator: &Locator) -> Result<String, FetchError> {
        self.as_ref().fetch_detail(locator).await
    }
}
