//! The roster state machine.
//!
//! ```text
//!   Idle ──mount──► LoadingFirstPage ──ok──► Ready ◄──ok/err── LoadingNextPage
//!                          │                   │                    ▲
//!                          └──err──► Failed    └──────load_more─────┘
//! ```
//!
//! Transitions are plain methods that mutate the state and hand back the
//! [`Effect`] the caller must run, if any. Completions come back through
//! [`RosterState::apply`]. Nothing here performs I/O, which keeps the whole
//! machine testable without a runtime.

use super::detail::{DetailCache, DetailPanel, ExpandedSelection, Toggle};
use super::effects::{Effect, PageRequest, RosterEvent};
use super::pagination::PaginationState;
use crate::core::{FetchError, Item, Locator, Page};
use tracing::{debug, info, warn};

/// Coarse phase, derived from the flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    LoadingFirstPage,
    Ready,
    LoadingNextPage,
    Failed,
}

/// Complete state owned by one mounted list.
#[derive(Debug, Default)]
pub struct RosterState {
    pagination: PaginationState,
    details: DetailCache,
    expanded: ExpandedSelection,
    /// First-page failure; blocks the whole list.
    fatal: Option<FetchError>,
    /// Failure of the latest next-page attempt; cleared by the next attempt.
    last_error: Option<FetchError>,
}

impl RosterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.fatal.is_some() {
            Phase::Failed
        } else if self.pagination.is_loading() {
            Phase::LoadingFirstPage
        } else if self.pagination.is_fetching_next() {
            Phase::LoadingNextPage
        } else if self.pagination.pages().is_empty() {
            Phase::Idle
        } else {
            Phase::Ready
        }
    }

    pub fn pagination(&self) -> &PaginationState {
        &self.pagination
    }

    pub fn details(&self) -> &DetailCache {
        &self.details
    }

    pub fn expanded(&self) -> ExpandedSelection {
        self.expanded
    }

    pub fn has_more(&self) -> bool {
        self.pagination.has_more()
    }

    pub fn item_count(&self) -> usize {
        self.pagination.item_count()
    }

    pub fn item(&self, index: usize) -> Option<&Item> {
        self.pagination.item(index)
    }

    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.pagination.items()
    }

    /// The blocking first-page error, if the list failed to load.
    pub fn fatal_error(&self) -> Option<&FetchError> {
        self.fatal.as_ref()
    }

    /// The error of the most recent next-page attempt.
    pub fn last_error(&self) -> Option<&FetchError> {
        self.last_error.as_ref()
    }

    /// Whether the "load more" control is enabled.
    pub fn can_load_more(&self) -> bool {
        self.fatal.is_none() && self.has_more() && !self.pagination.is_busy()
    }

    /// Start loading the first page. Only valid from `Idle`.
    pub fn mount(&mut self, start: Locator) -> Option<Effect> {
        if self.phase() != Phase::Idle {
            debug!(phase = ?self.phase(), "mount ignored");
            return None;
        }
        info!(%start, "loading first page");
        self.pagination.begin_first();
        Some(Effect::FetchPage {
            request: PageRequest::First,
            cursor: start,
        })
    }

    /// Request the page after the last one. No-op unless more pages exist
    /// and no page fetch is in flight.
    pub fn load_more(&mut self) -> Option<Effect> {
        if !self.can_load_more() {
            debug!(phase = ?self.phase(), has_more = self.has_more(), "load more ignored");
            return None;
        }
        let cursor = self.pagination.next_cursor()?.clone();
        info!(%cursor, "loading next page");
        self.last_error = None;
        self.pagination.begin_next();
        Some(Effect::FetchPage {
            request: PageRequest::Next,
            cursor,
        })
    }

    /// Expand or collapse the row at flattened `index`.
    ///
    /// Expanding a row whose detail is neither cached nor already being
    /// fetched emits a detail fetch. Indices past the end are ignored.
    pub fn toggle_detail(&mut self, index: usize) -> Option<Effect> {
        let locator = self.pagination.item(index)?.detail_ref.clone();

        match self.expanded.toggle(index) {
            Toggle::Collapsed => None,
            Toggle::Expanded if self.details.needs_fetch(&locator) => {
                debug!(index, %locator, "fetching detail");
                self.details.mark_in_flight(locator.clone());
                Some(Effect::FetchDetail { locator })
            }
            Toggle::Expanded => None,
        }
    }

    /// Feed a fetch completion back into the machine.
    pub fn apply(&mut self, event: RosterEvent) {
        match event {
            RosterEvent::PageLoaded { request, result } => self.apply_page(request, result),
            RosterEvent::DetailLoaded { locator, result } => self.apply_detail(locator, result),
        }
    }

    fn apply_page(&mut self, request: PageRequest, result: Result<Page, FetchError>) {
        let expected = match request {
            PageRequest::First => self.pagination.is_loading(),
            PageRequest::Next => self.pagination.is_fetching_next(),
        };
        if !expected {
            warn!(?request, "discarding page completion with no matching request");
            return;
        }

        match (request, result) {
            (PageRequest::First, Ok(page)) => {
                self.pagination.finish_first();
                info!(items = page.len(), last = page.is_last(), "first page loaded");
                self.pagination.push(page);
            }
            (PageRequest::First, Err(err)) => {
                self.pagination.finish_first();
                warn!(error = %err, "first page failed");
                self.fatal = Some(err);
            }
            (PageRequest::Next, Ok(page)) => {
                self.pagination.finish_next();
                info!(
                    items = page.len(),
                    pages = self.pagination.pages().len() + 1,
                    "next page loaded"
                );
                self.pagination.push(page);
            }
            (PageRequest::Next, Err(err)) => {
                self.pagination.finish_next();
                warn!(error = %err, "next page failed");
                self.last_error = Some(err);
            }
        }
    }

    fn apply_detail(&mut self, locator: Locator, result: Result<String, FetchError>) {
        match result {
            Ok(label) => {
                if !self.details.insert(locator.clone(), label) {
                    debug!(%locator, "detail already cached, keeping first value");
                }
            }
            Err(err) => {
                warn!(error = %err, "detail fetch failed");
                self.details.mark_failed(locator);
            }
        }
    }

    /// What to show under the row at `index`.
    pub fn detail_panel(&self, index: usize) -> DetailPanel<'_> {
        if !self.expanded.is_expanded(index) {
            return DetailPanel::Hidden;
        }
        let Some(item) = self.pagination.item(index) else {
            return DetailPanel::Hidden;
        };
        if let Some(label) = self.details.get(&item.detail_ref) {
            DetailPanel::Ready(label)
        } else if self.details.has_failed(&item.detail_ref) {
            DetailPanel::Unavailable
        } else {
            DetailPanel::Pending
        }
    }
}
