//! Cumulative paginated state.
//!
//! Pages are append-only: once pushed, a page is never removed, replaced or
//! reordered. The two in-flight flags double as the gate that keeps at most
//! one page fetch outstanding.

use crate::core::{Item, Locator, Page};

/// All pages fetched so far plus the in-flight flags.
#[derive(Debug, Clone, Default)]
pub struct PaginationState {
    pages: Vec<Page>,
    loading: bool,
    fetching_next: bool,
}

impl PaginationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// First page in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Next page in flight.
    pub fn is_fetching_next(&self) -> bool {
        self.fetching_next
    }

    /// Any page fetch in flight.
    pub fn is_busy(&self) -> bool {
        self.loading || self.fetching_next
    }

    /// True iff the last fetched page names a following page.
    pub fn has_more(&self) -> bool {
        self.pages.last().is_some_and(|page| page.next.is_some())
    }

    /// Locator of the page a `load more` would fetch.
    pub fn next_cursor(&self) -> Option<&Locator> {
        self.pages.last().and_then(|page| page.next.as_ref())
    }

    /// Upstream total, taken from the most recent page that reported one.
    pub fn reported_total(&self) -> Option<u64> {
        self.pages.iter().rev().find_map(|page| page.total)
    }

    pub(crate) fn begin_first(&mut self) {
        self.loading = true;
    }

    pub(crate) fn begin_next(&mut self) {
        self.fetching_next = true;
    }

    pub(crate) fn finish_first(&mut self) {
        self.loading = false;
    }

    pub(crate) fn finish_next(&mut self) {
        self.fetching_next = false;
    }

    pub(crate) fn push(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Items of all pages concatenated in fetch order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.pages.iter().flat_map(|page| page.items.iter())
    }

    /// Item at a flattened index.
    pub fn item(&self, index: usize) -> Option<&Item> {
        let mut remaining = index;
        for page in &self.pages {
            if remaining < page.items.len() {
                return page.items.get(remaining);
            }
            remaining -= page.items.len();
        }
        None
    }

    pub fn item_count(&self) -> usize {
        self.pages.iter().map(Page::len).sum()
    }
}
