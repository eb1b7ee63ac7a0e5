//! Per-item detail state: the write-once cache and the single expanded row.

use crate::core::Locator;
use std::collections::{HashMap, HashSet};

/// Resolved detail labels keyed by locator.
///
/// Entries are write-once: the first value stored for a locator wins and is
/// never replaced or removed.
#[derive(Debug, Clone, Default)]
pub struct DetailCache {
    entries: HashMap<Locator, String>,
    in_flight: HashSet<Locator>,
    failed: HashSet<Locator>,
}

impl DetailCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, locator: &Locator) -> Option<&str> {
        self.entries.get(locator).map(String::as_str)
    }

    pub fn contains(&self, locator: &Locator) -> bool {
        self.entries.contains_key(locator)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Store a resolved label. Returns `false` if the locator already had one.
    pub fn insert(&mut self, locator: Locator, label: String) -> bool {
        self.in_flight.remove(&locator);
        self.failed.remove(&locator);
        if self.entries.contains_key(&locator) {
            return false;
        }
        self.entries.insert(locator, label);
        true
    }

    pub fn is_in_flight(&self, locator: &Locator) -> bool {
        self.in_flight.contains(locator)
    }

    pub fn has_failed(&self, locator: &Locator) -> bool {
        self.failed.contains(locator)
    }

    /// Whether expanding an item with this locator has to issue a fetch.
    pub fn needs_fetch(&self, locator: &Locator) -> bool {
        !self.contains(locator) && !self.is_in_flight(locator)
    }

    pub(crate) fn mark_in_flight(&mut self, locator: Locator) {
        self.failed.remove(&locator);
        self.in_flight.insert(locator);
    }

    pub(crate) fn mark_failed(&mut self, locator: Locator) {
        self.in_flight.remove(&locator);
        if !self.entries.contains_key(&locator) {
            self.failed.insert(locator);
        }
    }
}

/// Result of toggling a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Expanded,
    Collapsed,
}

/// At most one expanded row, addressed by flattened index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandedSelection(Option<usize>);

impl ExpandedSelection {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn get(self) -> Option<usize> {
        self.0
    }

    pub fn is_expanded(self, index: usize) -> bool {
        self.0 == Some(index)
    }

    /// Collapse `index` if it is the expanded row, otherwise expand it.
    pub fn toggle(&mut self, index: usize) -> Toggle {
        if self.is_expanded(index) {
            self.0 = None;
            Toggle::Collapsed
        } else {
            self.0 = Some(index);
            Toggle::Expanded
        }
    }
}

/// What a renderer should show under a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailPanel<'a> {
    /// Row is collapsed.
    Hidden,
    /// Row is expanded but the label has not arrived yet.
    Pending,
    /// Row is expanded and the label is known.
    Ready(&'a str),
    /// Row is expanded and the last fetch for its locator failed.
    Unavailable,
}

impl DetailPanel<'_> {
    pub fn is_visible(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Unavailable)
    }
}
