//! Domain types shared by the fetchers, the roster state machine and the UI.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a fetchable resource (a listing page or a detail record).
///
/// Locators are compared byte-for-byte; no URL normalization is applied, so
/// `https://host/a/` and `https://host/a` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locator(String);

impl Locator {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Locator used when no starting resource was configured.
    pub fn undefined() -> Self {
        Self(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            f.write_str("<undefined>")
        } else {
            f.write_str(&self.0)
        }
    }
}

impl From<&str> for Locator {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Locator {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A single listed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Display label.
    pub name: String,
    /// Locator of the related detail resource (the homeworld).
    pub detail_ref: Locator,
}

impl Item {
    pub fn new(name: impl Into<String>, detail_ref: impl Into<Locator>) -> Self {
        Self {
            name: name.into(),
            detail_ref: detail_ref.into(),
        }
    }
}

/// One fetched batch of items plus the locator of the following batch.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Page {
    pub items: Vec<Item>,
    /// `None` marks the final page.
    pub next: Option<Locator>,
    /// Total record count reported by the upstream, when it reports one.
    pub total: Option<u64>,
}

impl Page {
    pub fn new(items: Vec<Item>, next: Option<Locator>) -> Self {
        Self {
            items,
            next,
            total: None,
        }
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
