//! Upstream JSON shapes.
//!
//! Only the fields the roster needs are modelled; everything else in the
//! upstream records is ignored by serde.

use crate::core::{Item, Locator, Page};
use serde::Deserialize;

/// One listing page as served by the upstream.
#[derive(Debug, Deserialize)]
pub struct PageWire {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub results: Vec<PersonWire>,
}

#[derive(Debug, Deserialize)]
pub struct PersonWire {
    pub name: String,
    pub homeworld: String,
}

/// A detail record; only its label is used.
#[derive(Debug, Deserialize)]
pub struct DetailWire {
    pub name: String,
}

impl PageWire {
    pub fn into_page(self) -> Page {
        let items = self
            .results
            .into_iter()
            .map(|person| Item::new(person.name, person.homeworld))
            .collect();

        // An empty `next` means the same as a missing one.
        let next = self
            .next
            .filter(|next| !next.trim().is_empty())
            .map(Locator::new);

        Page {
            items,
            next,
            total: self.count,
        }
    }
}
