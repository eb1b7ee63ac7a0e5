// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod observability;
pub mod roster;
pub mod tui;

// Re-export commonly used types
pub use crate::core::{FetchError, Item, Locator, Page};

pub use crate::io::{Fetcher, HttpFetcher};

pub use crate::roster::{
    DetailCache, DetailPanel, Effect, EffectRunner, PageRequest, PaginationState, Phase,
    RosterEvent, RosterState,
};
