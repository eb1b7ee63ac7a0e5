//! Paginated list with on-demand detail expansion.
//!
//! The roster is split the same way the rest of the crate is:
//! - pure state and transitions (`pagination`, `detail`, `state`)
//! - an effect layer (`effects`) that talks to a [`crate::io::Fetcher`]
//!
//! # Examples
//!
//! ```rust,ignore
//! use starroster::roster::{run_effect, RosterState};
//!
//! let mut state = RosterState::new();
//! if let Some(effect) = state.mount(start) {
//!     let event = run_effect(&fetcher, effect).await;
//!     state.apply(event);
//! }
//! ```

pub mod detail;
pub mod effects;
pub mod pagination;
pub mod state;

pub use detail::{DetailCache, DetailPanel, ExpandedSelection, Toggle};
pub use effects::{run_effect, Effect, EffectRunner, PageRequest, RosterEvent};
pub use pagination::PaginationState;
pub use state::{Phase, RosterState};
