//! Effects emitted by roster transitions and the runner that performs them.
//!
//! Transition logic lives in [`super::state`]; this module is the only place
//! that touches a [`Fetcher`]. The runner spawns one task per effect and
//! reports each completion as a [`RosterEvent`] on an unbounded channel,
//! which the owner of the state drains and feeds back through
//! `RosterState::apply`.

use crate::core::{FetchError, Locator, Page};
use crate::io::Fetcher;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, Instrument};

/// Which page slot a fetch fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageRequest {
    First,
    Next,
}

/// Work requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPage { request: PageRequest, cursor: Locator },
    FetchDetail { locator: Locator },
}

/// Completion of an [`Effect`].
#[derive(Debug)]
pub enum RosterEvent {
    PageLoaded {
        request: PageRequest,
        result: Result<Page, FetchError>,
    },
    DetailLoaded {
        locator: Locator,
        result: Result<String, FetchError>,
    },
}

/// Perform one effect to completion.
pub async fn run_effect<F: Fetcher>(fetcher: &F, effect: Effect) -> RosterEvent {
    match effect {
        Effect::FetchPage { request, cursor } => RosterEvent::PageLoaded {
            request,
            result: fetcher.fetch_page(&cursor).await,
        },
        Effect::FetchDetail { locator } => {
            let result = fetcher.fetch_detail(&locator).await;
            RosterEvent::DetailLoaded { locator, result }
        }
    }
}

/// Runs effects as background tasks on a tokio runtime.
pub struct EffectRunner<F> {
    fetcher: Arc<F>,
    runtime: Handle,
    events: UnboundedSender<RosterEvent>,
}

impl<F: Fetcher + 'static> EffectRunner<F> {
    /// Create a runner and the receiver its completions arrive on.
    pub fn new(fetcher: Arc<F>, runtime: Handle) -> (Self, UnboundedReceiver<RosterEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        (
            Self {
                fetcher,
                runtime,
                events,
            },
            receiver,
        )
    }

    /// Spawn `effect`; the completion is sent on the event channel.
    ///
    /// If the receiver has been dropped the completion is discarded.
    pub fn dispatch(&self, effect: Effect) -> JoinHandle<()> {
        let fetcher = Arc::clone(&self.fetcher);
        let events = self.events.clone();
        let span = tracing::debug_span!("effect", ?effect);

        self.runtime.spawn(
            async move {
                let event = run_effect(fetcher.as_ref(), effect).await;
                if events.send(event).is_err() {
                    debug!("roster dropped before effect completed");
                }
            }
            .instrument(span),
        )
    }

    /// Spawn every effect in `effects`.
    pub fn dispatch_all(&self, effects: impl IntoIterator<Item = Effect>) {
        for effect in effects {
            self.dispatch(effect);
        }
    }
}
