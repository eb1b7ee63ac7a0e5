//! End-to-end roster behaviour: state machine plus effect runner plus a
//! scripted fetcher.

mod common;

use common::ScriptedFetcher;
use pretty_assertions::assert_eq;
use starroster::core::Locator;
use starroster::roster::{DetailPanel, Effect, EffectRunner, Phase, RosterEvent, RosterState};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;

/// Drives a roster the way the UI loop does: dispatch, then apply completions.
struct Harness {
    roster: RosterState,
    runner: EffectRunner<ScriptedFetcher>,
    events: UnboundedReceiver<RosterEvent>,
    fetcher: Arc<ScriptedFetcher>,
}

impl Harness {
    fn new(fetcher: ScriptedFetcher) -> Self {
        let fetcher = Arc::new(fetcher);
        let (runner, events) = EffectRunner::new(Arc::clone(&fetcher), Handle::current());
        Self {
            roster: RosterState::new(),
            runner,
            events,
            fetcher,
        }
    }

    /// Run `effect` (if any) and apply its completion.
    async fn settle(&mut self, effect: Option<Effect>) {
        if let Some(effect) = effect {
            self.runner.dispatch(effect).await.unwrap();
            let event = self.events.recv().await.unwrap();
            self.roster.apply(event);
        }
    }

    fn names(&self) -> Vec<String> {
        self.roster.items().map(|item| item.name.clone()).collect()
    }
}

fn ten(prefix: &str) -> Vec<String> {
    (0..10).map(|i| format!("{prefix}{i}")).collect()
}

fn refs(names: &[String]) -> Vec<&str> {
    names.iter().map(String::as_str).collect()
}

#[tokio::test]
async fn first_page_then_load_more_appends_in_order() {
    let first = ten("p0-");
    let second = ten("p1-");
    let mut h = Harness::new(
        ScriptedFetcher::new()
            .page("P0", &refs(&first), Some("P1"))
            .page("P1", &refs(&second), Some("P2")),
    );

    let mount = h.roster.mount(Locator::new("P0"));
    assert_eq!(h.roster.phase(), Phase::LoadingFirstPage);
    h.settle(mount).await;

    assert_eq!(h.roster.phase(), Phase::Ready);
    assert_eq!(h.names(), first);
    assert!(h.roster.can_load_more());

    let more = h.roster.load_more();
    assert_eq!(h.roster.phase(), Phase::LoadingNextPage);
    assert!(!h.roster.can_load_more());
    // Second request while one is in flight is ignored.
    assert_eq!(h.roster.load_more(), None);
    h.settle(more).await;

    assert_eq!(h.roster.item_count(), 20);
    assert_eq!(h.names()[10..], second[..]);
    assert_eq!(h.fetcher.page_requests(), vec!["P0", "P1"]);
}

#[tokio::test]
async fn last_page_disables_load_more() {
    let mut h = Harness::new(
        ScriptedFetcher::new()
            .page("P0", &["Luke"], Some("P1"))
            .page("P1", &["Leia"], None),
    );

    let mount = h.roster.mount(Locator::new("P0"));
    h.settle(mount).await;
    let more = h.roster.load_more();
    h.settle(more).await;

    assert!(!h.roster.has_more());
    assert!(!h.roster.can_load_more());
    assert_eq!(h.roster.load_more(), None);
    assert_eq!(h.fetcher.page_requests().len(), 2);
}

#[tokio::test]
async fn expanded_detail_is_fetched_once() {
    let mut h = Harness::new(
        ScriptedFetcher::new()
            .page_with_homes(
                "P0",
                &[("a", "H1"), ("b", "H2"), ("c", "H3"), ("Luke", "H7")],
                None,
            )
            .detail("H7", "Tatooine"),
    );
    let mount = h.roster.mount(Locator::new("P0"));
    h.settle(mount).await;

    let fetch = h.roster.toggle_detail(3);
    assert_eq!(h.roster.detail_panel(3), DetailPanel::Pending);
    h.settle(fetch).await;
    assert_eq!(h.roster.detail_panel(3), DetailPanel::Ready("Tatooine"));

    assert_eq!(h.roster.toggle_detail(3), None);
    assert_eq!(h.roster.detail_panel(3), DetailPanel::Hidden);

    assert_eq!(h.roster.toggle_detail(3), None);
    assert_eq!(h.roster.detail_panel(3), DetailPanel::Ready("Tatooine"));
    assert_eq!(h.fetcher.detail_requests(), 1);
}

#[tokio::test]
async fn first_page_failure_renders_no_list() {
    let mut h = Harness::new(ScriptedFetcher::new().failing_page("P0", 500));

    let mount = h.roster.mount(Locator::new("P0"));
    h.settle(mount).await;

    assert_eq!(h.roster.phase(), Phase::Failed);
    assert_eq!(h.roster.item_count(), 0);
    assert!(h.roster.pagination().pages().is_empty());
    assert!(!h.roster.can_load_more());
    assert!(h.roster.fatal_error().unwrap().to_string().contains("500"));
}

#[tokio::test]
async fn next_page_failure_is_retryable() {
    let mut h = Harness::new(
        ScriptedFetcher::new()
            .page("P0", &["Luke"], Some("P1"))
            .failing_page("P1", 502),
    );
    let mount = h.roster.mount(Locator::new("P0"));
    h.settle(mount).await;

    let more = h.roster.load_more();
    h.settle(more).await;

    assert_eq!(h.roster.phase(), Phase::Ready);
    assert!(h.roster.last_error().is_some());
    assert_eq!(h.roster.item_count(), 1);

    // The control stays enabled and retrying clears the transient error.
    assert!(h.roster.can_load_more());
    assert!(h.roster.load_more().is_some());
    assert!(h.roster.last_error().is_none());
}

#[tokio::test]
async fn failed_detail_retries_on_next_expand() {
    let mut h = Harness::new(
        ScriptedFetcher::new()
            .page_with_homes("P0", &[("Luke", "H1")], None)
            .failing_detail("H1", 503),
    );
    let mount = h.roster.mount(Locator::new("P0"));
    h.settle(mount).await;

    let fetch = h.roster.toggle_detail(0);
    h.settle(fetch).await;
    assert_eq!(h.roster.detail_panel(0), DetailPanel::Unavailable);

    h.roster.toggle_detail(0);
    let retry = h.roster.toggle_detail(0);
    assert_eq!(
        retry,
        Some(Effect::FetchDetail {
            locator: Locator::new("H1"),
        })
    );
}

#[tokio::test]
async fn missing_start_url_fails_as_invalid_locator() {
    let mut h = Harness::new(ScriptedFetcher::new());
    let fetcher = starroster::io::HttpFetcher::new("starroster-test").unwrap();

    let mount = h.roster.mount(Locator::undefined()).unwrap();
    let event = starroster::roster::run_effect(&fetcher, mount).await;
    h.roster.apply(event);

    assert_eq!(h.roster.phase(), Phase::Failed);
    assert!(matches!(
        h.roster.fatal_error(),
        Some(starroster::core::FetchError::InvalidLocator { .. })
    ));
}
