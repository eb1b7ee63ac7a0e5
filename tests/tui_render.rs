//! Rendering of the roster screen against ratatui's in-memory backend.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};
use starroster::core::{FetchError, Item, Locator, Page};
use starroster::roster::{PageRequest, Phase, RosterEvent};
use starroster::tui::app::{RosterApp, ViewMode};

fn draw(app: &mut RosterApp) -> String {
    let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut RosterApp, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
        .unwrap();
}

fn mounted() -> RosterApp {
    let mut app = RosterApp::new(Locator::new("P0"));
    app.set_terminal_size(70, 20);
    app.mount();
    app.take_effects();
    app
}

fn first_page(app: &mut RosterApp, next: Option<&str>) {
    app.apply(RosterEvent::PageLoaded {
        request: PageRequest::First,
        result: Ok(Page::new(
            vec![
                Item::new("Luke Skywalker", "H1"),
                Item::new("C-3PO", "H1"),
                Item::new("R2-D2", "H8"),
            ],
            next.map(Locator::new),
        )
        .with_total(82)),
    });
}

#[test]
fn loading_screen_before_first_page() {
    let mut app = mounted();
    let screen = draw(&mut app);

    assert!(screen.contains("Star Wars Characters"));
    assert!(screen.contains("Loading..."));
    assert!(!screen.contains("Luke"));
}

#[test]
fn list_shows_names_counts_and_toggles() {
    let mut app = mounted();
    first_page(&mut app, Some("P1"));
    let screen = draw(&mut app);

    assert!(screen.contains("Loaded: 3 of 82"));
    assert!(screen.contains("[+] Luke Skywalker"));
    assert!(screen.contains("[+] R2-D2"));
    assert!(screen.contains("Load More"));
}

#[test]
fn expanded_row_shows_homeworld_once_resolved() {
    let mut app = mounted();
    first_page(&mut app, None);

    press(&mut app, KeyCode::Char('+'));
    let pending = draw(&mut app);
    assert!(pending.contains("[-] Luke Skywalker"));
    assert!(!pending.contains("Homeworld:"));

    app.apply(RosterEvent::DetailLoaded {
        locator: Locator::new("H1"),
        result: Ok("Tatooine".to_string()),
    });
    let ready = draw(&mut app);
    assert!(ready.contains("Homeworld: Tatooine"));
    assert!(ready.contains("No more characters"));
}

#[test]
fn failed_detail_shows_unavailable() {
    let mut app = mounted();
    first_page(&mut app, None);
    press(&mut app, KeyCode::Char('+'));
    app.apply(RosterEvent::DetailLoaded {
        locator: Locator::new("H1"),
        result: Err(FetchError::status(Locator::new("H1"), 500)),
    });

    assert!(draw(&mut app).contains("Homeworld: unavailable"));
}

#[test]
fn first_page_error_replaces_list() {
    let mut app = mounted();
    app.apply(RosterEvent::PageLoaded {
        request: PageRequest::First,
        result: Err(FetchError::status(Locator::new("P0"), 503)),
    });
    let screen = draw(&mut app);

    assert!(screen.contains("Failed to load characters"));
    assert!(screen.contains("HTTP 503"));
    assert!(!screen.contains("[+]"));
}

#[test]
fn load_more_shows_loading_then_appends_next_page() {
    let mut app = mounted();
    first_page(&mut app, Some("P1"));
    press(&mut app, KeyCode::Char('m'));

    assert_eq!(app.roster().phase(), Phase::LoadingNextPage);
    assert!(!app.roster().can_load_more());
    let loading = draw(&mut app);
    assert!(loading.contains("[ Loading... ]"));
    assert!(loading.contains("Luke Skywalker"));

    app.apply(RosterEvent::PageLoaded {
        request: PageRequest::Next,
        result: Ok(Page::new(vec![Item::new("Han Solo", "H22")], None)),
    });
    let screen = draw(&mut app);

    let r2 = screen.find("R2-D2").unwrap();
    let han = screen.find("Han Solo").unwrap();
    assert!(r2 < han);
    assert!(screen.contains("Loaded: 4"));
    assert!(screen.contains("No more characters"));
}

#[test]
fn next_page_error_is_shown_in_footer() {
    let mut app = mounted();
    first_page(&mut app, Some("P1"));
    press(&mut app, KeyCode::Char('m'));
    app.apply(RosterEvent::PageLoaded {
        request: PageRequest::Next,
        result: Err(FetchError::status(Locator::new("P1"), 500)),
    });
    let screen = draw(&mut app);

    assert!(screen.contains("Luke Skywalker"));
    assert!(screen.contains("Could not load more: HTTP 500"));
}

#[test]
fn help_overlay_lists_bindings() {
    let mut app = mounted();
    first_page(&mut app, None);
    press(&mut app, KeyCode::Char('?'));
    assert_eq!(app.view_mode(), ViewMode::Help);

    let screen = draw(&mut app);
    assert!(screen.contains("Load more characters"));
    assert!(screen.contains("Press any key to close"));
}
