//! Interactive terminal UI for browsing the character roster.
//!
//! The UI thread is the only writer of [`RosterState`](crate::roster::RosterState).
//! Fetches run as tokio tasks and report back over a channel that the event
//! loop drains once per tick.
//!
//! ```rust,no_run
//! use starroster::core::Locator;
//! use starroster::io::HttpFetcher;
//! use starroster::tui::RosterExplorer;
//! use std::sync::Arc;
//!
//! let runtime = tokio::runtime::Runtime::new()?;
//! let fetcher = Arc::new(HttpFetcher::new(starroster::io::DEFAULT_USER_AGENT)?);
//! let start = Locator::new("https://swapi.dev/api/people/");
//! let mut explorer = RosterExplorer::new(start, fetcher, runtime.handle().clone())?;
//! explorer.run()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod app;
pub mod layout;
pub mod list_actions;
pub mod list_state;
pub mod list_view;
pub mod navigation;
pub mod theme;

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::core::Locator;
use crate::io::Fetcher;
use crate::observability::set_tui_active;
use crate::roster::{EffectRunner, RosterEvent};
use app::RosterApp;

const TICK: Duration = Duration::from_millis(100);

/// Roster explorer TUI manager
pub struct RosterExplorer<F: Fetcher + 'static> {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    app: RosterApp,
    runner: EffectRunner<F>,
    events: UnboundedReceiver<RosterEvent>,
}

impl<F: Fetcher + 'static> RosterExplorer<F> {
    /// Enter the alternate screen and prepare an unmounted list.
    pub fn new(start: Locator, fetcher: Arc<F>, runtime: Handle) -> Result<Self> {
        enable_raw_mode()?;
        set_tui_active(true);
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let (runner, events) = EffectRunner::new(fetcher, runtime);

        Ok(Self {
            terminal,
            app: RosterApp::new(start),
            runner,
            events,
        })
    }

    /// Run the interactive TUI event loop
    pub fn run(&mut self) -> Result<()> {
        self.app.mount();
        self.runner.dispatch_all(self.app.take_effects());

        loop {
            self.drain_events();

            self.terminal.draw(|f| self.app.render(f))?;

            if event::poll(TICK)? {
                match event::read()? {
                    Event::Key(key) => {
                        if self.app.handle_key(key)? {
                            break;
                        }
                    }
                    Event::Resize(width, height) => self.app.set_terminal_size(width, height),
                    _ => {}
                }
            }

            self.runner.dispatch_all(self.app.take_effects());
        }

        self.cleanup()?;
        Ok(())
    }

    /// Apply every completion that arrived since the last tick
    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.app.apply(event);
        }
    }

    /// Clean up and restore terminal
    fn cleanup(&mut self) -> Result<()> {
        set_tui_active(false);
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl<F: Fetcher + 'static> Drop for RosterExplorer<F> {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
