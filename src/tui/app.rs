//! Application state for the roster TUI.

use super::list_state::ListState;
use super::{layout, list_view, navigation};
use crate::core::Locator;
use crate::roster::{Effect, RosterEvent, RosterState};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::Frame;

/// Rows taken by the header and footer around the list.
const CHROME_ROWS: u16 = 7;

/// View mode for the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Main list view
    List,
    /// Help overlay
    Help,
}

/// Main application state
pub struct RosterApp {
    /// Paginated list and detail state
    roster: RosterState,
    /// Locator the list mounts with
    start: Locator,
    /// Cursor and scroll position
    list: ListState,
    /// Current view mode
    view_mode: ViewMode,
    /// Effects produced by transitions, waiting to be dispatched
    pending: Vec<Effect>,
    /// Terminal size
    terminal_size: (u16, u16),
}

impl RosterApp {
    /// Create unmounted application state
    pub fn new(start: Locator) -> Self {
        Self {
            roster: RosterState::new(),
            start,
            list: ListState::new(),
            view_mode: ViewMode::List,
            pending: Vec::new(),
            terminal_size: (80, 24),
        }
    }

    /// Mount the list: queue the first-page fetch
    pub fn mount(&mut self) {
        let effect = self.roster.mount(self.start.clone());
        self.pending.extend(effect);
    }

    /// Queue the next-page fetch if the control is enabled
    pub fn load_more(&mut self) {
        let effect = self.roster.load_more();
        self.pending.extend(effect);
    }

    /// Expand or collapse the row under the cursor
    pub fn toggle_selected(&mut self) {
        let index = self.list.selected_index();
        let effect = self.roster.toggle_detail(index);
        self.pending.extend(effect);
    }

    /// Feed a fetch completion into the roster
    pub fn apply(&mut self, event: RosterEvent) {
        self.roster.apply(event);
    }

    /// Drain effects queued since the last call
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.pending)
    }

    /// Handle keyboard input; returns true when the user asked to quit
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<bool> {
        navigation::handle_key(self, key)
    }

    /// Render the current view
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.terminal_size = (area.width, area.height);

        match self.view_mode {
            ViewMode::List => list_view::render(frame, self),
            ViewMode::Help => {
                list_view::render(frame, self);
                layout::render_help_overlay(frame);
            }
        }
    }

    pub fn roster(&self) -> &RosterState {
        &self.roster
    }

    pub fn list(&self) -> &ListState {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListState {
        &mut self.list
    }

    pub fn item_count(&self) -> usize {
        self.roster.item_count()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn terminal_size(&self) -> (u16, u16) {
        self.terminal_size
    }

    pub fn set_terminal_size(&mut self, width: u16, height: u16) {
        self.terminal_size = (width, height);
    }

    /// Number of item rows the list area can show.
    ///
    /// One row is held back for an expanded detail panel.
    pub fn visible_rows(&self) -> usize {
        self.terminal_size.1.saturating_sub(CHROME_ROWS + 1) as usize
    }
}
