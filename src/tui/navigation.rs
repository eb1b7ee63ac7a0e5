//! Keyboard navigation handling.
//!
//! Pure action determination lives in `list_actions`; this module is the
//! imperative shell that executes the chosen action against the app.

use super::app::{RosterApp, ViewMode};
use super::list_actions::{determine_list_action, ListAction, ListActionContext};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input and return true if should quit
pub fn handle_key(app: &mut RosterApp, key: KeyEvent) -> Result<bool> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Ok(true);
    }

    match app.view_mode() {
        ViewMode::List => handle_list_key(app, key),
        ViewMode::Help => handle_help_key(app, key),
    }
}

fn handle_list_key(app: &mut RosterApp, key: KeyEvent) -> Result<bool> {
    let ctx = ListActionContext {
        has_items: app.item_count() > 0,
        can_load_more: app.roster().can_load_more(),
    };

    let Some(action) = determine_list_action(key, ctx) else {
        return Ok(false);
    };

    execute_list_action(app, action)
}

/// Execute a list action (imperative shell).
fn execute_list_action(app: &mut RosterApp, action: ListAction) -> Result<bool> {
    let page_size = app.visible_rows().max(1) as isize;

    match action {
        ListAction::Quit => return Ok(true),

        ListAction::MoveUp => move_selection(app, -1),
        ListAction::MoveDown => move_selection(app, 1),
        ListAction::PageUp => move_selection(app, -page_size),
        ListAction::PageDown => move_selection(app, page_size),

        ListAction::JumpToTop => app.list_mut().reset(),

        ListAction::JumpToBottom => {
            let count = app.item_count();
            move_selection(app, count as isize);
        }

        ListAction::ToggleDetail => app.toggle_selected(),

        ListAction::LoadMore => app.load_more(),

        ListAction::ShowHelp => app.set_view_mode(ViewMode::Help),
    }

    Ok(false)
}

fn handle_help_key(app: &mut RosterApp, key: KeyEvent) -> Result<bool> {
    if key.code == KeyCode::Char('q') {
        return Ok(true);
    }
    // Any other key closes help
    app.set_view_mode(ViewMode::List);
    Ok(false)
}

/// Move cursor by delta (can be negative)
fn move_selection(app: &mut RosterApp, delta: isize) {
    let count = app.item_count();
    let visible = app.visible_rows();
    app.list_mut().move_by(delta, count, visible);
}
