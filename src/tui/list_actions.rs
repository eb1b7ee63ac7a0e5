//! Pure action determination for list view keyboard handling.
//!
//! "Which action does this key trigger?" is answered here without touching
//! application state; `navigation` executes the chosen action.

use crossterm::event::{KeyCode, KeyEvent};

/// Actions that can be triggered from the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    /// Quit the application.
    Quit,

    /// Move cursor up by one item.
    MoveUp,

    /// Move cursor down by one item.
    MoveDown,

    /// Jump to first item.
    JumpToTop,

    /// Jump to last item.
    JumpToBottom,

    /// Move cursor up by a page.
    PageUp,

    /// Move cursor down by a page.
    PageDown,

    /// Expand or collapse the detail panel of the item under the cursor.
    ToggleDetail,

    /// Fetch the next page.
    LoadMore,

    /// Show help overlay.
    ShowHelp,
}

/// Context needed to evaluate guards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListActionContext {
    /// Whether there are any items in the list.
    pub has_items: bool,

    /// Whether the load-more control is enabled.
    pub can_load_more: bool,
}

impl ListActionContext {
    /// Create context for an empty list.
    #[cfg(test)]
    pub fn empty() -> Self {
        Self {
            has_items: false,
            can_load_more: false,
        }
    }

    /// Create context for a populated list with more pages available.
    #[cfg(test)]
    pub fn with_more() -> Self {
        Self {
            has_items: true,
            can_load_more: true,
        }
    }
}

/// Pure function: Determine which action a key triggers in list view.
///
/// # Returns
/// * `Some(action)` - The action to execute
/// * `None` - Key has no action or a guard prevented it
pub fn determine_list_action(key: KeyEvent, ctx: ListActionContext) -> Option<ListAction> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(ListAction::Quit),

        KeyCode::Up | KeyCode::Char('k') => Some(ListAction::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(ListAction::MoveDown),
        KeyCode::Char('g') | KeyCode::Home => Some(ListAction::JumpToTop),
        KeyCode::Char('G') | KeyCode::End => Some(ListAction::JumpToBottom),
        KeyCode::PageUp => Some(ListAction::PageUp),
        KeyCode::PageDown => Some(ListAction::PageDown),

        // Toggle - requires an item under the cursor
        KeyCode::Char('+') | KeyCode::Char('-') | KeyCode::Char(' ') | KeyCode::Enter => {
            ctx.has_items.then_some(ListAction::ToggleDetail)
        }

        // Load more - disabled while a fetch is in flight or on the last page
        KeyCode::Char('m') | KeyCode::Char('n') => {
            ctx.can_load_more.then_some(ListAction::LoadMore)
        }

        KeyCode::Char('?') => Some(ListAction::ShowHelp),

        _ => None,
    }
}
