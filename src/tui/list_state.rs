//! Cursor and scroll position for the roster list.
//!
//! The cursor (which row keyboard actions target) is separate from the
//! expanded selection kept by the roster: moving the cursor never expands
//! or collapses anything.

/// Manages cursor position and scroll offset.
///
/// Pure state container with no I/O operations.
#[derive(Debug, Clone, Default)]
pub struct ListState {
    selected_index: usize,
    scroll_offset: usize,
}

impl ListState {
    /// Create new list state with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get selected index.
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// Set selected index with bounds checking.
    pub fn set_selected_index(&mut self, index: usize, item_count: usize) {
        self.selected_index = clamp_selection(index, item_count);
    }

    /// Get scroll offset.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Set scroll offset.
    pub fn set_scroll_offset(&mut self, offset: usize) {
        self.scroll_offset = offset;
    }

    /// Move the cursor by `delta` rows and keep it inside the viewport.
    pub fn move_by(&mut self, delta: isize, item_count: usize, visible_rows: usize) {
        if item_count == 0 {
            return;
        }
        let target = self.selected_index.saturating_add_signed(delta);
        self.set_selected_index(target, item_count);
        self.scroll_offset = scroll_to_show(self.selected_index, self.scroll_offset, visible_rows);
    }

    /// Reset selection and scroll to top.
    pub fn reset(&mut self) {
        self.selected_index = 0;
        self.scroll_offset = 0;
    }
}

// ============================================================================
// PURE FUNCTIONS
// ============================================================================

/// Clamps selection index to valid range (pure).
pub fn clamp_selection(index: usize, item_count: usize) -> usize {
    if item_count == 0 {
        0
    } else {
        index.min(item_count - 1)
    }
}

/// Scroll offset that keeps `selected` inside a viewport of `visible_rows` (pure).
pub fn scroll_to_show(selected: usize, scroll_offset: usize, visible_rows: usize) -> usize {
    let visible_rows = visible_rows.max(1);
    if selected < scroll_offset {
        selected
    } else if selected >= scroll_offset + visible_rows {
        selected + 1 - visible_rows
    } else {
        scroll_offset
    }
}

/// Calculates visible range for scrolling (pure).
pub fn calculate_visible_range(
    scroll_offset: usize,
    viewport_height: usize,
    total_items: usize,
) -> std::ops::Range<usize> {
    let start = scroll_offset.min(total_items);
    let end = (scroll_offset + viewport_height).min(total_items);
    start..end
}
