//! Color themes and styling for TUI components.

use ratatui::style::{Color, Modifier, Style};

/// Color scheme for the roster TUI
pub struct Theme {
    /// Primary accent color (cyan for active elements)
    pub primary: Color,
    /// Success color (green for resolved details)
    pub success: Color,
    /// Muted color (dark gray for hints and disabled controls)
    pub muted: Color,
    /// Text color (white for normal text)
    pub text: Color,
    /// Error color (red for failures)
    pub error: Color,
}

impl Theme {
    /// Create the default theme
    pub fn default_theme() -> Self {
        Self {
            primary: Color::Cyan,
            success: Color::Green,
            muted: Color::DarkGray,
            text: Color::White,
            error: Color::Red,
        }
    }

    /// Accent color (alias for primary)
    pub fn accent(&self) -> Color {
        self.primary
    }

    /// Warning color (yellow for transient failures)
    pub fn warning(&self) -> Color {
        Color::Yellow
    }

    /// Style for the title bar
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for item names
    pub fn name_style(&self, is_selected: bool) -> Style {
        if is_selected {
            Style::default().fg(self.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.text)
        }
    }

    /// Background of the cursor row
    pub fn selected_row_style(&self) -> Style {
        Style::default().bg(Color::DarkGray)
    }

    /// Style for the `+` / `-` toggle marker
    pub fn toggle_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a resolved detail panel
    pub fn detail_style(&self) -> Style {
        Style::default().fg(self.success)
    }

    /// Style for an unavailable detail panel
    pub fn detail_unavailable_style(&self) -> Style {
        Style::default().fg(self.warning())
    }

    /// Style for the load-more control
    pub fn control_style(&self, enabled: bool) -> Style {
        if enabled {
            Style::default()
                .fg(self.primary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.muted)
        }
    }

    /// Style for metrics and hints
    pub fn metric_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for blocking errors
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}
