//! Overlay layout helpers.

use super::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const KEY_BINDINGS: &[(&str, &str)] = &[
    ("↑/k ↓/j", "Move cursor"),
    ("PgUp/PgDn", "Move by a page"),
    ("g/Home G/End", "Jump to top / bottom"),
    ("+ Space Enter", "Show or hide homeworld"),
    ("m n", "Load more characters"),
    ("?", "This help"),
    ("q Esc Ctrl+C", "Quit"),
];

/// Centered rectangle of at most `width` x `height` inside `area`
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the key binding overlay on top of the current frame
pub fn render_help_overlay(frame: &mut Frame) {
    let theme = Theme::default();
    let height = KEY_BINDINGS.len() as u16 + 4;
    let area = centered_rect(48, height, frame.area());

    let mut lines: Vec<Line> = KEY_BINDINGS
        .iter()
        .map(|(keys, description)| {
            Line::from(vec![
                Span::styled(format!("{:<16}", keys), Style::default().fg(theme.accent())),
                Span::raw(*description),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        theme.metric_style(),
    )));

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Help")
            .border_style(Style::default().fg(theme.accent())),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}
