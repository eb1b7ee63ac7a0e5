//! List view rendering.

use super::app::RosterApp;
use super::list_state::calculate_visible_range;
use super::theme::Theme;
use crate::core::Item;
use crate::roster::{DetailPanel, Phase, RosterState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Label shown before a resolved detail
pub const DETAIL_LABEL: &str = "Homeworld";

/// Columns used by the cursor, index and toggle before the name.
const ROW_PREFIX_WIDTH: usize = 11;

/// Render main list view
pub fn render(frame: &mut Frame, app: &RosterApp) {
    let theme = Theme::default();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // List
            Constraint::Length(4), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0], &theme);
    render_body(frame, app, chunks[1], &theme);
    render_footer(frame, app, chunks[2], &theme);
}

/// Render title and load counts
fn render_header(frame: &mut Frame, app: &RosterApp, area: Rect, theme: &Theme) {
    let roster = app.roster();
    let pagination = roster.pagination();

    let loaded = match pagination.reported_total() {
        Some(total) => format!("Loaded: {} of {}", roster.item_count(), total),
        None => format!("Loaded: {}", roster.item_count()),
    };

    let header_text = vec![
        Line::from(Span::styled("Star Wars Characters", theme.title_style())),
        Line::from(vec![
            Span::styled(loaded, theme.metric_style()),
            Span::raw("  "),
            Span::styled(
                format!("Pages: {}", pagination.pages().len()),
                theme.metric_style(),
            ),
        ]),
    ];

    let header = Paragraph::new(header_text).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, area);
}

fn render_body(frame: &mut Frame, app: &RosterApp, area: Rect, theme: &Theme) {
    let roster = app.roster();

    match roster.phase() {
        Phase::Idle | Phase::LoadingFirstPage => {
            let loading = Paragraph::new("Loading...").style(theme.metric_style());
            frame.render_widget(loading, area);
        }
        Phase::Failed => render_fatal_error(frame, roster, area, theme),
        Phase::Ready | Phase::LoadingNextPage => render_list(frame, app, area, theme),
    }
}

/// Blocking first-page error; nothing else is shown
fn render_fatal_error(frame: &mut Frame, roster: &RosterState, area: Rect, theme: &Theme) {
    let message = roster
        .fatal_error()
        .map(|err| err.to_string())
        .unwrap_or_default();

    let lines = vec![
        Line::from(Span::styled("Failed to load characters", theme.error_style())),
        Line::from(""),
        Line::from(Span::styled(message, Style::default().fg(theme.text))),
    ];

    let error = Paragraph::new(lines).wrap(Wrap { trim: true });
    frame.render_widget(error, area);
}

/// Render the flattened items with their detail panels
fn render_list(frame: &mut Frame, app: &RosterApp, area: Rect, theme: &Theme) {
    let roster = app.roster();
    let selected = app.list().selected_index();
    let range = calculate_visible_range(
        app.list().scroll_offset(),
        area.height as usize,
        roster.item_count(),
    );

    let name_width = (area.width as usize).saturating_sub(ROW_PREFIX_WIDTH);
    let items: Vec<ListItem> = roster
        .items()
        .enumerate()
        .skip(range.start)
        .take(range.len())
        .map(|(idx, item)| {
            let row = Row {
                index: idx,
                is_selected: idx == selected,
                panel: roster.detail_panel(idx),
                name_width,
            };
            format_list_item(item, row, theme)
        })
        .collect();

    if items.is_empty() {
        let empty = Paragraph::new("No characters found").style(theme.metric_style());
        frame.render_widget(empty, area);
    } else {
        let list = List::new(items).block(Block::default().borders(Borders::NONE));
        frame.render_widget(list, area);
    }
}

/// Per-row render inputs
struct Row<'a> {
    index: usize,
    is_selected: bool,
    panel: DetailPanel<'a>,
    name_width: usize,
}

/// Format a single row plus its detail panel when visible
fn format_list_item(item: &Item, row: Row<'_>, theme: &Theme) -> ListItem<'static> {
    let Row {
        index,
        is_selected,
        panel,
        name_width,
    } = row;
    let indicator = if is_selected { "▸ " } else { "  " };
    let toggle = if panel == DetailPanel::Hidden {
        "[+]"
    } else {
        "[-]"
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(indicator, Style::default().fg(theme.accent())),
        Span::styled(format!("#{:<4}", index + 1), theme.metric_style()),
        Span::styled(toggle, theme.toggle_style()),
        Span::raw(" "),
        Span::styled(
            truncate_to_width(&item.name, name_width),
            theme.name_style(is_selected),
        ),
    ])];

    match panel {
        DetailPanel::Ready(label) => lines.push(Line::from(vec![
            Span::raw("          "),
            Span::styled(format!("{DETAIL_LABEL}: "), theme.metric_style()),
            Span::styled(label.to_string(), theme.detail_style()),
        ])),
        DetailPanel::Unavailable => lines.push(Line::from(vec![
            Span::raw("          "),
            Span::styled(
                format!("{DETAIL_LABEL}: unavailable"),
                theme.detail_unavailable_style(),
            ),
        ])),
        // Pending shows nothing until the label arrives.
        DetailPanel::Hidden | DetailPanel::Pending => {}
    }

    let style = if is_selected {
        theme.selected_row_style()
    } else {
        Style::default()
    };

    ListItem::new(Text::from(lines)).style(style)
}

/// Cut `text` to `max_width` display columns, ending in an ellipsis when shortened.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for c in text.chars() {
        let cw = c.width().unwrap_or(0);
        if width + cw + 1 > max_width {
            break;
        }
        result.push(c);
        width += cw;
    }
    result.push('…');
    result
}

/// Text of the load-more control for the current state
pub fn load_more_label(roster: &RosterState) -> &'static str {
    if roster.pagination().is_busy() {
        "Loading..."
    } else if roster.has_more() {
        "Load More"
    } else {
        "No more characters"
    }
}

/// Render the load-more control, transient errors and key hints
fn render_footer(frame: &mut Frame, app: &RosterApp, area: Rect, theme: &Theme) {
    let roster = app.roster();

    let mut lines = vec![Line::from(vec![
        Span::raw("[ "),
        Span::styled(
            load_more_label(roster),
            theme.control_style(roster.can_load_more()),
        ),
        Span::raw(" ]"),
    ])];

    if let Some(err) = roster.last_error() {
        lines.push(Line::from(Span::styled(
            format!("Could not load more: {} (press m to retry)", err.summary()),
            Style::default().fg(theme.warning()),
        )));
    } else {
        lines.push(Line::from(""));
    }

    let position = if app.item_count() > 0 {
        format!("{}/{}", app.list().selected_index() + 1, app.item_count())
    } else {
        "0/0".to_string()
    };

    lines.push(Line::from(vec![
        Span::styled(position, theme.metric_style()),
        Span::raw("  |  "),
        Span::styled("↑↓/jk", Style::default().fg(theme.accent())),
        Span::raw(":Nav  "),
        Span::styled("+", Style::default().fg(theme.accent())),
        Span::raw(":Homeworld  "),
        Span::styled("m", Style::default().fg(theme.accent())),
        Span::raw(":More  "),
        Span::styled("?", Style::default().fg(theme.accent())),
        Span::raw(":Help  "),
        Span::styled("q", Style::default().fg(theme.accent())),
        Span::raw(":Quit"),
    ]));

    let footer = Paragraph::new(lines).block(Block::default().borders(Borders::TOP));
    frame.render_widget(footer, area);
}
