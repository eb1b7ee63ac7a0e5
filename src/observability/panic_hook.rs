//! Custom panic hook for structured crash reports.
//!
//! The hook leaves TUI mode (alternate screen, raw mode) before printing so
//! the report is readable, then points at the log file when one is in use.

use super::logging::{is_tui_active, set_tui_active};
use std::panic::PanicHookInfo;
use std::path::PathBuf;
use tracing::Span;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const INNER_WIDTH: usize = 76;

/// Install the custom panic hook.
///
/// Call early in `main`, after logging is configured, so `log_file` names
/// the file the session wrote to.
pub fn install_panic_hook(log_file: Option<PathBuf>) {
    std::panic::set_hook(Box::new(move |info| {
        print_crash_report(info, log_file.as_ref());
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>, log_file: Option<&PathBuf>) {
    exit_tui_mode();

    eprintln!();
    print_header();
    print_panic_details(info);
    print_backtrace_section();
    print_footer(log_file);
}

fn exit_tui_mode() {
    if !is_tui_active() {
        return;
    }
    set_tui_active(false);

    // Ignore errors - we're already panicking
    let _ = crossterm::terminal::disable_raw_mode();
    let _ = crossterm::execute!(
        std::io::stdout(),
        crossterm::terminal::LeaveAlternateScreen,
        crossterm::event::DisableMouseCapture,
        crossterm::cursor::Show
    );
}

fn rule(left: char, right: char) -> String {
    format!("{}{}{}", left, "═".repeat(INNER_WIDTH + 2), right)
}

fn row(text: &str) -> String {
    format!("║ {:<width$} ║", truncate(text, INNER_WIDTH), width = INNER_WIDTH)
}

fn print_header() {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

    eprintln!("{}", rule('╔', '╗'));
    eprintln!("{}", row("STARROSTER CRASH REPORT"));
    eprintln!("{}", rule('╠', '╣'));
    eprintln!("{}", row(&format!("Version: {}", VERSION)));
    eprintln!("{}", row(&format!("Platform: {}", std::env::consts::OS)));
    eprintln!("{}", row(&format!("Time: {}", timestamp)));
    eprintln!("{}", rule('╠', '╣'));
}

fn print_panic_details(info: &PanicHookInfo<'_>) {
    eprintln!("{}", row(&format!("PANIC: {}", extract_panic_message(info))));

    if let Some(location) = info.location() {
        eprintln!(
            "{}",
            row(&format!(
                "Location: {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            ))
        );
    }

    let current_span = Span::current();
    if let Some(metadata) = current_span.metadata() {
        eprintln!("{}", row(&format!("Span: {}", metadata.name())));
    }
}

fn print_backtrace_section() {
    eprintln!("{}", rule('╠', '╣'));

    if std::env::var("RUST_BACKTRACE").is_ok() {
        eprintln!("{}", row("STACK TRACE:"));
        eprintln!("{}", rule('╚', '╝'));
        eprintln!();
        eprintln!("{}", std::backtrace::Backtrace::capture());
    } else {
        eprintln!("{}", row("Run with RUST_BACKTRACE=1 for stack trace"));
        eprintln!("{}", rule('╚', '╝'));
    }
}

fn print_footer(log_file: Option<&PathBuf>) {
    if let Some(path) = log_file {
        eprintln!();
        eprintln!("Session log: {}", path.display());
    }
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
