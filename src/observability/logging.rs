//! Tracing subscriber setup.
//!
//! While the terminal UI owns stdout/stderr, log lines would corrupt the
//! screen, so the interactive command writes them to a file instead. The
//! headless commands log to stderr.

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::io::ensure_dir;

static TUI_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Record whether the alternate screen is currently active.
pub fn set_tui_active(active: bool) {
    TUI_ACTIVE.store(active, Ordering::SeqCst);
}

pub fn is_tui_active() -> bool {
    TUI_ACTIVE.load(Ordering::SeqCst)
}

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Default log file under the user cache directory.
pub fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("starroster").join("starroster.log"))
}

/// Pure function mapping `-v` count and configured level to a filter directive.
///
/// An explicit `-v` always wins over the configured level.
pub fn level_directive(verbosity: u8, configured: Option<&str>) -> String {
    match verbosity {
        0 => configured.unwrap_or("warn").to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn stderr_is_terminal() -> bool {
    std::io::stderr().is_terminal()
}

/// Run `f` with a temporary stderr subscriber.
///
/// Covers work that happens before [`init_logging`] can run, such as
/// loading the configuration that decides where logs go.
pub fn with_bootstrap_logging<T>(directive: &str, f: impl FnOnce() -> T) -> T {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive))
        .with_target(false)
        .with_ansi(stderr_is_terminal())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}

/// Install the global subscriber. `RUST_LOG` overrides `directive`.
///
/// Calling this more than once keeps the first subscriber.
pub fn init_logging(target: &LogTarget, directive: &str) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(directive))
        .with_target(false);

    let installed = match target {
        LogTarget::Stderr => builder
            .with_ansi(stderr_is_terminal())
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
    };

    if let Err(e) = installed {
        // Already installed (tests, repeated init); keep the existing one.
        eprintln!("Note: logging already configured: {}", e);
    }
    Ok(())
}

fn open_log_file(path: &Path) -> Result<std::fs::File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
