//! Observability infrastructure: logging setup and crash reports.
//!
//! ## Usage
//!
//! ```ignore
//! use starroster::observability::{init_logging, install_panic_hook, LogTarget};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_logging(&LogTarget::Stderr, "info")?;
//!     install_panic_hook(None);
//!     // ... rest of application
//!     Ok(())
//! }
//! ```

pub mod logging;
pub mod panic_hook;

pub use logging::{
    default_log_file, init_logging, is_tui_active, level_directive, set_tui_active,
    with_bootstrap_logging, LogTarget,
};
pub use panic_hook::install_panic_hook;
