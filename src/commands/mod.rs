//! CLI command implementations.
//!
//! - **browse**: interactive terminal UI over the roster
//! - **dump**: headless walk over the pages, printed as text or JSON
//! - **init**: write a starter `.starroster.toml`

pub mod browse;
pub mod dump;
pub mod init;

pub use browse::browse;
pub use dump::{collect_roster, run_dump, write_report, DumpEntry, DumpOptions, DumpReport};
pub use init::init_config;
