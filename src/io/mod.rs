pub mod real;
pub mod traits;
pub mod wire;

// Re-export I/O traits for convenient access
pub use real::{HttpFetcher, DEFAULT_USER_AGENT};
pub use traits::Fetcher;

use anyhow::Result;
use std::fs;
use std::path::Path;

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
