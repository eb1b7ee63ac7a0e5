use crate::core::Locator;
use crate::io::Fetcher;
use crate::tui::RosterExplorer;
use anyhow::{Context, Result};
use std::sync::Arc;
use tokio::runtime::Handle;

/// Open the interactive roster browser and block until the user quits.
pub fn browse<F: Fetcher + 'static>(start: Locator, fetcher: Arc<F>, runtime: Handle) -> Result<()> {
    tracing::info!(%start, "starting roster browser");
    let mut explorer =
        RosterExplorer::new(start, fetcher, runtime).context("Failed to initialize terminal")?;
    explorer.run()
}
