//! Headless roster walk.
//!
//! Drives the same [`RosterState`] machine as the terminal UI, awaiting each
//! effect inline instead of handing it to a background runner.

use crate::cli::OutputFormat;
use crate::core::Locator;
use crate::io::Fetcher;
use crate::roster::{run_effect, DetailPanel, RosterState};
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use tokio::runtime::Runtime;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpOptions {
    pub max_pages: Option<usize>,
    pub homeworlds: bool,
    pub format: OutputFormat,
}

impl Default for DumpOptions {
    fn default() -> Self {
        Self {
            max_pages: None,
            homeworlds: false,
            format: OutputFormat::Text,
        }
    }
}

/// One character in fetch order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DumpEntry {
    pub name: String,
    pub homeworld_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homeworld: Option<String>,
}

/// Everything fetched during one walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DumpReport {
    pub pages: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    pub complete: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub characters: Vec<DumpEntry>,
}

/// Walk pages from `start` and optionally resolve every homeworld.
///
/// A first-page failure is an error. A later page failure ends the walk
/// early and is recorded as the report's warning.
pub async fn collect_roster<F: Fetcher>(
    fetcher: &F,
    start: Locator,
    options: &DumpOptions,
) -> Result<DumpReport> {
    let mut roster = RosterState::new();
    let mut warning = None;
    let mut effect = roster.mount(start.clone());

    while let Some(pending) = effect.take() {
        roster.apply(run_effect(fetcher, pending).await);

        if let Some(err) = roster.fatal_error() {
            anyhow::bail!("Failed to load {start}: {err}");
        }
        if let Some(err) = roster.last_error() {
            warn!(error = %err, "stopping walk after page failure");
            warning = Some(format!("Stopped after a page failed to load: {err}"));
            break;
        }
        let pages = roster.pagination().pages().len();
        if options.max_pages.is_some_and(|max| pages >= max) {
            info!(pages, "page limit reached");
            break;
        }
        effect = roster.load_more();
    }

    let mut characters = Vec::with_capacity(roster.item_count());
    for index in 0..roster.item_count() {
        let homeworld = if options.homeworlds {
            resolve_detail(fetcher, &mut roster, index).await
        } else {
            None
        };
        if let Some(item) = roster.item(index) {
            characters.push(DumpEntry {
                name: item.name.clone(),
                homeworld_url: item.detail_ref.to_string(),
                homeworld,
            });
        }
    }

    Ok(DumpReport {
        pages: roster.pagination().pages().len(),
        total: roster.pagination().reported_total(),
        complete: !roster.has_more(),
        warning,
        characters,
    })
}

/// Expand row `index`, await its detail if needed and read the label.
async fn resolve_detail<F: Fetcher>(
    fetcher: &F,
    roster: &mut RosterState,
    index: usize,
) -> Option<String> {
    if !roster.expanded().is_expanded(index) {
        if let Some(effect) = roster.toggle_detail(index) {
            roster.apply(run_effect(fetcher, effect).await);
        }
    }
    match roster.detail_panel(index) {
        DetailPanel::Ready(label) => Some(label.to_string()),
        _ => None,
    }
}

/// Print `report` in the requested format.
pub fn write_report(report: &DumpReport, format: OutputFormat, out: &mut dyn Write) -> Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for (index, entry) in report.characters.iter().enumerate() {
                match &entry.homeworld {
                    Some(homeworld) => {
                        writeln!(out, "{:>4}. {} ({})", index + 1, entry.name, homeworld)?
                    }
                    None => writeln!(out, "{:>4}. {}", index + 1, entry.name)?,
                }
            }
            let total = report
                .total
                .map(|total| format!(" of {total}"))
                .unwrap_or_default();
            writeln!(
                out,
                "Loaded {}{} characters across {} page(s){}",
                report.characters.len(),
                total,
                report.pages,
                if report.complete { "" } else { ", more available" }
            )?;
            if let Some(warning) = &report.warning {
                writeln!(out, "warning: {warning}")?;
            }
        }
    }
    Ok(())
}

/// Run the walk to completion on `runtime` and print the report.
pub fn run_dump<F: Fetcher>(
    fetcher: &F,
    start: Locator,
    options: &DumpOptions,
    runtime: &Runtime,
    out: &mut dyn Write,
) -> Result<()> {
    let report = runtime.block_on(collect_roster(fetcher, start, options))?;
    write_report(&report, options.format, out).context("Failed to write dump output")
}
