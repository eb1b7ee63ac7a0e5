use anyhow::{Context, Result};
use clap::Parser;
use starroster::cli::{Cli, Commands};
use starroster::commands::{self, DumpOptions};
use starroster::config::{self, StarrosterConfig};
use starroster::io::HttpFetcher;
use starroster::observability::{
    default_log_file, init_logging, install_panic_hook, level_directive, with_bootstrap_logging,
    LogTarget,
};
use std::sync::Arc;

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Config warnings fire before the configured subscriber exists.
    let config = with_bootstrap_logging(&level_directive(cli.verbosity, None), || {
        load_configuration(&cli)
    })?;
    let command = cli.resolved_command();

    let log_target = log_target_for(&command, &config);
    let directive = level_directive(cli.verbosity, config.logging.level.as_deref());
    init_logging(&log_target, &directive)?;
    install_panic_hook(match &log_target {
        LogTarget::File(path) => Some(path.clone()),
        LogTarget::Stderr => None,
    });

    match command {
        Commands::Init { force } => {
            let current_dir = std::env::current_dir().context("Failed to read current directory")?;
            let path = commands::init_config(&current_dir, force)?;
            println!("Created {} configuration file", path.display());
            Ok(())
        }
        Commands::Browse => {
            let start = config::resolve_start_locator(cli.api_url.as_deref(), &config);
            let fetcher = Arc::new(build_fetcher(&config)?);
            let runtime = build_runtime()?;
            commands::browse(start, fetcher, runtime.handle().clone())
        }
        Commands::Dump {
            max_pages,
            homeworlds,
            format,
        } => {
            let start = config::resolve_start_locator(cli.api_url.as_deref(), &config);
            let fetcher = build_fetcher(&config)?;
            let runtime = build_runtime()?;
            let options = DumpOptions {
                max_pages,
                homeworlds,
                format,
            };
            let stdout = std::io::stdout();
            commands::run_dump(&fetcher, start, &options, &runtime, &mut stdout.lock())
        }
    }
}

fn load_configuration(cli: &Cli) -> Result<StarrosterConfig> {
    match &cli.config {
        Some(path) => config::load_config_from_path(path),
        None => Ok(config::load_config()),
    }
}

// Pure function: the TUI owns the terminal, so its logs go to a file
fn log_target_for(command: &Commands, config: &StarrosterConfig) -> LogTarget {
    match command {
        Commands::Browse => config
            .logging
            .file
            .clone()
            .or_else(default_log_file)
            .map(LogTarget::File)
            .unwrap_or(LogTarget::Stderr),
        Commands::Dump { .. } | Commands::Init { .. } => LogTarget::Stderr,
    }
}

fn build_fetcher(config: &StarrosterConfig) -> Result<HttpFetcher> {
    HttpFetcher::new(config::user_agent(config)).context("Failed to build HTTP client")
}

fn build_runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("starroster-fetch")
        .build()
        .context("Failed to start async runtime")
}
