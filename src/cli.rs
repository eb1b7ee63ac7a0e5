use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per character
    Text,
    /// Pretty-printed JSON report
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "starroster")]
#[command(about = "Browse the Star Wars character roster page by page", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Starting page URL (overrides `[api] url` in the config file)
    #[arg(long, global = true, env = "STARROSTER_API_URL")]
    pub api_url: Option<String>,

    /// Configuration file (defaults to the nearest .starroster.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Browse the roster interactively (default)
    Browse,

    /// Walk the pages without a terminal UI and print what was fetched
    Dump {
        /// Stop after this many pages (at least 1)
        #[arg(long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        max_pages: Option<usize>,

        /// Resolve each character's homeworld
        #[arg(long)]
        homeworlds: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Write a starter .starroster.toml in the current directory
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    /// Subcommand to run; a bare invocation browses.
    pub fn resolved_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse)
    }
}
