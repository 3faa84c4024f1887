//! CLI argument parsing for lookahead-tui.

use clap::{Parser, Subcommand};
use lookahead_core::config::{Config, ProviderKind};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lookahead-tui")]
#[command(about = "Debounced autocomplete search box in the terminal", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (defaults to ~/.config/lookahead/config.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (logs to the temp dir, see lookahead-tui.log)
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Result provider: sample or catalog
    #[arg(long, global = true)]
    pub provider: Option<ProviderKind>,

    /// Debounce delay in milliseconds
    #[arg(long, global = true)]
    pub debounce_ms: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive TUI mode (default)
    Tui,

    /// One-shot search query, printed as JSON
    Query {
        /// Search query
        query: String,
    },

    /// Print the effective configuration
    Config,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(kind) = self.provider {
            config.provider.kind = kind;
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.search.debounce_ms = debounce_ms;
        }
    }
}
