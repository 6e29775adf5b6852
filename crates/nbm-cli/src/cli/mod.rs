//! CLI for the nbm catalog mirror.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use nbm_core::config;
use std::path::PathBuf;

use commands::{run_endpoints, run_mirror};

/// Top-level CLI for the nbm catalog mirror.
#[derive(Debug, Parser)]
#[command(name = "nbm")]
#[command(about = "nbm: concurrent mirror for the nekos.best media catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Discover the catalog and download every file not already present.
    Run {
        /// Directory to mirror into (defaults to the configured download dir).
        #[arg(long, value_name = "DIR")]
        download_dir: Option<PathBuf>,

        /// Download up to N files at a time (defaults to the configured limit).
        #[arg(long, value_name = "N")]
        concurrency: Option<usize>,
    },

    /// List the catalog's categories and their filename ranges.
    Endpoints,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run {
                download_dir,
                concurrency,
            } => run_mirror(&cfg, download_dir, concurrency).await?,
            CliCommand::Endpoints => run_endpoints(&cfg).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
