//! Folio CLI
//!
//! Command-line presentation layer for the Folio portfolio page.

mod commands;
mod config;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio portfolio page CLI", long_about = None)]
struct Cli {
    /// Content JSON file (defaults to the built-in portfolio)
    #[arg(long, global = true, env = "FOLIO_CONTENT")]
    content: Option<PathBuf>,

    /// Milliseconds each pipeline step stays running
    #[arg(long, global = true, env = "FOLIO_STEP_DELAY_MS")]
    step_delay_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "folio_core=warn,folio=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load(cli.content, cli.step_delay_ms)?;

    handle_command(cli.command, &config).await
}
