//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod effects;
mod pipeline;
mod projects;
mod quality;
mod render;
mod timeline;

pub use pipeline::PipelineCommands;
pub use projects::ProjectCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Browse the project catalog
    Projects {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Show the career milestone nearest to a year
    Timeline {
        /// Slider position (defaults to the latest milestone)
        year: Option<f64>,
    },
    /// Compute the data quality score for a set of checks
    Quality {
        /// Check id to tick (repeatable)
        #[arg(short, long = "check")]
        checks: Vec<String>,
    },
    /// Pipeline run simulation
    Pipeline {
        #[command(subcommand)]
        command: PipelineCommands,
    },
    /// Render the initial page fragments
    Render {
        /// Emit structured views as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },
    /// Spawn a word bubble at a position
    Bubble {
        #[arg(default_value = "0")]
        x: i32,
        #[arg(default_value = "0")]
        y: i32,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Projects { command } => projects::handle_project_command(command, config),
        Commands::Timeline { year } => timeline::show_timeline(config, year),
        Commands::Quality { checks } => quality::show_score(config, &checks),
        Commands::Pipeline { command } => pipeline::handle_pipeline_command(command, config).await,
        Commands::Render { json } => render::render_page(config, json),
        Commands::Bubble { x, y } => effects::spawn_bubble(config, x, y),
    }
}
