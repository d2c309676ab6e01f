//! Pipeline command handlers
//!
//! Runs the pipeline simulation and prints step changes as they happen.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use folio_core::domain::log::LogLine;
use folio_core::domain::pipeline::{PipelineStep, StepStatus};
use folio_core::view::pipeline::{PipelineEventKind, RunOutcome};
use tokio::sync::broadcast::error::RecvError;
use tracing::warn;

use crate::config::Config;

/// Pipeline subcommands
#[derive(Subcommand)]
pub enum PipelineCommands {
    /// Run the simulated pipeline
    Run,
    /// List the pipeline steps
    Steps,
}

/// Handle pipeline commands
pub async fn handle_pipeline_command(command: PipelineCommands, config: &Config) -> Result<()> {
    match command {
        PipelineCommands::Run => run_pipeline(config).await,
        PipelineCommands::Steps => list_steps(config),
    }
}

/// Run the simulation, streaming each event to the terminal
async fn run_pipeline(config: &Config) -> Result<()> {
    let page = config.controller()?;
    let simulator = page.simulator().clone();
    let mut events = simulator.subscribe();

    let runner = tokio::spawn(async move { simulator.start().await });

    loop {
        match events.recv().await {
            Ok(event) => {
                match event.kind {
                    PipelineEventKind::RunStarted => {
                        let id = event
                            .snapshot
                            .id
                            .map(|id| id.to_string())
                            .unwrap_or_default();
                        println!("{} {}", "Pipeline run".bold(), id.dimmed());
                        println!("{}", "─".repeat(60).dimmed());
                    }
                    PipelineEventKind::StepStarted { index }
                    | PipelineEventKind::StepCompleted { index } => {
                        print_step(index, &event.snapshot.steps[index]);
                    }
                    PipelineEventKind::RunFinished => {}
                }
                if let Some(line) = event.snapshot.log.last() {
                    print_log_line(line);
                }
                if event.kind == PipelineEventKind::RunFinished {
                    break;
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                warn!("Display fell behind by {} event(s)", skipped);
            }
            Err(RecvError::Closed) => break,
        }
    }

    let outcome = runner.await.context("Pipeline task failed")?;
    println!("{}", "─".repeat(60).dimmed());
    match outcome {
        RunOutcome::Completed => println!("{}", "✓ Pipeline run complete".green().bold()),
        RunOutcome::AlreadyRunning => println!("{}", "Pipeline already running".yellow()),
    }

    Ok(())
}

/// List the configured steps
fn list_steps(config: &Config) -> Result<()> {
    let page = config.controller()?;
    let run = page.simulator().snapshot();

    println!("{}", format!("{} step(s):", run.steps.len()).bold());
    for (index, step) in run.steps.iter().enumerate() {
        print_step(index, step);
    }

    Ok(())
}

fn print_step(index: usize, step: &PipelineStep) {
    let status = match step.status {
        StepStatus::Pending => step.status.label().dimmed(),
        StepStatus::Running => step.status.label().yellow(),
        StepStatus::Done => step.status.label().green(),
    };
    println!("  {}. {:<24} {}", index + 1, step.name, status);
}

fn print_log_line(line: &LogLine) {
    println!("     {} {}", line.clock().dimmed(), line.message.dimmed());
}
