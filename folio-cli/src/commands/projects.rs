//! Project command handlers
//!
//! Lists and filters the catalog and opens case studies.

use anyhow::{Result, bail};
use clap::Subcommand;
use colored::*;
use folio_core::markup;
use folio_core::view::catalog::{CaseStudy, ProjectCard};
use folio_core::{Command, ViewUpdate};

use crate::config::Config;

/// Project subcommands
#[derive(Subcommand)]
pub enum ProjectCommands {
    /// List projects, optionally filtered
    List {
        /// Only projects with this tag
        #[arg(short, long)]
        tag: Option<String>,

        /// Case-insensitive search text
        #[arg(short, long)]
        query: Option<String>,
    },
    /// Show a project's case study
    Show {
        /// Project id
        id: String,

        /// Print the modal body as HTML
        #[arg(long)]
        html: bool,
    },
    /// List the filter tags
    Tags,
}

/// Handle project commands
pub fn handle_project_command(command: ProjectCommands, config: &Config) -> Result<()> {
    match command {
        ProjectCommands::List { tag, query } => list_projects(config, tag, query),
        ProjectCommands::Show { id, html } => show_project(config, &id, html),
        ProjectCommands::Tags => list_tags(config),
    }
}

/// List the projects passing the filter
fn list_projects(config: &Config, tag: Option<String>, query: Option<String>) -> Result<()> {
    let mut page = config.controller()?;

    if let Some(tag) = tag {
        page.dispatch(Command::SetFilterTag(tag))?;
    }
    let update = page.dispatch(Command::SetQuery(query.unwrap_or_default()))?;

    let ViewUpdate::Catalog(view) = update else {
        bail!("Unexpected view update for project list");
    };

    if view.cards.is_empty() {
        println!("{}", "No projects match.".yellow());
    } else {
        println!(
            "{}",
            format!("Found {} project(s):", view.cards.len()).bold()
        );
        println!();
        for card in &view.cards {
            print_project_card(card);
        }
    }

    Ok(())
}

/// Show a single case study
fn show_project(config: &Config, id: &str, html: bool) -> Result<()> {
    let mut page = config.controller()?;

    match page.dispatch(Command::ViewCaseStudy(id.to_string()))? {
        ViewUpdate::Modal(modal) => match modal.case_study {
            Some(study) if html => println!("{}", markup::case_study(&study)),
            Some(study) => print_case_study(&study),
            None => bail!("Project {} has no case study", id),
        },
        _ => bail!("Project not found: {}", id),
    }

    Ok(())
}

/// List the filter tags
fn list_tags(config: &Config) -> Result<()> {
    let page = config.controller()?;
    let tags = page.catalog().tags();

    println!("{}", format!("{} filter tag(s):", tags.len()).bold());
    for tag in tags {
        println!("  {} {}", "▸".cyan(), tag);
    }

    Ok(())
}

/// Print a project card
fn print_project_card(card: &ProjectCard) {
    println!("  {} {}", "▸".cyan(), card.title.bold());
    println!("    ID:      {}", card.id.dimmed());
    println!("    Tags:    {}", card.tags.join(", ").dimmed());
    println!("    Stack:   {}", card.stack.dimmed());
    println!("    {}", card.summary);
    println!();
}

/// Print a case study
fn print_case_study(study: &CaseStudy) {
    println!("{}", study.title.bold());
    println!("  {}", study.summary);
    println!("  {} {}", "Stack:".bold(), study.stack);
    println!();
    for highlight in &study.highlights {
        println!("  • {}", highlight);
    }
    if !study.metrics.is_empty() {
        println!();
        println!("  {}", study.metrics.join("  |  ").cyan());
    }
}
