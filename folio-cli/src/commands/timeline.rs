//! Timeline command handler

use anyhow::{Result, bail};
use colored::*;
use folio_core::{Command, ViewUpdate};

use crate::config::Config;

/// Show the track with the milestone nearest to `year` highlighted
pub fn show_timeline(config: &Config, year: Option<f64>) -> Result<()> {
    let mut page = config.controller()?;

    let view = match year {
        Some(year) => match page.dispatch(Command::SelectYear(year))? {
            ViewUpdate::Timeline(view) => view,
            _ => bail!("Unexpected view update for timeline"),
        },
        None => page.initial_views().timeline,
    };

    for item in &view.items {
        if item.active {
            println!("  {} {} {}", "●".green(), item.year.to_string().bold(), item.role.bold());
        } else {
            println!("  {} {} {}", "○".dimmed(), item.year, item.role.dimmed());
        }
    }

    if let Some(detail) = view.detail {
        println!();
        println!("{}", format!("{} · {}", detail.year, detail.role).bold());
        println!("  {}", detail.org.cyan());
        println!("  {}", detail.detail);
    }

    Ok(())
}
