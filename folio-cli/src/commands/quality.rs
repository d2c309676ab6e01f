//! Quality score command handler

use anyhow::Result;
use colored::*;
use folio_core::{Command, ViewUpdate};

use crate::config::Config;

/// Tick the given checks and print the resulting score
pub fn show_score(config: &Config, checks: &[String]) -> Result<()> {
    let mut page = config.controller()?;

    for id in checks {
        page.dispatch(Command::ToggleCheck {
            id: id.clone(),
            checked: true,
        })?;
    }
    let score = page.quality().recompute();

    for check in page.quality().checks() {
        let mark = if score.checked.contains(&check.id) {
            "[x]".green()
        } else {
            "[ ]".dimmed()
        };
        println!("  {} {} {}", mark, check.label, format!("(+{})", check.weight).dimmed());
    }

    println!();
    println!(
        "{} {} {}",
        "Quality score:".bold(),
        score.score.to_string().cyan().bold(),
        format!("({}°)", score.ring_angle_deg).dimmed()
    );

    Ok(())
}
