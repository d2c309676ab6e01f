//! Effect command handlers

use anyhow::Result;
use colored::*;
use folio_core::service::ClickTarget;
use folio_core::{Command, ViewUpdate};

use crate::config::Config;

/// Spawn one word bubble at (x, y) and print it
pub fn spawn_bubble(config: &Config, x: i32, y: i32) -> Result<()> {
    let mut page = config.controller()?;

    match page.dispatch(Command::Click {
        x,
        y,
        target: ClickTarget::Surface,
    })? {
        ViewUpdate::Bubble(bubble) => {
            println!(
                "{} at ({}, {}) drifting {}px, rising {}px",
                bubble.word.cyan().bold(),
                bubble.x,
                bubble.y,
                bubble.drift_x,
                bubble.rise
            );
        }
        _ => println!("{}", "No bubble spawned.".yellow()),
    }

    Ok(())
}
