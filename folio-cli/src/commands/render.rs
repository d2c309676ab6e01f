//! Render command handler
//!
//! Prints the first-paint fragments for each page container.

use anyhow::{Context, Result};
use colored::*;
use folio_core::markup;

use crate::config::Config;

/// Render the initial page, as HTML fragments or JSON views
pub fn render_page(config: &Config, json: bool) -> Result<()> {
    let mut page = config.controller()?;
    let views = page.initial_views();

    if json {
        let out = serde_json::to_string_pretty(&views).context("Failed to serialize views")?;
        println!("{}", out);
        return Ok(());
    }

    let mut timeline = markup::timeline_track(&views.timeline.items);
    if let Some(detail) = &views.timeline.detail {
        timeline.push('\n');
        timeline.push_str(&markup::timeline_detail(detail));
    }

    let sections = [
        ("filterGroup", markup::filter_buttons(&views.catalog.filters)),
        ("projectGrid", markup::project_cards(&views.catalog.cards)),
        ("timeline", timeline),
        ("qualityDemo", markup::quality_score(&views.score)),
        ("pipelineSteps", markup::pipeline_steps(&views.pipeline)),
        ("pipelineLog", markup::pipeline_log(&views.pipeline)),
    ];

    for (container, html) in sections {
        println!("{}", format!("<!-- #{container} -->").dimmed());
        println!("{}", html);
        println!();
    }

    Ok(())
}
