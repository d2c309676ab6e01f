//! Configuration module
//!
//! Combines command-line flags with the site configuration from the
//! environment and loads the page content.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use folio_core::{Content, PageController, SiteConfig};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Content file, or None for the built-in content
    pub content_path: Option<PathBuf>,

    /// Widget timing
    pub site: SiteConfig,
}

impl Config {
    /// Builds configuration from flags, falling back to the environment
    pub fn load(content_path: Option<PathBuf>, step_delay_ms: Option<u64>) -> Result<Self> {
        let mut site = SiteConfig::from_env();
        if let Some(ms) = step_delay_ms {
            site = site.with_step_delay(Duration::from_millis(ms));
        }
        site.validate().context("Invalid site configuration")?;

        Ok(Self { content_path, site })
    }

    /// Reads the configured content
    pub fn content(&self) -> Result<Content> {
        match &self.content_path {
            Some(path) => Content::load(path)
                .with_context(|| format!("Failed to load content from {}", path.display())),
            None => Content::builtin().context("Built-in content is invalid"),
        }
    }

    /// A page controller over the configured content
    pub fn controller(&self) -> Result<PageController> {
        Ok(PageController::new(self.content()?, &self.site))
    }
}
