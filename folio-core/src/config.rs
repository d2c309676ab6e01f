//! Site configuration
//!
//! Timing knobs for the page widgets. Defaults match the live page; every
//! value can be overridden from the environment for demos and tests.

use std::time::Duration;

use crate::error::ConfigError;

/// Default delay between pipeline step start and completion
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(800);

/// Default reveal stagger between project cards
pub const DEFAULT_CARD_STAGGER: Duration = Duration::from_millis(90);

/// Default reveal stagger between timeline items
pub const DEFAULT_TIMELINE_STAGGER: Duration = Duration::from_millis(80);

/// Site configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// How long each simulated pipeline step stays running
    pub step_delay: Duration,

    /// Reveal delay added per project card
    pub card_stagger: Duration,

    /// Reveal delay added per timeline item
    pub timeline_stagger: Duration,
}

impl SiteConfig {
    /// Creates configuration from environment variables
    ///
    /// Recognised variables (all optional, milliseconds):
    /// - FOLIO_STEP_DELAY_MS (default: 800)
    /// - FOLIO_CARD_STAGGER_MS (default: 90)
    /// - FOLIO_TIMELINE_STAGGER_MS (default: 80)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary key lookup
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let millis = |key: &str, default: Duration| {
            lookup(key)
                .and_then(|s| s.trim().parse::<u64>().ok())
                .map(Duration::from_millis)
                .unwrap_or(default)
        };

        Self {
            step_delay: millis("FOLIO_STEP_DELAY_MS", DEFAULT_STEP_DELAY),
            card_stagger: millis("FOLIO_CARD_STAGGER_MS", DEFAULT_CARD_STAGGER),
            timeline_stagger: millis("FOLIO_TIMELINE_STAGGER_MS", DEFAULT_TIMELINE_STAGGER),
        }
    }

    /// Overrides the pipeline step delay
    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step_delay.is_zero() {
            return Err(ConfigError::Invalid(
                "step_delay must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            step_delay: DEFAULT_STEP_DELAY,
            card_stagger: DEFAULT_CARD_STAGGER,
            timeline_stagger: DEFAULT_TIMELINE_STAGGER,
        }
    }
}
