//! Folio Core
//!
//! Headless core of the Folio portfolio page.
//!
//! This crate contains:
//! - Domain types: static content records (Project, Milestone, etc.)
//! - Services: the stateful page widgets (catalog, timeline, quality score,
//!   pipeline simulator, scroll and bubble effects)
//! - Views: structured view updates handed to a presentation layer
//! - Markup: HTML fragments for those views
//! - Controller: dispatches input commands to the widgets

pub mod config;
pub mod content;
pub mod controller;
pub mod domain;
pub mod error;
pub mod markup;
pub mod service;
pub mod view;

pub use config::SiteConfig;
pub use content::Content;
pub use controller::{Command, PageController, ViewUpdate};
pub use error::{CatalogError, ConfigError, ContentError, Error, QualityError, Result};
