//! Error types for Folio

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for fallible page operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while dispatching page commands
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Quality(#[from] QualityError),
}

/// Errors from the project catalog
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Tag is not part of the derived filter set
    #[error("Unknown filter tag: {0}")]
    UnknownTag(String),
}

/// Errors from the quality score demo
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QualityError {
    #[error("Unknown quality check: {0}")]
    UnknownCheck(String),
}

/// Errors that can occur while loading page content
#[derive(Debug, Error)]
pub enum ContentError {
    /// Content file could not be read
    #[error("Failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Content is not valid JSON for the expected shape
    #[error("Failed to parse content: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate project id: {0}")]
    DuplicateProject(String),

    #[error("Project {0} has no tags")]
    UntaggedProject(String),

    #[error("Duplicate milestone year: {0}")]
    DuplicateMilestone(i32),

    #[error("Content has no milestones")]
    NoMilestones,

    #[error("Content has no pipeline steps")]
    NoPipelineSteps,

    #[error("Duplicate quality check id: {0}")]
    DuplicateCheck(String),

    #[error("Content has no bubble terms")]
    NoBubbleTerms,
}

/// Invalid site configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
