//! Core domain types
//!
//! This module contains the records the page is built from. Project,
//! milestone and quality check records are static content and never change
//! after load; the pipeline run is the only domain value that mutates.

pub mod log;
pub mod milestone;
pub mod pipeline;
pub mod project;
pub mod quality;
