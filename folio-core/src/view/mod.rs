//! View updates
//!
//! Structured values handed to the presentation layer. Views are rebuilt
//! from scratch on every change and carry no references into service state,
//! so they can be serialized or rendered to markup as-is.

pub mod catalog;
pub mod effects;
pub mod pipeline;
pub mod quality;
pub mod timeline;
