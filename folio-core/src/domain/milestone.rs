//! Career milestone domain types

use serde::{Deserialize, Serialize};

/// A single entry on the career timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    /// Display label and lookup key; unique across the timeline
    pub year: i32,
    pub role: String,
    pub org: String,
    pub detail: String,
}

impl Milestone {
    /// Absolute distance between this milestone and a slider position
    pub fn distance(&self, year: f64) -> f64 {
        (f64::from(self.year) - year).abs()
    }
}
