//! Quality score views

use serde::{Deserialize, Serialize};

/// Rendered quality score
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreView {
    /// Clamped score, 0..=100
    pub score: u32,

    /// Sweep of the score ring in degrees, 0..=360
    pub ring_angle_deg: u32,

    /// Ids of the checked options
    pub checked: Vec<String>,
}
