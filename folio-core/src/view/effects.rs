//! Scroll and click effect views

use serde::{Deserialize, Serialize};

/// Vertical offset for one parallax layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallaxOffset {
    pub layer: String,
    pub offset_px: f64,
}

/// Visual state computed once per animation frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScrollFrame {
    /// Progress bar width, 0..=100
    pub progress_percent: f64,
    pub layers: Vec<ParallaxOffset>,
}

/// A floating word spawned at a click position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bubble {
    pub word: String,
    pub x: i32,
    pub y: i32,

    /// Horizontal drift in px, -60..=60
    pub drift_x: i32,

    /// Upward travel in px, 80..=160
    pub rise: i32,
}
