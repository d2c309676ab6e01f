//! Scroll and click effects
//!
//! `ScrollTracker` coalesces scroll events into at most one visual update per
//! animation frame. `BubbleSpawner` picks the word and motion for the click
//! bubble effect.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::view::effects::{Bubble, ParallaxOffset, ScrollFrame};

/// Largest parallax offset applied to any layer, in px
pub const MAX_PARALLAX_OFFSET: f64 = 120.0;

const MAX_DRIFT: f64 = 60.0;
const MIN_RISE: f64 = 80.0;
const RISE_SPREAD: f64 = 80.0;

/// A background layer that moves at a fraction of the scroll speed
#[derive(Debug, Clone, PartialEq)]
pub struct ParallaxLayer {
    pub name: String,
    pub speed: f64,
}

impl ParallaxLayer {
    pub fn new(name: impl Into<String>, speed: f64) -> Self {
        Self {
            name: name.into(),
            speed,
        }
    }

    /// The page's ambient glow and ASCII panel layers
    pub fn defaults() -> Vec<ParallaxLayer> {
        vec![
            ParallaxLayer::new("ambient", 0.06),
            ParallaxLayer::new("ascii-panel", 0.14),
        ]
    }
}

/// Latest scroll position and pending-frame flag
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    latest: f64,
    frame_pending: bool,
    layers: Vec<ParallaxLayer>,
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(ParallaxLayer::defaults())
    }
}

impl ScrollTracker {
    pub fn new(layers: Vec<ParallaxLayer>) -> Self {
        Self {
            latest: 0.0,
            frame_pending: false,
            layers,
        }
    }

    /// Records a scroll position
    ///
    /// Returns true when the caller should request an animation frame, i.e.
    /// when no frame is pending yet.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        self.latest = scroll_y;
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    pub fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    /// Computes the progress bar and parallax offsets for the latest position
    ///
    /// Clears the pending flag so the next scroll schedules a new frame.
    pub fn frame(&mut self, document_height: f64, viewport_height: f64) -> ScrollFrame {
        self.frame_pending = false;

        let scrollable = document_height - viewport_height;
        let progress = if scrollable > 0.0 {
            self.latest / scrollable
        } else {
            0.0
        };

        let layers = self
            .layers
            .iter()
            .map(|layer| ParallaxOffset {
                layer: layer.name.clone(),
                offset_px: (self.latest * layer.speed).min(MAX_PARALLAX_OFFSET),
            })
            .collect();

        ScrollFrame {
            progress_percent: (progress * 100.0).clamp(0.0, 100.0),
            layers,
        }
    }
}

/// What a click landed on
///
/// Each control variant also covers clicks on anything nested inside that
/// control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Any `.btn` styled control, whatever its element type
    Button,
    /// An `a` element
    Link,
    Input,
    TextArea,
    Select,
    /// Anything that is not a control
    Surface,
}

impl ClickTarget {
    /// Controls keep their own click behaviour and never spawn bubbles
    pub fn is_interactive(self) -> bool {
        !matches!(self, ClickTarget::Surface)
    }
}

/// Random word bubbles for clicks on the page surface
#[derive(Debug, Clone)]
pub struct BubbleSpawner {
    terms: Vec<String>,
}

impl BubbleSpawner {
    pub fn new(terms: Vec<String>) -> Self {
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Spawns a bubble at the click position using the thread-local RNG
    pub fn spawn(&self, x: i32, y: i32, target: ClickTarget) -> Option<Bubble> {
        self.spawn_with(&mut rand::thread_rng(), x, y, target)
    }

    /// Spawns a bubble using the given RNG
    ///
    /// Returns None for interactive targets or an empty vocabulary.
    pub fn spawn_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        x: i32,
        y: i32,
        target: ClickTarget,
    ) -> Option<Bubble> {
        if target.is_interactive() {
            return None;
        }

        let word = self.terms.choose(rng)?.clone();
        let drift_x = (rng.gen_range(-1.0..1.0) * MAX_DRIFT).round() as i32;
        let rise = (MIN_RISE + rng.gen_range(0.0..1.0) * RISE_SPREAD).round() as i32;

        Some(Bubble {
            word,
            x,
            y,
            drift_x,
            rise,
        })
    }
}
