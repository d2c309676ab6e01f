//! Service layer
//!
//! Services own the page's mutable view state and implement the widget
//! behaviour: filtering the catalog, nearest-milestone lookup, score
//! aggregation, the timed pipeline simulation and the scroll/click effects.
//!
//! Every service except the simulator is synchronous and completes within
//! the call that triggered it.

mod catalog;
mod effects;
mod quality;
mod simulator;
mod timeline;

pub use catalog::{ALL_TAG, Catalog, FilterState};
pub use effects::{BubbleSpawner, ClickTarget, ParallaxLayer, ScrollTracker};
pub use quality::{QualityScore, aggregate_score, ring_angle};
pub use simulator::{PipelineSimulator, SUMMARY_LINE};
pub use timeline::{Timeline, nearest_milestone};
