//! Page controller
//!
//! Owns one instance of every widget and maps each user input to the
//! widget operation it triggers. All commands are handled synchronously;
//! running the pipeline is the only asynchronous entry point.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::SiteConfig;
use crate::content::Content;
use crate::domain::pipeline::PipelineRun;
use crate::error::Result;
use crate::service::{
    BubbleSpawner, Catalog, ClickTarget, PipelineSimulator, QualityScore, ScrollTracker, Timeline,
};
use crate::view::catalog::{CatalogView, ModalView};
use crate::view::effects::{Bubble, ScrollFrame};
use crate::view::pipeline::RunOutcome;
use crate::view::quality::ScoreView;
use crate::view::timeline::TimelineView;

/// A user input, one variant per input source
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Search box text changed
    SetQuery(String),
    /// Filter button clicked
    SetFilterTag(String),
    /// "View Case Study" clicked on a card
    ViewCaseStudy(String),
    /// Modal close button or backdrop clicked
    Dismiss,
    /// Timeline slider moved
    SelectYear(f64),
    /// Quality checkbox changed
    ToggleCheck { id: String, checked: bool },
    /// Window scrolled
    Scroll(f64),
    /// Animation frame fired
    Frame {
        document_height: f64,
        viewport_height: f64,
    },
    /// Click anywhere on the page
    Click { x: i32, y: i32, target: ClickTarget },
}

/// What the presentation layer should redraw
#[derive(Debug, Clone, PartialEq)]
pub enum ViewUpdate {
    Catalog(CatalogView),
    Modal(ModalView),
    Timeline(TimelineView),
    Score(ScoreView),
    /// An animation frame should be requested
    RequestFrame,
    Scroll(ScrollFrame),
    Bubble(Bubble),
    /// The command was ignored
    Unchanged,
}

/// Everything needed for the first paint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitialViews {
    pub catalog: CatalogView,
    pub timeline: TimelineView,
    pub score: ScoreView,
    pub pipeline: PipelineRun,
}

/// Single owner of the page's view state
#[derive(Debug)]
pub struct PageController {
    catalog: Catalog,
    timeline: Timeline,
    quality: QualityScore,
    simulator: PipelineSimulator,
    scroll: ScrollTracker,
    bubbles: BubbleSpawner,
}

impl PageController {
    /// Builds every widget from static content
    pub fn new(content: Content, config: &SiteConfig) -> Self {
        Self {
            catalog: Catalog::new(content.projects, config.card_stagger),
            timeline: Timeline::new(content.milestones, config.timeline_stagger),
            quality: QualityScore::new(content.quality_checks),
            simulator: PipelineSimulator::new(content.pipeline_steps, config.step_delay),
            scroll: ScrollTracker::default(),
            bubbles: BubbleSpawner::new(content.bubble_terms),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn quality(&self) -> &QualityScore {
        &self.quality
    }

    pub fn simulator(&self) -> &PipelineSimulator {
        &self.simulator
    }

    pub fn bubbles(&self) -> &BubbleSpawner {
        &self.bubbles
    }

    /// Renders the page as it looks before any input
    ///
    /// The timeline starts on its latest milestone.
    pub fn initial_views(&mut self) -> InitialViews {
        let timeline = match self.timeline.latest_year() {
            Some(year) => self.timeline.select_year(f64::from(year)),
            None => self.timeline.render(),
        };

        InitialViews {
            catalog: self.catalog.render(),
            timeline,
            score: self.quality.recompute(),
            pipeline: self.simulator.snapshot(),
        }
    }

    /// Routes a command to its widget
    pub fn dispatch(&mut self, command: Command) -> Result<ViewUpdate> {
        debug!("Dispatching {:?}", command);

        let update = match command {
            Command::SetQuery(text) => ViewUpdate::Catalog(self.catalog.set_query(&text)),
            Command::SetFilterTag(tag) => ViewUpdate::Catalog(self.catalog.set_filter_tag(&tag)?),
            Command::ViewCaseStudy(id) => match self.catalog.select_project(&id) {
                Some(modal) => ViewUpdate::Modal(modal),
                None => ViewUpdate::Unchanged,
            },
            Command::Dismiss => ViewUpdate::Modal(self.catalog.dismiss()),
            Command::SelectYear(year) => ViewUpdate::Timeline(self.timeline.select_year(year)),
            Command::ToggleCheck { id, checked } => {
                ViewUpdate::Score(self.quality.toggle(&id, checked)?)
            }
            Command::Scroll(y) => {
                if self.scroll.on_scroll(y) {
                    ViewUpdate::RequestFrame
                } else {
                    ViewUpdate::Unchanged
                }
            }
            Command::Frame {
                document_height,
                viewport_height,
            } => ViewUpdate::Scroll(self.scroll.frame(document_height, viewport_height)),
            Command::Click { x, y, target } => match self.bubbles.spawn(x, y, target) {
                Some(bubble) => ViewUpdate::Bubble(bubble),
                None => ViewUpdate::Unchanged,
            },
        };

        Ok(update)
    }

    /// Starts the pipeline simulation
    ///
    /// Dropped with `AlreadyRunning` if a run is in progress.
    pub async fn run_pipeline(&self) -> RunOutcome {
        self.simulator.start().await
    }
}
