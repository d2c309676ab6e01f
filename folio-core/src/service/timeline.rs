//! Career timeline service

use std::time::Duration;

use crate::domain::milestone::Milestone;
use crate::view::timeline::{MilestoneDetail, TimelineItem, TimelineView};

/// Index of the milestone closest to `year`
///
/// Linear scan; on an exact tie the earlier milestone in the list wins.
/// Returns None only for an empty list.
pub fn nearest_milestone(milestones: &[Milestone], year: f64) -> Option<usize> {
    milestones
        .iter()
        .enumerate()
        .fold(None, |closest, (index, milestone)| match closest {
            Some(best) if milestone.distance(year) < milestones[best].distance(year) => {
                Some(index)
            }
            Some(best) => Some(best),
            None => Some(index),
        })
}

/// Career timeline with one active milestone
#[derive(Debug, Clone)]
pub struct Timeline {
    milestones: Vec<Milestone>,
    active: Option<usize>,
    stagger: Duration,
}

impl Timeline {
    pub fn new(milestones: Vec<Milestone>, stagger: Duration) -> Self {
        Self {
            milestones,
            active: None,
            stagger,
        }
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    /// Latest year on the timeline, used to seed the slider
    pub fn latest_year(&self) -> Option<i32> {
        self.milestones.iter().map(|m| m.year).max()
    }

    /// Slider bounds as (earliest, latest)
    pub fn year_range(&self) -> Option<(i32, i32)> {
        let min = self.milestones.iter().map(|m| m.year).min()?;
        let max = self.milestones.iter().map(|m| m.year).max()?;
        Some((min, max))
    }

    /// Activates the milestone nearest to a slider position
    pub fn select_year(&mut self, year: f64) -> TimelineView {
        self.active = nearest_milestone(&self.milestones, year);
        if let Some(milestone) = self.active() {
            tracing::debug!("Timeline position {} selects {}", year, milestone.year);
        }
        self.render()
    }

    /// Currently active milestone
    pub fn active(&self) -> Option<&Milestone> {
        self.active.map(|index| &self.milestones[index])
    }

    /// Track items with the active flag and reveal hints
    pub fn render_track(&self) -> Vec<TimelineItem> {
        let step = u64::try_from(self.stagger.as_millis()).unwrap_or(u64::MAX);
        self.milestones
            .iter()
            .enumerate()
            .map(|(index, milestone)| TimelineItem {
                year: milestone.year,
                role: milestone.role.clone(),
                active: self.active == Some(index),
                reveal_delay_ms: step.saturating_mul(index as u64),
            })
            .collect()
    }

    pub fn render(&self) -> TimelineView {
        TimelineView {
            items: self.render_track(),
            detail: self.active().map(MilestoneDetail::from),
        }
    }
}
