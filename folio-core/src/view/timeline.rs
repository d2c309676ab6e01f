//! Timeline views

use serde::{Deserialize, Serialize};

use crate::domain::milestone::Milestone;

/// One item on the timeline track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub year: i32,
    pub role: String,
    pub active: bool,
    pub reveal_delay_ms: u64,
}

/// Detail panel for the selected milestone
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MilestoneDetail {
    pub year: i32,
    pub role: String,
    pub org: String,
    pub detail: String,
}

impl From<&Milestone> for MilestoneDetail {
    fn from(milestone: &Milestone) -> Self {
        Self {
            year: milestone.year,
            role: milestone.role.clone(),
            org: milestone.org.clone(),
            detail: milestone.detail.clone(),
        }
    }
}

/// Timeline track and the active milestone's detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineView {
    pub items: Vec<TimelineItem>,
    pub detail: Option<MilestoneDetail>,
}

impl TimelineView {
    /// Year of the active item, if any
    pub fn active_year(&self) -> Option<i32> {
        self.items.iter().find(|i| i.active).map(|i| i.year)
    }
}
