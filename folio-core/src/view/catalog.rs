//! Catalog views

use serde::{Deserialize, Serialize};

use crate::domain::project::Project;

/// One button in the filter row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterButton {
    pub tag: String,
    pub active: bool,
}

/// A project card in the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCard {
    /// Id carried by the card's "View Case Study" control
    pub id: String,
    pub title: String,
    pub summary: String,
    pub stack: String,
    pub tags: Vec<String>,

    /// Staggered reveal hint for the reveal animator
    pub reveal_delay_ms: u64,
}

impl ProjectCard {
    pub fn new(project: &Project, reveal_delay_ms: u64) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            summary: project.summary.clone(),
            stack: project.stack.clone(),
            tags: project.tags.clone(),
            reveal_delay_ms,
        }
    }
}

/// Filter row plus the visible project grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogView {
    pub filters: Vec<FilterButton>,
    pub cards: Vec<ProjectCard>,
}

impl CatalogView {
    /// Ids of the visible cards, in grid order
    pub fn ids(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.id.as_str()).collect()
    }
}

/// Body of the case study modal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub stack: String,
    pub highlights: Vec<String>,
    pub metrics: Vec<String>,
}

impl From<&Project> for CaseStudy {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.clone(),
            title: project.title.clone(),
            summary: project.summary.clone(),
            stack: project.stack.clone(),
            highlights: project.highlights.clone(),
            metrics: project.metrics.clone(),
        }
    }
}

/// Case study modal state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalView {
    pub visible: bool,

    /// Mirrors `visible` for the `aria-hidden` attribute
    pub aria_hidden: bool,

    pub case_study: Option<CaseStudy>,
}

impl ModalView {
    pub fn open(case_study: CaseStudy) -> Self {
        Self {
            visible: true,
            aria_hidden: false,
            case_study: Some(case_study),
        }
    }

    pub fn closed() -> Self {
        Self {
            visible: false,
            aria_hidden: true,
            case_study: None,
        }
    }
}
