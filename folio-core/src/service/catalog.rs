//! Project catalog service
//!
//! Owns the project records, the derived filter tag set, the active
//! filter/query and the selected project. Every change re-renders the whole
//! grid; catalogs are small and static so there is no diffing.

use std::collections::HashSet;
use std::time::Duration;

use tracing::debug;

use crate::domain::project::Project;
use crate::error::CatalogError;
use crate::view::catalog::{CaseStudy, CatalogView, FilterButton, ModalView, ProjectCard};

/// Filter tag meaning "no tag restriction"
pub const ALL_TAG: &str = "All";

/// Active catalog filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub active_tag: String,

    /// Lowercased search text; empty matches everything
    pub query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active_tag: ALL_TAG.to_string(),
            query: String::new(),
        }
    }
}

impl FilterState {
    /// Returns true if the project passes both the tag and the query filter
    pub fn matches(&self, project: &Project) -> bool {
        let tag_ok = self.active_tag == ALL_TAG || project.has_tag(&self.active_tag);
        tag_ok && project.haystack().contains(&self.query)
    }
}

/// Project catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    projects: Vec<Project>,
    tags: Vec<String>,
    filter: FilterState,
    selected: Option<String>,
    stagger: Duration,
}

impl Catalog {
    /// Creates a catalog and derives its filter tag set
    ///
    /// # Arguments
    /// * `projects` - Project records, in display order
    /// * `stagger` - Reveal delay added per visible card
    pub fn new(projects: Vec<Project>, stagger: Duration) -> Self {
        let tags = derive_tags(&projects);
        Self {
            projects,
            tags,
            filter: FilterState::default(),
            selected: None,
            stagger,
        }
    }

    /// "All" followed by every distinct project tag, in first-seen order
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Sets the active filter tag and re-renders
    ///
    /// Tags outside the derived set are rejected and leave the filter as is.
    pub fn set_filter_tag(&mut self, tag: &str) -> Result<CatalogView, CatalogError> {
        if !self.tags.iter().any(|t| t == tag) {
            debug!("Rejected unknown filter tag: {}", tag);
            return Err(CatalogError::UnknownTag(tag.to_string()));
        }

        debug!("Filter tag set to {}", tag);
        self.filter.active_tag = tag.to_string();
        Ok(self.render())
    }

    /// Sets the search text and re-renders
    pub fn set_query(&mut self, text: &str) -> CatalogView {
        self.filter.query = text.to_lowercase();
        debug!("Search query set to {:?}", self.filter.query);
        self.render()
    }

    /// Projects passing the current filter, in original order
    pub fn visible(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    /// Filter row with the active tag marked
    pub fn filter_buttons(&self) -> Vec<FilterButton> {
        self.tags
            .iter()
            .map(|tag| FilterButton {
                tag: tag.clone(),
                active: *tag == self.filter.active_tag,
            })
            .collect()
    }

    /// Rebuilds the filter row and the project grid
    pub fn render(&self) -> CatalogView {
        let step = u64::try_from(self.stagger.as_millis()).unwrap_or(u64::MAX);
        let cards = self
            .visible()
            .into_iter()
            .enumerate()
            .map(|(index, project)| {
                let delay = step.saturating_mul(index as u64);
                ProjectCard::new(project, delay)
            })
            .collect();

        CatalogView {
            filters: self.filter_buttons(),
            cards,
        }
    }

    /// Opens the case study for a project
    ///
    /// Unknown ids are ignored and return None.
    pub fn select_project(&mut self, id: &str) -> Option<ModalView> {
        let Some(project) = self.projects.iter().find(|p| p.id == id) else {
            debug!("Ignoring selection of unknown project {}", id);
            return None;
        };

        self.selected = Some(project.id.clone());
        Some(ModalView::open(CaseStudy::from(project)))
    }

    /// Currently selected project, if the case study is open
    pub fn selected(&self) -> Option<&Project> {
        let id = self.selected.as_deref()?;
        self.projects.iter().find(|p| p.id == id)
    }

    /// Hides the case study; calling it again changes nothing
    pub fn dismiss(&mut self) -> ModalView {
        self.selected = None;
        ModalView::closed()
    }
}

fn derive_tags(projects: &[Project]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tags = vec![ALL_TAG.to_string()];
    for tag in projects.iter().flat_map(|p| p.tags.iter()) {
        if seen.insert(tag.as_str()) {
            tags.push(tag.clone());
        }
    }
    tags
}
