//! Page content
//!
//! The static records the page is built from. Content is read once at
//! startup, validated, and never mutated afterwards.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::milestone::Milestone;
use crate::domain::project::Project;
use crate::domain::quality::QualityCheck;
use crate::error::ContentError;

const BUILTIN_CONTENT: &str = include_str!("../content/portfolio.json");

/// All static page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub projects: Vec<Project>,
    pub milestones: Vec<Milestone>,
    pub pipeline_steps: Vec<String>,

    #[serde(default)]
    pub quality_checks: Vec<QualityCheck>,

    /// Vocabulary for the click bubble effect
    pub bubble_terms: Vec<String>,
}

impl Content {
    /// Content shipped with the crate
    pub fn builtin() -> Result<Self, ContentError> {
        Self::from_json(BUILTIN_CONTENT)
    }

    /// Parses and validates content from a JSON document
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        let content: Content = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Reads content from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContentError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::debug!("Loaded content from {}", path.display());

        Self::from_json(&json)
    }

    /// Checks the invariants the widgets rely on
    pub fn validate(&self) -> Result<(), ContentError> {
        let mut ids = HashSet::new();
        for project in &self.projects {
            if !ids.insert(project.id.as_str()) {
                return Err(ContentError::DuplicateProject(project.id.clone()));
            }
            if project.tags.is_empty() {
                return Err(ContentError::UntaggedProject(project.id.clone()));
            }
        }

        if self.milestones.is_empty() {
            return Err(ContentError::NoMilestones);
        }
        let mut years = HashSet::new();
        for milestone in &self.milestones {
            if !years.insert(milestone.year) {
                return Err(ContentError::DuplicateMilestone(milestone.year));
            }
        }

        if self.pipeline_steps.is_empty() {
            return Err(ContentError::NoPipelineSteps);
        }

        let mut checks = HashSet::new();
        for check in &self.quality_checks {
            if !checks.insert(check.id.as_str()) {
                return Err(ContentError::DuplicateCheck(check.id.clone()));
            }
        }

        if self.bubble_terms.is_empty() {
            return Err(ContentError::NoBubbleTerms);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_content_is_valid() {
        let content = Content::builtin().unwrap();
        assert_eq!(content.projects.len(), 4);
        assert_eq!(content.milestones.len(), 6);
        assert_eq!(content.pipeline_steps.len(), 4);
        assert_eq!(content.bubble_terms.len(), 12);
        assert_eq!(content.projects[0].id, "rag-pipeline");
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let mut content = Content::builtin().unwrap();
        let copy = content.projects[0].clone();
        content.projects.push(copy);

        let result = content.validate();
        assert!(matches!(result, Err(ContentError::DuplicateProject(id)) if id == "rag-pipeline"));
    }

    #[test]
    fn test_duplicate_year_rejected() {
        let mut content = Content::builtin().unwrap();
        content.milestones[1].year = content.milestones[0].year;

        let result = content.validate();
        assert!(matches!(result, Err(ContentError::DuplicateMilestone(2021))));
    }

    #[test]
    fn test_untagged_project_rejected() {
        let mut content = Content::builtin().unwrap();
        content.projects[2].tags.clear();

        assert!(matches!(
            content.validate(),
            Err(ContentError::UntaggedProject(_))
        ));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let result = Content::from_json("{ \"projects\": 3 }");
        assert!(matches!(result, Err(ContentError::Parse(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Content::load("/definitely/not/here.json");
        assert!(matches!(result, Err(ContentError::Io { .. })));
    }
}
