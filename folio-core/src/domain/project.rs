//! Project domain types

use serde::{Deserialize, Serialize};

/// A portfolio project shown in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Unique identifier (e.g., "rag-pipeline")
    pub id: String,
    pub title: String,
    pub summary: String,

    /// Category tags, in display order
    pub tags: Vec<String>,

    /// Free-text technology stack line
    pub stack: String,

    #[serde(default)]
    pub highlights: Vec<String>,

    #[serde(default)]
    pub metrics: Vec<String>,
}

impl Project {
    /// Returns true if the project carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Lowercased text searched by the catalog query
    ///
    /// Title, summary, stack and tags joined by single spaces.
    pub fn haystack(&self) -> String {
        format!(
            "{} {} {} {}",
            self.title,
            self.summary,
            self.stack,
            self.tags.join(" ")
        )
        .to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project() -> Project {
        Project {
            id: "p1".to_string(),
            title: "Stream Loader".to_string(),
            summary: "Loads events".to_string(),
            tags: vec!["Kafka".to_string(), "Spark".to_string()],
            stack: "Rust, Kafka".to_string(),
            highlights: vec![],
            metrics: vec![],
        }
    }

    #[test]
    fn test_haystack_is_lowercase_and_space_joined() {
        assert_eq!(
            project().haystack(),
            "stream loader loads events rust, kafka kafka spark"
        );
    }

    #[test]
    fn test_has_tag_is_exact() {
        let p = project();
        assert!(p.has_tag("Kafka"));
        assert!(!p.has_tag("kafka"));
        assert!(!p.has_tag("Kaf"));
    }
}
