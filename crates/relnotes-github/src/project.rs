//! Repository metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Repository metadata as returned by `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Repository name.
    pub name: String,

    /// Repository description.
    #[serde(default)]
    pub description: Option<String>,

    /// Default branch name.
    #[serde(default)]
    pub default_branch: String,

    /// Link to the repository on github.com.
    #[serde(default)]
    pub html_url: String,

    /// Last update time.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Creates a project with only a name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            default_branch: "main".to_string(),
            html_url: String::new(),
            updated_at: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the description when it is present and not blank.
    #[must_use]
    pub fn visible_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_repo_payload() {
        let json = r#"{
            "id": 1,
            "name": "release-notes-generator",
            "full_name": "ebi-gene-expression-group/release-notes-generator",
            "description": "A helper project to generate release notes for our web apps",
            "default_branch": "main",
            "html_url": "https://github.com/ebi-gene-expression-group/release-notes-generator",
            "updated_at": "2024-05-02T08:00:00Z",
            "private": false
        }"#;

        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.name, "release-notes-generator");
        assert_eq!(project.default_branch, "main");
        assert_eq!(
            project.html_url,
            "https://github.com/ebi-gene-expression-group/release-notes-generator"
        );
        assert!(project.updated_at.is_some());
    }

    #[test]
    fn test_deserialize_null_description() {
        let json = r#"{ "name": "repo", "description": null, "default_branch": "dev", "html_url": "" }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.description.is_none());
        assert!(project.visible_description().is_none());
    }

    #[test]
    fn test_visible_description_blank() {
        let project = Project::new("repo").with_description("   ");
        assert!(project.visible_description().is_none());
    }

    #[test]
    fn test_visible_description_present() {
        let project = Project::new("repo").with_description("Tools");
        assert_eq!(project.visible_description(), Some("Tools"));
    }
}
