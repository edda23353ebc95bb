//! Release notes model handed to formatters.

use relnotes_commit::Commit;
use relnotes_github::Project;

use crate::Categorized;

/// Everything needed to render one set of release notes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseNotes {
    /// The repository the notes are for.
    pub project: Project,

    /// Release version label (e.g. `v1.0.0`).
    pub version: Option<String>,

    /// Commits whose subject starts with `Merge`.
    pub features: Vec<Commit>,

    /// Commits whose subject starts with `Fix`.
    pub fixes: Vec<Commit>,

    /// Remaining commits.
    pub other: Vec<Commit>,
}

impl ReleaseNotes {
    /// Creates notes from categorized commits.
    #[must_use]
    pub fn new(project: Project, version: Option<String>, categorized: &Categorized<'_>) -> Self {
        let owned =
            |section: &[&Commit]| -> Vec<Commit> { section.iter().copied().cloned().collect() };
        Self {
            project,
            version,
            features: owned(&categorized.features),
            fixes: owned(&categorized.fixes),
            other: owned(&categorized.other),
        }
    }

    /// Returns the title, e.g. `Release Notes for repo - v1.0.0`.
    #[must_use]
    pub fn title(&self) -> String {
        match &self.version {
            Some(version) => format!("Release Notes for {} - {version}", self.project.name),
            None => format!("Release Notes for {}", self.project.name),
        }
    }

    /// Total number of commits in the notes.
    #[must_use]
    pub fn commit_count(&self) -> usize {
        self.features.len() + self.fixes.len() + self.other.len()
    }
}
