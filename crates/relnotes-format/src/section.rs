//! Release notes sections.

use relnotes_commit::Commit;
use relnotes_core::ReleaseNotes;

/// A section of the rendered notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// Merged pull requests.
    Features,
    /// Bug fixes.
    Fixes,
    /// Everything else.
    Other,
}

impl Section {
    /// Sections in display order.
    pub const ALL: [Self; 3] = [Self::Features, Self::Fixes, Self::Other];

    /// Returns the section heading.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Features => "⭐ New Features",
            Self::Fixes => "🐞 Bug Fixes",
            Self::Other => "💡 Other Changes",
        }
    }

    /// Returns the commits of this section.
    #[must_use]
    pub fn commits(self, notes: &ReleaseNotes) -> &[Commit] {
        match self {
            Self::Features => &notes.features,
            Self::Fixes => &notes.fixes,
            Self::Other => &notes.other,
        }
    }
}
