//! Commit categorization by subject prefix.

use relnotes_commit::Commit;

/// Subject prefix that marks a commit as a new feature.
const FEATURE_PREFIX: &str = "Merge";

/// Subject prefix that marks a commit as a bug fix.
const FIX_PREFIX: &str = "Fix";

/// Commits split into release note sections, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categorized<'a> {
    /// Commits whose subject starts with `Merge`.
    pub features: Vec<&'a Commit>,
    /// Commits whose subject starts with `Fix`.
    pub fixes: Vec<&'a Commit>,
    /// Everything else.
    pub other: Vec<&'a Commit>,
}

impl Categorized<'_> {
    /// Total number of commits across all sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.features.len() + self.fixes.len() + self.other.len()
    }

    /// Returns true if no section holds a commit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits commits into features, fixes and other changes.
///
/// Only the first line of the message is inspected. The checks are literal,
/// case-sensitive prefix matches tried in order (`Merge`, then `Fix`), and the
/// first match decides the section.
pub fn categorize(commits: &[Commit]) -> Categorized<'_> {
    let mut categorized = Categorized::default();

    for commit in commits {
        let subject = commit.subject();
        if subject.starts_with(FEATURE_PREFIX) {
            categorized.features.push(commit);
        } else if subject.starts_with(FIX_PREFIX) {
            categorized.fixes.push(commit);
        } else {
            categorized.other.push(commit);
        }
    }

    categorized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commits(messages: &[&str]) -> Vec<Commit> {
        messages
            .iter()
            .enumerate()
            .map(|(i, m)| Commit::new(format!("{i:08x}"), *m))
            .collect()
    }

    fn subjects<'a>(section: &[&'a Commit]) -> Vec<&'a str> {
        section.iter().map(|&c| c.subject()).collect()
    }

    #[test]
    fn test_one_commit_per_section() {
        let commits = commits(&["Merge foo", "Fix bar", "Add baz"]);

        let categorized = categorize(&commits);

        assert_eq!(subjects(&categorized.features), vec!["Merge foo"]);
        assert_eq!(subjects(&categorized.fixes), vec!["Fix bar"]);
        assert_eq!(subjects(&categorized.other), vec!["Add baz"]);
    }

    #[test]
    fn test_every_commit_lands_in_exactly_one_section() {
        let commits = commits(&[
            "Merge pull request #1",
            "Fix typo",
            "Merge branch 'Fix-things'",
            "Update docs",
            "Fixes everywhere",
            "Refactor",
        ]);

        let categorized = categorize(&commits);

        assert_eq!(categorized.len(), commits.len());
        assert_eq!(
            subjects(&categorized.features),
            vec!["Merge pull request #1", "Merge branch 'Fix-things'"]
        );
        assert_eq!(
            subjects(&categorized.fixes),
            vec!["Fix typo", "Fixes everywhere"]
        );
        assert_eq!(subjects(&categorized.other), vec!["Update docs", "Refactor"]);
    }

    #[test]
    fn test_prefix_is_case_sensitive() {
        let commits = commits(&["merge lowercase", "fix lowercase", "FIX upper"]);

        let categorized = categorize(&commits);

        assert!(categorized.features.is_empty());
        assert!(categorized.fixes.is_empty());
        assert_eq!(categorized.other.len(), 3);
    }

    #[test]
    fn test_only_first_line_is_checked() {
        let commits = commits(&["Update readme\n\nFix links", "Bump deps\nMerge later"]);

        let categorized = categorize(&commits);

        assert_eq!(categorized.other.len(), 2);
    }

    #[test]
    fn test_leading_whitespace_does_not_match() {
        let commits = commits(&[" Fix indented"]);
        let categorized = categorize(&commits);
        assert_eq!(categorized.other.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let categorized = categorize(&[]);
        assert!(categorized.is_empty());
        assert_eq!(categorized, Categorized::default());
    }
}
