//! Markdown formatter.

use std::fmt::Write;

use relnotes_commit::Commit;
use relnotes_core::ReleaseNotes;

use crate::{NotesFormatter, Section};

/// Markdown formatter.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Creates a new formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn format_commit(commit: &Commit) -> String {
        format!(
            "* **[{}]({})** {} (by {})",
            commit.short_sha(),
            commit.html_url_or_placeholder(),
            commit.subject(),
            commit.author_email_or_unknown()
        )
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesFormatter for MarkdownFormatter {
    fn name(&self) -> &'static str {
        "markdown"
    }

    fn format(&self, notes: &ReleaseNotes) -> String {
        let mut output = String::new();

        _ = writeln!(output, "# {}\n", notes.title());

        if let Some(description) = notes.project.visible_description() {
            _ = writeln!(output, "**{description}**\n");
        }

        for section in Section::ALL {
            _ = writeln!(output, "## {}\n", section.heading());

            let commits = section.commits(notes);
            if commits.is_empty() {
                output.push_str("_No changes._\n");
            }
            for commit in commits {
                _ = writeln!(output, "{}", Self::format_commit(commit));
            }

            output.push('\n');
        }

        output
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}
