//! HTML formatter.

use std::fmt::Write;

use relnotes_commit::Commit;
use relnotes_core::ReleaseNotes;

use crate::{NotesFormatter, Section};

const STYLE: &str = "body { font-family: sans-serif; }\
h1, h2 { color: #333; }\
ul { list-style: disc; padding-left: 2em; }\
li { margin-bottom: 0.5em; }";

/// HTML formatter producing a standalone page.
pub struct HtmlFormatter;

impl HtmlFormatter {
    /// Creates a new formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn format_commit(commit: &Commit) -> String {
        format!(
            "<li><a href='{}'>{}</a> {} (by {})</li>",
            escape(commit.html_url_or_placeholder()),
            escape(commit.short_sha()),
            escape(commit.subject()),
            escape(commit.author_email_or_unknown())
        )
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl NotesFormatter for HtmlFormatter {
    fn name(&self) -> &'static str {
        "html"
    }

    fn format(&self, notes: &ReleaseNotes) -> String {
        let title = escape(&notes.title());
        let mut output = String::new();

        _ = write!(
            output,
            "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>{title}</title>\
             <style>{STYLE}</style></head><body>"
        );
        _ = write!(output, "<h1>{title}</h1>");

        if let Some(description) = notes.project.visible_description() {
            _ = write!(output, "<p><strong>{}</strong></p>", escape(description));
        }

        for section in Section::ALL {
            _ = write!(output, "<h2>{}</h2><ul>", section.heading());
            for commit in section.commits(notes) {
                output.push_str(&Self::format_commit(commit));
            }
            output.push_str("</ul>");
        }

        output.push_str("</body></html>\n");
        output
    }

    fn extension(&self) -> &'static str {
        "html"
    }
}

/// Escapes text for use in HTML content and single- or double-quoted attributes.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
