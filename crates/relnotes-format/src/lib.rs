//! Release notes rendering.
//!
//! - [`NotesFormatter`]: Renders [`ReleaseNotes`](relnotes_core::ReleaseNotes)
//! - [`MarkdownFormatter`]: Markdown output (`.md`)
//! - [`HtmlFormatter`]: Standalone HTML page (`.html`)

mod html;
mod markdown;
mod section;

pub use html::HtmlFormatter;
pub use markdown::MarkdownFormatter;
pub use section::Section;

use relnotes_core::ReleaseNotes;

/// Renders release notes into a document.
pub trait NotesFormatter {
    /// Returns the formatter name.
    fn name(&self) -> &'static str;

    /// Formats the notes into a string.
    fn format(&self, notes: &ReleaseNotes) -> String;

    /// Returns the file extension for the output (e.g., "md").
    fn extension(&self) -> &'static str;
}
