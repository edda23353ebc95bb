//! Core library for relnotes.
//!
//! This crate turns a fetched commit history into release notes:
//! - [`resolve_range`]: Locates the commits between two SHA prefixes
//! - [`categorize`]: Splits commits into features, fixes and other changes
//! - [`generate_release_notes`]: Runs fetch, resolution and categorization

mod categorize;
mod error;
mod notes;
mod pipeline;
mod range;

pub use categorize::{Categorized, categorize};
pub use error::{CoreError, CoreResult};
pub use notes::ReleaseNotes;
pub use pipeline::{NotesRequest, generate_release_notes};
pub use range::{Boundary, RangeError, resolve_range};
