//! Commit types for relnotes.
//!
//! This crate provides the commit types shared by the fetcher, the range
//! resolver and the formatters:
//! - [`Commit`]: A commit as returned by the GitHub commits API
//! - [`CommitDetails`]: The message and author of a commit
//! - [`CommitAuthor`]: The git author attached to a commit

mod commit;
mod details;

pub use commit::Commit;
pub use details::{CommitAuthor, CommitDetails};
