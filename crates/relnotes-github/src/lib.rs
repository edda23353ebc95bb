//! GitHub access layer for relnotes.
//!
//! This crate provides:
//! - [`CommitSource`]: The two upstream operations relnotes relies on
//! - [`GitHubClient`]: A `reqwest` implementation of [`CommitSource`]
//! - [`fetch_all_pages`] / [`fetch_commits`]: Page-concatenating history fetch
//! - [`TokenProvider`]: Lazily acquired bearer token

mod client;
mod error;
mod pagination;
mod project;
mod source;
mod token;

pub use client::{DEFAULT_API_URL, GitHubClient};
pub use error::{GitHubError, GitHubResult};
pub use pagination::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, fetch_all_pages};
pub use project::Project;
pub use source::{CommitSource, fetch_commits};
pub use token::{AuthStatus, TokenProvider, parse_auth_status};
