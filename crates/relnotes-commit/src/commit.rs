//! Commit type as returned by the GitHub commits API.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CommitAuthor, CommitDetails};

/// Number of characters shown for an abbreviated SHA.
const SHORT_SHA_LEN: usize = 8;

/// A commit as returned by `GET /repos/{owner}/{repo}/commits`.
///
/// Only the fields relnotes needs are kept; everything else in the payload is
/// ignored during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commit {
    /// The full commit hash.
    pub sha: String,

    /// Message and author.
    #[serde(default)]
    pub commit: CommitDetails,

    /// Link to the commit on github.com.
    #[serde(default)]
    pub html_url: Option<String>,
}

impl Commit {
    /// Creates a commit with the given hash and message.
    #[must_use]
    pub fn new(sha: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            sha: sha.into(),
            commit: CommitDetails::new(message),
            html_url: None,
        }
    }

    /// Sets the author email.
    #[must_use]
    pub fn with_author_email(mut self, email: impl Into<String>) -> Self {
        self.commit
            .author
            .get_or_insert_with(CommitAuthor::default)
            .email = Some(email.into());
        self
    }

    /// Sets the web URL.
    #[must_use]
    pub fn with_html_url(mut self, url: impl Into<String>) -> Self {
        self.html_url = Some(url.into());
        self
    }

    /// Returns true if the full SHA starts with `prefix`.
    ///
    /// The comparison is case-sensitive and an empty prefix never matches.
    #[must_use]
    pub fn sha_starts_with(&self, prefix: &str) -> bool {
        !prefix.is_empty() && self.sha.starts_with(prefix)
    }

    /// Returns the abbreviated SHA (first 8 characters).
    #[must_use]
    pub fn short_sha(&self) -> &str {
        self.sha
            .get(..SHORT_SHA_LEN)
            .unwrap_or(self.sha.as_str())
    }

    /// Returns the first line of the commit message.
    #[must_use]
    pub fn subject(&self) -> &str {
        self.commit.subject()
    }

    /// Returns the author email, or `unknown` when GitHub did not report one.
    #[must_use]
    pub fn author_email_or_unknown(&self) -> &str {
        self.commit.author_email().unwrap_or("unknown")
    }

    /// Returns the web URL, or `#` when GitHub did not report one.
    #[must_use]
    pub fn html_url_or_placeholder(&self) -> &str {
        self.html_url.as_deref().unwrap_or("#")
    }
}

impl fmt::Display for Commit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "| {} - {} |", self.short_sha(), self.commit)
    }
}
