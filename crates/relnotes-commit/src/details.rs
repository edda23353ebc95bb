//! Commit message and author details.

use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum length of a commit summary before it gets truncated.
const SUMMARY_MAX_LEN: usize = 72;

static SIGN_OFF_TRAILER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(?:Signed-off-by|Co-authored-by): (.*)$").expect("valid trailer regex")
});

/// The git author attached to a commit.
///
/// GitHub may omit any of these fields (for example for commits imported from
/// other systems), so all of them are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitAuthor {
    /// Author name.
    #[serde(default)]
    pub name: Option<String>,

    /// Author email.
    #[serde(default)]
    pub email: Option<String>,

    /// Authoring date.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// The `commit` object of a GitHub commit: message and author.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitDetails {
    /// The full commit message (subject + body + trailers).
    #[serde(default)]
    pub message: String,

    /// The git author, if GitHub reported one.
    #[serde(default)]
    pub author: Option<CommitAuthor>,
}

impl CommitDetails {
    /// Creates commit details with the given message and no author.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            author: None,
        }
    }

    /// Returns the first line of the commit message (the subject).
    #[must_use]
    pub fn subject(&self) -> &str {
        self.message.lines().next().unwrap_or("")
    }

    /// Returns the trimmed subject, truncated to 72 characters.
    ///
    /// Messages with no lines at all yield `(no content)`.
    #[must_use]
    pub fn summary(&self) -> String {
        let Some(first) = self.message.lines().next() else {
            return "(no content)".to_string();
        };

        let first = first.trim();
        if first.chars().count() > SUMMARY_MAX_LEN {
            let head: String = first.chars().take(SUMMARY_MAX_LEN - 3).collect();
            format!("{head}...")
        } else {
            first.to_string()
        }
    }

    /// Returns the value of the first `Signed-off-by:` or `Co-authored-by:`
    /// trailer, if any.
    #[must_use]
    pub fn co_author(&self) -> Option<&str> {
        SIGN_OFF_TRAILER
            .captures(&self.message)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim_end())
    }

    /// Returns the author email, if known.
    #[must_use]
    pub fn author_email(&self) -> Option<&str> {
        self.author.as_ref().and_then(|a| a.email.as_deref())
    }

    /// Returns the authoring date, if known.
    #[must_use]
    pub fn author_date(&self) -> Option<DateTime<Utc>> {
        self.author.as_ref().and_then(|a| a.date)
    }
}

impl fmt::Display for CommitDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .author_date()
            .map_or_else(|| "-".to_string(), |d| d.to_rfc3339());
        write!(
            f,
            " {} | {} | <{}>",
            self.summary(),
            date,
            self.author_email().unwrap_or("unknown")
        )?;
        if let Some(co_author) = self.co_author() {
            write!(f, " with {co_author}")?;
        }
        Ok(())
    }
}
