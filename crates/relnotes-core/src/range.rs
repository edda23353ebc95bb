//! Commit range resolution.
//!
//! The history handed to [`resolve_range`] is newest-first, exactly as the
//! commits API returns it. "until" is the newer boundary and "since" the older
//! one, so a well-formed range has `until` at a lower index than `since`.

use std::fmt;

use relnotes_commit::Commit;
use thiserror::Error;

/// Which end of the range a SHA prefix identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// The older, inclusive lower boundary.
    Since,
    /// The newer, inclusive upper boundary.
    Until,
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Since => f.write_str("since"),
            Self::Until => f.write_str("until"),
        }
    }
}

/// Range resolution errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// No fetched commit matches the boundary prefix.
    #[error("couldn't find {boundary} commit [{prefix}] in fetched history")]
    BoundaryNotFound { boundary: Boundary, prefix: String },
}

/// Returns the commits between `since_sha` and `until_sha`, both inclusive,
/// newest first.
///
/// A commit matches a boundary when its full SHA starts with the given prefix.
/// If several commits match, the most recent one is used for `until` and the
/// least recent one for `since`, which yields the widest range.
///
/// When `until` lies before `since` in time the result is empty rather than an
/// error.
///
/// # Errors
///
/// Returns [`RangeError::BoundaryNotFound`] if either prefix matches no commit.
pub fn resolve_range<'a>(
    commits: &'a [Commit],
    since_sha: &str,
    until_sha: &str,
) -> Result<&'a [Commit], RangeError> {
    // Kept as two scans: they break ties in opposite directions.
    let until_index = commits.iter().position(|c| c.sha_starts_with(until_sha));
    let since_index = commits.iter().rposition(|c| c.sha_starts_with(since_sha));

    let since_index = since_index.ok_or_else(|| RangeError::BoundaryNotFound {
        boundary: Boundary::Since,
        prefix: since_sha.to_string(),
    })?;
    let until_index = until_index.ok_or_else(|| RangeError::BoundaryNotFound {
        boundary: Boundary::Until,
        prefix: until_sha.to_string(),
    })?;

    if until_index > since_index {
        return Ok(&[]);
    }

    Ok(&commits[until_index..=since_index])
}
