//! End-to-end release notes generation.

use relnotes_github::{CommitSource, fetch_commits};
use tracing::{debug, info, warn};

use crate::{CoreResult, ReleaseNotes, categorize, resolve_range};

/// Parameters of one release notes run.
#[derive(Debug, Clone)]
pub struct NotesRequest<'a> {
    /// Repository owner (user or organization).
    pub owner: &'a str,
    /// Repository name.
    pub repo: &'a str,
    /// SHA prefix of the oldest commit to include.
    pub since: &'a str,
    /// SHA prefix of the newest commit to include; history is fetched from here.
    pub until: &'a str,
    /// Version label for the title.
    pub version: Option<&'a str>,
    /// Commits requested per page.
    pub page_size: usize,
}

/// Fetches project metadata and history, then resolves and categorizes the
/// requested range.
///
/// Requests are issued one after another: the project first, then commit
/// pages starting from `until`.
///
/// # Errors
///
/// Returns [`CoreError::GitHub`](crate::CoreError::GitHub) for any upstream
/// failure and [`CoreError::Range`](crate::CoreError::Range) if a boundary
/// commit is not part of the fetched history.
pub async fn generate_release_notes<S: CommitSource>(
    source: &S,
    request: &NotesRequest<'_>,
) -> CoreResult<ReleaseNotes> {
    let project = source.get_project(request.owner, request.repo).await?;
    info!(project = %project.name, "fetched project");

    let history = fetch_commits(
        source,
        request.owner,
        request.repo,
        request.until,
        request.page_size,
    )
    .await?;

    let range = resolve_range(&history, request.since, request.until)?;
    if let (Some(newest), Some(oldest)) = (range.first(), range.last()) {
        debug!(newest = %newest, oldest = %oldest, "resolved range");
    }

    let categorized = categorize(range);
    if categorized.is_empty() {
        warn!(
            since = request.since,
            until = request.until,
            "no commits between since and until"
        );
    }
    info!(
        commits = categorized.len(),
        features = categorized.features.len(),
        fixes = categorized.fixes.len(),
        other = categorized.other.len(),
        "categorized commits"
    );

    Ok(ReleaseNotes::new(
        project,
        request.version.map(str::to_string),
        &categorized,
    ))
}
