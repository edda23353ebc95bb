//! Upstream commit history operations.

use relnotes_commit::Commit;
use tracing::info;

use crate::{GitHubResult, Project, fetch_all_pages};

/// The upstream operations relnotes needs from a hosting service.
///
/// [`GitHubClient`](crate::GitHubClient) talks to the real API; tests plug in
/// in-memory sources.
#[allow(async_fn_in_trait)]
pub trait CommitSource {
    /// Fetches repository metadata.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::RepositoryNotFound`](crate::GitHubError::RepositoryNotFound)
    /// when the repository does not exist, or another error if the request fails.
    async fn get_project(&self, owner: &str, repo: &str) -> GitHubResult<Project>;

    /// Fetches one page (1-based) of at most `per_page` commits reachable
    /// from `reference`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::RepositoryNotFound`](crate::GitHubError::RepositoryNotFound)
    /// when the repository does not exist, or another error if the request fails.
    async fn get_commits_page(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
        page: u32,
        per_page: usize,
    ) -> GitHubResult<Vec<Commit>>;
}

/// Fetches the full history reachable from `reference`, newest first.
///
/// `page_size` is both requested from the source and used to detect the last
/// page, so the two can never disagree.
///
/// # Errors
///
/// Returns the first page error.
pub async fn fetch_commits<S: CommitSource>(
    source: &S,
    owner: &str,
    repo: &str,
    reference: &str,
    page_size: usize,
) -> GitHubResult<Vec<Commit>> {
    let commits = fetch_all_pages(page_size, move |page| {
        source.get_commits_page(owner, repo, reference, page, page_size)
    })
    .await?;

    info!(owner, repo, reference, count = commits.len(), "fetched commit history");
    Ok(commits)
}
