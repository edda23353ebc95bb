//! GitHub error types.

use thiserror::Error;

/// GitHub-related errors.
#[derive(Debug, Error)]
pub enum GitHubError {
    /// The repository does not exist or is not visible (HTTP 404).
    #[error("repository not found: {owner}/{repo}")]
    RepositoryNotFound { owner: String, repo: String },

    /// The token was rejected (HTTP 401 or 403).
    #[error("authentication failed with status {status}")]
    Authentication { status: u16 },

    /// The request could not be sent or its body could not be decoded.
    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The API answered with a status relnotes does not handle.
    #[error("unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    /// No token could be obtained.
    #[error("failed to obtain GitHub token: {0}")]
    Credentials(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GitHubError {
    /// Returns true for network, decoding and unexpected-status failures.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::UnexpectedStatus { .. })
    }
}

/// Result type for GitHub operations.
pub type GitHubResult<T> = Result<T, GitHubError>;
