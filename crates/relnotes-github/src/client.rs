//! GitHub REST client.

use std::time::Duration;

use relnotes_commit::Commit;
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{CommitSource, GitHubError, GitHubResult, Project, TokenProvider};

/// Public GitHub API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const USER_AGENT: &str = concat!("relnotes/", env!("CARGO_PKG_VERSION"));

/// GitHub REST API client.
#[derive(Debug)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
    tokens: TokenProvider,
}

impl GitHubClient {
    /// Creates a client for the given API root.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        api_url: impl Into<String>,
        tokens: TokenProvider,
        timeout: Duration,
    ) -> GitHubResult<Self> {
        let api_url = api_url.into().trim_end_matches('/').to_string();

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|source| GitHubError::Transport {
                url: api_url.clone(),
                source,
            })?;

        Ok(Self {
            http,
            api_url,
            tokens,
        })
    }

    /// Returns the API root this client talks to.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn repo_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{owner}/{repo}", self.api_url)
    }

    /// Sends an authenticated GET and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        owner: &str,
        repo: &str,
    ) -> GitHubResult<T> {
        let token = self.tokens.token().await?;

        debug!(url, ?query, "GET");
        let response = self
            .http
            .get(url)
            .query(query)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header(API_VERSION_HEADER, API_VERSION)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|source| GitHubError::Transport {
                url: url.to_string(),
                source,
            })?;

        check_status(response.status(), url, owner, repo)?;

        response
            .json()
            .await
            .map_err(|source| GitHubError::Transport {
                url: url.to_string(),
                source,
            })
    }
}

impl CommitSource for GitHubClient {
    async fn get_project(&self, owner: &str, repo: &str) -> GitHubResult<Project> {
        let url = self.repo_url(owner, repo);
        self.get_json(&url, &[], owner, repo).await
    }

    async fn get_commits_page(
        &self,
        owner: &str,
        repo: &str,
        reference: &str,
        page: u32,
        per_page: usize,
    ) -> GitHubResult<Vec<Commit>> {
        let url = format!("{}/commits", self.repo_url(owner, repo));
        let query = [
            ("sha", reference.to_string()),
            ("per_page", per_page.to_string()),
            ("page", page.to_string()),
        ];
        self.get_json(&url, &query, owner, repo).await
    }
}

/// Maps a response status onto the error taxonomy.
fn check_status(status: StatusCode, url: &str, owner: &str, repo: &str) -> GitHubResult<()> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::NOT_FOUND => Err(GitHubError::RepositoryNotFound {
            owner: owner.to_string(),
            repo: repo.to_string(),
        }),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(GitHubError::Authentication {
            status: status.as_u16(),
        }),
        _ => Err(GitHubError::UnexpectedStatus {
            url: url.to_string(),
            status: status.as_u16(),
        }),
    }
}
