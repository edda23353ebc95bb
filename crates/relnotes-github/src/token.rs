//! Bearer token acquisition.
//!
//! A token is either supplied up front (flag, environment) or read once from
//! `gh auth status -t`. Either way it is cached inside the [`TokenProvider`]
//! and reused for every request made by the owning client.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tokio::process::Command;
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::{GitHubError, GitHubResult};

const NOT_LOGGED_IN: &str = "You are not logged into any GitHub hosts.";
const LOGGED_IN: &str = "Logged in to github.com";

static STATUS_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)Token\s*:\s+(\S+)$").expect("valid token regex"));

/// Outcome of `gh auth status -t`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthStatus {
    /// Logged in; carries the token.
    LoggedIn(String),
    /// No GitHub host is configured.
    NotLoggedIn,
}

/// Interprets the output of `gh auth status -t`.
///
/// Depending on its version `gh` writes the status to stdout or stderr, so
/// both streams are inspected.
///
/// # Errors
///
/// Returns [`GitHubError::Credentials`] if the output is not recognized or
/// holds no token.
pub fn parse_auth_status(stdout: &str, stderr: &str) -> GitHubResult<AuthStatus> {
    let combined = format!("{stdout}\n{stderr}");

    if combined.contains(NOT_LOGGED_IN) {
        return Ok(AuthStatus::NotLoggedIn);
    }

    if !combined.contains(LOGGED_IN) {
        return Err(GitHubError::Credentials(format!(
            "unrecognized gh auth status output:\n{}",
            combined.trim()
        )));
    }

    STATUS_TOKEN
        .captures(&combined)
        .and_then(|caps| caps.get(1))
        .map(|m| AuthStatus::LoggedIn(m.as_str().to_string()))
        .ok_or_else(|| {
            GitHubError::Credentials("unable to extract token from gh auth status output".into())
        })
}

/// Supplies the bearer token for API requests, acquiring it at most once.
pub struct TokenProvider {
    token: OnceCell<String>,
}

impl TokenProvider {
    /// Uses a token that is already known.
    #[must_use]
    pub fn from_token(token: impl Into<String>) -> Self {
        Self {
            token: OnceCell::new_with(Some(token.into())),
        }
    }

    /// Reads the token from the `gh` CLI on first use.
    #[must_use]
    pub fn gh_cli() -> Self {
        Self {
            token: OnceCell::new(),
        }
    }

    /// Returns the token, running `gh` the first time if needed.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::Credentials`] if `gh` cannot be run or does not
    /// yield a token.
    pub async fn token(&self) -> GitHubResult<&str> {
        self.token
            .get_or_try_init(acquire_from_gh)
            .await
            .map(String::as_str)
    }
}

impl fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenProvider")
            .field("initialized", &self.token.initialized())
            .finish()
    }
}

async fn gh_auth_status() -> GitHubResult<AuthStatus> {
    debug!("running gh auth status");
    let output = Command::new("gh")
        .args(["auth", "status", "-t"])
        .output()
        .await
        .map_err(|e| GitHubError::Credentials(format!("could not run gh: {e}")))?;

    parse_auth_status(
        &String::from_utf8_lossy(&output.stdout),
        &String::from_utf8_lossy(&output.stderr),
    )
}

async fn acquire_from_gh() -> GitHubResult<String> {
    if let AuthStatus::LoggedIn(token) = gh_auth_status().await? {
        return Ok(token);
    }

    info!("not logged into GitHub, starting gh auth login");
    let status = Command::new("gh").args(["auth", "login"]).status().await?;
    if !status.success() {
        return Err(GitHubError::Credentials(format!(
            "gh auth login exited with {status}"
        )));
    }

    match gh_auth_status().await? {
        AuthStatus::LoggedIn(token) => Ok(token),
        AuthStatus::NotLoggedIn => Err(GitHubError::Credentials(
            "still not logged in after gh auth login".to_string(),
        )),
    }
}
