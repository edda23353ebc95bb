//! Configuration schema.

use serde::{Deserialize, Serialize};

use crate::{ConfigError, ConfigResult};

/// Largest page size the GitHub commits endpoint accepts.
pub const MAX_PAGE_SIZE: usize = 100;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// GitHub API configuration.
    #[serde(default)]
    pub github: GithubConfig,

    /// Release notes configuration.
    #[serde(default)]
    pub notes: NotesConfig,
}

impl Config {
    /// Checks values that TOML alone cannot constrain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first bad value.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(1..=MAX_PAGE_SIZE).contains(&self.github.page_size) {
            return Err(ConfigError::Invalid(format!(
                "github.page_size must be between 1 and {MAX_PAGE_SIZE}, got {}",
                self.github.page_size
            )));
        }
        if self.github.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "github.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.github.api_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "github.api_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// GitHub API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// API root URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Commits requested per page (`per_page`), at most 100.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            page_size: default_page_size(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_page_size() -> usize {
    30
}

fn default_timeout_secs() -> u64 {
    30
}

/// Output format of the generated notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Markdown document.
    #[default]
    Markdown,
    /// Standalone HTML page.
    Html,
}

/// Release notes configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotesConfig {
    /// Version label used in the title.
    #[serde(default = "default_version")]
    pub version: String,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            format: OutputFormat::default(),
        }
    }
}

fn default_version() -> String {
    "v1.0.0".to_string()
}
