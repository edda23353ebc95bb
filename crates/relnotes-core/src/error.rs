//! Core error types.

use thiserror::Error;

use crate::RangeError;

/// Core-related errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// GitHub error.
    #[error("GitHub error: {0}")]
    GitHub(#[from] relnotes_github::GitHubError),

    /// Range resolution error.
    #[error(transparent)]
    Range(#[from] RangeError),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
