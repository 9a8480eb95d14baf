//! Error types for the GitHub client.

use thiserror::Error;

/// Errors that can occur while talking to the GitHub API.
#[derive(Error, Debug)]
pub enum GithubError {
    /// No token configured; the comment API requires authentication.
    #[error("GITHUB_TOKEN is not set")]
    MissingToken,

    /// Transport-level HTTP error.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The API answered with a non-success status.
    #[error("GitHub API returned {status}: {message}")]
    Api { status: u16, message: String },
}

impl From<reqwest::Error> for GithubError {
    fn from(err: reqwest::Error) -> Self {
        GithubError::Http(err.to_string())
    }
}
