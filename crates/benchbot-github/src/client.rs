//! GitHub issue-comment client.

use crate::error::GithubError;
use async_trait::async_trait;
use benchbot_pipeline::publish::{CommentPublisher, PublishRequest};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

/// Longest API error body kept in an error message.
const ERROR_EXCERPT_CHARS: usize = 500;

/// GitHub API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// API base URL (api.github.com, or a GitHub Enterprise endpoint).
    pub api_base: String,

    /// Bearer token. Optional at construction; publishing requires it.
    pub token: Option<String>,
}

impl Default for GithubConfig {
    fn default() -> Self {
        GithubConfig {
            api_base: std::env::var("GITHUB_API_URL")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            token: std::env::var("GITHUB_TOKEN").ok(),
        }
    }
}

impl GithubConfig {
    /// Create a new config from environment variables.
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create config for a specific API endpoint.
    pub fn new(api_base: &str) -> Self {
        GithubConfig {
            api_base: api_base.trim_end_matches('/').to_string(),
            token: None,
        }
    }

    /// Set the authentication token.
    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }
}

/// Client for creating pull-request comments.
pub struct GithubClient {
    config: GithubConfig,
    http_client: reqwest::Client,
}

impl GithubClient {
    /// Create a new GitHub client.
    pub fn new(config: GithubConfig) -> Self {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("benchbot/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        GithubClient {
            config,
            http_client,
        }
    }

    /// Create client from environment variables.
    pub fn from_env() -> Self {
        Self::new(GithubConfig::from_env())
    }

    /// Create a new comment on a pull request.
    ///
    /// Always creates a fresh comment; earlier comments from previous runs
    /// are never edited or deduplicated. Nothing of the response is
    /// consumed beyond success/failure.
    pub async fn create_issue_comment(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        body: &str,
    ) -> Result<(), GithubError> {
        let token = self
            .config
            .token
            .as_deref()
            .ok_or(GithubError::MissingToken)?;

        let url = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.config.api_base.trim_end_matches('/'),
            owner,
            repo,
            number
        );
        debug!(%url, "creating issue comment");

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(token)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .json(&json!({ "body": body }))
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            info!(%owner, %repo, number, "issue comment created");
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(GithubError::Api {
                status: status.as_u16(),
                message: excerpt(&message),
            })
        }
    }
}

#[async_trait]
impl CommentPublisher for GithubClient {
    async fn publish(&self, request: &PublishRequest) -> anyhow::Result<()> {
        self.create_issue_comment(
            &request.owner,
            &request.repo,
            request.number,
            &request.body,
        )
        .await?;
        Ok(())
    }
}

/// First `ERROR_EXCERPT_CHARS` characters of an API error body.
fn excerpt(message: &str) -> String {
    match message.char_indices().nth(ERROR_EXCERPT_CHARS) {
        Some((byte_index, _)) => message[..byte_index].to_string(),
        None => message.to_string(),
    }
}
