//! Publisher seam for delivering the composed report.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One comment-creation request against the review platform.
///
/// Constructed once per successful run from the composed report plus the
/// trigger event's identifiers, and consumed exactly once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PublishRequest {
    /// Repository owner login.
    pub owner: String,

    /// Repository name.
    pub repo: String,

    /// Pull request number.
    pub number: u64,

    /// Comment body, used unmodified.
    pub body: String,
}

/// Backend that can create a comment on a pull request.
///
/// The pipeline issues exactly one publish per run and treats any error as
/// fatal. Implementations must always create a new comment (never edit or
/// deduplicate an earlier one) and must not retry on the pipeline's behalf.
#[async_trait]
pub trait CommentPublisher: Send + Sync {
    /// Create the comment described by the request.
    async fn publish(&self, request: &PublishRequest) -> anyhow::Result<()>;
}
