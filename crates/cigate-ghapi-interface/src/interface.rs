use async_trait::async_trait;

use crate::{types::GhCommitStatusState, Result};

/// GitHub API Adapter interface
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Post a comment on a pull request.
    async fn comments_post(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<u64>;

    /// Create a commit status.
    #[allow(clippy::too_many_arguments)]
    async fn commit_statuses_update(
        &self,
        owner: &str,
        name: &str,
        git_ref: &str,
        state: GhCommitStatusState,
        context: &str,
        description: &str,
        target_url: &str,
    ) -> Result<()>;
}
