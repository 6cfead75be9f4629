//! GitHub Api wrappers.

use async_trait::async_trait;
use cigate_ghapi_interface::{types::GhCommitStatusState, ApiService, Result};

use crate::metrics::GITHUB_API_CALLS;

/// GitHub Api Service with metrics.
pub struct MetricsApiService {
    inner: Box<dyn ApiService>,
}

impl MetricsApiService {
    /// Creates a new service.
    pub fn new(inner: Box<dyn ApiService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ApiService for MetricsApiService {
    async fn comments_post(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<u64> {
        GITHUB_API_CALLS.inc();
        self.inner
            .comments_post(owner, name, issue_number, body)
            .await
    }

    async fn commit_statuses_update(
        &self,
        owner: &str,
        name: &str,
        git_ref: &str,
        state: GhCommitStatusState,
        context: &str,
        description: &str,
        target_url: &str,
    ) -> Result<()> {
        GITHUB_API_CALLS.inc();
        self.inner
            .commit_statuses_update(owner, name, git_ref, state, context, description, target_url)
            .await
    }
}

#[cfg(test)]
mod tests {
    use cigate_ghapi_interface::MockApiService;

    use super::*;

    #[tokio::test]
    async fn counts_calls() {
        let mut inner = MockApiService::new();
        inner
            .expect_comments_post()
            .once()
            .return_once(|_, _, _, _| Ok(1));

        let before = GITHUB_API_CALLS.get();
        let service = MetricsApiService::new(Box::new(inner));
        assert_eq!(service.comments_post("me", "repo-x", 1, "Hi").await.unwrap(), 1);
        assert!(GITHUB_API_CALLS.get() > before);
    }
}
