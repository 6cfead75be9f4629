//! Null driver for GH API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use cigate_ghapi_interface::{types::GhCommitStatusState, ApiService, Result};

/// Null API service.
#[derive(Clone, Default)]
pub struct NullApiService {
    _private: (),
}

impl NullApiService {
    /// Build a null API service.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl ApiService for NullApiService {
    #[tracing::instrument(skip(self), ret)]
    async fn comments_post(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<u64> {
        Ok(0)
    }

    #[tracing::instrument(skip(self))]
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
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn calls_succeed() {
        let service = NullApiService::new();
        assert_eq!(service.comments_post("me", "repo", 1, "body").await.unwrap(), 0);
        service
            .commit_statuses_update(
                "me",
                "repo",
                "abc123",
                GhCommitStatusState::Pending,
                "context",
                "description",
                "https://example.com",
            )
            .await
            .unwrap();
    }
}
