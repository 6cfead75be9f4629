//! GitHub adapter

use std::sync::Arc;

use async_trait::async_trait;
use cigate_config::Config;
use cigate_ghapi_interface::{types::GhCommitStatusState, ApiError, ApiService, Result};
use cigate_secrets::SecretCache;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;

use crate::{
    auth::{build_github_url, get_authenticated_client_builder},
    errors::GitHubError,
};

const MAX_STATUS_DESCRIPTION_LEN: usize = 139;

/// GitHub API adapter implementation.
///
/// The HTTP client is built on first use from the cached personal access token,
/// then reused for the lifetime of the service.
pub struct GithubApiService {
    config: Config,
    secrets: Arc<SecretCache>,
    client: OnceCell<Client>,
}

impl GithubApiService {
    /// Creates new GitHub API adapter.
    pub fn new(config: Config, secrets: Arc<SecretCache>) -> Self {
        Self {
            config,
            secrets,
            client: OnceCell::new(),
        }
    }

    async fn get_client(&self) -> Result<Client> {
        self.client
            .get_or_try_init(|| async {
                let token = self
                    .secrets
                    .get(
                        &self.config.secrets.secret_id,
                        &self.config.secrets.token_key,
                    )
                    .await
                    .map_err(GitHubError::from)?;

                get_authenticated_client_builder(&self.config, token.expose())?
                    .build()
                    .map_err(GitHubError::from)
            })
            .await
            .cloned()
            .map_err(ApiError::from)
    }

    fn build_url(&self, path: String) -> String {
        build_github_url(&self.config, path)
    }

    async fn post_json<T: Serialize + ?Sized>(&self, path: String, body: &T) -> Result<reqwest::Response> {
        self.get_client()
            .await?
            .post(self.build_url(path))
            .json(body)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| GitHubError::from(e).into())
    }
}

#[async_trait]
impl ApiService for GithubApiService {
    #[tracing::instrument(skip(self, body), ret)]
    async fn comments_post(
        &self,
        owner: &str,
        name: &str,
        issue_number: u64,
        body: &str,
    ) -> Result<u64> {
        #[derive(Serialize)]
        struct Request<'a> {
            body: &'a str,
        }

        #[derive(Deserialize)]
        struct Response {
            id: u64,
        }

        Ok(self
            .post_json(
                format!("/repos/{owner}/{name}/issues/{issue_number}/comments"),
                &Request { body },
            )
            .await?
            .json::<Response>()
            .await
            .map_err(GitHubError::from)?
            .id)
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
        #[derive(Serialize)]
        struct Request<'a> {
            state: &'a str,
            target_url: &'a str,
            description: String,
            context: &'a str,
        }

        self.post_json(
            format!("/repos/{owner}/{name}/statuses/{git_ref}"),
            &Request {
                state: state.to_str(),
                target_url,
                context,
                description: description
                    .chars()
                    .take(MAX_STATUS_DESCRIPTION_LEN)
                    .collect::<String>(),
            },
        )
        .await?;

        Ok(())
    }
}
