use async_trait::async_trait;
use cigate_ghapi_interface::types::GhCommitStatusState;
use cigate_models::{CommitState, CommitStatusUpdate};
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ReportCommitStatusInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, update: &CommitStatusUpdate) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = ReportCommitStatusInterface)]
pub(crate) struct ReportCommitStatus;

#[async_trait]
impl ReportCommitStatusInterface for ReportCommitStatus {
    #[tracing::instrument(
        skip_all,
        fields(
            repo_name = %update.repo_name,
            commit_id = %update.commit_id,
            state = %update.state,
            target_url = %update.target_url
        )
    )]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, update: &CommitStatusUpdate) -> Result<()> {
        let state = match update.state {
            CommitState::Pending => GhCommitStatusState::Pending,
            CommitState::Success => GhCommitStatusState::Success,
            CommitState::Failure => GhCommitStatusState::Failure,
        };

        ctx.api_service
            .commit_statuses_update(
                &ctx.config.api.github.owner,
                &update.repo_name,
                &update.commit_id,
                state,
                &update.context,
                &update.description,
                &update.target_url,
            )
            .await?;

        Ok(())
    }
}
