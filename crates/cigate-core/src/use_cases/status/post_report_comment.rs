use async_trait::async_trait;
use cigate_models::PullRequestComment;
use shaku::{Component, Interface};

use crate::{CoreContext, Result};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait PostReportCommentInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, comment: &PullRequestComment) -> Result<()>;
}

#[derive(Component)]
#[shaku(interface = PostReportCommentInterface)]
pub(crate) struct PostReportComment;

#[async_trait]
impl PostReportCommentInterface for PostReportComment {
    #[tracing::instrument(
        skip_all,
        fields(repo_name = %comment.repo_name, pr_number = comment.pr_number)
    )]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, comment: &PullRequestComment) -> Result<()> {
        ctx.api_service
            .comments_post(
                &ctx.config.api.github.owner,
                &comment.repo_name,
                comment.pr_number,
                &comment.body,
            )
            .await?;

        Ok(())
    }
}
