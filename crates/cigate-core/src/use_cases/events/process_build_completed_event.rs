use async_trait::async_trait;
use cigate_models::{
    BuildOutcomeEvent, BuildStatus, CommitState, CommitStatusUpdate, PullRequestComment,
};
use shaku::{Component, HasComponent, Interface};

use crate::{
    handlers::HandlerMessage,
    use_cases::{
        reports::CollectReportsInterface,
        status::{PostReportCommentInterface, ReportCommitStatusInterface},
    },
    CoreContext, Result,
};

pub const VALIDATED_MESSAGE: &str = "PR-validated !!";

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ProcessBuildCompletedEventInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, event: &BuildOutcomeEvent)
        -> Result<HandlerMessage>;
}

#[derive(Component)]
#[shaku(interface = ProcessBuildCompletedEventInterface)]
pub(crate) struct ProcessBuildCompletedEvent;

#[async_trait]
impl ProcessBuildCompletedEventInterface for ProcessBuildCompletedEvent {
    #[tracing::instrument(
        skip_all,
        fields(
            build_status = ?event.build_status,
            repo_name = %event.request.repo_name,
            pr_number = %event.request.pr_number,
            commit_id = %event.request.commit_id
        )
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        event: &BuildOutcomeEvent,
    ) -> Result<HandlerMessage> {
        let request = &event.request;
        let mut state = CommitState::Failure;

        let collect_reports: &dyn CollectReportsInterface = ctx.core_module.resolve_ref();
        if let Some(verdict) = collect_reports.run(ctx, &event.report_arns).await {
            if event.build_status == BuildStatus::Succeeded && verdict.passed() {
                state = CommitState::Success;
            }

            let post_report_comment: &dyn PostReportCommentInterface =
                ctx.core_module.resolve_ref();
            post_report_comment
                .run(
                    ctx,
                    &PullRequestComment {
                        repo_name: request.repo_name.clone(),
                        pr_number: request.pr_number()?,
                        body: verdict.summary_text,
                    },
                )
                .await?;
        }

        let report_commit_status: &dyn ReportCommitStatusInterface =
            ctx.core_module.resolve_ref();
        report_commit_status
            .run(
                ctx,
                &CommitStatusUpdate {
                    repo_name: request.repo_name.clone(),
                    commit_id: request.commit_id.clone(),
                    state,
                    target_url: event.build_log_url.clone(),
                    context: ctx.config.api.github.status_context.clone(),
                    description: ctx.config.api.github.status_description.clone(),
                },
            )
            .await?;

        Ok(HandlerMessage::Text(VALIDATED_MESSAGE.into()))
    }
}
