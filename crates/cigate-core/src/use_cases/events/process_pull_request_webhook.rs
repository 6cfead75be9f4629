use async_trait::async_trait;
use cigate_models::{CommitStatusUpdate, GateOutcome, WebhookRequest};
use shaku::{Component, HasComponent, Interface};
use tracing::info;

use crate::{
    handlers::HandlerMessage,
    use_cases::{
        builds::{DispatchBuildInterface, DispatchOutcome},
        status::ReportCommitStatusInterface,
        webhook::AuthenticateWebhookInterface,
    },
    CoreContext, Result,
};

pub const INVALID_REQUEST_MESSAGE: &str = "Invalid Request";

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ProcessPullRequestWebhookInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, request: &WebhookRequest)
        -> Result<HandlerMessage>;
}

#[derive(Component)]
#[shaku(interface = ProcessPullRequestWebhookInterface)]
pub(crate) struct ProcessPullRequestWebhook;

#[async_trait]
impl ProcessPullRequestWebhookInterface for ProcessPullRequestWebhook {
    #[tracing::instrument(skip_all, fields(event_type = ?request.event_type))]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        request: &WebhookRequest,
    ) -> Result<HandlerMessage> {
        let authenticate_webhook: &dyn AuthenticateWebhookInterface =
            ctx.core_module.resolve_ref();
        let event = match authenticate_webhook.run(ctx, request).await? {
            GateOutcome::Accepted(event) => event,
            GateOutcome::Rejected(reason) => {
                info!(message = "Webhook rejected", reason = %reason);
                return Ok(HandlerMessage::Text(INVALID_REQUEST_MESSAGE.into()));
            }
        };

        let dispatch_build: &dyn DispatchBuildInterface = ctx.core_module.resolve_ref();
        let result = dispatch_build.run(ctx, &event).await?;

        let report_commit_status: &dyn ReportCommitStatusInterface =
            ctx.core_module.resolve_ref();
        report_commit_status
            .run(
                ctx,
                &CommitStatusUpdate {
                    repo_name: event.repo_name.clone(),
                    commit_id: event.commit_id.clone(),
                    state: result.state,
                    target_url: result.target_url,
                    context: ctx.config.api.github.status_context.clone(),
                    description: ctx.config.api.github.status_description.clone(),
                },
            )
            .await?;

        Ok(match result.outcome {
            DispatchOutcome::Started(build) => HandlerMessage::Build(build),
            DispatchOutcome::Failed { message } => HandlerMessage::Text(message),
        })
    }
}
