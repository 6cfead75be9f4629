use async_trait::async_trait;
use cigate_crypto::Signature;
use cigate_ghapi_interface::types::{GhPullRequestAction, GhPullRequestEvent};
use cigate_models::{
    GateOutcome, PullRequestAction, PullRequestEvent, RejectionReason, WebhookRequest,
};
use shaku::{Component, Interface};
use tracing::warn;

use crate::{CoreContext, Result};

const PULL_REQUEST_EVENT_TYPE: &str = "pull_request";

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait AuthenticateWebhookInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, request: &WebhookRequest)
        -> Result<GateOutcome>;
}

#[derive(Component)]
#[shaku(interface = AuthenticateWebhookInterface)]
pub(crate) struct AuthenticateWebhook;

#[async_trait]
impl AuthenticateWebhookInterface for AuthenticateWebhook {
    #[tracing::instrument(
        skip_all,
        fields(event_type = ?request.event_type, payload_len = request.payload.len()),
        ret
    )]
    async fn run<'a>(
        &self,
        ctx: &CoreContext<'a>,
        request: &WebhookRequest,
    ) -> Result<GateOutcome> {
        let secret = ctx
            .secrets
            .get(
                &ctx.config.secrets.secret_id,
                &ctx.config.secrets.webhook_secret_key,
            )
            .await?;

        let signature = match request.signature.as_deref() {
            Some(signature) => signature,
            None => {
                warn!(message = "Missing webhook signature");
                return Ok(GateOutcome::Rejected(RejectionReason::InvalidSignature));
            }
        };

        if !Signature(signature).is_valid(&request.payload, secret.expose())? {
            warn!(message = "Invalid webhook signature");
            return Ok(GateOutcome::Rejected(RejectionReason::InvalidSignature));
        }

        if request.event_type.as_deref() != Some(PULL_REQUEST_EVENT_TYPE) {
            return Ok(GateOutcome::Rejected(RejectionReason::IrrelevantEvent));
        }

        let event: GhPullRequestEvent = serde_json::from_slice(&request.payload)?;
        let action = match event.action {
            GhPullRequestAction::Opened => PullRequestAction::Opened,
            GhPullRequestAction::Reopened => PullRequestAction::Reopened,
            GhPullRequestAction::Synchronize => PullRequestAction::Synchronize,
            GhPullRequestAction::Other => PullRequestAction::Other,
        };

        if !action.triggers_build() {
            return Ok(GateOutcome::Rejected(RejectionReason::IrrelevantEvent));
        }

        Ok(GateOutcome::Accepted(PullRequestEvent {
            action,
            repo_name: event.repository.name,
            branch_name: event.pull_request.head.reference,
            commit_id: event.pull_request.head.sha,
            pr_number: event.number,
        }))
    }
}
