//! Invocation entry points.
//!
//! Every invocation answers with a [`HandlerResponse`] whose status code is
//! always 200: failures are reported in the body, never at the transport level.

use std::collections::BTreeMap;

use cigate_build_interface::types::{BuildStateChangeEvent, StartedBuild};
use cigate_models::WebhookRequest;
use serde::Serialize;
use shaku::HasComponent;
use tracing::error;

use crate::{
    use_cases::events::{ProcessBuildCompletedEventInterface, ProcessPullRequestWebhookInterface},
    CoreContext, Result,
};

const CONTENT_TYPE_HEADER: &str = "Content-Type";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Handler message, JSON-encoded in the response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum HandlerMessage {
    Text(String),
    Build(StartedBuild),
}

/// Fixed-shape handler response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HandlerResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl HandlerResponse {
    pub fn new(message: &HandlerMessage) -> Self {
        let body = serde_json::to_string(message)
            .unwrap_or_else(|e| serde_json::Value::String(e.to_string()).to_string());

        Self {
            status_code: 200,
            headers: BTreeMap::from([(CONTENT_TYPE_HEADER.into(), JSON_CONTENT_TYPE.into())]),
            body,
        }
    }

    /// Response for a handler result, carrying the error message on failure.
    pub fn from_result(result: Result<HandlerMessage>) -> Self {
        match result {
            Ok(message) => Self::new(&message),
            Err(e) => {
                error!(message = "Handler failed", error = %e);
                Self::new(&HandlerMessage::Text(e.to_string()))
            }
        }
    }
}

/// Stage 1: authenticate a pull request webhook and dispatch its build.
pub async fn handle_pull_request_webhook(
    ctx: &CoreContext<'_>,
    request: &WebhookRequest,
) -> HandlerResponse {
    let process: &dyn ProcessPullRequestWebhookInterface = ctx.core_module.resolve_ref();
    HandlerResponse::from_result(process.run(ctx, request).await)
}

/// Stage 2: evaluate the reports of a completed build.
pub async fn handle_build_completed_event(ctx: &CoreContext<'_>, payload: &[u8]) -> HandlerResponse {
    HandlerResponse::from_result(process_build_completed_event(ctx, payload).await)
}

async fn process_build_completed_event(
    ctx: &CoreContext<'_>,
    payload: &[u8],
) -> Result<HandlerMessage> {
    let event: BuildStateChangeEvent = serde_json::from_slice(payload)?;
    let outcome = event.into_outcome()?;

    let process: &dyn ProcessBuildCompletedEventInterface = ctx.core_module.resolve_ref();
    process.run(ctx, &outcome).await
}
