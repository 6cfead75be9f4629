use std::{io::Write, path::PathBuf};

use async_trait::async_trait;
use cigate_core::handlers::handle_pull_request_webhook;
use cigate_models::WebhookRequest;
use clap::Parser;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

/// Handle a pull request webhook delivery
#[derive(Parser)]
pub(crate) struct HandlePullRequestCommand {
    /// Payload file
    #[clap(long)]
    event: PathBuf,
    /// Signature header value
    #[clap(long)]
    signature: Option<String>,
    /// Event type header value
    #[clap(long, default_value = "pull_request")]
    event_type: String,
}

#[async_trait]
impl Command for HandlePullRequestCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let request = WebhookRequest {
            payload: tokio::fs::read(&self.event).await?,
            signature: self.signature,
            event_type: Some(self.event_type),
        };

        let response = handle_pull_request_webhook(&ctx.as_core_context(), &request).await;
        writeln!(
            ctx.writer.write().await,
            "{}",
            serde_json::to_string_pretty(&response)?
        )?;

        Ok(())
    }
}
