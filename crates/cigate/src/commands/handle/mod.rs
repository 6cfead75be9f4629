//! One-shot event handlers.

mod build_completed;
mod pull_request;

use async_trait::async_trait;
use clap::{Parser, Subcommand};

use self::{build_completed::HandleBuildCompletedCommand, pull_request::HandlePullRequestCommand};
use super::{Command, CommandContext};
use crate::Result;

/// Handle a single event and print the response
#[derive(Parser)]
pub(crate) struct HandleCommand {
    #[clap(subcommand)]
    inner: HandleSubCommand,
}

#[async_trait]
impl Command for HandleCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum HandleSubCommand {
    PullRequest(HandlePullRequestCommand),
    BuildCompleted(HandleBuildCompletedCommand),
}

#[async_trait]
impl Command for HandleSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::PullRequest(sub) => sub.execute(ctx).await,
            Self::BuildCompleted(sub) => sub.execute(ctx).await,
        }
    }
}
